// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use metrics::counter;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::models::period::{DomainError, PeriodRequest};
use crate::domain::models::scrape_result::ScrapeResult;
use crate::domain::services::extraction_service::LeaderboardExtractor;
use crate::domain::services::leaderboard_url::build_leaderboard_url;
use crate::domain::services::markers::ExtractionError;
use crate::domain::services::validation::validate_scrape_request;
use crate::engines::traits::{FetchRequest, MarkupFetcher};

// === Section: Use Case Definition ===

/// 排行榜抓取用例
///
/// 依次执行：校验请求 → 构建地址 → 获取页面 → 提取记录。
/// 校验失败直接返回错误；获取失败被转换为 `success = false` 的抓取结果。
pub struct ScrapeLeaderboardUseCase {
    fetcher: Arc<dyn MarkupFetcher>,
    extractor: LeaderboardExtractor,
}

// === Section: Implementation ===

impl ScrapeLeaderboardUseCase {
    pub fn new(fetcher: Arc<dyn MarkupFetcher>) -> Result<Self, ExtractionError> {
        Ok(Self {
            fetcher,
            extractor: LeaderboardExtractor::new()?,
        })
    }

    /// 执行一次排行榜抓取
    ///
    /// # 参数
    ///
    /// * `request` - 周期请求
    /// * `credential` - 抓取服务凭证
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeResult)` - 抓取结果，获取失败时 `success` 为 false
    /// * `Err(DomainError)` - 请求无效，未发起任何网络请求
    pub async fn execute(
        &self,
        request: PeriodRequest,
        credential: &str,
    ) -> Result<ScrapeResult, DomainError> {
        let span = info_span!(
            "leaderboard_scrape",
            request_id = %Uuid::new_v4(),
            period = %request.kind,
            year = request.year,
        );
        self.run(request, credential).instrument(span).await
    }

    async fn run(
        &self,
        request: PeriodRequest,
        credential: &str,
    ) -> Result<ScrapeResult, DomainError> {
        info!("Received scrape request: {} for {}", request.kind, request.year);

        if let Err(e) = validate_scrape_request(&request, credential, Utc::now().year()) {
            warn!(error = %e, "Rejected scrape request");
            counter!("leaderboard_scrapes_total", "outcome" => "rejected").increment(1);
            return Err(e);
        }

        let url = build_leaderboard_url(&request).inspect_err(|_| {
            counter!("leaderboard_scrapes_total", "outcome" => "rejected").increment(1);
        })?;
        info!("Scraping ProductHunt URL: {}", url);

        let fetch_request = FetchRequest::new(url, credential);
        let markup = match self.fetcher.fetch(&fetch_request).await {
            Ok(markup) => markup,
            Err(e) => {
                error!(engine = self.fetcher.name(), error = %e, "Scraping failed");
                counter!("leaderboard_scrapes_total", "outcome" => "fetch_failed").increment(1);
                return Ok(ScrapeResult::failure(e.to_string()));
            }
        };

        let products = self.extractor.extract_records(&markup);
        info!("Scraping completed: {} products found", products.len());
        counter!("leaderboard_scrapes_total", "outcome" => "success").increment(1);
        counter!("leaderboard_products_extracted_total").increment(products.len() as u64);

        Ok(ScrapeResult::success(request.kind, products))
    }
}
