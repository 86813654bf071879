// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::period::PeriodKind;
use crate::domain::models::product::ProductRecord;

/// 抓取结果
///
/// 一次排行榜抓取调用的最终产物。`total_found` 始终等于 `products` 的长度；
/// 成功时携带 `message`，失败时携带 `error`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub success: bool,
    pub products: Vec<ProductRecord>,
    pub total_found: usize,
    pub timestamp: DateTime<Utc>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ScrapeResult {
    /// 创建成功的抓取结果
    pub fn success(kind: PeriodKind, products: Vec<ProductRecord>) -> Self {
        let total_found = products.len();
        Self {
            success: true,
            message: Some(format!(
                "Successfully scraped {} products from ProductHunt {} leaderboard",
                total_found, kind
            )),
            products,
            total_found,
            timestamp: Utc::now(),
            error: None,
        }
    }

    /// 创建失败的抓取结果
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            products: Vec::new(),
            total_found: 0,
            timestamp: Utc::now(),
            message: None,
            error: Some(error.into()),
        }
    }
}
