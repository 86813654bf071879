// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod firecrawl_engine;
pub mod reqwest_engine;
pub mod traits;

use std::sync::Arc;
use std::time::Duration;

use crate::config::settings::{FetcherKind, Settings};
use firecrawl_engine::FirecrawlEngine;
use reqwest_engine::ReqwestEngine;
use traits::{EngineError, MarkupFetcher};

/// 按配置创建页面获取引擎
pub fn build_fetcher(settings: &Settings) -> Result<Arc<dyn MarkupFetcher>, EngineError> {
    let fetcher: Arc<dyn MarkupFetcher> = match settings.fetcher.engine {
        FetcherKind::Firecrawl => Arc::new(FirecrawlEngine::new(&settings.firecrawl)?),
        FetcherKind::Reqwest => Arc::new(ReqwestEngine::new(Duration::from_secs(
            settings.firecrawl.timeout_secs,
        ))?),
    };
    Ok(fetcher)
}
