// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::FirecrawlSettings;
use crate::engines::traits::{EngineError, FetchRequest, MarkupFetcher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

const SCRAPE_PATH: &str = "v2/scrape";

/// Firecrawl 引擎
///
/// 通过 Firecrawl 渲染服务获取页面 HTML，凭证作为 Bearer 令牌透传。
pub struct FirecrawlEngine {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Serialize)]
struct FirecrawlRequest<'a> {
    url: &'a str,
    formats: [&'static str; 1],
}

#[derive(Deserialize, Debug)]
struct FirecrawlResponse {
    #[serde(default)]
    success: bool,
    data: Option<FirecrawlData>,
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
struct FirecrawlData {
    html: Option<String>,
}

impl FirecrawlEngine {
    /// 创建 Firecrawl 引擎
    ///
    /// # 参数
    ///
    /// * `settings` - Firecrawl 配置
    ///
    /// # 返回值
    ///
    /// * `Ok(FirecrawlEngine)` - 引擎实例
    /// * `Err(EngineError)` - 服务地址无效或客户端构建失败
    pub fn new(settings: &FirecrawlSettings) -> Result<Self, EngineError> {
        let base = Url::parse(&with_trailing_slash(&settings.base_url))
            .map_err(|e| EngineError::Other(format!("Invalid Firecrawl base url: {}", e)))?;
        let endpoint = base
            .join(SCRAPE_PATH)
            .map_err(|e| EngineError::Other(format!("Invalid Firecrawl endpoint: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

#[async_trait]
impl MarkupFetcher for FirecrawlEngine {
    async fn fetch(&self, request: &FetchRequest) -> Result<String, EngineError> {
        let start = Instant::now();
        info!("Calling Firecrawl API for URL: {}", request.url);

        let body = FirecrawlRequest {
            url: &request.url,
            formats: ["html"],
        };

        let resp = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&request.credential)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<FirecrawlResponse>(&text)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(text);
            return Err(EngineError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: FirecrawlResponse = resp.json().await?;
        if !parsed.success {
            return Err(EngineError::Upstream {
                status: status.as_u16(),
                message: parsed
                    .error
                    .unwrap_or_else(|| "Firecrawl reported failure".to_string()),
            });
        }

        let html = parsed
            .data
            .and_then(|d| d.html)
            .filter(|html| !html.trim().is_empty())
            .ok_or(EngineError::EmptyContent)?;

        debug!(
            "Received HTML content, length: {} ({} ms)",
            html.len(),
            start.elapsed().as_millis()
        );
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "firecrawl"
    }
}
