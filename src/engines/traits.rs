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

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(reqwest::Error),
    /// 上游服务返回错误
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
    /// 响应中没有页面内容
    #[error("No HTML content found in response")]
    EmptyContent,
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EngineError::Timeout
        } else {
            EngineError::RequestFailed(err)
        }
    }
}

/// 页面获取请求
#[derive(Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 抓取服务凭证，原样透传
    pub credential: String,
}

impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchRequest")
            .field("url", &self.url)
            .field("credential", &"<redacted>")
            .finish()
    }
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credential: credential.into(),
        }
    }
}

/// 页面获取引擎特质
///
/// 给定地址返回渲染后的页面 HTML。超时由实现自行控制，调用方不做重试。
#[async_trait]
pub trait MarkupFetcher: Send + Sync {
    /// 获取页面 HTML
    async fn fetch(&self, request: &FetchRequest) -> Result<String, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
