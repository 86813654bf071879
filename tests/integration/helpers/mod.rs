// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use huntrs::application::usecases::scrape_leaderboard::ScrapeLeaderboardUseCase;
use huntrs::config::settings::Settings;
use huntrs::engines::traits::{EngineError, FetchRequest, MarkupFetcher};
use huntrs::presentation::routes;
use std::sync::{Arc, Mutex};

/// 排行榜页面样例
pub const LEADERBOARD_HTML: &str = include_str!("../../fixtures/leaderboard.html");

/// 返回预设页面并记录调用的获取引擎
pub struct StubFetcher {
    markup: Result<String, (u16, String)>,
    calls: Mutex<Vec<FetchRequest>>,
}

impl StubFetcher {
    pub fn returning(markup: &str) -> Arc<Self> {
        Arc::new(Self {
            markup: Ok(markup.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            markup: Err((status, message.to_string())),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<FetchRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MarkupFetcher for StubFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String, EngineError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.markup {
            Ok(markup) => Ok(markup.clone()),
            Err((status, message)) => Err(EngineError::Upstream {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub struct TestApp {
    pub server: TestServer,
}

/// 使用给定获取引擎构建完整应用
pub fn create_test_app(fetcher: Arc<dyn MarkupFetcher>) -> TestApp {
    let settings = Settings::defaults().unwrap();
    let use_case = Arc::new(ScrapeLeaderboardUseCase::new(fetcher).unwrap());
    let app = routes::app(use_case, &settings.cors);

    TestApp {
        server: TestServer::new(app).unwrap(),
    }
}
