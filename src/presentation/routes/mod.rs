// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::scrape_response::{HealthDto, ServiceInfoDto};
use crate::application::usecases::scrape_leaderboard::ScrapeLeaderboardUseCase;
use crate::config::settings::CorsSettings;
use crate::presentation::handlers::scrape_handler;
use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，处理器依赖通过 `Extension` 层注入
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/scrape", post(scrape_handler::scrape_leaderboard))
}

/// 创建完整的应用
///
/// 在路由之上挂载抓取用例、跨域和请求追踪层
pub fn app(use_case: Arc<ScrapeLeaderboardUseCase>, cors: &CorsSettings) -> Router {
    routes()
        .layer(Extension(use_case))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// 根据配置构建跨域层
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}

/// 服务描述端点
pub async fn index() -> Json<ServiceInfoDto> {
    Json(ServiceInfoDto::default())
}

/// 健康检查端点
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy",
        timestamp: chrono::Utc::now(),
    })
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
