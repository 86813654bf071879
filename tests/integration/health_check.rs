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

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use huntrs::presentation::routes;
use serde_json::Value;
use tower::util::ServiceExt;

use super::helpers::{create_test_app, StubFetcher};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn index_describes_endpoints() {
    let response = routes::routes()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "ProductHunt Scraper API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["endpoints"]["scrape"]
        .as_str()
        .unwrap()
        .starts_with("POST /scrape"));
}

#[tokio::test]
async fn version_endpoint_returns_package_version() {
    let app = create_test_app(StubFetcher::returning(""));

    let response = app.server.get("/v1/version").await;

    response.assert_status_ok();
    response.assert_text(env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn cors_preflight_allows_local_frontend() {
    let app = create_test_app(StubFetcher::returning(""));

    let response = app
        .server
        .method(Method::OPTIONS, "/scrape")
        .add_header(header::ORIGIN, "http://localhost:3000")
        .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .await;

    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        "true"
    );
}

#[tokio::test]
async fn cors_rejects_unknown_origin() {
    let app = create_test_app(StubFetcher::returning(""));

    let response = app
        .server
        .get("/health")
        .add_header(header::ORIGIN, "https://evil.example")
        .await;

    response.assert_status_ok();
    assert!(response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
