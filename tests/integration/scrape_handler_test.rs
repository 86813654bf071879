// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use serde_json::{json, Value};

use super::helpers::{create_test_app, StubFetcher, LEADERBOARD_HTML};

#[tokio::test]
async fn scrape_returns_products_from_leaderboard() {
    let fetcher = StubFetcher::returning(LEADERBOARD_HTML);
    let app = create_test_app(fetcher.clone());

    let response = app
        .server
        .post("/scrape")
        .json(&json!({
            "api_key": "fc-test-key",
            "period": "daily",
            "year": 2025,
            "month": 9,
            "day": 27
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_found"], 3);
    assert_eq!(
        body["message"],
        "Successfully scraped 3 products from ProductHunt daily leaderboard"
    );
    assert!(body["error"].is_null());

    let first = &body["products"][0];
    assert_eq!(first["index"], 1);
    assert_eq!(first["title"], "Orbit Notes");
    assert_eq!(first["votes"], 512);
    assert_eq!(
        first["product_url"],
        "https://www.producthunt.com/posts/orbit-notes"
    );

    let call = fetcher.last_call().unwrap();
    assert_eq!(
        call.url,
        "https://www.producthunt.com/leaderboard/daily/2025/9/27/all"
    );
    assert_eq!(call.credential, "fc-test-key");
}

#[tokio::test]
async fn featured_monthly_scrape_omits_all_segment() {
    let fetcher = StubFetcher::returning("<html><body></body></html>");
    let app = create_test_app(fetcher.clone());

    let response = app
        .server
        .post("/scrape")
        .json(&json!({
            "api_key": "fc-test-key",
            "period": "monthly",
            "year": 2024,
            "month": 3,
            "featured": true
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_found"], 0);
    assert_eq!(
        fetcher.last_call().unwrap().url,
        "https://www.producthunt.com/leaderboard/monthly/2024/3"
    );
}

#[tokio::test]
async fn rejected_requests_return_400_without_fetching() {
    let fetcher = StubFetcher::returning(LEADERBOARD_HTML);
    let app = create_test_app(fetcher.clone());
    let next_year = Utc::now().year() + 1;

    let cases = vec![
        (
            json!({"api_key": "sk-test", "period": "daily", "year": 2025, "month": 1, "day": 1}),
            "Valid Firecrawl API key is required (starts with 'fc-')",
        ),
        (
            json!({"api_key": "fc-test", "period": "daily", "year": 2012, "month": 1, "day": 1}),
            "Year must be between 2013 and current year",
        ),
        (
            json!({"api_key": "fc-test", "period": "daily", "year": next_year, "month": 1, "day": 1}),
            "Year must be between 2013 and current year",
        ),
        (
            json!({"api_key": "fc-test", "period": "daily", "year": 2025, "month": 1}),
            "Year, month, and day are required for daily scraping",
        ),
        (
            json!({"api_key": "fc-test", "period": "weekly", "year": 2025}),
            "Year and week are required for weekly scraping",
        ),
        (
            json!({"api_key": "fc-test", "period": "monthly", "year": 2025}),
            "Year and month are required for monthly scraping",
        ),
    ];

    for (payload, expected) in cases {
        let response = app.server.post("/scrape").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], expected, "payload: {}", payload);
    }

    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn unknown_period_and_out_of_range_fields_return_400() {
    let fetcher = StubFetcher::returning(LEADERBOARD_HTML);
    let app = create_test_app(fetcher.clone());

    let response = app
        .server
        .post("/scrape")
        .json(&json!({"api_key": "fc-test", "period": "yearly", "year": 2025}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post("/scrape")
        .json(&json!({"api_key": "fc-test", "period": "weekly", "year": 2025, "week": 54}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("week"));

    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn fetch_failure_is_reported_in_body() {
    let fetcher = StubFetcher::failing(401, "Unauthorized: Invalid token");
    let app = create_test_app(fetcher.clone());

    let response = app
        .server
        .post("/scrape")
        .json(&json!({
            "api_key": "fc-revoked",
            "period": "weekly",
            "year": 2025,
            "week": 39
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["total_found"], 0);
    assert_eq!(body["products"], json!([]));
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Unauthorized: Invalid token"));
    assert_eq!(fetcher.call_count(), 1);
}
