// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 服务描述数据传输对象
#[derive(Debug, Serialize)]
pub struct ServiceInfoDto {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointsDto,
}

#[derive(Debug, Serialize)]
pub struct EndpointsDto {
    pub scrape: &'static str,
    pub health: &'static str,
}

impl Default for ServiceInfoDto {
    fn default() -> Self {
        Self {
            message: "ProductHunt Scraper API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: EndpointsDto {
                scrape: "POST /scrape - Scrape ProductHunt leaderboard",
                health: "GET /health - Health check",
            },
        }
    }
}

/// 健康检查数据传输对象
#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
