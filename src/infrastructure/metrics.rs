// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 初始化 Prometheus 指标导出
///
/// 未启用时不安装记录器，计数器调用退化为空操作。
///
/// # 参数
///
/// * `settings` - 指标配置
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {:?}: {}", settings.address, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "leaderboard_scrapes_total",
        "Leaderboard scrape requests by outcome"
    );
    describe_counter!(
        "leaderboard_products_extracted_total",
        "Product records extracted from leaderboard pages"
    );
    describe_counter!(
        "leaderboard_records_skipped_total",
        "Product containers skipped because extraction failed"
    );

    info!("Metrics exporter listening on {}", addr);
}
