// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use huntrs::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_repeatable() {
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    let span = tracing::info_span!("leaderboard_scrape", request_id = "test", period = "daily");
    let _guard = span.enter();
    tracing::info!(index = 2, "Skipping product section");
}
