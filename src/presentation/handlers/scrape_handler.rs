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

use axum::extract::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::{
        dto::scrape_request::ScrapeRequestDto,
        usecases::scrape_leaderboard::ScrapeLeaderboardUseCase,
    },
    domain::models::scrape_result::ScrapeResult,
    presentation::errors::AppError,
};

/// 排行榜抓取处理器
///
/// 参数校验失败返回400；页面获取失败时仍返回200，结果中 `success` 为 false。
pub async fn scrape_leaderboard(
    Extension(use_case): Extension<Arc<ScrapeLeaderboardUseCase>>,
    Json(payload): Json<ScrapeRequestDto>,
) -> Result<Json<ScrapeResult>, AppError> {
    // 验证请求参数
    if let Err(errors) = payload.validate() {
        return Err(AppError::validation(errors.to_string()));
    }

    let request = payload.to_period_request()?;
    let result = use_case.execute(request, &payload.api_key).await?;

    Ok(Json(result))
}
