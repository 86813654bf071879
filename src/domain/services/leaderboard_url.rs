// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::period::{DomainError, PeriodKind, PeriodRequest};
use crate::domain::models::product::SITE_ORIGIN;

/// 排行榜页面的路径前缀
pub const LEADERBOARD_PATH: &str = "/leaderboard";

/// 构建排行榜页面地址
///
/// 纯字符串拼接，不访问网络。非精选视图追加 `/all` 后缀以获取完整榜单。
///
/// # 参数
///
/// * `request` - 周期请求
///
/// # 返回值
///
/// * `Ok(String)` - 排行榜页面地址
/// * `Err(DomainError::InvalidPeriod)` - 缺少该周期类型必需的日期字段
pub fn build_leaderboard_url(request: &PeriodRequest) -> Result<String, DomainError> {
    let year = request.year;
    // Zero is treated the same as an absent component.
    let month = request.month.filter(|m| *m != 0);
    let day = request.day.filter(|d| *d != 0);
    let week = request.week.filter(|w| *w != 0);

    let path = match request.kind {
        PeriodKind::Daily => match (month, day) {
            (Some(month), Some(day)) => format!("daily/{}/{}/{}", year, month, day),
            _ => return Err(missing("Year, month, and day are required for daily leaderboard")),
        },
        PeriodKind::Weekly => match week {
            Some(week) => format!("weekly/{}/{}", year, week),
            None => return Err(missing("Year and week are required for weekly leaderboard")),
        },
        PeriodKind::Monthly => match month {
            Some(month) => format!("monthly/{}/{}", year, month),
            None => return Err(missing("Year and month are required for monthly leaderboard")),
        },
    };

    let suffix = if request.featured { "" } else { "/all" };
    Ok(format!("{}{}/{}{}", SITE_ORIGIN, LEADERBOARD_PATH, path, suffix))
}

fn missing(message: &str) -> DomainError {
    DomainError::InvalidPeriod(message.to_string())
}
