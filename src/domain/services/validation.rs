// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::period::{DomainError, PeriodKind, PeriodRequest};

/// 最早有排行榜数据的年份
pub const FIRST_LEADERBOARD_YEAR: i32 = 2013;

/// 抓取服务凭证的前缀
pub const CREDENTIAL_PREFIX: &str = "fc-";

/// 校验抓取请求
///
/// 在任何网络请求之前执行，依次检查日期字段是否齐全且在合法范围内、
/// 年份是否位于 `[2013, current_year]`、凭证格式是否正确。
///
/// # 参数
///
/// * `request` - 周期请求
/// * `credential` - 抓取服务凭证
/// * `current_year` - 当前年份
///
/// # 返回值
///
/// * `Ok(())` - 请求有效
/// * `Err(DomainError::InvalidRequest)` - 请求无效
pub fn validate_scrape_request(
    request: &PeriodRequest,
    credential: &str,
    current_year: i32,
) -> Result<(), DomainError> {
    validate_components(request)?;

    if request.year < FIRST_LEADERBOARD_YEAR || request.year > current_year {
        return Err(invalid("Year must be between 2013 and current year"));
    }

    validate_credential(credential)
}

/// 校验凭证格式
pub fn validate_credential(credential: &str) -> Result<(), DomainError> {
    if credential.starts_with(CREDENTIAL_PREFIX) {
        Ok(())
    } else {
        Err(invalid(
            "Valid Firecrawl API key is required (starts with 'fc-')",
        ))
    }
}

fn validate_components(request: &PeriodRequest) -> Result<(), DomainError> {
    // Zero is treated the same as an absent component.
    let month = request.month.filter(|m| *m != 0);
    let day = request.day.filter(|d| *d != 0);
    let week = request.week.filter(|w| *w != 0);

    match request.kind {
        PeriodKind::Daily => {
            let (Some(month), Some(day)) = (month, day) else {
                return Err(invalid(
                    "Year, month, and day are required for daily scraping",
                ));
            };
            check_range("month", month, 12)?;
            check_range("day", day, 31)
        }
        PeriodKind::Weekly => {
            let Some(week) = week else {
                return Err(invalid("Year and week are required for weekly scraping"));
            };
            check_range("week", week, 53)
        }
        PeriodKind::Monthly => {
            let Some(month) = month else {
                return Err(invalid("Year and month are required for monthly scraping"));
            };
            check_range("month", month, 12)
        }
    }
}

fn check_range(field: &str, value: u32, max: u32) -> Result<(), DomainError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(&format!("{} must be between 1 and {}", field, max)))
    }
}

fn invalid(message: &str) -> DomainError {
    DomainError::InvalidRequest(message.to_string())
}
