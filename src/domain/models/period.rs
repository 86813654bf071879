// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 领域错误类型
///
/// 描述在任何网络请求发生之前即可判定的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 周期参数无效，当周期类型未知或缺少必需的日期字段时发生
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// 请求无效，当日期字段、年份范围或凭证格式不符合规则时发生
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl DomainError {
    /// 面向客户端的错误描述，不带错误类别前缀
    pub fn detail(&self) -> &str {
        match self {
            DomainError::InvalidPeriod(msg) | DomainError::InvalidRequest(msg) => msg,
        }
    }
}

/// 排行榜周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// 日榜
    Daily,
    /// 周榜
    Weekly,
    /// 月榜
    Monthly,
}

impl PeriodKind {
    /// 周期在 URL 路径和日志中的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "daily",
            PeriodKind::Weekly => "weekly",
            PeriodKind::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(PeriodKind::Daily),
            "weekly" => Ok(PeriodKind::Weekly),
            "monthly" => Ok(PeriodKind::Monthly),
            _ => Err(DomainError::InvalidPeriod(
                "Period must be 'daily', 'weekly', or 'monthly'".to_string(),
            )),
        }
    }
}

/// 排行榜周期请求
///
/// 每次抓取调用构造一次，之后不再修改。必需字段取决于周期类型：
/// - 日榜：`year` + `month` + `day`
/// - 周榜：`year` + `week`
/// - 月榜：`year` + `month`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRequest {
    pub kind: PeriodKind,
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub week: Option<u32>,
    /// 精选视图，只展示策展后的子集
    pub featured: bool,
}

impl PeriodRequest {
    pub fn daily(year: i32, month: u32, day: u32) -> Self {
        Self {
            kind: PeriodKind::Daily,
            year,
            month: Some(month),
            day: Some(day),
            week: None,
            featured: false,
        }
    }

    pub fn weekly(year: i32, week: u32) -> Self {
        Self {
            kind: PeriodKind::Weekly,
            year,
            month: None,
            day: None,
            week: Some(week),
            featured: false,
        }
    }

    pub fn monthly(year: i32, month: u32) -> Self {
        Self {
            kind: PeriodKind::Monthly,
            year,
            month: Some(month),
            day: None,
            week: None,
            featured: false,
        }
    }

    /// 返回设置了精选标记的副本
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}
