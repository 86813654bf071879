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

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::period::{DomainError, PeriodKind, PeriodRequest};

/// 排行榜抓取请求数据传输对象
///
/// 用于封装客户端发起的排行榜抓取请求的相关参数
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ScrapeRequestDto {
    /// 抓取服务凭证
    #[validate(length(min = 1, message = "api_key cannot be empty"))]
    pub api_key: String,
    /// 周期类型：daily, weekly, monthly
    #[serde(default = "default_period")]
    pub period: String,
    /// 年份
    pub year: i32,
    /// 月份（日榜、月榜必需）
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: Option<u32>,
    /// 日期（日榜必需）
    #[validate(range(min = 1, max = 31, message = "day must be between 1 and 31"))]
    pub day: Option<u32>,
    /// 周数（周榜必需）
    #[validate(range(min = 1, max = 53, message = "week must be between 1 and 53"))]
    pub week: Option<u32>,
    /// 是否只抓取精选产品
    #[serde(default)]
    pub featured: bool,
}

fn default_period() -> String {
    "daily".to_string()
}

impl ScrapeRequestDto {
    /// 转换为领域层的周期请求
    ///
    /// # 返回值
    ///
    /// * `Ok(PeriodRequest)` - 周期请求
    /// * `Err(DomainError::InvalidPeriod)` - 周期类型未知
    pub fn to_period_request(&self) -> Result<PeriodRequest, DomainError> {
        let kind: PeriodKind = self.period.parse()?;
        Ok(PeriodRequest {
            kind,
            year: self.year,
            month: self.month,
            day: self.day,
            week: self.week,
            featured: self.featured,
        })
    }
}
