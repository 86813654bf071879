// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 周期（period）：排行榜周期类型、周期请求和领域错误
/// - 产品（product）：单个排行榜条目的结构化记录
/// - 抓取结果（scrape_result）：一次抓取调用的最终产物
pub mod period;
pub mod product;
pub mod scrape_result;
