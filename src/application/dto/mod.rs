// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 抓取响应直接使用领域层的 `ScrapeResult` 序列化
pub mod scrape_request;
pub mod scrape_response;
