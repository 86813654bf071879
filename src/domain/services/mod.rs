// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 提取服务（extraction_service）：把排行榜 HTML 解析为产品记录
/// - 地址构建（leaderboard_url）：由周期参数构建排行榜页面地址
/// - 结构标记（markers）：基于属性和样式类的元素查询
/// - 请求校验（validation）：在网络请求之前校验周期参数和凭证
pub mod extraction_service;
pub mod leaderboard_url;
pub mod markers;
pub mod validation;
