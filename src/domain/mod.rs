// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：周期请求、产品记录和抓取结果
/// - 服务（services）：地址构建、请求校验和页面提取
///
/// 领域层不依赖于任何网络实现，只处理纯粹的业务规则。
pub mod models;
pub mod services;
