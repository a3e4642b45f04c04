// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：源定义、源结果和分组结果
/// - 仓库接口（repositories）：输出存储和变更提交的抽象接口
/// - 服务（services）：行归一化、源抓取和聚合
///
/// 领域层不依赖于任何具体的存储或版本控制实现。
pub mod models;
pub mod repositories;
pub mod services;
