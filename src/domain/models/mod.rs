// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 源（source）：源定义、单个源的抓取结果、分组结果以及聚合结果
pub mod source;
