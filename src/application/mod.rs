// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含外部输入的数据传输对象和用例实现，
/// 用例只依赖领域层的特质，具体实现由调用方注入
pub mod dto;
pub mod use_cases;
