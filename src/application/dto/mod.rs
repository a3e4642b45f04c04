// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 外部输入（源列表文件）的反序列化结构及其校验规则
pub mod source_list;
