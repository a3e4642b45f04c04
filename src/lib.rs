// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含源列表的数据传输对象和刷新列表用例
pub mod application;

/// 配置模块
///
/// 处理应用程序设置、环境变量和源列表文件
pub mod config;

/// 领域模块
///
/// 包含核心模型、归一化与聚合服务以及仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现读取远程和本地列表的引擎
pub mod engines;

/// 基础设施模块
///
/// 提供输出文件存储和 git 提交的具体实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型、日志初始化和域名校验
pub mod utils;
