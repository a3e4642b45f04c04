// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，具体实现由基础设施层提供：
/// - 变更提交（change_committer）：检测输出目录的变更并提交
/// - 存储仓库（storage_repository）：写入分组输出文件
pub mod change_committer;
pub mod storage_repository;
