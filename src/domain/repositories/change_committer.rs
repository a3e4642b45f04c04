// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::CommitError;
use async_trait::async_trait;

/// 变更提交特质
///
/// 输出目录的版本控制协作方：检测变更，并暂存、提交、推送
#[async_trait]
pub trait ChangeCommitter: Send + Sync {
    /// 返回相对上次提交有变化的条目
    ///
    /// 空列表表示没有变化
    async fn pending_changes(&self) -> Result<Vec<String>, CommitError>;

    /// 暂存所有变化并以给定信息提交、推送
    async fn commit_all(&self, message: &str) -> Result<(), CommitError>;
}
