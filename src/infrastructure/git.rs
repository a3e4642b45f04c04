// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::repositories::change_committer::ChangeCommitter;
use crate::utils::errors::CommitError;

/// 基于 git 命令行的变更提交实现
///
/// 所有命令都在输出目录中执行
pub struct GitCommitter {
    work_dir: PathBuf,
    push: bool,
}

impl GitCommitter {
    /// 创建新的提交器
    ///
    /// # 参数
    ///
    /// * `work_dir` - 输出目录（位于 git 仓库内）
    /// * `push` - 提交后是否推送
    pub fn new(work_dir: impl Into<PathBuf>, push: bool) -> Self {
        Self {
            work_dir: work_dir.into(),
            push,
        }
    }

    /// 执行 git 命令，非零退出视为失败
    async fn git_command(&self, args: &[&str]) -> Result<String, CommitError> {
        let command = args.join(" ");
        debug!("Running git {} in {}", command, self.work_dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await
            .map_err(|source| CommitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CommitError::Failed {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// 解析 `git status --porcelain` 的输出
///
/// 每个非空行是一个有变化的条目
pub fn parse_porcelain(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl ChangeCommitter for GitCommitter {
    async fn pending_changes(&self) -> Result<Vec<String>, CommitError> {
        let output = self
            .git_command(&["status", "--porcelain", "--untracked-files=all", "--", "."])
            .await?;
        Ok(parse_porcelain(&output))
    }

    async fn commit_all(&self, message: &str) -> Result<(), CommitError> {
        info!("Doing git commands");
        self.git_command(&["add", "."]).await?;
        self.git_command(&["commit", "-m", message]).await?;
        if self.push {
            self.git_command(&["push"]).await?;
        }
        info!("Finished with git commands");
        Ok(())
    }
}
