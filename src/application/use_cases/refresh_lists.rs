// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    config::settings::OutputSettings,
    domain::{
        models::source::{Aggregation, SourceSpec},
        repositories::{
            change_committer::ChangeCommitter, storage_repository::StorageRepository,
        },
        services::aggregator::{distinct_domain_count, Aggregator},
    },
    utils::errors::PipelineError,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 一次运行的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    /// 参与聚合的源数量
    pub sources: usize,
    /// 分组名称 -> 域名数量
    pub group_sizes: BTreeMap<String, usize>,
    /// 所有分组中不重复域名的总数
    pub distinct_domains: usize,
    /// 被拒绝的候选项数量
    pub rejected: usize,
    /// 写出的文件
    pub written: Vec<PathBuf>,
    /// 提交的变更条目数量，`None` 表示未启用提交
    pub committed: Option<usize>,
}

/// 刷新列表用例
///
/// 聚合所有源，写出分组文件，再交给提交器处理变更
pub struct RefreshListsUseCase<SR, CC> {
    aggregator: Aggregator,
    storage: Arc<SR>,
    committer: Option<Arc<CC>>,
    output: OutputSettings,
}

impl<SR, CC> RefreshListsUseCase<SR, CC>
where
    SR: StorageRepository + 'static,
    CC: ChangeCommitter + 'static,
{
    pub fn new(
        aggregator: Aggregator,
        storage: Arc<SR>,
        committer: Option<Arc<CC>>,
        output: OutputSettings,
    ) -> Self {
        Self {
            aggregator,
            storage,
            committer,
            output,
        }
    }

    /// 执行一次完整的刷新
    ///
    /// 所有源抓取成功后才会写文件；写文件和提交严格按顺序执行
    pub async fn execute(&self, sources: Vec<SourceSpec>) -> Result<RefreshReport, PipelineError> {
        // 1. Fetch and regroup every source
        let aggregation = self.aggregator.aggregate(sources).await?;
        info!(
            "Aggregated {} sources into {} groups",
            aggregation.source_count,
            aggregation.groups.len()
        );

        // 2. Persist one file per group
        let written = self.write_groups(&aggregation).await?;

        // 3. Commit if anything changed
        let committed = match &self.committer {
            Some(committer) => Some(Self::commit_changes(committer.as_ref()).await?),
            None => None,
        };

        Ok(RefreshReport {
            sources: aggregation.source_count,
            group_sizes: aggregation
                .groups
                .iter()
                .map(|(name, group)| (name.clone(), group.domains.len()))
                .collect(),
            distinct_domains: distinct_domain_count(&aggregation),
            rejected: aggregation.rejected_count(),
            written,
            committed,
        })
    }

    async fn write_groups(&self, aggregation: &Aggregation) -> Result<Vec<PathBuf>, PipelineError> {
        let mut written = Vec::with_capacity(aggregation.groups.len());
        for group in aggregation.groups.values() {
            let file_name = self.output.file_name(&group.name);
            let path = self
                .storage
                .save(&file_name, group.render().as_bytes())
                .await?;
            info!(
                "Wrote {} domains from {} sources to {}",
                group.domains.len(),
                group.sources.len(),
                path.display()
            );
            written.push(path);
        }
        Ok(written)
    }

    async fn commit_changes(committer: &CC) -> Result<usize, PipelineError> {
        let changes = committer.pending_changes().await?;
        if changes.is_empty() {
            info!("No new changes");
            return Ok(0);
        }

        info!("{} changed entries, committing", changes.len());
        let message = format!("Changes from {}", Utc::now().to_rfc3339());
        committer.commit_all(&message).await?;
        Ok(changes.len())
    }
}
