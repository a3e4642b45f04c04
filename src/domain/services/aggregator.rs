// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::source::{Aggregation, GroupResult, SourceResult, SourceSpec};
use crate::domain::services::source_fetcher::SourceFetcher;
use crate::utils::errors::FetchError;
use std::collections::{BTreeMap, HashSet};
use tokio::task::JoinSet;
use tracing::{error, info};

/// 列表聚合器
///
/// 每个源一个并发任务；所有任务完成后再统一按分组合并
pub struct Aggregator {
    fetcher: SourceFetcher,
}

impl Aggregator {
    pub fn new(fetcher: SourceFetcher) -> Self {
        Self { fetcher }
    }

    /// 并发抓取所有源并按分组合并
    ///
    /// 任意一个源失败时立即返回错误，其余仍在运行的任务随 `JoinSet` 一起被取消，
    /// 不会产生任何部分分组结果
    ///
    /// # 参数
    ///
    /// * `specs` - 源定义列表
    ///
    /// # 返回值
    ///
    /// * `Ok(Aggregation)` - 分组结果
    /// * `Err(FetchError)` - 第一个失败的源的错误
    pub async fn aggregate(&self, specs: Vec<SourceSpec>) -> Result<Aggregation, FetchError> {
        let total = specs.len();
        info!("Fetching {} sources", total);

        let mut tasks = JoinSet::new();
        for spec in specs {
            let fetcher = self.fetcher.clone();
            tasks.spawn(async move { fetcher.fetch(spec).await });
        }

        let mut results = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            let result = match joined {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => {
                    error!("Source fetch failed, aborting run: {}", e);
                    return Err(e);
                }
                Err(e) => return Err(FetchError::TaskFailed(e.to_string())),
            };
            info!(
                "Fetched {} ({}/{}): {} domains",
                result.spec.url,
                results.len() + 1,
                total,
                result.domains.len()
            );
            results.push(result);
        }

        Ok(regroup(results))
    }
}

/// 将各源结果按分组合并
///
/// 先建立 分组 -> 源结果 的反向索引，再把每个分组的集合展平为一个去重集合。
/// 同一源重复声明同一分组只计一次
pub fn regroup(results: Vec<SourceResult>) -> Aggregation {
    let source_count = results.len();

    let mut index: BTreeMap<&str, Vec<&SourceResult>> = BTreeMap::new();
    for result in &results {
        for group in result.spec.distinct_groups() {
            index.entry(group).or_default().push(result);
        }
    }

    let mut groups = BTreeMap::new();
    for (name, contributors) in index {
        let mut group = GroupResult::new(name);
        for result in contributors {
            group.domains.extend(result.domains.iter().cloned());
            group.sources.push(result.spec.url.to_string());
        }
        group.sources.sort();
        groups.insert(name.to_string(), group);
    }

    let mut rejected = BTreeMap::new();
    for result in results {
        if !result.rejected.is_empty() {
            rejected.insert(result.spec.url.to_string(), result.rejected);
        }
    }

    Aggregation {
        groups,
        rejected,
        source_count,
    }
}

/// 所有分组中不重复域名的总数
pub fn distinct_domain_count(aggregation: &Aggregation) -> usize {
    aggregation
        .groups
        .values()
        .flat_map(|group| group.domains.iter())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
