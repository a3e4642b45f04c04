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

use blocklist_aggregator::application::use_cases::refresh_lists::RefreshListsUseCase;
use blocklist_aggregator::config::settings::Settings;
use blocklist_aggregator::config::sources;
use blocklist_aggregator::domain::services::aggregator::Aggregator;
use blocklist_aggregator::domain::services::source_fetcher::SourceFetcher;
use blocklist_aggregator::engines::file_engine::FileEngine;
use blocklist_aggregator::engines::reqwest_engine::ReqwestEngine;
use blocklist_aggregator::engines::router::EngineRouter;
use blocklist_aggregator::engines::traits::ListEngine;
use blocklist_aggregator::infrastructure::git::GitCommitter;
use blocklist_aggregator::infrastructure::storage::LocalStorage;
use std::sync::Arc;
use tracing::info;

use blocklist_aggregator::utils::telemetry;

/// 主函数
///
/// 加载配置和源列表，执行一次聚合并提交变更。任何错误都以非零状态退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting blocklist-aggregator...");

    // 2. Load configuration
    let settings = Settings::new()?;
    let specs = sources::load_sources(&settings.sources.path).await?;
    info!("Configuration loaded");

    // 3. Initialize engines
    let reqwest_engine = Arc::new(ReqwestEngine::new(&settings.fetch.user_agent)?);
    let engines: Vec<Arc<dyn ListEngine>> = vec![reqwest_engine, Arc::new(FileEngine)];
    let router = Arc::new(EngineRouter::new(engines));
    let aggregator = Aggregator::new(SourceFetcher::new(router));

    // 4. Initialize output storage and committer
    let storage = Arc::new(LocalStorage::new(&settings.output.directory));
    let committer = settings
        .git
        .enabled
        .then(|| Arc::new(GitCommitter::new(&settings.output.directory, settings.git.push)));

    // 5. Run the pipeline
    let use_case = RefreshListsUseCase::new(aggregator, storage, committer, settings.output.clone());
    let report = use_case.execute(specs).await?;

    info!(
        sources = report.sources,
        groups = report.group_sizes.len(),
        distinct_domains = report.distinct_domains,
        rejected = report.rejected,
        committed = ?report.committed,
        "Run finished"
    );

    Ok(())
}
