// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::source::{SourceResult, SourceSpec};
use crate::domain::services::line_normalizer::{normalize_line, Candidate};
use crate::engines::traits::ListEngine;
use crate::utils::errors::FetchError;
use crate::utils::telemetry::DIAGNOSTICS_TARGET;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// 源抓取服务
///
/// 打开一个源，逐行归一化并收集为域名集合。失败时不返回部分结果
#[derive(Clone)]
pub struct SourceFetcher {
    engine: Arc<dyn ListEngine>,
}

impl SourceFetcher {
    pub fn new(engine: Arc<dyn ListEngine>) -> Self {
        Self { engine }
    }

    /// 抓取单个源
    ///
    /// # 参数
    ///
    /// * `spec` - 源定义
    ///
    /// # 返回值
    ///
    /// * `Ok(SourceResult)` - 该源的全部合法域名及被拒绝的候选项
    /// * `Err(FetchError)` - 请求或读取失败
    pub async fn fetch(&self, spec: SourceSpec) -> Result<SourceResult, FetchError> {
        let start = Instant::now();
        let mut reader = self.engine.open(&spec.url).await?;
        let mut result = SourceResult::new(spec);
        let mut lines = 0usize;

        while let Some(line) = reader.next_line().await? {
            lines += 1;
            for candidate in normalize_line(&line) {
                match candidate {
                    Candidate::Domain(domain) => {
                        result.domains.insert(domain);
                    }
                    Candidate::Rejected(piece) => {
                        warn!(target: DIAGNOSTICS_TARGET, "{} : {}", result.spec.url, piece);
                        result.rejected.push(piece);
                    }
                }
            }
        }

        debug!(
            url = %result.spec.url,
            lines,
            domains = result.domains.len(),
            rejected = result.rejected.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Source fetched"
        );

        Ok(result)
    }
}
