// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{LineReader, ListEngine};
use crate::utils::errors::FetchError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// 引擎路由器
///
/// 按地址协议选择第一个支持该地址的引擎
pub struct EngineRouter {
    /// 引擎列表（按优先级排序）
    engines: Vec<Arc<dyn ListEngine>>,
}

impl EngineRouter {
    /// 创建新的引擎路由器
    ///
    /// # 参数
    ///
    /// * `engines` - 引擎列表，靠前的优先
    pub fn new(engines: Vec<Arc<dyn ListEngine>>) -> Self {
        Self { engines }
    }

    /// 选择支持该地址的引擎
    pub fn route(&self, url: &Url) -> Result<&Arc<dyn ListEngine>, FetchError> {
        self.engines
            .iter()
            .find(|engine| engine.supports(url))
            .ok_or_else(|| FetchError::UnsupportedScheme {
                url: url.to_string(),
            })
    }
}

#[async_trait]
impl ListEngine for EngineRouter {
    async fn open(&self, url: &Url) -> Result<Box<dyn LineReader>, FetchError> {
        let engine = self.route(url)?;
        debug!("Routing {} to engine {}", url, engine.name());
        engine.open(url).await
    }

    fn supports(&self, url: &Url) -> bool {
        self.engines.iter().any(|engine| engine.supports(url))
    }

    fn name(&self) -> &'static str {
        "router"
    }
}
