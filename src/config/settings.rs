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

use crate::engines::reqwest_engine::DEFAULT_USER_AGENT;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含源列表、输出、抓取和 git 等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 源列表配置
    pub sources: SourcesSettings,
    /// 输出配置
    pub output: OutputSettings,
    /// 抓取配置
    pub fetch: FetchSettings,
    /// git 配置
    pub git: GitSettings,
}

/// 源列表配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesSettings {
    /// 源列表文件路径
    pub path: String,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 分组文件输出目录
    pub directory: String,
    /// 分组文件扩展名
    pub extension: String,
}

impl OutputSettings {
    /// 分组对应的文件名
    pub fn file_name(&self, group: &str) -> String {
        if self.extension.is_empty() {
            group.to_string()
        } else {
            format!("{}.{}", group, self.extension)
        }
    }
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// git 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct GitSettings {
    /// 是否在写入后检测并提交变更
    pub enabled: bool,
    /// 提交后是否推送
    pub push: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default.toml`、`config/{APP_ENVIRONMENT}.toml`
    /// 以及 `BLOCKLIST__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("BLOCKLIST").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅使用默认值的配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("sources.path", "appdata/sources.yaml")?
            .set_default("output.directory", "git_folder")?
            .set_default("output.extension", "txt")?
            .set_default("fetch.user_agent", DEFAULT_USER_AGENT)?
            .set_default("git.enabled", true)?
            .set_default("git.push", true)
    }
}
