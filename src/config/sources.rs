// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::source_list::SourceListDto;
use crate::domain::models::source::SourceSpec;
use crate::utils::errors::ConfigError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{error, info};

/// 源列表文件不存在时写出的模板
pub const SOURCE_LIST_TEMPLATE: &str = r#"# Block-lists to aggregate.
#
# Every entry needs the list's url and at least one group. Each group becomes
# one output file (<group>.txt); a list can feed several groups.
adlists:
  - url: ""
    groups:
      - "" # put here in which list this ad-list should be included
      - "" # the ad-list can be included in multiple lists
"#;

/// 解析源列表内容
///
/// # 参数
///
/// * `path` - 源列表路径（仅用于错误信息）
/// * `content` - YAML 内容
///
/// # 返回值
///
/// * `Ok(Vec<SourceSpec>)` - 按文件顺序排列的源定义
/// * `Err(ConfigError)` - 格式错误、字段缺失、地址重复或没有任何源
pub fn parse_sources(path: &Path, content: &str) -> Result<Vec<SourceSpec>, ConfigError> {
    let list: SourceListDto =
        serde_yaml::from_str(content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    let mut specs = Vec::with_capacity(list.adlists.len());
    for (index, entry) in list.adlists.into_iter().enumerate() {
        let spec = entry.into_spec(index)?;
        if !seen.insert(spec.url.clone()) {
            return Err(ConfigError::DuplicateSource {
                url: spec.url.to_string(),
            });
        }
        specs.push(spec);
    }

    if specs.is_empty() {
        return Err(ConfigError::NoSources {
            path: path.to_path_buf(),
        });
    }

    Ok(specs)
}

/// 加载源列表
///
/// 文件不存在时先写出模板，再返回 `ConfigError::TemplateCreated`
pub async fn load_sources(path: impl AsRef<Path>) -> Result<Vec<SourceSpec>, ConfigError> {
    let path = path.as_ref();

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            write_template(path).await?;
            error!(
                "There was no {} available. Created a template one, please fill it out",
                path.display()
            );
            return Err(ConfigError::TemplateCreated {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let specs = parse_sources(path, &content)?;
    info!("Loaded {} sources from {}", specs.len(), path.display());
    Ok(specs)
}

async fn write_template(path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(path, SOURCE_LIST_TEMPLATE)
        .await
        .map_err(io_error)
}
