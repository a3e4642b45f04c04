// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::source::SourceSpec;
use crate::infrastructure::storage::is_safe_file_name;
use crate::utils::errors::ConfigError;
use serde::Deserialize;
use url::Url;
use validator::Validate;

/// 源列表文件
#[derive(Debug, Deserialize)]
pub struct SourceListDto {
    #[serde(default)]
    pub adlists: Vec<SourceEntryDto>,
}

/// 源列表中的一条记录
#[derive(Debug, Deserialize, Validate)]
pub struct SourceEntryDto {
    #[validate(url(message = "url must be an absolute URL"))]
    pub url: String,
    #[validate(length(min = 1, message = "at least one group is required"))]
    #[serde(default)]
    pub groups: Vec<String>,
}

impl SourceEntryDto {
    pub fn into_spec(self, index: usize) -> Result<SourceSpec, ConfigError> {
        self.validate().map_err(|e| ConfigError::InvalidEntry {
            index,
            reason: e.to_string(),
        })?;

        let url = Url::parse(self.url.trim()).map_err(|e| ConfigError::InvalidEntry {
            index,
            reason: format!("url {:?}: {}", self.url, e),
        })?;

        let mut groups = Vec::with_capacity(self.groups.len());
        for group in self.groups {
            let group = group.trim().to_string();
            if !is_safe_file_name(&group) {
                return Err(ConfigError::InvalidEntry {
                    index,
                    reason: format!("group name {:?} cannot be used as a file name", group),
                });
            }
            groups.push(group);
        }

        Ok(SourceSpec::new(url, groups))
    }
}
