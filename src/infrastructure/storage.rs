// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::domain::repositories::storage_repository::StorageRepository;
use crate::utils::errors::PersistError;

/// 检查名称能否作为输出目录下的文件名
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control)
}

/// 本地文件系统存储实现
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn get_full_path(&self, name: &str) -> Result<PathBuf, PersistError> {
        if !is_safe_file_name(name) {
            return Err(PersistError::InvalidName(name.to_string()));
        }
        Ok(self.base_path.join(name))
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(&self, name: &str, data: &[u8]) -> Result<PathBuf, PersistError> {
        let full_path = self.get_full_path(name)?;
        let io_error = |source| PersistError::Io {
            path: full_path.clone(),
            source,
        };

        // 确保目录存在
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(io_error)?;

        let mut file = fs::File::create(&full_path).await.map_err(io_error)?;
        file.write_all(data).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;

        Ok(full_path)
    }

    async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, PersistError> {
        let full_path = self.get_full_path(name)?;

        match fs::read(&full_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Io {
                path: full_path,
                source,
            }),
        }
    }
}

/// 测试用的内存存储实现
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已保存的文件名（排序后）
    pub async fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.data.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn save(&self, name: &str, data: &[u8]) -> Result<PathBuf, PersistError> {
        if !is_safe_file_name(name) {
            return Err(PersistError::InvalidName(name.to_string()));
        }
        let mut map = self.data.write().await;
        map.insert(name.to_string(), data.to_vec());
        Ok(PathBuf::from(name))
    }

    async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, PersistError> {
        let map = self.data.read().await;
        Ok(map.get(name).cloned())
    }
}
