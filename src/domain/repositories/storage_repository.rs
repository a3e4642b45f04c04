// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::PersistError;
use async_trait::async_trait;
use std::path::PathBuf;

/// 存储仓库特质
///
/// 定义分组输出文件的写入接口
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定文件名保存数据，已存在时覆盖
    ///
    /// 返回写入位置
    async fn save(&self, name: &str, data: &[u8]) -> Result<PathBuf, PersistError>;

    /// 读取指定文件名的数据
    async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, PersistError>;
}
