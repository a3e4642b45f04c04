// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{LineBuffer, LineReader, ListEngine};
use crate::utils::errors::FetchError;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use url::Url;

const READ_BUFFER_SIZE: usize = 8 * 1024;

/// 本地文件列表引擎
///
/// 处理 `file://` 地址，便于使用本地维护的补充列表
pub struct FileEngine;

#[async_trait]
impl ListEngine for FileEngine {
    async fn open(&self, url: &Url) -> Result<Box<dyn LineReader>, FetchError> {
        let path = url
            .to_file_path()
            .map_err(|_| FetchError::UnsupportedScheme {
                url: url.to_string(),
            })?;

        let file = File::open(&path).await.map_err(|source| FetchError::Io {
            url: url.to_string(),
            source,
        })?;

        Ok(Box::new(FileLineReader {
            url: url.clone(),
            file,
            buffer: LineBuffer::default(),
            pending: VecDeque::new(),
            finished: false,
        }))
    }

    fn supports(&self, url: &Url) -> bool {
        url.scheme() == "file"
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

struct FileLineReader {
    url: Url,
    file: File,
    buffer: LineBuffer,
    pending: VecDeque<String>,
    finished: bool,
}

#[async_trait]
impl LineReader for FileLineReader {
    async fn next_line(&mut self) -> Result<Option<String>, FetchError> {
        let mut chunk = [0u8; READ_BUFFER_SIZE];
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Ok(Some(line));
            }
            if self.finished {
                return self.buffer.finish(&self.url);
            }

            let read = self
                .file
                .read(&mut chunk)
                .await
                .map_err(|source| FetchError::Io {
                    url: self.url.to_string(),
                    source,
                })?;

            if read == 0 {
                self.finished = true;
            } else {
                self.pending
                    .extend(self.buffer.push(&chunk[..read], &self.url)?);
            }
        }
    }
}
