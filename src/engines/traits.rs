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

use crate::utils::errors::FetchError;
use async_trait::async_trait;
use url::Url;

/// 逐行读取器
///
/// 每个源的连接对应一个读取器，只被一个抓取任务使用
#[async_trait]
pub trait LineReader: Send {
    /// 读取下一行（不含行结束符）
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(line))` - 下一行
    /// * `Ok(None)` - 已读到末尾
    /// * `Err(FetchError)` - 读取失败
    async fn next_line(&mut self) -> Result<Option<String>, FetchError>;
}

/// 列表引擎特质
///
/// 负责打开一个源并以行的形式返回其内容
#[async_trait]
pub trait ListEngine: Send + Sync {
    /// 打开源
    async fn open(&self, url: &Url) -> Result<Box<dyn LineReader>, FetchError>;

    /// 是否支持该地址
    fn supports(&self, url: &Url) -> bool;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

/// 将字节缓冲中的完整行切分出来
///
/// 支持 `\n` 和 `\r\n` 两种行结束符，剩余的不完整行留在缓冲中
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    buffer: Vec<u8>,
    lines_read: usize,
}

impl LineBuffer {
    /// 追加数据并返回其中所有完整的行
    pub(crate) fn push(&mut self, chunk: &[u8], url: &Url) -> Result<Vec<String>, FetchError> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            raw.pop();
            lines.push(self.decode(raw, url)?);
        }
        Ok(lines)
    }

    /// 返回末尾没有行结束符的最后一行
    pub(crate) fn finish(&mut self, url: &Url) -> Result<Option<String>, FetchError> {
        if self.buffer.is_empty() {
            return Ok(None);
        }
        let raw = std::mem::take(&mut self.buffer);
        self.decode(raw, url).map(Some)
    }

    fn decode(&mut self, mut raw: Vec<u8>, url: &Url) -> Result<String, FetchError> {
        self.lines_read += 1;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        String::from_utf8(raw).map_err(|_| FetchError::Decode {
            url: url.to_string(),
            line: self.lines_read,
        })
    }
}
