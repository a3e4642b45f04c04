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

use crate::engines::traits::{LineBuffer, LineReader, ListEngine};
use crate::utils::errors::FetchError;
use async_trait::async_trait;
use std::collections::VecDeque;
use tracing::debug;
use url::Url;

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP 列表引擎
///
/// 基于reqwest实现，响应体按块读取并切分成行。
/// 不设置额外的超时，使用平台默认值
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的HTTP引擎
    ///
    /// # 参数
    ///
    /// * `user_agent` - 请求使用的 User-Agent
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 引擎实例
    /// * `Err(reqwest::Error)` - HTTP客户端初始化失败
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ListEngine for ReqwestEngine {
    async fn open(&self, url: &Url) -> Result<Box<dyn LineReader>, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)?;

        debug!(
            "Opened {} (status {}, content-type {:?})",
            url,
            response.status(),
            response.headers().get(reqwest::header::CONTENT_TYPE)
        );

        Ok(Box::new(HttpLineReader {
            url: url.clone(),
            response,
            buffer: LineBuffer::default(),
            pending: VecDeque::new(),
            finished: false,
        }))
    }

    fn supports(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// HTTP 响应的逐行读取器
struct HttpLineReader {
    url: Url,
    response: reqwest::Response,
    buffer: LineBuffer,
    pending: VecDeque<String>,
    finished: bool,
}

#[async_trait]
impl LineReader for HttpLineReader {
    async fn next_line(&mut self) -> Result<Option<String>, FetchError> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Ok(Some(line));
            }
            if self.finished {
                return self.buffer.finish(&self.url);
            }

            let chunk = self
                .response
                .chunk()
                .await
                .map_err(|source| FetchError::Request {
                    url: self.url.to_string(),
                    source,
                })?;

            match chunk {
                Some(bytes) => self.pending.extend(self.buffer.push(&bytes, &self.url)?),
                None => self.finished = true,
            }
        }
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
