// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// 配置错误类型
///
/// 源列表缺失、无法读取或结构无效
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("There was no {path}. Created a template one, please fill it out")]
    TemplateCreated { path: PathBuf },

    #[error("Failed to read source list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source list {path} is wrongly formatted")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid source entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Source list {path} does not contain any source")]
    NoSources { path: PathBuf },

    #[error("Source {url} is listed more than once")]
    DuplicateSource { url: String },
}

/// 抓取错误类型
///
/// 任意一个源的抓取失败都会终止整个运行
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read {url}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{url} is not valid UTF-8 text (line {line})")]
    Decode { url: String, line: usize },

    #[error("No engine supports {url}")]
    UnsupportedScheme { url: String },

    #[error("Fetch task aborted: {0}")]
    TaskFailed(String),
}

/// 持久化错误类型
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid output name: {0}")]
    InvalidName(String),
}

/// 提交错误类型
///
/// git 无法启动或以非零状态退出
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to execute git {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git {command} failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// 流水线错误类型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}
