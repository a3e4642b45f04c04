// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use blocklist_aggregator::config::settings::OutputSettings;
use blocklist_aggregator::domain::models::source::SourceSpec;
use blocklist_aggregator::domain::repositories::change_committer::ChangeCommitter;
use blocklist_aggregator::domain::services::aggregator::Aggregator;
use blocklist_aggregator::domain::services::source_fetcher::SourceFetcher;
use blocklist_aggregator::engines::reqwest_engine::{ReqwestEngine, DEFAULT_USER_AGENT};
use blocklist_aggregator::utils::errors::CommitError;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 记录调用的提交器
#[derive(Default)]
pub struct RecordingCommitter {
    pub changes: Vec<String>,
    pub messages: Mutex<Vec<String>>,
}

impl RecordingCommitter {
    pub fn with_changes(changes: &[&str]) -> Self {
        Self {
            changes: changes.iter().map(|c| c.to_string()).collect(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangeCommitter for RecordingCommitter {
    async fn pending_changes(&self) -> Result<Vec<String>, CommitError> {
        Ok(self.changes.clone())
    }

    async fn commit_all(&self, message: &str) -> Result<(), CommitError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// 总是失败的提交器
pub struct FailingCommitter;

#[async_trait]
impl ChangeCommitter for FailingCommitter {
    async fn pending_changes(&self) -> Result<Vec<String>, CommitError> {
        Ok(vec![" M base.txt".to_string()])
    }

    async fn commit_all(&self, _message: &str) -> Result<(), CommitError> {
        Err(CommitError::Failed {
            command: "push".to_string(),
            stderr: "fatal: unable to access remote".to_string(),
        })
    }
}

pub async fn serve_list(server: &MockServer, route: &str, body: &str) -> Url {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

pub async fn serve_error(server: &MockServer, route: &str, status: u16) -> Url {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

pub fn spec(url: &Url, groups: &[&str]) -> SourceSpec {
    SourceSpec::new(url.clone(), groups.iter().map(|g| g.to_string()).collect())
}

pub fn http_aggregator() -> Aggregator {
    let engine = ReqwestEngine::new(DEFAULT_USER_AGENT).unwrap();
    Aggregator::new(SourceFetcher::new(Arc::new(engine)))
}

pub fn output_settings(dir: &Path) -> OutputSettings {
    OutputSettings {
        directory: dir.to_string_lossy().to_string(),
        extension: "txt".to_string(),
    }
}

pub fn read_lines(path: &Path) -> BTreeSet<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
