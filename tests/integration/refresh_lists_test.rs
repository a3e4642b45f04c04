// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::*;
use blocklist_aggregator::application::use_cases::refresh_lists::RefreshListsUseCase;
use blocklist_aggregator::domain::repositories::storage_repository::StorageRepository;
use blocklist_aggregator::infrastructure::storage::{InMemoryStorage, LocalStorage};
use blocklist_aggregator::utils::errors::{CommitError, FetchError, PipelineError};
use std::collections::BTreeSet;
use std::sync::Arc;
use wiremock::MockServer;

fn set(domains: &[&str]) -> BTreeSet<String> {
    domains.iter().map(|d| d.to_string()).collect()
}

#[tokio::test]
async fn test_two_sources_into_two_groups() {
    let server = MockServer::start().await;
    let url1 = serve_list(&server, "/x.txt", "ads.example.com\n# comment\nbad,ok.example.com\n").await;
    let url2 = serve_list(&server, "/y.txt", "ads.example.com\ntracker.example.com\n").await;

    let dir = tempfile::tempdir().unwrap();
    let committer = Arc::new(RecordingCommitter::with_changes(&["?? base.txt", "?? extra.txt"]));
    let use_case = RefreshListsUseCase::new(
        http_aggregator(),
        Arc::new(LocalStorage::new(dir.path())),
        Some(committer.clone()),
        output_settings(dir.path()),
    );

    let report = use_case
        .execute(vec![spec(&url1, &["base"]), spec(&url2, &["base", "extra"])])
        .await
        .unwrap();

    let base = read_lines(&dir.path().join("base.txt"));
    let extra = read_lines(&dir.path().join("extra.txt"));
    assert_eq!(
        base,
        set(&["ads.example.com", "ok.example.com", "tracker.example.com"])
    );
    assert_eq!(extra, set(&["ads.example.com", "tracker.example.com"]));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("base.txt"))
            .unwrap()
            .lines()
            .count(),
        3
    );

    assert_eq!(report.sources, 2);
    assert_eq!(report.group_sizes.get("base"), Some(&3));
    assert_eq!(report.group_sizes.get("extra"), Some(&2));
    assert_eq!(report.distinct_domains, 3);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.committed, Some(2));

    let messages = committer.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Changes from "));
}

#[tokio::test]
async fn test_duplicates_across_sources_written_once() {
    let server = MockServer::start().await;
    let url1 = serve_list(&server, "/a", "0.0.0.0 shared.example.com\none.example.com\n").await;
    let url2 = serve_list(&server, "/b", "127.0.0.1 shared.example.com\nSHARED.example.com\n").await;

    let storage = Arc::new(InMemoryStorage::new());
    let use_case = RefreshListsUseCase::<_, RecordingCommitter>::new(
        http_aggregator(),
        storage.clone(),
        None,
        output_settings(std::path::Path::new("unused")),
    );

    let report = use_case
        .execute(vec![spec(&url1, &["all"]), spec(&url2, &["all"])])
        .await
        .unwrap();

    let content = String::from_utf8(storage.get("all.txt").await.unwrap().unwrap()).unwrap();
    assert_eq!(content, "one.example.com\nshared.example.com\n");
    assert_eq!(report.committed, None);
}

#[tokio::test]
async fn test_fetch_failure_writes_nothing() {
    let server = MockServer::start().await;
    let good = serve_list(&server, "/good", "ads.example.com\n").await;
    let broken = serve_error(&server, "/broken", 500).await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("base.txt"), "previous.example.com\n").unwrap();

    let committer = Arc::new(RecordingCommitter::with_changes(&[" M base.txt"]));
    let use_case = RefreshListsUseCase::new(
        http_aggregator(),
        Arc::new(LocalStorage::new(dir.path())),
        Some(committer.clone()),
        output_settings(dir.path()),
    );

    let result = use_case
        .execute(vec![spec(&good, &["base"]), spec(&broken, &["base", "extra"])])
        .await;

    assert!(matches!(
        result,
        Err(PipelineError::Fetch(FetchError::Request { .. }))
    ));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("base.txt")).unwrap(),
        "previous.example.com\n"
    );
    assert!(!dir.path().join("extra.txt").exists());
    assert!(committer.messages().is_empty());
}

#[tokio::test]
async fn test_no_changes_skips_commit() {
    let server = MockServer::start().await;
    let url = serve_list(&server, "/list", "ads.example.com\n").await;

    let dir = tempfile::tempdir().unwrap();
    let committer = Arc::new(RecordingCommitter::with_changes(&[]));
    let use_case = RefreshListsUseCase::new(
        http_aggregator(),
        Arc::new(LocalStorage::new(dir.path())),
        Some(committer.clone()),
        output_settings(dir.path()),
    );

    let report = use_case.execute(vec![spec(&url, &["base"])]).await.unwrap();

    assert_eq!(report.committed, Some(0));
    assert!(committer.messages().is_empty());
}

#[tokio::test]
async fn test_commit_failure_fails_the_run() {
    let server = MockServer::start().await;
    let url = serve_list(&server, "/list", "ads.example.com\n").await;

    let dir = tempfile::tempdir().unwrap();
    let use_case = RefreshListsUseCase::new(
        http_aggregator(),
        Arc::new(LocalStorage::new(dir.path())),
        Some(Arc::new(FailingCommitter)),
        output_settings(dir.path()),
    );

    let result = use_case.execute(vec![spec(&url, &["base"])]).await;

    assert!(matches!(
        result,
        Err(PipelineError::Commit(CommitError::Failed { .. }))
    ));
    // files are written before the commit step
    assert!(dir.path().join("base.txt").exists());
}
