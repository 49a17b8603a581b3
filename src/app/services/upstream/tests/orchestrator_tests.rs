//! Tests for the list-then-download fan-out

use super::*;
use crate::app::services::upstream::{
    download_or_none, get_all_files_with_content, get_files_with_content,
};
use std::time::Duration;

#[tokio::test]
async fn test_failed_download_is_excluded() {
    let source = MockFileSource::new()
        .with_file("f1.csv", SAMPLE_CSV)
        .with_failing_file("f2.csv");

    let result = get_all_files_with_content(&source).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].filename, "f1.csv");
    assert_eq!(result[0].content.as_deref(), Some(SAMPLE_CSV));
    assert!(result.iter().all(|f| f.content.is_some()));
    assert_eq!(source.downloads().len(), 2);
}

#[tokio::test]
async fn test_listing_order_is_preserved() {
    let source = MockFileSource::new()
        .with_file("c.csv", "c")
        .with_failing_file("x.csv")
        .with_file("a.csv", "a")
        .with_file("b.csv", "b");

    let names: Vec<String> = get_all_files_with_content(&source)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.filename)
        .collect();

    assert_eq!(names, vec!["c.csv", "a.csv", "b.csv"]);
}

#[tokio::test]
async fn test_list_failure_propagates() {
    let source = MockFileSource::new()
        .with_file("f1.csv", SAMPLE_CSV)
        .with_list_failure(503);

    let error = get_all_files_with_content(&source).await.unwrap_err();

    assert!(error.is_upstream());
    assert!(source.downloads().is_empty());
}

#[tokio::test]
async fn test_empty_listing() {
    let source = MockFileSource::new();
    assert!(get_all_files_with_content(&source).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_all_downloads_failing_is_not_an_error() {
    let source = MockFileSource::new()
        .with_failing_file("a.csv")
        .with_failing_file("b.csv");

    assert!(get_all_files_with_content(&source).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_downloads_run_concurrently() {
    // Each download waits until all three are in flight, which can only
    // happen when they are issued without awaiting one another.
    let source = MockFileSource::new()
        .with_file("a.csv", "a")
        .with_file("b.csv", "b")
        .with_file("c.csv", "c")
        .with_rendezvous(3);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        get_all_files_with_content(&source),
    )
    .await
    .expect("downloads were serialized")
    .unwrap();

    assert_eq!(result.len(), 3);
}

#[tokio::test]
async fn test_filter_downloads_only_matching_file() {
    let source = MockFileSource::new()
        .with_file("a.csv", "a")
        .with_file("b.csv", "b");

    let result = get_files_with_content(&source, Some("b.csv")).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].filename, "b.csv");
    assert_eq!(source.downloads(), vec!["b.csv"]);
}

#[tokio::test]
async fn test_filter_without_match() {
    let source = MockFileSource::new().with_file("a.csv", "a");

    let result = get_files_with_content(&source, Some("missing.csv"))
        .await
        .unwrap();

    assert!(result.is_empty());
    assert!(source.downloads().is_empty());
}

#[tokio::test]
async fn test_download_or_none() {
    let source = MockFileSource::new()
        .with_file("ok.csv", "body")
        .with_failing_file("bad.csv");

    assert_eq!(
        download_or_none(&source, "ok.csv").await.as_deref(),
        Some("body")
    );
    assert_eq!(download_or_none(&source, "bad.csv").await, None);
    assert_eq!(download_or_none(&source, "unknown.csv").await, None);
}

#[tokio::test]
async fn test_works_through_trait_object() {
    let source: Box<dyn FileSource> = Box::new(MockFileSource::new().with_file("a.csv", "a"));

    let result = get_all_files_with_content(source.as_ref()).await.unwrap();
    assert_eq!(result.len(), 1);
}
