//! End-to-end hydration of partial API documents.

use gh_records::models::{Artifact, Issue, Job};
use gh_records::{Hydrate, HydrationError};
use serde_json::json;

#[test]
fn test_missing_size_defaults_to_zero() {
    let artifact = Artifact::from_value(&json!({"id": 42, "name": "demo"})).unwrap();
    assert_eq!(artifact.id, 42);
    assert_eq!(artifact.name, "demo");
    assert_eq!(artifact.size_in_bytes, 0);
}

#[test]
fn test_unknown_status_is_rejected() {
    let err = Job::from_value(&json!({"status": "bogus_value"})).unwrap_err();
    match err {
        HydrationError::MalformedEnum { field, value, .. } => {
            assert_eq!(field, "status");
            assert_eq!(value, "bogus_value");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_created_at_epoch_millis() {
    let issue = Issue::from_value(&json!({"created_at": "2023-01-01T00:00:00Z"})).unwrap();
    assert_eq!(issue.created_at.epoch_millis(), 1_672_531_200_000);

    let issue = Issue::from_value(&json!({"created_at": "not-a-date"})).unwrap();
    assert_eq!(issue.created_at.epoch_millis(), -1);
    assert_eq!(issue.created_at.raw(), Some("not-a-date"));
}

#[test]
fn test_missing_nested_object_hydrates_defaults() {
    let artifact = Artifact::from_value(&json!({})).unwrap();
    assert_eq!(artifact.workflow_run.id, 0);
    assert_eq!(artifact.workflow_run.head_branch, "");
    assert_eq!(artifact.workflow_run.head_sha, "");
}

#[test]
fn test_label_order_and_absence() {
    let job = Job::from_value(&json!({"labels": ["bug", "urgent"]})).unwrap();
    assert_eq!(job.labels, ["bug", "urgent"]);

    let job = Job::from_value(&json!({"id": 1})).unwrap();
    assert!(job.labels.is_empty());
}
