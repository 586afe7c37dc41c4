//! Hydration properties shared by every record type.

use gh_records::models::{
    AppPermissions, Issue, IssueState, Job, PermissionLevel, RunStatus, WorkflowRun,
};
use gh_records::{Hydrate, HydrationError, Symbol, hydrate_list};
use serde_json::json;

#[test]
fn test_nested_defaults_two_levels_deep() {
    let run = WorkflowRun::from_value(&json!({"id": 9})).unwrap();
    assert_eq!(run.head_commit.author.name, "");
    assert_eq!(run.head_commit.committer.email, "");
    assert_eq!(run.actor.login, "");
    assert_eq!(run.status, None);
}

#[test]
fn test_nullable_nested_distinguishes_absent_from_empty() {
    let absent = Issue::from_value(&json!({})).unwrap();
    assert!(absent.milestone.is_none());

    let null = Issue::from_value(&json!({"milestone": null})).unwrap();
    assert!(null.milestone.is_none());

    let empty = Issue::from_value(&json!({"milestone": {}})).unwrap();
    let milestone = empty.milestone.unwrap();
    assert_eq!(milestone.number, 0);
}

#[test]
fn test_list_preserves_order() {
    let value = json!([{"number": 3}, {"number": 1}, {"number": 2}]);
    let issues: Vec<Issue> = hydrate_list(&value).unwrap();
    let numbers: Vec<i64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, [3, 1, 2]);
}

#[test]
fn test_list_rejects_object_body() {
    let err = hydrate_list::<Issue>(&json!({"number": 1})).unwrap_err();
    assert!(matches!(err, HydrationError::UnexpectedShape { expected: "array", .. }));
}

#[test]
fn test_nested_enum_error_carries_path() {
    let err = Job::from_value(&json!({"steps": [{"status": "completed"}, {"status": "done"}]}))
        .unwrap_err();
    assert_eq!(err.field(), Some("steps[1].status"));
}

#[test]
fn test_enum_matching_is_case_sensitive() {
    assert!(Issue::from_value(&json!({"state": "Closed"})).is_err());
    assert_eq!(
        Issue::from_value(&json!({"state": "closed"})).unwrap().state,
        IssueState::Closed
    );
}

#[test]
fn test_symbols_round_trip_through_serde() {
    for &(wire, status) in RunStatus::SYMBOLS {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(wire));
        assert_eq!(wire.parse::<RunStatus>().unwrap(), status);
    }
}

#[test]
fn test_hydration_is_idempotent() {
    let doc = json!({
        "number": 12,
        "title": "Crash on start",
        "labels": [{"name": "bug"}, {"name": "urgent"}],
        "user": {"login": "octocat"},
        "closed_at": null
    });
    let first = Issue::from_value(&doc).unwrap();
    let second = Issue::from_value(&doc).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.label_names().collect::<Vec<_>>(), ["bug", "urgent"]);
    assert!(!first.closed_at.is_present());
}

#[test]
fn test_record_serializes_to_wire_keys() {
    let issue = Issue::from_json(r#"{"number": 5, "state": "closed"}"#).unwrap();
    let value = serde_json::to_value(&issue).unwrap();
    assert_eq!(value["number"], json!(5));
    assert_eq!(value["state"], json!("closed"));
}

#[test]
fn test_permission_table_round_trip() {
    let doc = json!({"contents": "write", "metadata": "read", "unknown_scope": "admin"});
    let permissions = AppPermissions::from_value(&doc).unwrap();
    assert_eq!(permissions.level("contents"), Some(PermissionLevel::Write));
    assert_eq!(permissions.granted().count(), 2);
    assert_eq!(
        serde_json::to_value(&permissions).unwrap(),
        json!({"contents": "write", "metadata": "read"})
    );
}

#[test]
fn test_invalid_json_text() {
    assert!(matches!(Issue::from_json("{"), Err(HydrationError::Json(_))));
}
