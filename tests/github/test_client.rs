//! Client behavior through a caller-supplied transport.

use futures::StreamExt;
use gh_records::github::{CreateIssue, HttpMethod, HttpResponse, ListIssuesOptions, StateFilter};
use gh_records::{ErrorKind, ListOptions, ResponseFormat};
use serde_json::json;

use super::support::{API, client};

#[tokio::test]
async fn test_create_issue_hydrates_response() {
    let (gh, transport) = client();
    transport.json(
        HttpMethod::Post,
        "/repos/octo/demo/issues",
        201,
        json!({"number": 7, "title": "Broken build", "labels": [{"name": "ci"}]}),
    );

    let issue = gh
        .issues("octo", "demo")
        .create(&CreateIssue::new("Broken build").labels(["ci"]))
        .send()
        .await
        .unwrap();
    assert_eq!(issue.number, 7);
    assert_eq!(issue.label_names().collect::<Vec<_>>(), ["ci"]);

    let request = &transport.seen()[0];
    assert!(
        request
            .headers
            .iter()
            .any(|(k, v)| k.eq_ignore_ascii_case("authorization") && v == "Bearer ghp_integration")
    );
}

#[tokio::test]
async fn test_formats_share_one_call_shape() {
    let (gh, transport) = client();
    transport.json(HttpMethod::Get, "/repos/octo/demo/issues/7", 200, json!({"number": 7}));

    let issues = gh.issues("octo", "demo");
    let json = issues.get(7).json().await.unwrap();
    assert_eq!(json["number"], 7);

    let text = issues.get(7).send_as(ResponseFormat::Text).await.unwrap();
    assert!(text.into_text().unwrap().contains("\"number\""));
}

#[tokio::test]
async fn test_errors_are_returned_per_call() {
    let (gh, transport) = client();
    transport.json(
        HttpMethod::Get,
        "/repos/octo/missing/issues/1",
        404,
        json!({"message": "Not Found"}),
    );
    transport.route(
        HttpMethod::Get,
        "/repos/octo/demo/issues/1",
        HttpResponse {
            status: 403,
            headers: vec![
                ("x-ratelimit-remaining".into(), "0".into()),
                ("x-ratelimit-reset".into(), "1700000000".into()),
            ],
            body: br#"{"message": "API rate limit exceeded"}"#.to_vec(),
        },
    );

    let missing = gh.issues("octo", "missing").get(1).send().await.unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);
    assert_eq!(missing.status(), Some(404));

    let limited = gh.issues("octo", "demo").get(1).send().await.unwrap_err();
    assert!(limited.is_rate_limited());
    assert_eq!(limited.status(), Some(403));

    let unrouted = gh.issues("octo", "other").get(1).send().await.unwrap_err();
    assert_eq!(unrouted.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_stream_follows_link_header() {
    let (gh, transport) = client();
    transport.route(
        HttpMethod::Get,
        "/repos/octo/demo/issues?state=all&per_page=1",
        HttpResponse {
            status: 200,
            headers: vec![(
                "link".into(),
                format!("<{API}/repositories/1/issues?state=all&per_page=1&page=2>; rel=\"next\""),
            )],
            body: br#"[{"number": 2}]"#.to_vec(),
        },
    );
    transport.json(
        HttpMethod::Get,
        "/repositories/1/issues?state=all&per_page=1&page=2",
        200,
        json!([{"number": 1}]),
    );

    let options = ListIssuesOptions {
        state: Some(StateFilter::All),
        list: ListOptions::new().per_page(1),
        ..Default::default()
    };
    let numbers: Vec<i64> = gh
        .issues("octo", "demo")
        .list(&options)
        .stream()
        .map(|issue| issue.unwrap().number)
        .collect()
        .await;
    assert_eq!(numbers, [2, 1]);
}

#[tokio::test]
async fn test_invalid_paging_never_sends() {
    let (gh, transport) = client();
    let err = gh
        .users()
        .list_followers("octocat", &ListOptions::new().per_page(0))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(transport.seen().is_empty());
}
