//! Issues API methods

use serde::Serialize;

use super::GitHubClient;
use crate::github::call::ApiCall;
use crate::github::error::GitHubError;
use crate::github::http::HttpMethod;
use crate::github::pagination::ListOptions;
use crate::github::util::{QueryPairs, push_list, push_opt, repo_path};
use crate::hydrate::symbols;
use crate::models::{Issue, IssueComment, IssueState, Label, LockReason, StateReason};

symbols! {
    /// `state` filter for list endpoints.
    pub enum StateFilter {
        Open => "open",
        Closed => "closed",
        All => "all",
    }
}

symbols! {
    pub enum SortDirection {
        Asc => "asc",
        Desc => "desc",
    }
}

symbols! {
    pub enum IssueSort {
        Created => "created",
        Updated => "updated",
        Comments => "comments",
    }
}

/// Query options for listing repository issues.
#[derive(Debug, Clone, Default)]
pub struct ListIssuesOptions {
    pub state: Option<StateFilter>,
    /// Only issues carrying every one of these labels
    pub labels: Vec<String>,
    /// Assignee login, `none` or `*`
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub mentioned: Option<String>,
    /// Milestone number, `none` or `*`
    pub milestone: Option<String>,
    pub sort: Option<IssueSort>,
    pub direction: Option<SortDirection>,
    /// Only issues updated at or after this time (ISO 8601)
    pub since: Option<String>,
    pub list: ListOptions,
}

impl ListIssuesOptions {
    fn query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "state", self.state);
        push_list(&mut pairs, "labels", &self.labels);
        push_opt(&mut pairs, "assignee", self.assignee.as_deref());
        push_opt(&mut pairs, "creator", self.creator.as_deref());
        push_opt(&mut pairs, "mentioned", self.mentioned.as_deref());
        push_opt(&mut pairs, "milestone", self.milestone.as_deref());
        push_opt(&mut pairs, "sort", self.sort);
        push_opt(&mut pairs, "direction", self.direction);
        push_opt(&mut pairs, "since", self.since.as_deref());
        pairs
    }
}

/// Body of `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIssue {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,
}

impl CreateIssue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }
}

/// Body of `PATCH /repos/{owner}/{repo}/issues/{number}`.
///
/// `None` leaves a field unchanged; `labels`/`assignees` replace the whole set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct LabelsBody<'a> {
    labels: &'a [String],
}

#[derive(Serialize)]
struct LockBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    lock_reason: Option<LockReason>,
}

/// Endpoints under `/repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone)]
pub struct IssuesManager {
    client: GitHubClient,
    base: String,
}

impl GitHubClient {
    #[must_use]
    pub fn issues(&self, owner: &str, repo: &str) -> IssuesManager {
        IssuesManager {
            client: self.clone(),
            base: format!("{}/issues", repo_path(owner, repo)),
        }
    }
}

impl IssuesManager {
    pub fn get(&self, number: u64) -> ApiCall<Issue> {
        self.client.get(format!("{}/{number}", self.base))
    }

    /// Issues and pull requests of the repository; see
    /// [`Issue::is_pull_request`].
    pub fn list(&self, options: &ListIssuesOptions) -> ApiCall<Vec<Issue>> {
        self.client
            .get_list(self.base.clone())
            .query(options.query())
            .list_options(&options.list)
    }

    pub fn create(&self, issue: &CreateIssue) -> ApiCall<Issue> {
        let call = self
            .client
            .send_record(HttpMethod::Post, self.base.clone())
            .body(issue);
        if issue.title.trim().is_empty() {
            return call.reject(GitHubError::InvalidInput("issue title cannot be empty".into()));
        }
        call
    }

    pub fn update(&self, number: u64, changes: &UpdateIssue) -> ApiCall<Issue> {
        self.client
            .send_record(HttpMethod::Patch, format!("{}/{number}", self.base))
            .body(changes)
    }

    pub fn list_comments(&self, number: u64, options: &ListOptions) -> ApiCall<Vec<IssueComment>> {
        self.client
            .get_list(format!("{}/{number}/comments", self.base))
            .list_options(options)
    }

    pub fn add_comment(&self, number: u64, body: &str) -> ApiCall<IssueComment> {
        self.client
            .send_record(HttpMethod::Post, format!("{}/{number}/comments", self.base))
            .body(&CommentBody { body })
    }

    pub fn list_labels(&self, number: u64) -> ApiCall<Vec<Label>> {
        self.client.get_list(format!("{}/{number}/labels", self.base))
    }

    /// Add labels, returning the issue's full label set.
    pub fn add_labels(&self, number: u64, labels: &[String]) -> ApiCall<Vec<Label>> {
        self.client
            .call(
                HttpMethod::Post,
                format!("{}/{number}/labels", self.base),
                crate::github::call::records::<Label>,
            )
            .body(&LabelsBody { labels })
    }

    pub fn lock(&self, number: u64, reason: Option<LockReason>) -> ApiCall<()> {
        self.client
            .send_empty(HttpMethod::Put, format!("{}/{number}/lock", self.base))
            .body(&LockBody { lock_reason: reason })
    }

    pub fn unlock(&self, number: u64) -> ApiCall<()> {
        self.client
            .send_empty(HttpMethod::Delete, format!("{}/{number}/lock", self.base))
    }
}
