//! Pull requests API methods

use serde::Serialize;

use super::GitHubClient;
use super::issues::{SortDirection, StateFilter};
use crate::github::call::ApiCall;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::http::HttpMethod;
use crate::github::pagination::ListOptions;
use crate::github::util::{QueryPairs, push_opt, repo_path};
use crate::hydrate::symbols;
use crate::models::{DiffEntry, IssueState, MergeResult, PullRequest, Review};

symbols! {
    #[derive(Default)]
    pub enum MergeMethod {
        #[default]
        Merge => "merge",
        Squash => "squash",
        Rebase => "rebase",
    }
}

symbols! {
    /// Action taken when submitting a review.
    pub enum ReviewEvent {
        Approve => "APPROVE",
        RequestChanges => "REQUEST_CHANGES",
        Comment => "COMMENT",
    }
}

symbols! {
    pub enum PullRequestSort {
        Created => "created",
        Updated => "updated",
        Popularity => "popularity",
        LongRunning => "long-running",
    }
}

/// Query options for listing pull requests.
#[derive(Debug, Clone, Default)]
pub struct ListPullRequestsOptions {
    pub state: Option<StateFilter>,
    /// `user:ref-name` or `organization:ref-name`
    pub head: Option<String>,
    pub base: Option<String>,
    pub sort: Option<PullRequestSort>,
    pub direction: Option<SortDirection>,
    pub list: ListOptions,
}

impl ListPullRequestsOptions {
    fn query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "state", self.state);
        push_opt(&mut pairs, "head", self.head.as_deref());
        push_opt(&mut pairs, "base", self.base.as_deref());
        push_opt(&mut pairs, "sort", self.sort);
        push_opt(&mut pairs, "direction", self.direction);
        pairs
    }
}

/// Body of `POST /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePullRequest {
    pub title: String,
    /// Branch containing the changes
    pub head: String,
    /// Branch the changes are pulled into
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

impl CreatePullRequest {
    pub fn new(title: impl Into<String>, head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            ..Default::default()
        }
    }
}

/// Body of `PATCH /repos/{owner}/{repo}/pulls/{number}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

/// Body of `PUT /repos/{owner}/{repo}/pulls/{number}/merge`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergePullRequest {
    /// Custom commit title for the merge commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    /// Custom commit message for the merge commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// SHA that pull request head must match to allow merge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
}

/// Inline comment submitted with a review.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewComment {
    pub path: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// `LEFT` or `RIGHT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
}

/// Body of `POST /repos/{owner}/{repo}/pulls/{number}/reviews`.
///
/// Without an `event` the review stays pending.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ReviewEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Commit the review applies to; defaults to the head commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ReviewComment>,
}

impl CreateReview {
    #[must_use]
    pub fn new(event: ReviewEvent) -> Self {
        Self {
            event: Some(event),
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct ReviewersBody<'a> {
    #[serde(skip_serializing_if = "no_entries")]
    reviewers: &'a [String],
    #[serde(skip_serializing_if = "no_entries")]
    team_reviewers: &'a [String],
}

fn no_entries(list: &&[String]) -> bool {
    list.is_empty()
}

/// Endpoints under `/repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone)]
pub struct PullRequestsManager {
    client: GitHubClient,
    base: String,
}

impl GitHubClient {
    #[must_use]
    pub fn pulls(&self, owner: &str, repo: &str) -> PullRequestsManager {
        PullRequestsManager {
            client: self.clone(),
            base: format!("{}/pulls", repo_path(owner, repo)),
        }
    }
}

impl PullRequestsManager {
    pub fn get(&self, number: u64) -> ApiCall<PullRequest> {
        self.client.get(format!("{}/{number}", self.base))
    }

    pub fn list(&self, options: &ListPullRequestsOptions) -> ApiCall<Vec<PullRequest>> {
        self.client
            .get_list(self.base.clone())
            .query(options.query())
            .list_options(&options.list)
    }

    pub fn create(&self, pull: &CreatePullRequest) -> ApiCall<PullRequest> {
        let call = self
            .client
            .send_record(HttpMethod::Post, self.base.clone())
            .body(pull);
        if pull.head.is_empty() || pull.base.is_empty() {
            return call.reject(GitHubError::InvalidInput(
                "pull request head and base are required".into(),
            ));
        }
        call
    }

    pub fn update(&self, number: u64, changes: &UpdatePullRequest) -> ApiCall<PullRequest> {
        self.client
            .send_record(HttpMethod::Patch, format!("{}/{number}", self.base))
            .body(changes)
    }

    pub fn merge(&self, number: u64, options: &MergePullRequest) -> ApiCall<MergeResult> {
        self.client
            .send_record(HttpMethod::Put, format!("{}/{number}/merge", self.base))
            .body(options)
    }

    /// `true` on 204, `false` on 404.
    pub async fn is_merged(&self, number: u64) -> GitHubResult<bool> {
        let call = self
            .client
            .send_empty(HttpMethod::Get, format!("{}/{number}/merge", self.base));
        match call.send().await {
            Ok(()) => Ok(true),
            Err(GitHubError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn list_files(&self, number: u64, options: &ListOptions) -> ApiCall<Vec<DiffEntry>> {
        self.client
            .get_list(format!("{}/{number}/files", self.base))
            .list_options(options)
    }

    pub fn list_reviews(&self, number: u64, options: &ListOptions) -> ApiCall<Vec<Review>> {
        self.client
            .get_list(format!("{}/{number}/reviews", self.base))
            .list_options(options)
    }

    pub fn create_review(&self, number: u64, review: &CreateReview) -> ApiCall<Review> {
        self.client
            .send_record(HttpMethod::Post, format!("{}/{number}/reviews", self.base))
            .body(review)
    }

    pub fn request_reviewers(
        &self,
        number: u64,
        reviewers: &[String],
        team_reviewers: &[String],
    ) -> ApiCall<PullRequest> {
        let call = self
            .client
            .send_record(
                HttpMethod::Post,
                format!("{}/{number}/requested_reviewers", self.base),
            )
            .body(&ReviewersBody {
                reviewers,
                team_reviewers,
            });
        if reviewers.is_empty() && team_reviewers.is_empty() {
            return call.reject(GitHubError::InvalidInput(
                "at least one reviewer or team is required".into(),
            ));
        }
        call
    }
}
