//! Pull request, review and diff records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};
use crate::models::issue::{AuthorAssociation, IssueState, Label, Milestone};
use crate::models::repository::Repository;
use crate::models::user::SimpleUser;

symbols! {
    #[derive(Default)]
    pub enum ReviewState {
        Approved => "APPROVED",
        ChangesRequested => "CHANGES_REQUESTED",
        #[default]
        Commented => "COMMENTED",
        Dismissed => "DISMISSED",
        Pending => "PENDING",
    }
}

symbols! {
    /// Change type of a file in a diff.
    #[derive(Default)]
    pub enum FileStatus {
        Added => "added",
        Removed => "removed",
        #[default]
        Modified => "modified",
        Renamed => "renamed",
        Copied => "copied",
        Changed => "changed",
        Unchanged => "unchanged",
    }
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PullRequestBranch {
    pub label: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
    pub user: SimpleUser,
    /// `null` when the head repository was deleted.
    pub repo: Option<Repository>,
}

impl Hydrate for PullRequestBranch {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            label: doc.string_or("label", ""),
            ref_name: doc.string_or("ref", ""),
            sha: doc.string_or("sha", ""),
            user: doc.nested("user")?,
            repo: doc.optional_nested("repo")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PullRequest {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
    pub number: i64,
    pub state: IssueState,
    pub title: String,
    pub body: Option<String>,
    pub user: SimpleUser,
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub assignees: Vec<SimpleUser>,
    pub requested_reviewers: Vec<SimpleUser>,
    pub draft: bool,
    pub locked: bool,
    pub head: PullRequestBranch,
    pub base: PullRequestBranch,
    pub merged: bool,
    /// `None` while GitHub is still computing mergeability.
    pub mergeable: Option<bool>,
    pub mergeable_state: Option<String>,
    pub merge_commit_sha: Option<String>,
    pub merged_by: Option<SimpleUser>,
    pub comments: i64,
    pub review_comments: i64,
    pub commits: i64,
    pub additions: i64,
    pub deletions: i64,
    pub changed_files: i64,
    pub author_association: AuthorAssociation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub closed_at: Timestamp,
    pub merged_at: Timestamp,
}

impl Hydrate for PullRequest {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            diff_url: doc.string_or("diff_url", ""),
            patch_url: doc.string_or("patch_url", ""),
            number: doc.long("number", 0),
            state: doc.symbol_or("state", IssueState::Open)?,
            title: doc.string_or("title", ""),
            body: doc.string("body"),
            user: doc.nested("user")?,
            labels: doc.records("labels")?,
            milestone: doc.optional_nested("milestone")?,
            assignees: doc.records("assignees")?,
            requested_reviewers: doc.records("requested_reviewers")?,
            draft: doc.boolean("draft"),
            locked: doc.boolean("locked"),
            head: doc.nested("head")?,
            base: doc.nested("base")?,
            merged: doc.boolean("merged"),
            mergeable: doc.optional_boolean("mergeable"),
            mergeable_state: doc.string("mergeable_state"),
            merge_commit_sha: doc.string("merge_commit_sha"),
            merged_by: doc.optional_nested("merged_by")?,
            comments: doc.long("comments", 0),
            review_comments: doc.long("review_comments", 0),
            commits: doc.long("commits", 0),
            additions: doc.long("additions", 0),
            deletions: doc.long("deletions", 0),
            changed_files: doc.long("changed_files", 0),
            author_association: doc.symbol_or("author_association", AuthorAssociation::None)?,
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
            closed_at: doc.timestamp("closed_at"),
            merged_at: doc.timestamp("merged_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Review {
    pub id: i64,
    pub node_id: String,
    pub user: SimpleUser,
    pub body: String,
    pub state: ReviewState,
    pub html_url: String,
    pub pull_request_url: String,
    pub commit_id: Option<String>,
    pub author_association: AuthorAssociation,
    pub submitted_at: Timestamp,
}

impl Hydrate for Review {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            user: doc.nested("user")?,
            body: doc.string_or("body", ""),
            state: doc.symbol_or("state", ReviewState::Commented)?,
            html_url: doc.string_or("html_url", ""),
            pull_request_url: doc.string_or("pull_request_url", ""),
            commit_id: doc.string("commit_id"),
            author_association: doc.symbol_or("author_association", AuthorAssociation::None)?,
            submitted_at: doc.timestamp("submitted_at"),
        })
    }
}

/// A file touched by a pull request or commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffEntry {
    pub sha: String,
    pub filename: String,
    pub status: FileStatus,
    pub additions: i64,
    pub deletions: i64,
    pub changes: i64,
    pub blob_url: String,
    pub raw_url: String,
    pub contents_url: String,
    /// Omitted by the API for binary or very large diffs.
    pub patch: Option<String>,
    pub previous_filename: Option<String>,
}

impl Hydrate for DiffEntry {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            sha: doc.string_or("sha", ""),
            filename: doc.string_or("filename", ""),
            status: doc.symbol_or("status", FileStatus::Modified)?,
            additions: doc.long("additions", 0),
            deletions: doc.long("deletions", 0),
            changes: doc.long("changes", 0),
            blob_url: doc.string_or("blob_url", ""),
            raw_url: doc.string_or("raw_url", ""),
            contents_url: doc.string_or("contents_url", ""),
            patch: doc.string("patch"),
            previous_filename: doc.string("previous_filename"),
        })
    }
}

/// Response of the merge endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeResult {
    pub sha: String,
    pub merged: bool,
    pub message: String,
}

impl Hydrate for MergeResult {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            sha: doc.string_or("sha", ""),
            merged: doc.boolean("merged"),
            message: doc.string_or("message", ""),
        })
    }
}
