//! Commit and commit-status records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};
use crate::models::pull_request::DiffEntry;
use crate::models::user::SimpleUser;

symbols! {
    #[derive(Default)]
    pub enum StatusState {
        Success => "success",
        #[default]
        Pending => "pending",
        Failure => "failure",
        Error => "error",
    }
}

/// Name, email and date of a git author or committer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitActor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Timestamp,
}

impl Hydrate for GitActor {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            name: doc.string("name"),
            email: doc.string("email"),
            date: doc.timestamp("date"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    pub signature: Option<String>,
    pub payload: Option<String>,
}

impl Hydrate for Verification {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            verified: doc.boolean("verified"),
            reason: doc.string_or("reason", ""),
            signature: doc.string("signature"),
            payload: doc.string("payload"),
        })
    }
}

/// A `{sha, url}` pointer to a git object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitObject {
    pub sha: String,
    pub url: String,
}

impl Hydrate for GitObject {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            sha: doc.string_or("sha", ""),
            url: doc.string_or("url", ""),
        })
    }
}

/// The git-level commit data nested under `commit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitCommit {
    pub message: String,
    pub author: GitActor,
    pub committer: GitActor,
    pub tree: GitObject,
    pub comment_count: i64,
    pub verification: Option<Verification>,
}

impl Hydrate for GitCommit {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            message: doc.string_or("message", ""),
            author: doc.nested("author")?,
            committer: doc.nested("committer")?,
            tree: doc.nested("tree")?,
            comment_count: doc.long("comment_count", 0),
            verification: doc.optional_nested("verification")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitParent {
    pub sha: String,
    pub url: String,
    pub html_url: Option<String>,
}

impl Hydrate for CommitParent {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            sha: doc.string_or("sha", ""),
            url: doc.string_or("url", ""),
            html_url: doc.string("html_url"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitStats {
    pub additions: i64,
    pub deletions: i64,
    pub total: i64,
}

impl Hydrate for CommitStats {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            additions: doc.long("additions", 0),
            deletions: doc.long("deletions", 0),
            total: doc.long("total", 0),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Commit {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub commit: GitCommit,
    /// `None` when the git author has no GitHub account.
    pub author: Option<SimpleUser>,
    pub committer: Option<SimpleUser>,
    pub parents: Vec<CommitParent>,
    /// Only populated by the single-commit endpoint.
    pub stats: CommitStats,
    pub files: Vec<DiffEntry>,
}

impl Hydrate for Commit {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            sha: doc.string_or("sha", ""),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            commit: doc.nested("commit")?,
            author: doc.optional_nested("author")?,
            committer: doc.optional_nested("committer")?,
            parents: doc.records("parents")?,
            stats: doc.nested("stats")?,
            files: doc.records("files")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommitStatus {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub state: StatusState,
    pub description: Option<String>,
    pub target_url: Option<String>,
    pub context: String,
    pub creator: Option<SimpleUser>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hydrate for CommitStatus {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            state: doc.symbol_or("state", StatusState::Pending)?,
            description: doc.string("description"),
            target_url: doc.string("target_url"),
            context: doc.string_or("context", "default"),
            creator: doc.optional_nested("creator")?,
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}

/// Aggregate of all statuses for a ref.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombinedStatus {
    pub state: StatusState,
    pub sha: String,
    pub total_count: i64,
    pub statuses: Vec<CommitStatus>,
}

impl Hydrate for CombinedStatus {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            state: doc.symbol_or("state", StatusState::Pending)?,
            sha: doc.string_or("sha", ""),
            total_count: doc.long("total_count", 0),
            statuses: doc.records("statuses")?,
        })
    }
}
