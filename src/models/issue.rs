//! Issue, label, milestone and comment records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};
use crate::models::user::SimpleUser;

symbols! {
    /// Open/closed state shared by issues and pull requests.
    #[derive(Default)]
    pub enum IssueState {
        #[default]
        Open => "open",
        Closed => "closed",
    }
}

symbols! {
    pub enum StateReason {
        Completed => "completed",
        Reopened => "reopened",
        NotPlanned => "not_planned",
        Duplicate => "duplicate",
    }
}

symbols! {
    /// How the author of a comment or issue relates to the repository.
    #[derive(Default)]
    pub enum AuthorAssociation {
        Collaborator => "COLLABORATOR",
        Contributor => "CONTRIBUTOR",
        FirstTimer => "FIRST_TIMER",
        FirstTimeContributor => "FIRST_TIME_CONTRIBUTOR",
        Mannequin => "MANNEQUIN",
        Member => "MEMBER",
        #[default]
        None => "NONE",
        Owner => "OWNER",
    }
}

symbols! {
    pub enum LockReason {
        OffTopic => "off-topic",
        TooHeated => "too heated",
        Resolved => "resolved",
        Spam => "spam",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Label {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub default: bool,
}

impl Hydrate for Label {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            name: doc.string_or("name", ""),
            description: doc.string("description"),
            color: doc.string_or("color", ""),
            default: doc.boolean("default"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Milestone {
    pub id: i64,
    pub node_id: String,
    pub number: i64,
    pub url: String,
    pub html_url: String,
    pub state: IssueState,
    pub title: String,
    pub description: Option<String>,
    pub creator: Option<SimpleUser>,
    pub open_issues: i64,
    pub closed_issues: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub closed_at: Timestamp,
    pub due_on: Timestamp,
}

impl Hydrate for Milestone {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            number: doc.long("number", 0),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            state: doc.symbol_or("state", IssueState::Open)?,
            title: doc.string_or("title", ""),
            description: doc.string("description"),
            creator: doc.optional_nested("creator")?,
            open_issues: doc.long("open_issues", 0),
            closed_issues: doc.long("closed_issues", 0),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
            closed_at: doc.timestamp("closed_at"),
            due_on: doc.timestamp("due_on"),
        })
    }
}

/// Present on issues that are really pull requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssuePullRequestLinks {
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
    pub merged_at: Timestamp,
}

impl Hydrate for IssuePullRequestLinks {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            diff_url: doc.string_or("diff_url", ""),
            patch_url: doc.string_or("patch_url", ""),
            merged_at: doc.timestamp("merged_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Issue {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub number: i64,
    pub state: IssueState,
    pub state_reason: Option<StateReason>,
    pub title: String,
    pub body: Option<String>,
    pub user: SimpleUser,
    pub labels: Vec<Label>,
    pub assignee: Option<SimpleUser>,
    pub assignees: Vec<SimpleUser>,
    pub milestone: Option<Milestone>,
    pub locked: bool,
    pub active_lock_reason: Option<LockReason>,
    pub comments: i64,
    pub pull_request: Option<IssuePullRequestLinks>,
    pub author_association: AuthorAssociation,
    pub closed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Issue {
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Label names in the order the API returned them.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }
}

impl Hydrate for Issue {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            number: doc.long("number", 0),
            state: doc.symbol_or("state", IssueState::Open)?,
            state_reason: doc.symbol("state_reason")?,
            title: doc.string_or("title", ""),
            body: doc.string("body"),
            user: doc.nested("user")?,
            labels: doc.records("labels")?,
            assignee: doc.optional_nested("assignee")?,
            assignees: doc.records("assignees")?,
            milestone: doc.optional_nested("milestone")?,
            locked: doc.boolean("locked"),
            active_lock_reason: doc.symbol("active_lock_reason")?,
            comments: doc.long("comments", 0),
            pull_request: doc.optional_nested("pull_request")?,
            author_association: doc.symbol_or("author_association", AuthorAssociation::None)?,
            closed_at: doc.timestamp("closed_at"),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueComment {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub issue_url: String,
    pub body: Option<String>,
    pub user: SimpleUser,
    pub author_association: AuthorAssociation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hydrate for IssueComment {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            issue_url: doc.string_or("issue_url", ""),
            body: doc.string("body"),
            user: doc.nested("user")?,
            author_association: doc.symbol_or("author_association", AuthorAssociation::None)?,
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}
