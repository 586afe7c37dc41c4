//! Repository, branch and license records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};
use crate::models::user::SimpleUser;

symbols! {
    #[derive(Default)]
    pub enum Visibility {
        #[default]
        Public => "public",
        Private => "private",
        Internal => "internal",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: String,
}

impl Hydrate for License {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            key: doc.string_or("key", ""),
            name: doc.string_or("name", ""),
            spdx_id: doc.string("spdx_id"),
            url: doc.string("url"),
            node_id: doc.string_or("node_id", ""),
        })
    }
}

/// The caller's access to a repository. Only present on authenticated requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryPermissions {
    pub admin: bool,
    pub maintain: bool,
    pub push: bool,
    pub triage: bool,
    pub pull: bool,
}

impl Hydrate for RepositoryPermissions {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            admin: doc.boolean("admin"),
            maintain: doc.boolean("maintain"),
            push: doc.boolean("push"),
            triage: doc.boolean("triage"),
            pull: doc.boolean("pull"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Repository {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub owner: SimpleUser,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
    pub clone_url: String,
    pub ssh_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub forks_count: i64,
    pub stargazers_count: i64,
    pub watchers_count: i64,
    pub size: i64,
    pub default_branch: String,
    pub open_issues_count: i64,
    pub is_template: bool,
    pub topics: Vec<String>,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub has_discussions: bool,
    pub archived: bool,
    pub disabled: bool,
    pub visibility: Visibility,
    pub pushed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub permissions: Option<RepositoryPermissions>,
    pub license: Option<License>,
}

impl Hydrate for Repository {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        let private = doc.boolean("private");
        // Older payloads omit `visibility`; derive it from `private`.
        let fallback = if private {
            Visibility::Private
        } else {
            Visibility::Public
        };
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            name: doc.string_or("name", ""),
            full_name: doc.string_or("full_name", ""),
            owner: doc.nested("owner")?,
            private,
            html_url: doc.string_or("html_url", ""),
            description: doc.string("description"),
            fork: doc.boolean("fork"),
            url: doc.string_or("url", ""),
            clone_url: doc.string_or("clone_url", ""),
            ssh_url: doc.string_or("ssh_url", ""),
            homepage: doc.string("homepage"),
            language: doc.string("language"),
            forks_count: doc.long("forks_count", 0),
            stargazers_count: doc.long("stargazers_count", 0),
            watchers_count: doc.long("watchers_count", 0),
            size: doc.long("size", 0),
            default_branch: doc.string_or("default_branch", ""),
            open_issues_count: doc.long("open_issues_count", 0),
            is_template: doc.boolean("is_template"),
            topics: doc.list("topics"),
            has_issues: doc.boolean("has_issues"),
            has_projects: doc.boolean("has_projects"),
            has_wiki: doc.boolean("has_wiki"),
            has_pages: doc.boolean("has_pages"),
            has_discussions: doc.boolean("has_discussions"),
            archived: doc.boolean("archived"),
            disabled: doc.boolean("disabled"),
            visibility: doc.symbol_or("visibility", fallback)?,
            pushed_at: doc.timestamp("pushed_at"),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
            permissions: doc.optional_nested("permissions")?,
            license: doc.optional_nested("license")?,
        })
    }
}

/// Commit pointer embedded in a branch listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitRef {
    pub sha: String,
    pub url: String,
}

impl Hydrate for CommitRef {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            sha: doc.string_or("sha", ""),
            url: doc.string_or("url", ""),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitRef,
    pub protected: bool,
}

impl Hydrate for Branch {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            name: doc.string_or("name", ""),
            commit: doc.nested("commit")?,
            protected: doc.boolean("protected"),
        })
    }
}

/// Response of `/repos/{owner}/{repo}/topics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topics {
    pub names: Vec<String>,
}

impl Hydrate for Topics {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            names: doc.list("names"),
        })
    }
}
