//! Releases API methods

use serde::Serialize;

use super::GitHubClient;
use crate::github::call::ApiCall;
use crate::github::error::GitHubError;
use crate::github::http::HttpMethod;
use crate::github::pagination::ListOptions;
use crate::github::util::{ref_segments, repo_path};
use crate::models::{Release, ReleaseAsset};

/// Options for creating a GitHub release
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRelease {
    /// Release tag name (e.g., "v1.0.0")
    pub tag_name: String,
    /// Target commit SHA or branch (defaults to the default branch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Release name/title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release notes body (markdown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    /// Let GitHub generate the name and notes
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub generate_release_notes: bool,
}

impl CreateRelease {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }
}

/// Fields to change on an existing release; `None` leaves a field as is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRelease {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,
}

/// Endpoints under `/repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone)]
pub struct ReleasesManager {
    client: GitHubClient,
    base: String,
}

impl GitHubClient {
    #[must_use]
    pub fn releases(&self, owner: &str, repo: &str) -> ReleasesManager {
        ReleasesManager {
            client: self.clone(),
            base: format!("{}/releases", repo_path(owner, repo)),
        }
    }
}

impl ReleasesManager {
    /// Releases newest first; drafts only with push access.
    pub fn list(&self, options: &ListOptions) -> ApiCall<Vec<Release>> {
        self.client
            .get_list(self.base.clone())
            .list_options(options)
    }

    pub fn get(&self, release_id: i64) -> ApiCall<Release> {
        self.client.get(format!("{}/{release_id}", self.base))
    }

    /// Most recent non-draft, non-prerelease release.
    pub fn latest(&self) -> ApiCall<Release> {
        self.client.get(format!("{}/latest", self.base))
    }

    pub fn get_by_tag(&self, tag: &str) -> ApiCall<Release> {
        self.client
            .get(format!("{}/tags/{}", self.base, ref_segments(tag)))
    }

    pub fn create(&self, release: &CreateRelease) -> ApiCall<Release> {
        let call = self
            .client
            .send_record(HttpMethod::Post, self.base.clone())
            .body(release);
        if release.tag_name.trim().is_empty() {
            return call.reject(GitHubError::InvalidInput("release tag cannot be empty".into()));
        }
        call
    }

    pub fn update(&self, release_id: i64, changes: &UpdateRelease) -> ApiCall<Release> {
        self.client
            .send_record(HttpMethod::Patch, format!("{}/{release_id}", self.base))
            .body(changes)
    }

    pub fn delete(&self, release_id: i64) -> ApiCall<()> {
        self.client
            .send_empty(HttpMethod::Delete, format!("{}/{release_id}", self.base))
    }

    pub fn list_assets(&self, release_id: i64, options: &ListOptions) -> ApiCall<Vec<ReleaseAsset>> {
        self.client
            .get_list(format!("{}/{release_id}/assets", self.base))
            .list_options(options)
    }
}
