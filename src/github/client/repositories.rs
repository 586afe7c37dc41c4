//! Repositories API methods

use serde::Serialize;

use super::GitHubClient;
use crate::github::call::ApiCall;
use crate::github::error::GitHubError;
use crate::github::http::HttpMethod;
use crate::github::pagination::ListOptions;
use crate::github::util::{QueryPairs, push_opt, ref_segments, repo_path, segment};
use crate::models::{Branch, CombinedStatus, Commit, Repository, Topics};

/// Options for listing commits in a repository.
#[derive(Debug, Clone, Default)]
pub struct ListCommitsOptions {
    /// SHA or branch to start listing commits from.
    pub sha: Option<String>,
    /// Only commits containing this file path will be returned.
    pub path: Option<String>,
    /// GitHub login or email address to filter commits by author.
    pub author: Option<String>,
    /// Only show commits after this date (ISO 8601 format).
    pub since: Option<String>,
    /// Only show commits before this date (ISO 8601 format).
    pub until: Option<String>,
    pub list: ListOptions,
}

impl ListCommitsOptions {
    fn query(&self) -> Result<QueryPairs, GitHubError> {
        for (name, date) in [("since", &self.since), ("until", &self.until)] {
            if let Some(date) = date {
                chrono::DateTime::parse_from_rfc3339(date).map_err(|e| {
                    GitHubError::InvalidInput(format!("Invalid {name} date '{date}': {e}"))
                })?;
            }
        }

        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "sha", self.sha.as_deref());
        push_opt(&mut pairs, "path", self.path.as_deref());
        push_opt(&mut pairs, "author", self.author.as_deref());
        push_opt(&mut pairs, "since", self.since.as_deref());
        push_opt(&mut pairs, "until", self.until.as_deref());
        Ok(pairs)
    }
}

/// Body of `POST /user/repos` and `POST /orgs/{org}/repos`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRepository {
    pub name: String,
    /// Create under this organization instead of the authenticated user
    #[serde(skip)]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    /// Create an initial commit with an empty README
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
}

impl CreateRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /repos/{owner}/{repo}/forks`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_only: Option<bool>,
}

/// Endpoints under `/repos/{owner}/{repo}`.
#[derive(Debug, Clone)]
pub struct RepositoriesManager {
    client: GitHubClient,
    base: String,
}

impl GitHubClient {
    #[must_use]
    pub fn repos(&self, owner: &str, repo: &str) -> RepositoriesManager {
        RepositoriesManager {
            client: self.clone(),
            base: repo_path(owner, repo),
        }
    }

    /// Create a repository for the authenticated user, or for
    /// `options.organization` when set.
    pub fn create_repository(&self, options: &CreateRepository) -> ApiCall<Repository> {
        let path = match &options.organization {
            Some(org) => format!("/orgs/{}/repos", segment(org)),
            None => "/user/repos".to_string(),
        };
        let call = self.send_record(HttpMethod::Post, path).body(options);
        if options.name.trim().is_empty() {
            return call.reject(GitHubError::InvalidInput(
                "repository name cannot be empty".into(),
            ));
        }
        call
    }

    /// Public repositories owned by `username`.
    pub fn list_for_user(&self, username: &str, options: &ListOptions) -> ApiCall<Vec<Repository>> {
        self.get_list(format!("/users/{}/repos", segment(username)))
            .list_options(options)
    }
}

impl RepositoriesManager {
    pub fn get(&self) -> ApiCall<Repository> {
        self.client.get(self.base.clone())
    }

    pub fn list_branches(&self, options: &ListOptions) -> ApiCall<Vec<Branch>> {
        self.client
            .get_list(format!("{}/branches", self.base))
            .list_options(options)
    }

    pub fn get_branch(&self, branch: &str) -> ApiCall<Branch> {
        self.client
            .get(format!("{}/branches/{}", self.base, ref_segments(branch)))
    }

    /// Delete a branch through its git ref.
    pub fn delete_branch(&self, branch: &str) -> ApiCall<()> {
        self.client.send_empty(
            HttpMethod::Delete,
            format!("{}/git/refs/heads/{}", self.base, ref_segments(branch)),
        )
    }

    pub fn list_commits(&self, options: &ListCommitsOptions) -> ApiCall<Vec<Commit>> {
        let call = self.client.get_list(format!("{}/commits", self.base));
        match options.query() {
            Ok(pairs) => call.query(pairs).list_options(&options.list),
            Err(e) => call.reject(e),
        }
    }

    /// A single commit with stats and changed files. `reference` may be a
    /// SHA, branch or tag.
    pub fn get_commit(&self, reference: &str) -> ApiCall<Commit> {
        self.client
            .get(format!("{}/commits/{}", self.base, ref_segments(reference)))
    }

    /// Combined commit status for a SHA, branch or tag.
    pub fn combined_status(&self, reference: &str) -> ApiCall<CombinedStatus> {
        self.client
            .get(format!("{}/commits/{}/status", self.base, ref_segments(reference)))
    }

    pub fn fork(&self, options: &ForkOptions) -> ApiCall<Repository> {
        self.client
            .send_record(HttpMethod::Post, format!("{}/forks", self.base))
            .body(options)
    }

    pub fn list_topics(&self) -> ApiCall<Topics> {
        self.client.get(format!("{}/topics", self.base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::tests::{API, mock_client};
    use crate::github::error::ErrorKind;
    use crate::github::http::HttpResponse;
    use crate::models::StatusState;
    use serde_json::json;

    #[tokio::test]
    async fn get_repository() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/octocat/Hello-World"),
            200,
            json!({
                "id": 1296269,
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "owner": {"login": "octocat"},
                "topics": ["octocat", "api"],
                "license": null
            }),
        );
        let repo = client.repos("octocat", "Hello-World").get().send().await.unwrap();
        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert_eq!(repo.owner.login, "octocat");
        assert_eq!(repo.topics, ["octocat", "api"]);
        assert!(repo.license.is_none());
    }

    #[tokio::test]
    async fn branch_names_keep_slashes() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/o/r/branches/feature/login"),
            200,
            json!({"name": "feature/login", "commit": {"sha": "abc"}, "protected": true}),
        );
        transport.push_response(
            HttpMethod::Delete,
            format!("{API}/repos/o/r/git/refs/heads/feature/login"),
            HttpResponse::empty(204),
        );

        let repos = client.repos("o", "r");
        let branch = repos.get_branch("feature/login").send().await.unwrap();
        assert_eq!(branch.commit.sha, "abc");
        assert!(branch.protected);
        repos.delete_branch("feature/login").send().await.unwrap();
    }

    #[tokio::test]
    async fn list_commits_renders_filters() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/o/r/commits?sha=main&author=octocat&since=2024-01-01T00%3A00%3A00Z&per_page=5"),
            200,
            json!([{"sha": "1"}, {"sha": "2"}]),
        );
        let options = ListCommitsOptions {
            sha: Some("main".into()),
            author: Some("octocat".into()),
            since: Some("2024-01-01T00:00:00Z".into()),
            list: ListOptions::new().per_page(5),
            ..Default::default()
        };
        let commits = client.repos("o", "r").list_commits(&options).send().await.unwrap();
        assert_eq!(commits.len(), 2);
    }

    #[tokio::test]
    async fn list_commits_rejects_bad_dates() {
        let (client, transport) = mock_client();
        let options = ListCommitsOptions {
            until: Some("yesterday".into()),
            ..Default::default()
        };
        let err = client.repos("o", "r").list_commits(&options).send().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn combined_status_and_topics() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/o/r/commits/main/status"),
            200,
            json!({"state": "failure", "sha": "abc", "total_count": 1, "statuses": [{"state": "failure"}]}),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/o/r/topics"),
            200,
            json!({"names": ["rust", "github"]}),
        );
        let repos = client.repos("o", "r");
        let status = repos.combined_status("main").send().await.unwrap();
        assert_eq!(status.state, StatusState::Failure);
        assert_eq!(status.statuses[0].context, "default");
        let topics = repos.list_topics().send().await.unwrap();
        assert_eq!(topics.names, ["rust", "github"]);
    }

    #[tokio::test]
    async fn create_repository_omits_unset_options() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Post,
            format!("{API}/orgs/acme/repos"),
            201,
            json!({"name": "tools", "private": true}),
        );
        let options = CreateRepository {
            organization: Some("acme".into()),
            private: Some(true),
            ..CreateRepository::new("tools")
        };
        let repo = client.create_repository(&options).send().await.unwrap();
        assert!(repo.private);

        let request = transport.last_request().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!({"name": "tools", "private": true}));
    }

    #[tokio::test]
    async fn create_repository_requires_a_name() {
        let (client, _) = mock_client();
        let err = client
            .create_repository(&CreateRepository::new("  "))
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn fork_into_organization() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Post,
            format!("{API}/repos/o/r/forks"),
            202,
            json!({"name": "r", "fork": true, "owner": {"login": "acme", "type": "Organization"}}),
        );
        let options = ForkOptions {
            organization: Some("acme".into()),
            ..Default::default()
        };
        let fork = client.repos("o", "r").fork(&options).send().await.unwrap();
        assert!(fork.fork);
        assert_eq!(fork.owner.login, "acme");
    }

    #[tokio::test]
    async fn list_for_user() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/users/octocat/repos"),
            200,
            json!([{"name": "a"}, {"name": "b"}]),
        );
        let repos = client
            .list_for_user("octocat", &ListOptions::default())
            .send()
            .await
            .unwrap();
        assert_eq!(repos.len(), 2);
    }
}
