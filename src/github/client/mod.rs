//! GitHub API client
//!
//! Holds credentials and transport configuration; resource managers are
//! borrowed from it per call site.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gh_records::GitHubClient;
//! use gh_records::github::CreateIssue;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let issue = gh
//!         .issues("owner", "repo")
//!         .create(&CreateIssue::new("Issue title"))
//!         .send()
//!         .await?;
//!     println!("opened #{}", issue.number);
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::github::call::{self, ApiCall, Decoder};
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::http::reqwest_transport::ReqwestTransport;
use crate::github::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::github::util::encode_query;
use crate::hydrate::Hydrate;
use crate::models::RateLimit;

mod actions;
mod apps;
mod checks;
mod issues;
mod pull_requests;
mod releases;
mod repositories;
mod search;
mod users;

pub use actions::{ActionsManager, DispatchWorkflow, ListWorkflowRunsOptions, WorkflowId};
pub use apps::{AppsManager, CreateInstallationToken};
pub use checks::{CheckRunFilter, ChecksManager, ListCheckRunsOptions};
pub use issues::{
    CreateIssue, IssueSort, IssuesManager, ListIssuesOptions, SortDirection, StateFilter,
    UpdateIssue,
};
pub use pull_requests::{
    CreatePullRequest, CreateReview, ListPullRequestsOptions, MergeMethod, MergePullRequest,
    PullRequestSort, PullRequestsManager, ReviewComment, ReviewEvent, UpdatePullRequest,
};
pub use releases::{CreateRelease, ReleasesManager, UpdateRelease};
pub use repositories::{CreateRepository, ForkOptions, ListCommitsOptions, RepositoriesManager};
pub use search::{IssueSearchSort, RepositorySearchSort, SearchManager, SearchOrder, UserSearchSort};
pub use users::UsersManager;

pub const DEFAULT_BASE_URI: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ERROR_MESSAGE: &str = "GitHub API request failed";
pub const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";

/// GitHub API client.
///
/// Cloning is cheap (Arc clone). Every call returns its own result, so one
/// client can be shared across tasks.
#[derive(Clone)]
pub struct GitHubClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_uri: String,
    token: Option<String>,
    user_agent: String,
    error_message: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_uri", &self.inner.base_uri)
            .field("authenticated", &self.inner.token.is_some())
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Build a client from `GITHUB_TOKEN`/`GH_TOKEN`, `GITHUB_API_URL` and
    /// `GITHUB_TIMEOUT_SECS`.
    pub fn from_env() -> GitHubResult<Self> {
        GitHubClientBuilder::from_env()?.build()
    }

    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.inner.base_uri
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.is_some()
    }

    /// Current rate limit status. Does not count against the quota.
    pub fn rate_limit(&self) -> ApiCall<RateLimit> {
        self.get("/rate_limit")
    }

    pub(crate) fn call<T>(&self, method: HttpMethod, path: impl Into<String>, decode: Decoder<T>) -> ApiCall<T> {
        ApiCall::new(self.clone(), method, path, decode)
    }

    pub(crate) fn get<T: Hydrate>(&self, path: impl Into<String>) -> ApiCall<T> {
        self.call(HttpMethod::Get, path, call::record::<T>)
    }

    pub(crate) fn get_list<T: Hydrate>(&self, path: impl Into<String>) -> ApiCall<Vec<T>> {
        self.call(HttpMethod::Get, path, call::records::<T>)
    }

    pub(crate) fn send_record<T: Hydrate>(&self, method: HttpMethod, path: impl Into<String>) -> ApiCall<T> {
        self.call(method, path, call::record::<T>)
    }

    pub(crate) fn send_empty(&self, method: HttpMethod, path: impl Into<String>) -> ApiCall<()> {
        self.call(method, path, call::nothing)
    }

    fn url_for(&self, path: &str, query: &[(String, String)]) -> String {
        let query = encode_query(query);
        if path.starts_with("https://") || path.starts_with("http://") {
            format!("{path}{query}")
        } else {
            format!("{}{path}{query}", self.inner.base_uri)
        }
    }

    /// `true` when `url` lives under the configured base URI.
    fn is_own_url(&self, url: &str) -> bool {
        url.strip_prefix(self.inner.base_uri.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']))
    }

    fn headers(&self, url: &str, has_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), ACCEPT.to_string()),
            ("User-Agent".to_string(), self.inner.user_agent.clone()),
            ("X-GitHub-Api-Version".to_string(), API_VERSION.to_string()),
        ];
        // Pagination links come from the response; never hand the token to another host.
        if let Some(token) = self.inner.token.as_ref().filter(|_| self.is_own_url(url)) {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if has_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers
    }

    /// Send one request, turning non-2xx statuses into errors.
    pub(crate) async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: &[u8],
    ) -> GitHubResult<HttpResponse> {
        let url = self.url_for(path, query);
        let headers = self.headers(&url, !body.is_empty());
        let request = HttpRequest {
            method,
            url,
            headers,
            body: body.to_vec(),
        };
        log::debug!("{method} {}", request.url);

        let response = self.inner.transport.send(request).await?;
        log::trace!(
            "{method} {path} -> {} ({} bytes)",
            response.status,
            response.body.len()
        );

        if response.header("x-ratelimit-remaining") == Some("0") {
            log::warn!("GitHub rate limit exhausted after {method} {path}");
        }

        if response.is_success() {
            Ok(response)
        } else {
            let err = GitHubError::from_response(&response, &self.inner.error_message);
            log::warn!("{method} {path} failed: {err}");
            Err(err)
        }
    }
}

/// Builder for [`GitHubClient`].
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    error_message: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            error_message: None,
            transport: None,
        }
    }

    /// Builder preloaded from the environment.
    ///
    /// `GITHUB_TOKEN` wins over `GH_TOKEN`. Unset variables leave defaults.
    pub fn from_env() -> GitHubResult<Self> {
        Self::new().apply_env(|key| std::env::var(key).ok())
    }

    fn apply_env(mut self, var: impl Fn(&str) -> Option<String>) -> GitHubResult<Self> {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty("GITHUB_TOKEN").or_else(|| non_empty("GH_TOKEN")) {
            self = self.personal_token(token);
        }
        if let Some(uri) = non_empty("GITHUB_API_URL") {
            self = self.base_uri(uri);
        }
        if let Some(secs) = non_empty("GITHUB_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                GitHubError::ClientSetup(format!("GITHUB_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            self = self.timeout(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Request timeout applied by the default transport
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Message reported when a failed response carries none
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Replace the reqwest transport
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let base_uri = self.base_uri.unwrap_or_else(|| DEFAULT_BASE_URI.to_string());
        let parsed = reqwest::Url::parse(&base_uri)
            .map_err(|e| GitHubError::ClientSetup(format!("invalid base URI {base_uri:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GitHubError::ClientSetup(format!(
                "base URI must be http(s): {base_uri}"
            )));
        }

        if self.timeout.is_zero() {
            return Err(GitHubError::ClientSetup("timeout must be non-zero".into()));
        }

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::with_timeout(self.timeout)
                    .map_err(|e| GitHubError::ClientSetup(e.to_string()))?,
            ),
        };

        Ok(GitHubClient {
            inner: Arc::new(ClientInner {
                base_uri: base_uri.trim_end_matches('/').to_string(),
                token: self.token,
                user_agent: self
                    .user_agent
                    .unwrap_or_else(|| concat!("gh-records/", env!("CARGO_PKG_VERSION")).to_string()),
                error_message: self
                    .error_message
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
                transport,
            }),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
