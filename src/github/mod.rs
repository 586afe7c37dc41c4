//! GitHub REST API operations
//!
//! Requests go through a pluggable [`HttpTransport`]; responses are decoded
//! into the hydrated records from [`crate::models`].

pub mod call;
pub mod client;
pub mod error;
pub mod http;
pub mod pagination;
pub mod util;

// Re-export client types
pub use client::{
    DEFAULT_BASE_URI, DEFAULT_TIMEOUT, GitHubClient, GitHubClientBuilder,
};

// Re-export managers
pub use client::{
    ActionsManager, AppsManager, ChecksManager, IssuesManager, PullRequestsManager,
    ReleasesManager, RepositoriesManager, SearchManager, UsersManager,
};

// Re-export request options
pub use client::{
    CheckRunFilter, CreateInstallationToken, CreateIssue, CreatePullRequest, CreateRelease,
    CreateRepository, CreateReview, DispatchWorkflow, ForkOptions, IssueSearchSort, IssueSort,
    ListCheckRunsOptions, ListCommitsOptions, ListIssuesOptions, ListPullRequestsOptions,
    ListWorkflowRunsOptions, MergeMethod, MergePullRequest, PullRequestSort,
    RepositorySearchSort, ReviewComment, ReviewEvent, SearchOrder, SortDirection, StateFilter,
    UpdateIssue, UpdatePullRequest, UpdateRelease, UserSearchSort, WorkflowId,
};

// Re-export call and error types
pub use call::{ApiCall, Formatted, ResponseFormat};
pub use error::{ErrorKind, GitHubError, GitHubResult};
pub use http::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use pagination::{Links, ListOptions, MAX_PER_PAGE, Page};
