//! Search API methods with type-safe sort parameters.
//!
//! Queries use GitHub's search syntax, e.g. `language:rust stars:>100` for
//! repositories or `repo:owner/name is:open label:bug` for issues.

use super::GitHubClient;
use crate::github::call::ApiCall;
use crate::github::error::GitHubError;
use crate::github::pagination::ListOptions;
use crate::github::util::{QueryPairs, push_opt};
use crate::hydrate::{Hydrate, Symbol, symbols};
use crate::models::{Issue, Repository, SearchResults, SimpleUser};

symbols! {
    /// Sort field for user search results.
    pub enum UserSearchSort {
        /// Sort by follower count
        Followers => "followers",
        /// Sort by public repository count
        Repositories => "repositories",
        /// Sort by account creation date
        Joined => "joined",
    }
}

symbols! {
    pub enum RepositorySearchSort {
        Stars => "stars",
        Forks => "forks",
        HelpWantedIssues => "help-wanted-issues",
        Updated => "updated",
    }
}

symbols! {
    /// Sort field for issue and pull request search results.
    pub enum IssueSearchSort {
        Comments => "comments",
        Reactions => "reactions",
        Interactions => "interactions",
        Created => "created",
        Updated => "updated",
    }
}

symbols! {
    /// Sort order for search results. Ignored by GitHub unless a sort field
    /// is given.
    pub enum SearchOrder {
        Asc => "asc",
        Desc => "desc",
    }
}

/// Endpoints under `/search`.
#[derive(Debug, Clone)]
pub struct SearchManager {
    client: GitHubClient,
}

impl GitHubClient {
    #[must_use]
    pub fn search(&self) -> SearchManager {
        SearchManager {
            client: self.clone(),
        }
    }
}

impl SearchManager {
    pub fn repositories(
        &self,
        query: &str,
        sort: Option<RepositorySearchSort>,
        order: Option<SearchOrder>,
        options: &ListOptions,
    ) -> ApiCall<SearchResults<Repository>> {
        self.search("/search/repositories", query, sort.map(Symbol::as_str), order, options)
    }

    /// Issues and pull requests; add `is:pr` or `is:issue` to narrow.
    pub fn issues(
        &self,
        query: &str,
        sort: Option<IssueSearchSort>,
        order: Option<SearchOrder>,
        options: &ListOptions,
    ) -> ApiCall<SearchResults<Issue>> {
        self.search("/search/issues", query, sort.map(Symbol::as_str), order, options)
    }

    pub fn users(
        &self,
        query: &str,
        sort: Option<UserSearchSort>,
        order: Option<SearchOrder>,
        options: &ListOptions,
    ) -> ApiCall<SearchResults<SimpleUser>> {
        self.search("/search/users", query, sort.map(Symbol::as_str), order, options)
    }

    fn search<T: Hydrate>(
        &self,
        path: &str,
        query: &str,
        sort: Option<&'static str>,
        order: Option<SearchOrder>,
        options: &ListOptions,
    ) -> ApiCall<SearchResults<T>> {
        let mut pairs: QueryPairs = vec![("q".to_string(), query.to_string())];
        push_opt(&mut pairs, "sort", sort);
        push_opt(&mut pairs, "order", order);

        let call = self.client.get(path).query(pairs).list_options(options);
        if query.trim().is_empty() {
            return call.reject(GitHubError::InvalidInput("search query cannot be empty".into()));
        }
        call
    }
}
