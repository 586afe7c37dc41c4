//! Page options and `Link` header parsing

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::util::{QueryPairs, push_opt};

/// GitHub's maximum `per_page`.
pub const MAX_PER_PAGE: u8 = 100;

/// `per_page` / `page` options accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Results per page (1..=100)
    pub per_page: Option<u8>,
    /// 1-based page number
    pub page: Option<u32>,
}

impl ListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Check the values against GitHub API limits.
    pub fn validate(&self) -> GitHubResult<()> {
        if let Some(p) = self.page
            && p < 1
        {
            return Err(GitHubError::InvalidInput("page must be >= 1".into()));
        }

        if let Some(pp) = self.per_page
            && !(1..=MAX_PER_PAGE).contains(&pp)
        {
            return Err(GitHubError::InvalidInput(
                "per_page must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn append_to(&self, pairs: &mut QueryPairs) {
        push_opt(pairs, "per_page", self.per_page);
        push_opt(pairs, "page", self.page);
    }
}

/// Links extracted from a `Link` response header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    pub next: Option<String>,
    pub prev: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

impl Links {
    /// Page number of the `rel="last"` link, if known.
    #[must_use]
    pub fn last_page(&self) -> Option<u32> {
        self.last.as_deref().and_then(page_from_url)
    }

    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.next.as_deref().and_then(page_from_url)
    }
}

/// Parse a GitHub `Link` header.
///
/// `<https://api.github.com/repositories/1/issues?page=2>; rel="next", <...page=5>; rel="last"`
#[must_use]
pub fn parse_link_header(link_header: &str) -> Links {
    let mut links = Links::default();

    for part in link_header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                url = Some(inner);
            } else if let Some(rel_value) = segment.strip_prefix("rel=") {
                rel = Some(rel_value.trim_matches('"'));
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            let slot = match rel {
                "next" => &mut links.next,
                "prev" => &mut links.prev,
                "first" => &mut links.first,
                "last" => &mut links.last,
                _ => continue,
            };
            *slot = Some(url.to_string());
        }
    }

    links
}

fn page_from_url(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|param| param.strip_prefix("page="))
        .and_then(|page| page.parse().ok())
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: T,
    pub links: Links,
}
