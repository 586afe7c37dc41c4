//! GitHub API utilities

use std::borrow::Cow;

/// Query string pairs, in insertion order.
pub type QueryPairs = Vec<(String, String)>;

/// Percent-encode one path segment (owner, repo, branch, tag, ...).
#[inline]
#[must_use]
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Encode a slash-separated ref such as `feature/login`, keeping the slashes.
#[must_use]
pub fn ref_segments(value: &str) -> String {
    value.split('/').map(segment).collect::<Vec<_>>().join("/")
}

/// `/repos/{owner}/{repo}` with both segments encoded.
#[must_use]
pub fn repo_path(owner: &str, repo: &str) -> String {
    format!("/repos/{}/{}", segment(owner), segment(repo))
}

/// Render `pairs` as `?k=v&...`, or an empty string when there are none.
#[must_use]
pub fn encode_query(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Append `key=value` when `value` is set.
pub fn push_opt<V: ToString>(pairs: &mut QueryPairs, key: &str, value: Option<V>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

/// Append a comma-joined list when it is non-empty.
pub fn push_list(pairs: &mut QueryPairs, key: &str, values: &[String]) {
    if !values.is_empty() {
        pairs.push((key.to_string(), values.join(",")));
    }
}
