//! GitHub API error types

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::github::http::{HttpError, HttpResponse};
use crate::hydrate::HydrationError;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// Non-2xx response not covered by a more specific variant
    #[error("GitHub API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication required or failed (401)
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// Rate limit exceeded (403/429 with an exhausted quota)
    #[error("Rate limit exceeded ({status}): {message}")]
    RateLimitExceeded {
        status: u16,
        message: String,
        reset_at: Option<DateTime<Utc>>,
    },

    /// Response body did not hydrate into the expected record
    #[error("Hydration failed: {0}")]
    Hydration(#[from] HydrationError),

    /// Response body or request body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

/// Coarse classification of a [`GitHubError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Http,
    NotFound,
    AuthRequired,
    RateLimited,
    Hydration,
    Json,
    InvalidInput,
    ClientSetup,
}

impl GitHubError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Http { .. } => ErrorKind::Http,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AuthRequired(_) => ErrorKind::AuthRequired,
            Self::RateLimitExceeded { .. } => ErrorKind::RateLimited,
            Self::Hydration(_) => ErrorKind::Hydration,
            Self::Json(_) => ErrorKind::Json,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::ClientSetup(_) => ErrorKind::ClientSetup,
        }
    }

    /// HTTP status of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::RateLimitExceeded { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::AuthRequired(_) => Some(401),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.kind() == ErrorKind::RateLimited
    }

    /// Classify a non-2xx response.
    ///
    /// The message comes from the body's `message` field, or `fallback` when
    /// the body carries none.
    pub(crate) fn from_response(response: &HttpResponse, fallback: &str) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|body| body.get("message")?.as_str().map(str::to_string))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        let quota_exhausted = response.header("x-ratelimit-remaining") == Some("0");
        match response.status {
            404 => Self::NotFound(message),
            401 => Self::AuthRequired(message),
            429 => Self::rate_limited(response, message),
            403 if quota_exhausted => Self::rate_limited(response, message),
            status => Self::Http { status, message },
        }
    }

    fn rate_limited(response: &HttpResponse, message: String) -> Self {
        let reset_at = response
            .header("x-ratelimit-reset")
            .and_then(|reset| reset.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        Self::RateLimitExceeded {
            status: response.status,
            message,
            reset_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "GitHub request failed";

    #[test]
    fn not_found_uses_body_message() {
        let response = HttpResponse::json(404, &json!({"message": "Not Found"}));
        let err = GitHubError::from_response(&response, FALLBACK);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Resource not found: Not Found");
    }

    #[test]
    fn empty_body_falls_back_to_configured_message() {
        let err = GitHubError::from_response(&HttpResponse::empty(502), FALLBACK);
        match err {
            GitHubError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, FALLBACK);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn forbidden_with_exhausted_quota_is_rate_limited() {
        let response = HttpResponse::json(403, &json!({"message": "API rate limit exceeded"}))
            .with_header("X-RateLimit-Remaining", "0")
            .with_header("X-RateLimit-Reset", "1691591363");
        let err = GitHubError::from_response(&response, FALLBACK);
        assert!(err.is_rate_limited());
        match err {
            GitHubError::RateLimitExceeded { reset_at, .. } => {
                assert_eq!(reset_at.map(|t| t.timestamp()), Some(1_691_591_363));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn forbidden_with_quota_left_is_plain_http() {
        let response = HttpResponse::json(403, &json!({"message": "Resource not accessible"}))
            .with_header("X-RateLimit-Remaining", "4999");
        let err = GitHubError::from_response(&response, FALLBACK);
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn unauthorized_and_secondary_limit() {
        let err = GitHubError::from_response(&HttpResponse::empty(401), FALLBACK);
        assert_eq!(err.kind(), ErrorKind::AuthRequired);
        let err = GitHubError::from_response(&HttpResponse::empty(429), FALLBACK);
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn hydration_errors_convert() {
        let err: GitHubError = HydrationError::MalformedEnum {
            field: "status".into(),
            value: "bogus".into(),
            expected: "queued".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Hydration);
        assert_eq!(err.status(), None);
    }
}
