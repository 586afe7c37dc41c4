//! Rate limit records

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult};

/// A single rate limit bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitResource {
    /// Maximum requests allowed per window.
    pub limit: i64,
    /// Requests used in the current window.
    pub used: i64,
    /// Remaining requests in the current window.
    pub remaining: i64,
    /// Unix seconds when the window resets.
    pub reset: i64,
}

impl RateLimitResource {
    /// Reset time, if `reset` is a valid Unix timestamp.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}

impl Hydrate for RateLimitResource {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            limit: doc.long("limit", 0),
            used: doc.long("used", 0),
            remaining: doc.long("remaining", 0),
            reset: doc.long("reset", 0),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitResources {
    pub core: RateLimitResource,
    pub search: RateLimitResource,
    pub graphql: Option<RateLimitResource>,
    pub code_search: Option<RateLimitResource>,
    pub integration_manifest: Option<RateLimitResource>,
    pub actions_runner_registration: Option<RateLimitResource>,
}

impl Hydrate for RateLimitResources {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            core: doc.nested("core")?,
            search: doc.nested("search")?,
            graphql: doc.optional_nested("graphql")?,
            code_search: doc.optional_nested("code_search")?,
            integration_manifest: doc.optional_nested("integration_manifest")?,
            actions_runner_registration: doc.optional_nested("actions_runner_registration")?,
        })
    }
}

/// Response of `/rate_limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    pub resources: RateLimitResources,
    /// Same as `resources.core`; kept by the API for compatibility.
    pub rate: RateLimitResource,
}

impl Hydrate for RateLimit {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            resources: doc.nested("resources")?,
            rate: doc.nested("rate")?,
        })
    }
}
