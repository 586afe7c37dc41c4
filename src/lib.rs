//! `gh_records` - typed GitHub REST records
//!
//! GitHub responses are hydrated into plain Rust records that tolerate
//! missing fields: absent keys take defaults, nested objects are filled in
//! recursively and unknown enum values are reported instead of guessed.
//! Endpoint managers borrowed from a [`GitHubClient`] build [`ApiCall`]s that
//! decode to those records, raw JSON or text.

// Module declarations
pub mod github;
pub mod hydrate;
pub mod models;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncStream;

// Re-export hydration types
pub use hydrate::{Document, Hydrate, HydrationError, Symbol, Timestamp, hydrate_list};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error and call types
pub use github::{ApiCall, ErrorKind, Formatted, GitHubError, GitHubResult, ResponseFormat};
pub use github::{HttpTransport, Links, ListOptions, Page};

// Re-export search types used at the crate root
pub use github::{SearchOrder, UserSearchSort};
