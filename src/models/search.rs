//! Search result envelope

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult};

/// Envelope shared by every `/search/*` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub total_count: i64,
    /// Set when the search timed out and `items` is partial.
    pub incomplete_results: bool,
    pub items: Vec<T>,
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            incomplete_results: false,
            items: Vec::new(),
        }
    }
}

impl<T: Hydrate> Hydrate for SearchResults<T> {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            incomplete_results: doc.boolean("incomplete_results"),
            items: doc.records("items")?,
        })
    }
}
