//! Tolerant JSON-to-record hydration
//!
//! Converts possibly partial GitHub API documents into typed records:
//! absent keys take defaults, nested objects hydrate recursively, arrays keep
//! their order and enum fields must match their symbol table exactly.

pub mod document;
pub mod error;
pub mod symbol;
pub mod timestamp;

use serde_json::Value;

pub use document::{Document, Primitive};
pub use error::{HydrationError, HydrationResult};
pub use symbol::Symbol;
pub use timestamp::Timestamp;

pub(crate) use error::json_kind;
pub(crate) use symbol::symbols;

/// A record that can be built from a JSON document.
pub trait Hydrate: Sized {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self>;

    /// Hydrate from a parsed JSON value, which must be an object.
    fn from_value(value: &Value) -> HydrationResult<Self> {
        let doc = Document::from_value(value).ok_or_else(|| HydrationError::UnexpectedShape {
            field: String::new(),
            expected: "object",
            found: json_kind(value),
        })?;
        Self::hydrate(&doc)
    }

    /// Parse `text` as JSON and hydrate it.
    fn from_json(text: &str) -> HydrationResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

/// Hydrate a top-level JSON array into records, preserving order.
pub fn hydrate_list<T: Hydrate>(value: &Value) -> HydrationResult<Vec<T>> {
    let items = value
        .as_array()
        .ok_or_else(|| HydrationError::UnexpectedShape {
            field: String::new(),
            expected: "array",
            found: json_kind(value),
        })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let doc = Document::from_value(item).unwrap_or_default();
            T::hydrate(&doc).map_err(|e| e.within(&format!("[{i}]")))
        })
        .collect()
}
