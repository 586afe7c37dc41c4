//! Hydration error types

use thiserror::Error;

/// Errors raised while converting a JSON document into a typed record.
///
/// Absent keys are never errors; they resolve to the field's default.
#[derive(Debug, Error)]
pub enum HydrationError {
    /// An enum field held a value outside its declared symbol set
    #[error("malformed enum value {value:?} at `{field}` (expected one of: {expected})")]
    MalformedEnum {
        field: String,
        value: String,
        expected: String,
    },

    /// The response body did not have the JSON shape the record expects
    #[error("expected JSON {expected} at `{field}`, found {found}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The response text was not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for hydration
pub type HydrationResult<T> = Result<T, HydrationError>;

impl HydrationError {
    /// Prefix the failing field path with the key of the enclosing document.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::MalformedEnum {
                field,
                value,
                expected,
            } => Self::MalformedEnum {
                field: join_path(parent, &field),
                value,
                expected,
            },
            Self::UnexpectedShape {
                field,
                expected,
                found,
            } => Self::UnexpectedShape {
                field: join_path(parent, &field),
                expected,
                found,
            },
            other => other,
        }
    }

    /// Path of the field that failed, if the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedEnum { field, .. } | Self::UnexpectedShape { field, .. } => Some(field),
            Self::Json(_) => None,
        }
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if field.is_empty() || field.starts_with('[') {
        format!("{parent}{field}")
    } else {
        format!("{parent}.{field}")
    }
}

/// Name of a JSON value's type, used in shape errors.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
