//! Tolerant field accessors over a JSON object.
//!
//! Every accessor takes a key and resolves absence (missing key or JSON
//! `null`) to a default instead of failing. Only enum coercion can fail.

use serde_json::{Map, Value};

use crate::hydrate::error::HydrationResult;
use crate::hydrate::symbol::Symbol;
use crate::hydrate::timestamp::Timestamp;
use crate::hydrate::Hydrate;

/// A borrowed view of a JSON object being hydrated.
///
/// An empty document stands in for missing sub-objects, so nested records
/// can always be constructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Document<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Document<'a> {
    #[must_use]
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map: Some(map) }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { map: None }
    }

    /// View `value` as a document if it is a JSON object.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_none_or(Map::is_empty)
    }

    /// Whether `key` is present with a non-null value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.map.into_iter().flat_map(|map| map.keys().map(String::as_str))
    }

    /// Raw value for `key`; `null` counts as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|value| !value.is_null())
    }

    // ------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------

    #[must_use]
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    #[must_use]
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.string(key).unwrap_or_else(|| default.to_string())
    }

    #[must_use]
    pub fn long(&self, key: &str, default: i64) -> i64 {
        self.optional_long(key).unwrap_or(default)
    }

    /// For numeric fields the API declares nullable.
    #[must_use]
    pub fn optional_long(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(coerce_i64)
    }

    #[must_use]
    pub fn int(&self, key: &str, default: i32) -> i32 {
        self.optional_long(key)
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(default)
    }

    #[must_use]
    pub fn double(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    #[must_use]
    pub fn boolean(&self, key: &str) -> bool {
        self.boolean_or(key, false)
    }

    #[must_use]
    pub fn boolean_or(&self, key: &str, default: bool) -> bool {
        self.optional_boolean(key).unwrap_or(default)
    }

    #[must_use]
    pub fn optional_boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Timestamp fields keep the raw string; non-string values count as absent.
    #[must_use]
    pub fn timestamp(&self, key: &str) -> Timestamp {
        self.get(key)
            .and_then(Value::as_str)
            .map_or_else(Timestamp::absent, Timestamp::new)
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    /// Sub-document for `key`, or an empty document.
    #[must_use]
    pub fn document(&self, key: &str) -> Document<'a> {
        self.get(key)
            .and_then(Document::from_value)
            .unwrap_or_default()
    }

    /// Raw array elements for `key`, or an empty sequence.
    #[must_use]
    pub fn array(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Enums
    // ------------------------------------------------------------------

    /// Absent or `null` gives `None`; any present value must match a symbol.
    pub fn symbol<E: Symbol>(&self, key: &str) -> HydrationResult<Option<E>> {
        self.get(key).map(|value| coerce_symbol(key, value)).transpose()
    }

    /// Like [`Document::symbol`] with an explicit default for absence.
    pub fn symbol_or<E: Symbol>(&self, key: &str, default: E) -> HydrationResult<E> {
        Ok(self.symbol(key)?.unwrap_or(default))
    }

    pub fn symbols<E: Symbol>(&self, key: &str) -> HydrationResult<Vec<E>> {
        self.array(key)
            .iter()
            .enumerate()
            .map(|(i, value)| coerce_symbol(&format!("{key}[{i}]"), value))
            .collect()
    }

    // ------------------------------------------------------------------
    // Nested records
    // ------------------------------------------------------------------

    /// Hydrate the sub-document for `key`, using an empty document when the
    /// key is absent or does not hold an object.
    pub fn nested<T: Hydrate>(&self, key: &str) -> HydrationResult<T> {
        T::hydrate(&self.document(key)).map_err(|e| e.within(key))
    }

    /// Nullable variant of [`Document::nested`]: `None` when the key is
    /// absent or `null`, `Some` for any object, including `{}`.
    pub fn optional_nested<T: Hydrate>(&self, key: &str) -> HydrationResult<Option<T>> {
        match self.get(key).and_then(Document::from_value) {
            Some(doc) => T::hydrate(&doc).map(Some).map_err(|e| e.within(key)),
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // Sequences
    // ------------------------------------------------------------------

    /// Primitive elements in source order. Elements of the wrong type become
    /// `P::default()` so the length always matches the source array.
    #[must_use]
    pub fn list<P: Primitive>(&self, key: &str) -> Vec<P> {
        self.array(key)
            .iter()
            .map(|value| P::from_value(value).unwrap_or_default())
            .collect()
    }

    /// Record elements in source order. Non-object elements hydrate from an
    /// empty document.
    pub fn records<T: Hydrate>(&self, key: &str) -> HydrationResult<Vec<T>> {
        self.array(key)
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let doc = Document::from_value(value).unwrap_or_default();
                T::hydrate(&doc).map_err(|e| e.within(&format!("{key}[{i}]")))
            })
            .collect()
    }
}

/// Element types accepted by [`Document::list`].
pub trait Primitive: Sized + Default {
    fn from_value(value: &Value) -> Option<Self>;
}

impl Primitive for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Primitive for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        coerce_i64(value)
    }
}

impl Primitive for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        coerce_i64(value).and_then(|n| i32::try_from(n).ok())
    }
}

impl Primitive for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Primitive for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

/// Accept any JSON number that fits an `i64`; floats are truncated.
fn coerce_i64(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn coerce_symbol<E: Symbol>(field: &str, value: &Value) -> HydrationResult<E> {
    match value {
        Value::String(raw) => E::coerce(field, raw),
        other => E::coerce(field, &other.to_string()),
    }
}
