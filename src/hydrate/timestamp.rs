//! ISO-8601 timestamp fields

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

/// A timestamp field as received from the API.
///
/// The original string is kept verbatim. Parsing happens on demand, so a
/// malformed value never fails hydration of the enclosing record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: Option<String>,
}

impl Timestamp {
    /// Returned by [`Timestamp::epoch_millis`] when the value is absent or unparsable.
    pub const INVALID: i64 = -1;

    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    #[must_use]
    pub fn absent() -> Self {
        Self { raw: None }
    }

    /// The string exactly as it appeared in the document
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    /// Parse the raw string as ISO-8601.
    ///
    /// Accepts RFC 3339, a basic `+hhmm` offset, a local date-time (read as
    /// UTC) and a bare date (midnight UTC).
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let raw = self.raw.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Milliseconds since the Unix epoch, or [`Timestamp::INVALID`].
    ///
    /// The instant one millisecond before the epoch also maps to `-1`; use
    /// [`Timestamp::to_datetime`] to tell it apart from an invalid value.
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.to_datetime()
            .map_or(Self::INVALID, |dt| dt.timestamp_millis())
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => serializer.serialize_str(raw),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zulu_timestamp() {
        let ts = Timestamp::new("2023-01-01T00:00:00Z");
        assert_eq!(ts.epoch_millis(), 1_672_531_200_000);
    }

    #[test]
    fn parses_offset_timestamp() {
        let ts = Timestamp::new("2023-01-01T02:00:00+02:00");
        assert_eq!(ts.epoch_millis(), 1_672_531_200_000);
    }

    #[test]
    fn parses_basic_offset() {
        let ts = Timestamp::new("2023-01-01T00:00:00+0000");
        assert_eq!(ts.epoch_millis(), 1_672_531_200_000);
    }

    #[test]
    fn local_date_time_is_read_as_utc() {
        assert_eq!(Timestamp::new("2023-01-01T00:00:00").epoch_millis(), 1_672_531_200_000);
        assert_eq!(Timestamp::new("2023-01-01T00:00:00.250").epoch_millis(), 1_672_531_200_250);
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        assert_eq!(Timestamp::new("2023-01-01").epoch_millis(), 1_672_531_200_000);
    }

    #[test]
    fn millisecond_before_epoch_is_still_a_datetime() {
        let ts = Timestamp::new("1969-12-31T23:59:59.999Z");
        assert_eq!(ts.epoch_millis(), -1);
        assert!(ts.to_datetime().is_some());
    }

    #[test]
    fn garbage_yields_sentinel() {
        let ts = Timestamp::new("not-a-date");
        assert_eq!(ts.raw(), Some("not-a-date"));
        assert_eq!(ts.epoch_millis(), Timestamp::INVALID);
        assert!(ts.to_datetime().is_none());
    }

    #[test]
    fn absent_yields_sentinel() {
        assert_eq!(Timestamp::absent().epoch_millis(), -1);
        assert!(!Timestamp::default().is_present());
    }

    #[test]
    fn serializes_raw_string() {
        let value = serde_json::to_value(Timestamp::new("not-a-date")).unwrap();
        assert_eq!(value, serde_json::json!("not-a-date"));
        let value = serde_json::to_value(Timestamp::absent()).unwrap();
        assert!(value.is_null());
    }
}
