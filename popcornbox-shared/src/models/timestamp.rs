//! Timestamps stamped on persisted records.
//!
//! Written as `2024-05-01T12:30:00.000Z` (millisecond precision, `Z` suffix).
//! Read back from any RFC 3339 string or from epoch milliseconds; anything
//! else is simply not a timestamp, never a reason to reject the record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Format `value` the way it is persisted.
#[must_use]
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The JSON value written for `value`.
#[must_use]
pub fn to_value(value: &DateTime<Utc>) -> Value {
    Value::String(format(value))
}

/// Interpret a stored value as a timestamp.
#[must_use]
pub fn parse(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        Value::Number(millis) => millis.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
