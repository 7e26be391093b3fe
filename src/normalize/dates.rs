//! Timestamp coercion for `createdAt` / `updatedAt` fields.

use super::node::Node;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Keys whose string values are converted to timestamps.
pub const DATE_KEYS: &[&str] = &["createdAt", "updatedAt"];

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Recursively convert string date fields into [`Node::Timestamp`].
///
/// Only string values under a key in [`DATE_KEYS`] are touched, at any depth
/// and inside arrays. Values that are already timestamps stay as they are, so
/// applying this twice gives the same result as applying it once. Strings that
/// do not parse are left in place for the output validator to reject.
pub fn coerce_dates(node: Node) -> Node {
    match node {
        Node::Array(items) => Node::Array(items.into_iter().map(coerce_dates).collect()),
        Node::Object(map) => Node::Object(
            map.into_iter()
                .map(|(key, value)| {
                    let value = match value {
                        Node::String(text) if DATE_KEYS.contains(&key.as_str()) => {
                            match parse_timestamp(&text) {
                                Some(ts) => Node::Timestamp(ts),
                                None => Node::String(text),
                            }
                        }
                        other => coerce_dates(other),
                    };
                    (key, value)
                })
                .collect(),
        ),
        other => other,
    }
}

/// Parse ISO-8601 text into a UTC timestamp.
///
/// Accepts RFC 3339 with any offset, offset-less date-times and bare dates;
/// the last two are read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}
