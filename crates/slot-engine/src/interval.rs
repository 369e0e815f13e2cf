//! Candidate interval model and the service's wire shape.
//!
//! The availability service returns candidates as 2-element arrays of naive
//! local timestamps (`["2025-02-03T10:30:00", "2025-02-03T11:00:00"]`). This
//! module parses them into [`TimeInterval`] values and reads whole candidate
//! documents leniently: a bad entry never fails the batch.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, SlotError};

/// Output format for timestamps, matching what the service sends.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Seconds-less variant emitted by browser `datetime-local` inputs.
const TIMESTAMP_FORMAT_SHORT: &str = "%Y-%m-%dT%H:%M";

/// An unvalidated candidate entry as received from the service.
pub type RawInterval = Vec<String>;

/// A parsed candidate slot with naive local start and end timestamps.
///
/// Construction does not validate ordering or same-day placement; those are
/// the filter's rules (see [`crate::filter::check`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parse a raw `[start, end]` entry. Returns `None` for wrong arity or an
    /// unparsable timestamp.
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Option<Self> {
        match raw {
            [start, end] => Some(Self {
                start: parse_timestamp(start.as_ref())?,
                end: parse_timestamp(end.as_ref())?,
            }),
            _ => None,
        }
    }

    /// Calendar date of the start timestamp; the merge groups on this.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// True when both endpoints fall on the same calendar date.
    pub fn is_same_day(&self) -> bool {
        self.start.date() == self.end.date()
    }

    /// Start time of day, truncated to the minute.
    pub fn start_minute(&self) -> NaiveTime {
        truncate_to_minute(self.start.time())
    }

    /// End time of day, truncated to the minute.
    pub fn end_minute(&self) -> NaiveTime {
        truncate_to_minute(self.end.time())
    }

    /// Same day and not ending before it starts (minute granularity).
    pub fn is_well_formed(&self) -> bool {
        self.is_same_day() && self.end_minute() >= self.start_minute()
    }

    /// The `[start, end]` string pair in the service's format.
    pub fn to_pair(&self) -> [String; 2] {
        [
            self.start.format(TIMESTAMP_FORMAT).to_string(),
            self.end.format(TIMESTAMP_FORMAT).to_string(),
        ]
    }

    /// The value the appointment endpoint expects for a chosen slot:
    /// both timestamps joined by `", "`.
    pub fn candidate_value(&self) -> String {
        self.to_pair().join(", ")
    }
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let [start, end] = self.to_pair();
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&start)?;
        tuple.serialize_element(&end)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        TimeInterval::from_raw(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid interval: {:?}", raw))
        })
    }
}

/// Parse a naive local timestamp in `YYYY-MM-DDTHH:MM:SS` (or `YYYY-MM-DDTHH:MM`) form.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT_SHORT))
        .ok()
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    // hour/minute come from a valid NaiveTime, so this never falls back.
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Convert intervals into the `[[start, end], ...]` output shape.
pub fn to_pairs(intervals: &[TimeInterval]) -> Vec<[String; 2]> {
    intervals.iter().map(TimeInterval::to_pair).collect()
}

/// Read a candidates document.
///
/// Accepts a bare JSON array of entries or the availability service's response
/// object, whose list sits under `comon_availability` (the service's spelling)
/// or `common_availability`. Entries are converted leniently: strings are kept,
/// other JSON values are kept as their JSON text so they fail to parse later
/// and show up verbatim in fallback formatting, and a non-array entry becomes a
/// one-element (wrong-arity) entry.
///
/// # Errors
/// Returns `SlotError::Json` if the document is not JSON and
/// `SlotError::MissingCandidates` if it has no recognizable list.
pub fn candidates_from_json(json: &str) -> Result<Vec<RawInterval>> {
    let doc: Value = serde_json::from_str(json)?;

    let entries = match doc {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map
            .remove("comon_availability")
            .or_else(|| map.remove("common_availability"))
        {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) => Vec::new(),
            _ => return Err(SlotError::MissingCandidates),
        },
        _ => return Err(SlotError::MissingCandidates),
    };

    Ok(entries.into_iter().map(raw_from_value).collect())
}

fn raw_from_value(value: Value) -> RawInterval {
    match value {
        Value::Array(items) => items.into_iter().map(value_text).collect(),
        other => vec![value_text(other)],
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_timestamp_forms() {
        let full = parse_timestamp("2025-02-03T10:30:00").unwrap();
        let short = parse_timestamp("2025-02-03T10:30").unwrap();
        assert_eq!(full, short);
    }

    #[test]
    fn rejects_offsets_and_garbage() {
        assert!(parse_timestamp("2025-02-03T10:30:00Z").is_none());
        assert!(parse_timestamp("2025-02-30T10:30:00").is_none());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn minute_truncation_drops_seconds() {
        let iv = TimeInterval::from_raw(&["2025-02-03T10:30:45", "2025-02-03T10:30:05"]).unwrap();
        assert_eq!(iv.start_minute(), iv.end_minute());
        assert!(iv.is_well_formed());
    }

    #[test]
    fn non_string_members_keep_their_json_text() {
        let raw = candidates_from_json(r#"[[1, "2025-02-03T10:00:00"], {"a": 1}]"#).unwrap();
        assert_eq!(raw[0], vec!["1".to_string(), "2025-02-03T10:00:00".to_string()]);
        assert_eq!(raw[1], vec![r#"{"a":1}"#.to_string()]);
    }

    #[test]
    fn null_service_list_is_empty() {
        let raw = candidates_from_json(r#"{"comon_availability": null}"#).unwrap();
        assert!(raw.is_empty());
    }
}
