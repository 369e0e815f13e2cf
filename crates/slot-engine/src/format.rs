//! Human-readable rendering of candidate slots and the copy/export text block.
//!
//! - Same-day slot: `2/3(Mon) 10:00-11:00`
//! - Cross-date slot (only seen before merging): `2/5(Wed) 10:00 ~ 2/6(Thu) 10:00`
//! - Unparsable entry: its raw strings joined by a space

use chrono::{Datelike, NaiveDateTime};

use crate::constraint::Locale;
use crate::interval::TimeInterval;

fn date_label(ts: &NaiveDateTime, locale: Locale) -> String {
    format!(
        "{}/{}({})",
        ts.month(),
        ts.day(),
        locale.weekday_label(ts.weekday())
    )
}

/// Render one interval.
pub fn format_interval(interval: &TimeInterval, locale: Locale) -> String {
    let (start, end) = (&interval.start, &interval.end);
    if interval.is_same_day() {
        format!(
            "{} {}-{}",
            date_label(start, locale),
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    } else {
        format!(
            "{} {} ~ {} {}",
            date_label(start, locale),
            start.format("%H:%M"),
            date_label(end, locale),
            end.format("%H:%M")
        )
    }
}

/// Render a raw entry, falling back to its verbatim text if it does not parse.
pub fn format_raw<S: AsRef<str>>(raw: &[S], locale: Locale) -> String {
    match TimeInterval::from_raw(raw) {
        Some(interval) => format_interval(&interval, locale),
        None => raw.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" "),
    }
}

/// Render a list as newline-separated lines. An empty list yields `""`.
pub fn export_text(intervals: &[TimeInterval], locale: Locale) -> String {
    intervals
        .iter()
        .map(|iv| format_interval(iv, locale))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render raw entries line by line with per-entry fallback.
pub fn export_raw<S: AsRef<str>>(raw: &[Vec<S>], locale: Locale) -> String {
    raw.iter()
        .map(|entry| format_raw(entry, locale))
        .collect::<Vec<_>>()
        .join("\n")
}
