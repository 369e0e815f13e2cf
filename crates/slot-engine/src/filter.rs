//! Validity filter -- decide per candidate whether it is well-formed and
//! satisfies the active constraint.
//!
//! A candidate is rejected when it fails to parse, spans two calendar dates,
//! ends before it starts, falls outside the time-of-day window, or starts on a
//! weekday the constraint does not allow. Rejections are dropped silently;
//! they surface only as `trace` events.

use std::fmt;

use chrono::Datelike;
use serde::Serialize;
use tracing::trace;

use crate::constraint::Constraint;
use crate::interval::TimeInterval;

/// Why a candidate was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Wrong arity or an unparsable timestamp.
    Malformed,
    /// Start and end fall on different calendar dates.
    CrossesDate,
    /// End time of day is earlier than start time of day.
    EndsBeforeStart,
    /// Starts before the window opens or ends after it closes.
    OutsideWindow,
    /// Start date's weekday is not in the allow-set.
    WeekdayNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rejection::Malformed => "malformed",
            Rejection::CrossesDate => "crosses date",
            Rejection::EndsBeforeStart => "ends before start",
            Rejection::OutsideWindow => "outside time window",
            Rejection::WeekdayNotAllowed => "weekday not allowed",
        };
        f.write_str(text)
    }
}

/// Check a parsed interval against every rule, in order.
pub fn check(interval: &TimeInterval, constraint: &Constraint) -> Result<(), Rejection> {
    if !interval.is_same_day() {
        return Err(Rejection::CrossesDate);
    }
    let (start, end) = (interval.start_minute(), interval.end_minute());
    if end < start {
        return Err(Rejection::EndsBeforeStart);
    }
    if !constraint.window.admits(start, end) {
        return Err(Rejection::OutsideWindow);
    }
    if !constraint.allows_weekday(interval.date().weekday()) {
        return Err(Rejection::WeekdayNotAllowed);
    }
    Ok(())
}

/// Parse and check a raw `[start, end]` entry.
pub fn check_raw<S: AsRef<str>>(raw: &[S], constraint: &Constraint) -> Result<TimeInterval, Rejection> {
    let interval = TimeInterval::from_raw(raw).ok_or(Rejection::Malformed)?;
    check(&interval, constraint)?;
    Ok(interval)
}

/// Boolean form of [`check`].
pub fn passes(interval: &TimeInterval, constraint: &Constraint) -> bool {
    check(interval, constraint).is_ok()
}

/// Keep the parsed intervals that pass, preserving input order.
pub fn filter_intervals(intervals: &[TimeInterval], constraint: &Constraint) -> Vec<TimeInterval> {
    intervals
        .iter()
        .filter(|iv| match check(iv, constraint) {
            Ok(()) => true,
            Err(reason) => {
                trace!(start = %iv.start, end = %iv.end, %reason, "candidate rejected");
                false
            }
        })
        .copied()
        .collect()
}

/// Parse raw entries and keep those that pass, preserving input order.
///
/// Malformed entries are dropped, never reported as errors.
pub fn filter_raw<S: AsRef<str>>(raw: &[Vec<S>], constraint: &Constraint) -> Vec<TimeInterval> {
    raw.iter()
        .filter_map(|entry| match check_raw(entry, constraint) {
            Ok(iv) => Some(iv),
            Err(reason) => {
                let entry: Vec<&str> = entry.iter().map(AsRef::as_ref).collect();
                trace!(?entry, %reason, "candidate rejected");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: &str, end: &str) -> TimeInterval {
        TimeInterval::from_raw(&[start, end]).unwrap()
    }

    #[test]
    fn date_rule_is_checked_before_ordering() {
        // Crosses midnight backwards in time-of-day; the date rule wins.
        let c = Constraint::default();
        assert_eq!(
            check(&iv("2025-02-05T23:00:00", "2025-02-06T01:00:00"), &c),
            Err(Rejection::CrossesDate)
        );
    }

    #[test]
    fn zero_length_interval_passes() {
        let c = Constraint::default();
        assert!(passes(&iv("2025-02-03T10:00:00", "2025-02-03T10:00:00"), &c));
    }
}
