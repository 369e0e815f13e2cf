//! Per-day merging of overlapping or touching candidate slots.
//!
//! Intervals are grouped by the calendar date of their start, sorted within
//! each day by (start, end), and swept once with an accumulator. A slot whose
//! start is at or before the accumulator's end extends it; anything later
//! closes the accumulator and opens a new one. Merging never crosses midnight.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::trace;

use crate::interval::TimeInterval;

/// Merge overlapping or adjacent intervals within each calendar date.
///
/// Returns a list sorted by (start, end) in which no two intervals on the
/// same date overlap or touch. The result is independent of input order and
/// merging it again returns it unchanged.
///
/// Inputs that span two dates or end before they start are dropped; callers
/// normally pass the output of [`crate::filter::filter_raw`], which already
/// excludes them.
pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut by_date: BTreeMap<NaiveDate, Vec<TimeInterval>> = BTreeMap::new();
    for iv in intervals {
        if !iv.is_well_formed() {
            trace!(start = %iv.start, end = %iv.end, "skipping ill-formed interval in merge");
            continue;
        }
        by_date.entry(iv.date()).or_default().push(*iv);
    }

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(intervals.len());
    for (_, mut day) in by_date {
        sort_intervals(&mut day);
        merged.extend(merge_sorted_day(&day));
    }

    // Global (start, end) order across dates.
    sort_intervals(&mut merged);
    merged
}

/// Sweep one day's intervals, already sorted by (start, end).
fn merge_sorted_day(day: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut out = Vec::new();
    let mut iter = day.iter();
    let Some(first) = iter.next() else {
        return out;
    };

    let mut current = *first;
    for iv in iter {
        if iv.start <= current.end {
            // Overlapping or touching: extend the accumulator.
            current.end = current.end.max(iv.end);
        } else {
            out.push(current);
            current = *iv;
        }
    }
    out.push(current);
    out
}

/// Sort in place by start, then end. Equal elements are identical values, so
/// the result is fully deterministic.
pub fn sort_intervals(intervals: &mut [TimeInterval]) {
    intervals.sort_by_key(|iv| (iv.start, iv.end));
}

/// Return a sorted copy, leaving the input untouched.
pub fn sorted(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut out = intervals.to_vec();
    sort_intervals(&mut out);
    out
}
