//! Tests for per-day merging and ordering.

use slot_engine::merge::{merge, sort_intervals, sorted};
use slot_engine::TimeInterval;

/// Helper to create a TimeInterval from hour/minute ranges on a day in February 2025.
fn slot(day: u32, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeInterval {
    let start = format!("2025-02-{:02}T{:02}:{:02}:00", day, start_hour, start_min);
    let end = format!("2025-02-{:02}T{:02}:{:02}:00", day, end_hour, end_min);
    TimeInterval::from_raw(&[start, end]).unwrap()
}

#[test]
fn touching_slots_merge() {
    // Scenario A: 10:00-10:30 + 10:30-11:00 → 10:00-11:00
    let merged = merge(&[slot(3, 10, 0, 10, 30), slot(3, 10, 30, 11, 0)]);
    assert_eq!(merged, vec![slot(3, 10, 0, 11, 0)]);
}

#[test]
fn slots_with_a_gap_stay_separate() {
    // Scenario B: 10:00-10:30 and 11:00-11:30
    let merged = merge(&[slot(3, 11, 0, 11, 30), slot(3, 10, 0, 10, 30)]);
    assert_eq!(merged, vec![slot(3, 10, 0, 10, 30), slot(3, 11, 0, 11, 30)]);
}

#[test]
fn overlapping_slots_merge_to_the_later_end() {
    let merged = merge(&[slot(3, 9, 0, 10, 30), slot(3, 10, 0, 11, 0)]);
    assert_eq!(merged, vec![slot(3, 9, 0, 11, 0)]);
}

#[test]
fn contained_slot_does_not_shrink_the_accumulator() {
    let merged = merge(&[
        slot(3, 9, 0, 12, 0),
        slot(3, 10, 0, 10, 30),
        slot(3, 11, 0, 11, 30),
    ]);
    assert_eq!(merged, vec![slot(3, 9, 0, 12, 0)]);
}

#[test]
fn cascading_overlaps_collapse_into_one() {
    let merged = merge(&[
        slot(3, 9, 0, 10, 30),
        slot(3, 10, 0, 11, 30),
        slot(3, 11, 0, 12, 0),
        slot(3, 12, 0, 12, 30),
    ]);
    assert_eq!(merged, vec![slot(3, 9, 0, 12, 30)]);
}

#[test]
fn duplicates_collapse() {
    let merged = merge(&[slot(3, 10, 0, 11, 0), slot(3, 10, 0, 11, 0)]);
    assert_eq!(merged, vec![slot(3, 10, 0, 11, 0)]);
}

#[test]
fn merge_never_crosses_midnight() {
    // 23:00-23:59 on the 3rd and 00:00-01:00 on the 4th are different days.
    let merged = merge(&[slot(4, 0, 0, 1, 0), slot(3, 23, 0, 23, 59)]);
    assert_eq!(merged, vec![slot(3, 23, 0, 23, 59), slot(4, 0, 0, 1, 0)]);
}

#[test]
fn output_is_globally_chronological_across_days() {
    let merged = merge(&[
        slot(5, 9, 0, 10, 0),
        slot(3, 14, 0, 15, 0),
        slot(4, 9, 0, 10, 0),
        slot(3, 9, 0, 10, 0),
    ]);
    assert_eq!(
        merged,
        vec![
            slot(3, 9, 0, 10, 0),
            slot(3, 14, 0, 15, 0),
            slot(4, 9, 0, 10, 0),
            slot(5, 9, 0, 10, 0),
        ]
    );
}

#[test]
fn ill_formed_inputs_are_dropped_by_merge() {
    let crossing = TimeInterval::from_raw(&["2025-02-05T10:00:00", "2025-02-06T10:00:00"]).unwrap();
    let backwards = slot(3, 11, 0, 10, 0);
    let merged = merge(&[crossing, backwards, slot(3, 9, 0, 9, 30)]);
    assert_eq!(merged, vec![slot(3, 9, 0, 9, 30)]);
}

#[test]
fn empty_input_merges_to_empty() {
    assert!(merge(&[]).is_empty());
}

#[test]
fn merging_twice_is_a_no_op() {
    let once = merge(&[
        slot(3, 10, 0, 10, 30),
        slot(3, 10, 30, 11, 0),
        slot(3, 13, 0, 14, 0),
        slot(4, 9, 0, 9, 30),
    ]);
    assert_eq!(merge(&once), once);
}

#[test]
fn sort_breaks_start_ties_by_end() {
    let mut list = vec![slot(3, 10, 0, 12, 0), slot(3, 10, 0, 11, 0), slot(3, 9, 0, 9, 30)];
    sort_intervals(&mut list);
    assert_eq!(
        list,
        vec![slot(3, 9, 0, 9, 30), slot(3, 10, 0, 11, 0), slot(3, 10, 0, 12, 0)]
    );
}

#[test]
fn sorted_returns_a_copy() {
    let input = vec![slot(4, 9, 0, 10, 0), slot(3, 9, 0, 10, 0)];
    let out = sorted(&input);
    assert_eq!(out[0], slot(3, 9, 0, 10, 0));
    assert_eq!(input[0], slot(4, 9, 0, 10, 0));
}
