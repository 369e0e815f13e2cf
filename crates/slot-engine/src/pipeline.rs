//! The full filter → merge → sort pipeline and its result report.

use serde::Serialize;
use tracing::debug;

use crate::constraint::{Constraint, Locale};
use crate::filter::filter_raw;
use crate::format::export_text;
use crate::interval::{to_pairs, TimeInterval};
use crate::merge::{merge, sorted};

/// Result of running the pipeline over one batch of candidates.
///
/// An empty `slots` list is a normal outcome: nothing satisfied the constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Merged slots, sorted by (start, end).
    pub slots: Vec<TimeInterval>,
    /// Number of entries received.
    pub input_count: usize,
    /// Entries dropped as malformed or failing the constraint.
    pub rejected: usize,
    /// Valid entries absorbed into another slot by merging.
    pub merged_away: usize,
}

impl Availability {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The `[[start, end], ...]` shape consumed by the display list.
    pub fn to_pairs(&self) -> Vec<[String; 2]> {
        to_pairs(&self.slots)
    }

    /// Newline-joined text for the copy button.
    pub fn export_text(&self, locale: Locale) -> String {
        export_text(&self.slots, locale)
    }
}

/// Filter raw candidates against `constraint`, merge per day, and sort.
pub fn process<S: AsRef<str>>(raw: &[Vec<S>], constraint: &Constraint) -> Availability {
    let valid = filter_raw(raw, constraint);
    let slots = merge(&valid);

    let availability = Availability {
        input_count: raw.len(),
        rejected: raw.len() - valid.len(),
        merged_away: valid.len() - slots.len(),
        slots,
    };
    debug!(
        input = availability.input_count,
        rejected = availability.rejected,
        merged_away = availability.merged_away,
        slots = availability.slots.len(),
        "availability computed"
    );
    availability
}

/// Filtered candidates in chronological order, without merging.
///
/// This is the list the scheduling screen shows before a form is generated.
pub fn filter_and_sort<S: AsRef<str>>(raw: &[Vec<S>], constraint: &Constraint) -> Vec<TimeInterval> {
    let valid = filter_raw(raw, constraint);
    debug!(input = raw.len(), kept = valid.len(), "candidates filtered");
    sorted(&valid)
}
