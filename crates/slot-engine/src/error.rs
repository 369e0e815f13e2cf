//! Error types for slot-engine operations.
//!
//! Filtering, merging and formatting never fail: malformed candidates are
//! dropped or rendered verbatim. Errors only come from building constraints,
//! reading a candidates document, and driving the selection state machine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid time window: {min} is later than {max}")]
    InvalidWindow { min: String, max: String },

    #[error("Unknown weekday label: '{0}'")]
    UnknownWeekday(String),

    #[error("Invalid candidates JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Candidates document has no 'comon_availability' or 'common_availability' list")]
    MissingCandidates,

    #[error("No candidate selected")]
    NothingSelected,

    #[error("Selection already submitted")]
    AlreadySubmitted,

    #[error("Candidate is not in the offered list: {0}")]
    UnknownCandidate(String),

    #[error("No participants to notify")]
    NoParticipants,
}

pub type Result<T> = std::result::Result<T, SlotError>;
