//! # slot-engine
//!
//! Deterministic post-processing of candidate meeting slots returned by a
//! common-availability service.
//!
//! Given a raw list of `[start, end]` timestamp pairs, the engine drops
//! malformed and out-of-constraint entries, merges overlapping or touching
//! slots within each calendar day, orders the result chronologically, and
//! renders it for display or copy/export. Every step is a pure function over
//! immutable input; malformed entries degrade gracefully instead of failing
//! the batch.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{process, Constraint, Locale};
//!
//! let raw = vec![
//!     vec!["2025-02-03T10:00:00", "2025-02-03T10:30:00"],
//!     vec!["2025-02-03T10:30:00", "2025-02-03T11:00:00"],
//! ];
//! let constraint = Constraint::parse("09:00", "18:00", Vec::<&str>::new()).unwrap();
//! let result = process(&raw, &constraint);
//! assert_eq!(result.export_text(Locale::En), "2/3(Mon) 10:00-11:00");
//! ```
//!
//! ## Modules
//!
//! - [`interval`] -- `TimeInterval` model and candidate document parsing
//! - [`constraint`] -- time-of-day window, weekday set, label vocabularies
//! - [`filter`] -- validity rules and rejection reasons
//! - [`merge`] -- per-day overlap-or-touch merge and chronological sort
//! - [`format`] -- display strings and export text
//! - [`pipeline`] -- filter → merge → sort in one call
//! - [`selection`] -- invitee slot selection and confirmation payload
//! - [`config`] -- JSON settings file
//! - [`error`] -- Error types

pub mod config;
pub mod constraint;
pub mod error;
pub mod filter;
pub mod format;
pub mod interval;
pub mod merge;
pub mod pipeline;
pub mod selection;

pub use config::EngineConfig;
pub use constraint::{Constraint, Locale, TimeWindow, WeekdaySet};
pub use error::SlotError;
pub use filter::{check, filter_raw, passes, Rejection};
pub use format::{export_text, format_interval};
pub use interval::{candidates_from_json, to_pairs, RawInterval, TimeInterval};
pub use merge::merge;
pub use pipeline::{filter_and_sort, process, Availability};
pub use selection::{AppointmentRequest, Choice, Selection, SelectionState};
