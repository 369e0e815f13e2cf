//! Engine configuration as stored in a JSON settings file.
//!
//! ```json
//! { "minTime": "09:00", "maxTime": "18:00", "weekdays": ["Mon", "Tue"], "locale": "ja" }
//! ```
//!
//! Every field is optional; missing fields take the scheduling form's defaults.

use serde::{Deserialize, Serialize};

use crate::constraint::{Constraint, Locale, TimeWindow, WeekdaySet};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub min_time: String,
    pub max_time: String,
    /// Weekday labels in either vocabulary; empty allows every day.
    pub weekdays: Vec<String>,
    pub locale: Locale,
    /// When false, results are filtered and sorted but not merged.
    pub merge: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_time: "09:00".to_string(),
            max_time: "18:00".to_string(),
            weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            locale: Locale::En,
            merge: true,
        }
    }
}

impl EngineConfig {
    /// Parse a settings document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the textual fields into a [`Constraint`].
    ///
    /// # Errors
    /// Propagates `InvalidTime`, `InvalidWindow` and `UnknownWeekday`.
    pub fn constraint(&self) -> Result<Constraint> {
        Ok(Constraint::new(
            TimeWindow::parse(&self.min_time, &self.max_time)?,
            WeekdaySet::from_labels(&self.weekdays)?,
        ))
    }
}
