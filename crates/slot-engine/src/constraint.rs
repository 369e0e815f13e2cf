//! Query constraints: the time-of-day window and the weekday allow-set.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Weekday labels in Sunday-first order, indexed by `Weekday::num_days_from_sunday`.
pub const WEEKDAY_LABELS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Japanese single-character labels used by the scheduling form.
pub const WEEKDAY_LABELS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Label vocabulary used when rendering weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn weekday_label(self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_sunday() as usize;
        match self {
            Locale::En => WEEKDAY_LABELS_EN[idx],
            Locale::Ja => WEEKDAY_LABELS_JA[idx],
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            other => Err(format!("unknown locale '{}' (expected en or ja)", other)),
        }
    }
}

/// Parse a weekday label from either vocabulary.
///
/// English labels are case-insensitive and may be abbreviated or full
/// (`"mon"`, `"Monday"`); Japanese labels are the single kanji (`"月"`),
/// optionally followed by `曜` or `曜日`.
pub fn parse_weekday(label: &str) -> Result<Weekday> {
    let trimmed = label.trim();
    if let Ok(day) = trimmed.parse::<Weekday>() {
        return Ok(day);
    }
    let kanji = trimmed.trim_end_matches('日').trim_end_matches('曜');
    // A bare "日" is Sunday; trimming would have eaten it.
    let kanji = if kanji.is_empty() { trimmed } else { kanji };
    WEEKDAY_LABELS_JA
        .iter()
        .position(|l| *l == kanji)
        .map(|idx| SUNDAY_FIRST[idx])
        .ok_or_else(|| SlotError::UnknownWeekday(label.to_string()))
}

/// Parse an `HH:MM` time of day.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| SlotError::InvalidTime(s.to_string()))
}

/// Inclusive time-of-day bounds: `min` applies to a slot's start, `max` to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    min: NaiveTime,
    max: NaiveTime,
}

impl TimeWindow {
    /// # Errors
    /// Returns `SlotError::InvalidWindow` when `min` is later than `max`.
    pub fn new(min: NaiveTime, max: NaiveTime) -> Result<Self> {
        if min > max {
            return Err(SlotError::InvalidWindow {
                min: min.format("%H:%M").to_string(),
                max: max.format("%H:%M").to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// Build a window from two `HH:MM` strings.
    pub fn parse(min: &str, max: &str) -> Result<Self> {
        Self::new(parse_time_of_day(min)?, parse_time_of_day(max)?)
    }

    pub fn min(&self) -> NaiveTime {
        self.min
    }

    pub fn max(&self) -> NaiveTime {
        self.max
    }

    pub fn admits(&self, start: NaiveTime, end: NaiveTime) -> bool {
        start >= self.min && end <= self.max
    }
}

impl Default for TimeWindow {
    /// The whole day, 00:00 through 23:59.
    fn default() -> Self {
        Self {
            min: NaiveTime::MIN,
            max: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// A set of weekdays stored as a 7-bit mask (bit `n` = `num_days_from_monday() == n`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Monday through Friday.
    pub const WORKDAYS: WeekdaySet = WeekdaySet(0b0001_1111);

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        SUNDAY_FIRST
            .iter()
            .cycle()
            .skip(1)
            .take(7)
            .copied()
            .filter(move |d| self.contains(*d))
    }

    /// Parse labels from either vocabulary.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = WeekdaySet::EMPTY;
        for label in labels {
            set.insert(parse_weekday(label.as_ref())?);
        }
        Ok(set)
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|d| Locale::En.weekday_label(d)))
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let labels = Vec::<String>::deserialize(deserializer)?;
        WeekdaySet::from_labels(&labels).map_err(serde::de::Error::custom)
    }
}

/// The active query conditions applied by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraint {
    pub window: TimeWindow,
    /// Empty means every weekday is allowed.
    pub weekdays: WeekdaySet,
}

impl Constraint {
    pub fn new(window: TimeWindow, weekdays: WeekdaySet) -> Self {
        Self { window, weekdays }
    }

    /// Build from the form's raw inputs: `HH:MM` bounds and weekday labels.
    pub fn parse<I, S>(min_time: &str, max_time: &str, weekdays: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            window: TimeWindow::parse(min_time, max_time)?,
            weekdays: WeekdaySet::from_labels(weekdays)?,
        })
    }

    /// The scheduling form's defaults: 09:00 to 18:00, Monday through Friday.
    pub fn business_hours() -> Self {
        let window = match (NaiveTime::from_hms_opt(9, 0, 0), NaiveTime::from_hms_opt(18, 0, 0)) {
            (Some(min), Some(max)) => TimeWindow { min, max },
            _ => TimeWindow::default(),
        };
        Self {
            window,
            weekdays: WeekdaySet::WORKDAYS,
        }
    }

    pub fn allows_weekday(&self, day: Weekday) -> bool {
        self.weekdays.is_empty() || self.weekdays.contains(day)
    }
}
