use crate::utils::time::ClockTime;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse weekday classification used to pick a shift list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayType {
    #[serde(rename = "Mon-Fri")]
    MonFri,
    #[serde(rename = "Sat-Sun")]
    SatSun,
}

impl DayType {
    pub fn from_date(date: &NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::SatSun,
            _ => DayType::MonFri,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::MonFri => "Mon-Fri",
            DayType::SatSun => "Sat-Sun",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One expected shift, `{in, out}` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    #[serde(rename = "in")]
    pub start: ClockTime,
    #[serde(rename = "out")]
    pub end: ClockTime,
}

impl ShiftWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
}

/// Maps a location substring (matched case-insensitively) to a schedule key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAlias {
    pub contains: String,
    pub key: String,
}

/// location key → day-type → ordered shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftSchedule(BTreeMap<String, BTreeMap<DayType, Vec<ShiftWindow>>>);

impl ShiftSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shifts(mut self, key: &str, day_type: DayType, shifts: Vec<ShiftWindow>) -> Self {
        self.insert(key, day_type, shifts);
        self
    }

    pub fn insert(&mut self, key: &str, day_type: DayType, shifts: Vec<ShiftWindow>) {
        self.0
            .entry(key.to_string())
            .or_default()
            .insert(day_type, shifts);
    }

    pub fn shifts(&self, key: &str, day_type: DayType) -> Option<&[ShiftWindow]> {
        self.0
            .get(key)
            .and_then(|by_day| by_day.get(&day_type))
            .map(Vec::as_slice)
    }

    /// End boundary of the last shift defined for the combination.
    pub fn last_out(&self, key: &str, day_type: DayType) -> Option<ClockTime> {
        self.shifts(key, day_type)
            .and_then(|shifts| shifts.last())
            .map(|s| s.end)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
