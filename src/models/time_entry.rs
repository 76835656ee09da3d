use crate::utils::date::format_date;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    Pending,
    Approved,
    Flagged,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "Pending",
            EntryStatus::Approved => "Approved",
            EntryStatus::Flagged => "Flagged",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyFlag {
    InvalidDate,
    MissingTime,
    AutoClockOut,
}

impl AnomalyFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyFlag::InvalidDate => "INVALID_DATE",
            AnomalyFlag::MissingTime => "MISSING_TIME",
            AnomalyFlag::AutoClockOut => "AUTO_CLOCK_OUT",
        }
    }
}

impl fmt::Display for AnomalyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate entry before validation: what a source row (or an edit) says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub employee_id: String,
    pub date: Option<NaiveDate>,
    pub clock_in: Option<ClockTime>,
    pub clock_out: Option<ClockTime>,
    pub job_title: Option<String>,
    pub location: Option<String>,
}

impl EntryDraft {
    /// True when none of the temporal fields carry a value.
    pub fn has_no_temporal_data(&self) -> bool {
        self.date.is_none() && self.clock_in.is_none() && self.clock_out.is_none()
    }
}

/// Corrected values supplied for an existing entry. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub date: Option<NaiveDate>,
    pub clock_in: Option<ClockTime>,
    pub clock_out: Option<ClockTime>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.clock_in.is_none() && self.clock_out.is_none()
    }
}

/// A normalized, validated attendance record.
///
/// Only built by the anomaly detector, so `status` and `flags` always agree:
/// `Approved` carries no flags and any flag means `Flagged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Uuid,
    pub employee_id: String,
    pub date: Option<NaiveDate>,
    pub clock_in: Option<ClockTime>,
    pub clock_out: Option<ClockTime>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub duration_minutes: i64,
    pub status: EntryStatus,
    pub flags: BTreeSet<AnomalyFlag>,
    pub correction_message: String,
    pub suggested_correction_in: Option<ClockTime>,
    pub suggested_correction_out: Option<ClockTime>,
}

impl TimeEntry {
    /// Source fields of this entry, ready to be validated again.
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            employee_id: self.employee_id.clone(),
            date: self.date,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            job_title: self.job_title.clone(),
            location: self.location.clone(),
        }
    }

    pub fn has_flag(&self, flag: AnomalyFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn date_str(&self) -> String {
        self.date.as_ref().map(format_date).unwrap_or_default()
    }

    pub fn job_title_or_na(&self) -> &str {
        self.job_title.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn location_or_na(&self) -> &str {
        self.location.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn flags_joined(&self, sep: &str) -> String {
        self.flags
            .iter()
            .map(AnomalyFlag::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}
