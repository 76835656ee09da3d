// src/export/model.rs

use crate::models::time_entry::TimeEntry;
use serde::Serialize;

/// Flat, string-only view of an entry for CSV output. Absent values are
/// empty cells, never a placeholder text.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub id: String,
    pub employee_id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub job_title: String,
    pub location: String,
    pub duration_minutes: i64,
    pub status: String,
    pub flags: String,
    pub correction_message: String,
    pub suggested_correction_in: String,
    pub suggested_correction_out: String,
}

fn opt_to_string<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id.to_string(),
            employee_id: e.employee_id.clone(),
            date: e.date_str(),
            clock_in: opt_to_string(&e.clock_in),
            clock_out: opt_to_string(&e.clock_out),
            job_title: opt_to_string(&e.job_title),
            location: opt_to_string(&e.location),
            duration_minutes: e.duration_minutes,
            status: e.status.to_string(),
            flags: e.flags_joined(";"),
            correction_message: e.correction_message.clone(),
            suggested_correction_in: opt_to_string(&e.suggested_correction_in),
            suggested_correction_out: opt_to_string(&e.suggested_correction_out),
        }
    }
}
