//! Anomaly detection and correction.
//!
//! `validate` is the single place where an entry's status, flags and
//! correction message are decided. Ingestion and manual edits both go
//! through it, so an edited entry never keeps stale flags.

use crate::config::CorrectionSettings;
use crate::core::calculator::duration::calculate_duration_in_minutes;
use crate::models::schedule::DayType;
use crate::models::time_entry::{AnomalyFlag, EntryDraft, EntryStatus, TimeEntry};
use crate::utils::formatting::mins2readable;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Turn a candidate into a final entry. Never fails: malformed input ends up
/// `Flagged` with an explanatory message.
pub fn validate(id: Uuid, draft: EntryDraft, settings: &CorrectionSettings) -> TimeEntry {
    let mut entry = TimeEntry {
        id,
        employee_id: draft.employee_id,
        date: draft.date,
        clock_in: draft.clock_in,
        clock_out: draft.clock_out,
        job_title: draft.job_title,
        location: draft.location,
        duration_minutes: calculate_duration_in_minutes(draft.clock_in, draft.clock_out),
        status: EntryStatus::Pending,
        flags: BTreeSet::new(),
        correction_message: String::new(),
        suggested_correction_in: None,
        suggested_correction_out: None,
    };

    detect(&mut entry, settings);

    entry.status = if entry.flags.is_empty() {
        EntryStatus::Approved
    } else {
        EntryStatus::Flagged
    };

    if entry.status == EntryStatus::Flagged {
        tracing::debug!(
            id = %entry.id,
            employee = %entry.employee_id,
            flags = %entry.flags_joined(","),
            "entry flagged"
        );
    }

    entry
}

fn detect(entry: &mut TimeEntry, settings: &CorrectionSettings) {
    // Structural checks short-circuit: nothing below makes sense without them.
    let Some(date) = entry.date else {
        raise(entry, AnomalyFlag::InvalidDate, "Missing or invalid date.".into());
        return;
    };

    let (clock_in, clock_out) = match (entry.clock_in, entry.clock_out) {
        (Some(i), Some(o)) => (i, o),
        (None, None) => {
            raise(
                entry,
                AnomalyFlag::MissingTime,
                "Missing clock-in and clock-out times.".into(),
            );
            return;
        }
        (None, Some(_)) => {
            raise(entry, AnomalyFlag::MissingTime, "Missing clock-in time.".into());
            return;
        }
        (Some(_), None) => {
            raise(entry, AnomalyFlag::MissingTime, "Missing clock-out time.".into());
            return;
        }
    };

    if clock_out != settings.auto_clock_out || entry.duration_minutes <= 0 {
        return;
    }

    let day_type = DayType::from_date(&date);
    let key = settings.location_key(entry.location.as_deref());
    let scheduled = settings.shift_schedule.last_out(key, day_type);
    let suggestion = scheduled.unwrap_or(settings.fallback_clock_out);
    let original = entry.duration_minutes;

    entry.suggested_correction_out = Some(suggestion);
    entry.duration_minutes = calculate_duration_in_minutes(Some(clock_in), Some(suggestion));

    let basis = match scheduled {
        Some(_) => format!("last {day_type} shift for '{key}'"),
        None => format!("no {day_type} shifts for '{key}', default end of day"),
    };
    let message = format!(
        "Auto clock-out at {} detected. Suggested clock-out: {} ({}). Original duration: {}.",
        settings.auto_clock_out,
        suggestion,
        basis,
        mins2readable(original, false, false)
    );
    raise(entry, AnomalyFlag::AutoClockOut, message);
}

fn raise(entry: &mut TimeEntry, flag: AnomalyFlag, message: String) {
    entry.flags.insert(flag);
    if entry.correction_message.is_empty() {
        entry.correction_message = message;
    } else {
        entry.correction_message.push(' ');
        entry.correction_message.push_str(&message);
    }
}
