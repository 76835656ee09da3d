use crate::config::CorrectionSettings;
use crate::core::anomaly::validate;
use crate::core::ingest::BatchReport;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{EntryEdit, TimeEntry};
use uuid::Uuid;

/// Merge corrected fields into an entry and validate the result from
/// scratch. The id and the non-temporal fields are kept.
pub fn revalidate(
    entry: &TimeEntry,
    edit: &EntryEdit,
    settings: &CorrectionSettings,
) -> TimeEntry {
    let mut draft = entry.draft();

    if let Some(date) = edit.date {
        draft.date = Some(date);
    }
    if let Some(clock_in) = edit.clock_in {
        draft.clock_in = Some(clock_in);
    }
    if let Some(clock_out) = edit.clock_out {
        draft.clock_out = Some(clock_out);
    }

    validate(entry.id, draft, settings)
}

/// Apply an edit to the entry with `id` inside a stored report.
pub fn edit_entry<'r>(
    report: &'r mut BatchReport,
    id: Uuid,
    edit: &EntryEdit,
    settings: &CorrectionSettings,
) -> AppResult<&'r TimeEntry> {
    let slot = report
        .entries
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

    let previous = slot.status;
    *slot = revalidate(slot, edit, settings);
    tracing::info!(%id, from = %previous, to = %slot.status, "entry re-validated");

    Ok(slot)
}
