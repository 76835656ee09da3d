// src/export/json_csv.rs

use crate::core::ingest::BatchReport;
use crate::errors::AppResult;
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Full report (entries + diagnostics), pretty-printed. This is also the
/// document `edit` reads back.
pub(crate) fn export_json(report: &BatchReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Entries only, one row each (header included thanks to serde).
pub(crate) fn export_csv(report: &BatchReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for entry in &report.entries {
        wtr.serialize(EntryExport::from(entry))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

pub fn load_report(path: &Path) -> AppResult<BatchReport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
