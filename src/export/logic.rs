// src/export/logic.rs

use crate::core::ingest::BatchReport;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of an ingestion report.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        report: &BatchReport,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if report.entries.is_empty() {
            warning("No entries produced by this batch.");
        }

        match format {
            ExportFormat::Json => export_json(report, path),
            ExportFormat::Csv => export_csv(report, path),
        }
    }
}
