//! Batch ingestion: one uploaded table in, validated entries and per-row
//! skip diagnostics out.

use crate::config::{Config, CorrectionSettings};
use crate::core::anomaly::validate;
use crate::core::format::{TableFormat, detect_format};
use crate::core::resolver::{EmployeeResolver, Resolution};
use crate::errors::AppResult;
use crate::models::diagnostic::{SkipDiagnostic, SkipReason};
use crate::models::employee::Employee;
use crate::models::raw_row::{RawRow, RawTable};
use crate::models::time_entry::{EntryDraft, EntryStatus, TimeEntry};
use crate::utils::date::{parse_date_string, parse_legacy_date_time};
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const EMPLOYEE_COLUMNS: [&str; 3] = ["employee", "employee name", "name"];
pub const JOB_COLUMNS: [&str; 2] = ["job title", "job"];
pub const LOCATION_COLUMN: &str = "location";

/// Result of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub format: TableFormat,
    pub entries: Vec<TimeEntry>,
    pub diagnostics: Vec<SkipDiagnostic>,
}

/// Counts for the distinct outcomes an operator has to look at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub approved: usize,
    pub flagged: usize,
    pub ignored: usize,
    pub not_found: usize,
    pub incomplete: usize,
}

impl BatchReport {
    /// Stable sort by `(date, clock_in)`; entries without a date come first.
    pub fn sort_chronologically(&mut self) {
        self.entries
            .sort_by(|a, b| (a.date, a.clock_in).cmp(&(b.date, b.clock_in)));
    }

    pub fn summary(&self) -> BatchSummary {
        let mut s = BatchSummary::default();

        for e in &self.entries {
            match e.status {
                EntryStatus::Approved => s.approved += 1,
                EntryStatus::Flagged => s.flagged += 1,
                EntryStatus::Pending => {}
            }
        }

        for d in &self.diagnostics {
            match d.reason {
                SkipReason::EmployeeIgnored { .. } => s.ignored += 1,
                SkipReason::EmployeeNotFound { .. } => s.not_found += 1,
                SkipReason::IncompleteRow => s.incomplete += 1,
            }
        }

        s
    }
}

enum RowOutcome {
    Entry(Box<TimeEntry>),
    Skipped(SkipReason),
}

/// Runs tables through resolution, normalization and validation.
///
/// Roster and configuration are borrowed read-only for the whole run;
/// rows never influence each other.
pub struct Ingestor<'a> {
    resolver: EmployeeResolver<'a>,
    settings: &'a CorrectionSettings,
}

impl<'a> Ingestor<'a> {
    pub fn new(roster: &'a [Employee], cfg: &'a Config) -> Self {
        Self {
            resolver: EmployeeResolver::new(roster, &cfg.ignore_list),
            settings: &cfg.correction,
        }
    }

    /// Ingest a whole table. Only an unrecognized header set fails the
    /// batch; bad rows become diagnostics.
    pub fn ingest(&self, table: &RawTable) -> AppResult<BatchReport> {
        let format = detect_format(table.headers.iter().map(String::as_str))?;
        debug!(%format, rows = table.rows.len(), "table format detected");

        let mut entries = Vec::new();
        let mut diagnostics = Vec::new();

        for (row_index, row) in table.rows.iter().enumerate() {
            match self.process_row(row, format) {
                RowOutcome::Entry(entry) => entries.push(*entry),
                RowOutcome::Skipped(reason) => {
                    match &reason {
                        SkipReason::EmployeeIgnored { .. } => {
                            debug!(row = row_index, %reason, "row skipped")
                        }
                        _ => warn!(row = row_index, %reason, "row skipped"),
                    }
                    diagnostics.push(SkipDiagnostic { row_index, reason });
                }
            }
        }

        let report = BatchReport {
            format,
            entries,
            diagnostics,
        };

        let s = report.summary();
        info!(
            approved = s.approved,
            flagged = s.flagged,
            ignored = s.ignored,
            not_found = s.not_found,
            incomplete = s.incomplete,
            "batch ingested"
        );

        Ok(report)
    }

    fn process_row(&self, row: &RawRow, format: TableFormat) -> RowOutcome {
        let name = row.first_of(&EMPLOYEE_COLUMNS).unwrap_or_default();

        let employee = match self.resolver.resolve(name) {
            Resolution::Found(e) => e,
            Resolution::Ignored => {
                return RowOutcome::Skipped(SkipReason::EmployeeIgnored {
                    name: name.to_string(),
                });
            }
            Resolution::NotFound => {
                return RowOutcome::Skipped(SkipReason::EmployeeNotFound {
                    name: name.to_string(),
                });
            }
        };

        let draft = normalize_row(row, format, &employee.id);
        if draft.has_no_temporal_data() {
            return RowOutcome::Skipped(SkipReason::IncompleteRow);
        }

        RowOutcome::Entry(Box::new(validate(Uuid::new_v4(), draft, self.settings)))
    }
}

/// Read the temporal and descriptive fields of a row into a candidate entry.
pub fn normalize_row(row: &RawRow, format: TableFormat, employee_id: &str) -> EntryDraft {
    let (date, clock_in, clock_out) = match format {
        TableFormat::Modern => (
            row.get("date").and_then(parse_date_string),
            row.get("time in").and_then(parse_time),
            row.get("time out").and_then(parse_time),
        ),
        TableFormat::Legacy => {
            let (date, clock_in) = row
                .get("in date")
                .map(parse_legacy_date_time)
                .unwrap_or_default();
            let (_, clock_out) = row
                .get("out date")
                .map(parse_legacy_date_time)
                .unwrap_or_default();
            (date, clock_in, clock_out)
        }
    };

    EntryDraft {
        employee_id: employee_id.to_string(),
        date,
        clock_in,
        clock_out,
        job_title: row.first_of(&JOB_COLUMNS).map(str::to_string),
        location: row.get(LOCATION_COLUMN).map(str::to_string),
    }
}
