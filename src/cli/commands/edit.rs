use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::edit_entry;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, load_report};
use crate::models::time_entry::EntryEdit;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::normalize_date_input;
use crate::utils::path::existing_file;
use crate::utils::time::{ClockTime, normalize_time_input};
use chrono::NaiveDate;
use uuid::Uuid;

/// Correct an entry of a stored JSON report and write the report back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        report,
        id,
        date,
        clock_in,
        clock_out,
    } = cmd
    {
        let path = existing_file(report)?;
        let id = Uuid::parse_str(id.trim())
            .map_err(|e| AppError::Other(format!("invalid entry id '{id}': {e}")))?;

        let edit = EntryEdit {
            date: parse_date_arg(date.as_deref())?,
            clock_in: parse_time_arg(clock_in.as_deref())?,
            clock_out: parse_time_arg(clock_out.as_deref())?,
        };
        if edit.is_empty() {
            return Err(AppError::Other(
                "nothing to edit: pass --date, --in or --out".into(),
            ));
        }

        let mut report = load_report(&path)?;
        let entry = edit_entry(&mut report, id, &edit, &cfg.correction)?;

        let status_line = format!(
            "Entry {}: {}{}{}",
            entry.id,
            color_for_status(entry.status),
            entry.status,
            RESET
        );
        if entry.flags.is_empty() {
            success(status_line);
        } else {
            warning(status_line);
            println!("{}", entry.correction_message);
        }

        ExportLogic::export(&report, ExportFormat::Json, &path, true)?;
    }

    Ok(())
}

fn parse_date_arg(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(|d| normalize_date_input(d).ok_or_else(|| AppError::InvalidDate(d.into())))
        .transpose()
}

fn parse_time_arg(raw: Option<&str>) -> AppResult<Option<ClockTime>> {
    raw.map(|t| normalize_time_input(t).ok_or_else(|| AppError::InvalidTime(t.into())))
        .transpose()
}
