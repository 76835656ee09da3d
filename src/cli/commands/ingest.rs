use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::{BatchReport, Ingestor};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::import::{load_roster, read_table_file};
use crate::models::time_entry::EntryStatus;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::or_dash;
use crate::utils::mins2readable;
use crate::utils::path::{existing_file, expand_tilde};
use crate::utils::table::{Column, Table};

/// Ingest a timeclock export and optionally write the resulting entries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ingest {
        input,
        roster,
        output,
        format,
        no_sort,
        force,
    } = cmd
    {
        //
        // 1. Load inputs
        //
        let roster = load_roster(&existing_file(roster)?)?;
        let table = read_table_file(&existing_file(input)?)?;

        //
        // 2. Run the pipeline (fails only on an unrecognized header set)
        //
        let mut report = Ingestor::new(&roster, cfg).ingest(&table)?;
        if !*no_sort {
            report.sort_chronologically();
        }

        //
        // 3. Show what needs attention
        //
        print_summary(&report);
        print_flagged(&report);
        print_diagnostics(&report);

        //
        // 4. Export
        //
        if let Some(out) = output {
            ExportLogic::export(&report, *format, &expand_tilde(out), *force)?;
        }
    }

    Ok(())
}

fn print_summary(report: &BatchReport) {
    let s = report.summary();
    info(format!("Detected format: {}", report.format));
    success(format!("{} entries approved", s.approved));

    if s.flagged > 0 {
        warning(format!("{} entries flagged for review", s.flagged));
    }
    if s.ignored > 0 {
        info(format!("{} rows skipped (ignore-listed employee)", s.ignored));
    }
    if s.not_found > 0 {
        warning(format!("{} rows skipped (employee not in roster)", s.not_found));
    }
    if s.incomplete > 0 {
        warning(format!("{} rows skipped (no usable date/time)", s.incomplete));
    }
}

fn print_flagged(report: &BatchReport) {
    let flagged: Vec<_> = report
        .entries
        .iter()
        .filter(|e| e.status == EntryStatus::Flagged)
        .collect();
    if flagged.is_empty() {
        return;
    }

    header("Flagged entries");
    let mut table = Table::new(vec![
        Column::new("EMPLOYEE", 10),
        Column::new("DATE", 10),
        Column::new("IN", 5),
        Column::new("OUT", 5),
        Column::new("SUGG.OUT", 8),
        Column::new("WORKED", 7),
        Column::new("FLAGS", 16),
    ]);

    for e in &flagged {
        table.add_row(vec![
            e.employee_id.clone(),
            or_dash(e.date, "----------"),
            or_dash(e.clock_in, "--:--"),
            or_dash(e.clock_out, "--:--"),
            or_dash(e.suggested_correction_out, "--:--"),
            mins2readable(e.duration_minutes, false, true),
            e.flags_joined(","),
        ]);
    }
    print!("{}", table.render());

    for e in flagged {
        println!(
            "{}{}{} {}",
            color_for_status(e.status),
            e.id,
            RESET,
            e.correction_message
        );
    }
}

fn print_diagnostics(report: &BatchReport) {
    if report.diagnostics.is_empty() {
        return;
    }

    header("Skipped rows");
    let mut table = Table::new(vec![
        Column::new("ROW", 5),
        Column::new("KIND", 16),
        Column::new("DETAIL", 30),
    ]);
    for d in &report.diagnostics {
        // 1-based, header line not counted
        table.add_row(vec![
            (d.row_index + 1).to_string(),
            d.reason.kind().to_string(),
            d.reason.to_string(),
        ]);
    }
    print!("{}", table.render());
}
