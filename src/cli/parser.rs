use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// CLI application to normalize timeclock exports and flag attendance anomalies
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ingest timeclock CSV exports: normalize punches, match the roster, flag anomalies",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-site setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration for inconsistent schedule or alias entries"
        )]
        check: bool,
    },

    /// Detect the format (modern or legacy) of a timeclock export
    Detect {
        /// CSV export to inspect
        input: String,
    },

    /// Ingest a timeclock export against the employee roster
    Ingest {
        /// CSV export to ingest
        input: String,

        #[arg(long, value_name = "FILE", help = "Roster file (CSV or JSON)")]
        roster: String,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Write the entries to FILE"
        )]
        output: Option<String>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(
            long = "no-sort",
            help = "Keep source row order instead of sorting by (date, clock-in)"
        )]
        no_sort: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Correct one entry of a JSON report and validate it again
    Edit {
        /// JSON report written by `ingest --format json`
        report: String,

        #[arg(long, help = "Id of the entry to edit")]
        id: String,

        #[arg(long, help = "Corrected date (YYYY-MM-DD or any importable form)")]
        date: Option<String>,

        #[arg(long = "in", help = "Corrected clock-in (HH:MM or h:mm AM/PM)")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Corrected clock-out (HH:MM or h:mm AM/PM)")]
        clock_out: Option<String>,
    },
}
