//! rTimeclock library root.
//! Exposes the ingestion engine (normalizers, format detection, roster
//! resolution, anomaly correction), its readers/writers and the CLI.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Detect { .. } => cli::commands::detect::handle(&cli.command),
        Commands::Ingest { .. } => cli::commands::ingest::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` writes the file, everything else reads it once
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(cli.config.as_deref().map(expand_tilde).as_deref())?,
    };

    // 3️⃣ hand off to the dispatcher
    dispatch(&cli, &cfg)
}
