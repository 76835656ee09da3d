use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file
/// (skipped in test mode) and report where it lives.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::init_all(custom.as_deref(), cli.test)?;

    println!("⚙️  Initializing rTimeclock…");
    println!("📄 Config file : {}", path.display());

    success("rTimeclock initialization completed!");
    Ok(())
}
