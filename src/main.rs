//! rTimeclock main entrypoint.

use rtimeclock::run;
use rtimeclock::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays usable in pipelines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
