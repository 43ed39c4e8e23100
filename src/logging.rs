//! Diagnostic logging.
//!
//! Logs go to stderr so stdout stays clean for the summary, `--dry-run`
//! output and `--json` reports. `RUST_LOG` takes precedence over `-v`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn by default, then info, then debug.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dlvgen={}", level_for(verbose))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
