// logsift - util/logging.rs
//
// Structured logging with a runtime-selectable verbose mode.
//
// Activation:
//   - Environment variable: RUST_LOG=info (or debug/trace)
//   - CLI flag: --verbose (sets the info level)
//
// Output: stderr. The verbose progress channel (term list, chunk write
// notices, skipped files, the no-results notice) is carried entirely at
// the info level, so it is silent unless requested.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `verbose` is true when the user passed --verbose on the CLI.
///
/// Priority: RUST_LOG env var > CLI --verbose flag > default "warn".
pub fn init(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes highest priority (already set)
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new(super::constants::VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
