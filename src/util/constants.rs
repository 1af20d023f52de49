// logsift - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logsift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Scan defaults
// =============================================================================

/// Number of buffered matches above which the scanner flushes a chunk.
///
/// The check runs after each input file and is strictly-greater-than, so a
/// chunk can exceed this count by up to one file's worth of matches. The
/// limit bounds memory for the buffered results, not the exact chunk size.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 1_000;

/// Glob pattern a filename must match to be scanned.
pub const LOG_FILE_PATTERN: &str = "*.log";

/// Default logs directory when none is given on the command line.
pub const DEFAULT_LOGS_DIR: &str = "./logs";

/// Default output directory when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

// =============================================================================
// Output naming
// =============================================================================

/// Prefix for every result file name.
pub const OUTPUT_FILE_PREFIX: &str = "results";

/// Extension appended last to every result file name.
pub const OUTPUT_FILE_EXTENSION: &str = "log";

/// chrono format string for the run timestamp embedded in result file
/// names. Second precision keeps repeated runs from colliding.
pub const OUTPUT_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when --verbose is not given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log level used when --verbose is given. All per-run progress notices
/// (term list, chunk writes, skipped files, the no-results notice) are
/// emitted at this level.
pub const VERBOSE_LOG_LEVEL: &str = "info";
