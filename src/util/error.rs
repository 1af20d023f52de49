// logsift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error carries the failing path so user-facing messages can name
// exactly what could not be written.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while persisting a chunk of results.
///
/// Any of these is fatal for the run: an unwritable output destination is
/// propagated to the caller, never silently swallowed. Unreadable *input*
/// files are not errors at all — the scanner skips them and records a
/// warning (see `core::scanner`).
#[derive(Debug)]
pub enum WriteError {
    /// The output directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The result file could not be opened for writing.
    Create { path: PathBuf, source: io::Error },

    /// Writing or flushing the result file failed partway. The handle is
    /// still released before this error reaches the caller.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "Cannot create output directory '{}': {source}",
                path.display()
            ),
            Self::Create { path, source } => write!(
                f,
                "Cannot open '{}' for writing: {source}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "Failed writing '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::Create { source, .. }
            | Self::Write { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for fallible logsift operations.
pub type Result<T> = std::result::Result<T, WriteError>;
