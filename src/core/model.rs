// logsift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across the pipeline.

use chrono::NaiveDateTime;
use std::path::PathBuf;

// =============================================================================
// Search specification
// =============================================================================

/// The term-selection policy for a run.
///
/// Built once from user input at startup and never mutated.
#[derive(Debug, Clone)]
pub struct SearchSpec {
    /// Literal substrings to search for, in the order given by the user.
    pub terms: Vec<String>,

    /// When true, a line must contain every term ("inclusive" / match-all).
    /// When false, any one term is enough (match-any).
    pub inclusive: bool,
}

impl SearchSpec {
    pub fn new(terms: Vec<String>, inclusive: bool) -> Self {
        Self { terms, inclusive }
    }
}

// =============================================================================
// Matched line
// =============================================================================

/// A single line that satisfied the search spec.
///
/// `raw` keeps the line's original terminator so result files reproduce
/// the input unchanged.
#[derive(Debug, Clone)]
pub struct MatchedLine {
    /// Raw line text, trailing newline included (when the source had one).
    pub raw: String,

    /// Source file the line came from. Diagnostics only — ordering never
    /// looks at it.
    pub source: PathBuf,

    /// Timestamp extracted from the line, if any, fixed when the line
    /// enters the result buffer. Absence is a valid, permanent state:
    /// such lines compare as "no preference" against every other line.
    pub timestamp: Option<NaiveDateTime>,
}

// =============================================================================
// Scan summary
// =============================================================================

/// Summary statistics for a completed scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Files opened and streamed to the end (or abandoned mid-read).
    pub files_scanned: usize,

    /// Candidate files that could not be opened and were skipped.
    pub files_skipped: usize,

    /// Total lines read across all files.
    pub lines_read: u64,

    /// Lines that matched the search spec.
    pub lines_matched: usize,

    /// Result files written, in the order they were produced.
    pub chunks_written: Vec<PathBuf>,

    /// Human-readable notices for non-fatal problems (skipped files,
    /// abandoned reads, an unreadable logs directory).
    pub warnings: Vec<String>,

    /// Wall-clock duration of the run.
    pub duration: std::time::Duration,
}
