// logsift - core/scanner.rs
//
// The scan orchestrator: enumerates candidate files, streams each one
// through the matcher, accumulates matches, and hands full buffers to the
// sorter and chunked writer.
//
// Single-threaded by design. Files are processed strictly one at a time,
// so the result buffer and chunk counter are owned exclusively by the one
// in-flight scan. Unreadable input files are skipped (a tolerance for
// transient and permission problems); an unwritable output destination
// fails the run.

use crate::core::matcher;
use crate::core::model::{MatchedLine, ScanSummary, SearchSpec};
use crate::core::sort::sort_chronological;
use crate::core::timestamp;
use crate::core::writer::{write_chunk, OutputName};
use crate::util::constants;
use crate::util::error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for one scan run.
///
/// Passed by value into `LogScanner::new` — the core keeps no ambient
/// global state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory containing `*.log` files. Scanned non-recursively.
    pub logs_dir: PathBuf,

    /// Directory that receives the result files. Created on first write
    /// if missing.
    pub output_dir: PathBuf,

    /// Search terms, in the order given by the user.
    pub terms: Vec<String>,

    /// Match-all (true) vs match-any (false).
    pub inclusive: bool,

    /// Buffered-match count above which a chunk is flushed. The check
    /// runs after each file and is strictly-greater-than.
    pub flush_threshold: usize,
}

impl ScanConfig {
    /// Build a config with the default flush threshold.
    pub fn new(
        logs_dir: PathBuf,
        output_dir: PathBuf,
        terms: Vec<String>,
        inclusive: bool,
    ) -> Self {
        Self {
            logs_dir,
            output_dir,
            terms,
            inclusive,
            flush_threshold: constants::DEFAULT_FLUSH_THRESHOLD,
        }
    }
}

// =============================================================================
// Scanner
// =============================================================================

/// One scan run: owns the result buffer and the chunk counter.
pub struct LogScanner {
    spec: SearchSpec,
    logs_dir: PathBuf,
    flush_threshold: usize,
    output: OutputName,
    buffer: Vec<MatchedLine>,
    chunks_flushed: u32,
    summary: ScanSummary,
}

impl LogScanner {
    /// Create a scanner for `config`.
    ///
    /// The output base name — sanitized terms plus a second-precision run
    /// stamp — is fixed here, at construction time, so every chunk of the
    /// run shares it and repeated runs do not collide.
    pub fn new(config: ScanConfig) -> Self {
        let output = OutputName::new(
            &config.output_dir,
            &config.terms,
            chrono::Local::now().naive_local(),
        );
        Self {
            spec: SearchSpec::new(config.terms, config.inclusive),
            logs_dir: config.logs_dir,
            flush_threshold: config.flush_threshold,
            output,
            buffer: Vec::new(),
            chunks_flushed: 0,
            summary: ScanSummary::default(),
        }
    }

    /// Run the scan to completion and return summary statistics.
    ///
    /// Returns `Err` only for an unwritable output destination. A run that
    /// matches nothing writes no files and still returns `Ok` — the empty
    /// result is a valid terminal state, reported at the verbose level.
    pub fn run(mut self) -> error::Result<ScanSummary> {
        let started = Instant::now();

        tracing::info!(
            terms = ?self.spec.terms,
            inclusive = self.spec.inclusive,
            logs_dir = %self.logs_dir.display(),
            "Scan starting"
        );

        for path in self.enumerate() {
            let file = match File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    // Skipped permanently for this run; no retry.
                    let msg = format!("Skipping unreadable '{}': {e}", path.display());
                    tracing::info!("{msg}");
                    self.summary.warnings.push(msg);
                    self.summary.files_skipped += 1;
                    continue;
                }
            };
            self.scan_file(&path, file);
            self.summary.files_scanned += 1;

            if self.buffer.len() > self.flush_threshold {
                let chunk = self.output.chunk_path(self.chunks_flushed);
                self.flush(chunk)?;
            }
        }

        if !self.buffer.is_empty() {
            // The un-suffixed name is only correct when this is the very
            // first and only flush of the run; otherwise take the next
            // chunk index.
            let last = if self.chunks_flushed == 0 {
                self.output.single_path()
            } else {
                self.output.chunk_path(self.chunks_flushed)
            };
            self.flush(last)?;
        } else if self.chunks_flushed == 0 {
            tracing::info!("No results found");
        }

        self.summary.duration = started.elapsed();
        tracing::info!(
            files_scanned = self.summary.files_scanned,
            files_skipped = self.summary.files_skipped,
            lines_read = self.summary.lines_read,
            lines_matched = self.summary.lines_matched,
            chunks = self.summary.chunks_written.len(),
            elapsed_ms = self.summary.duration.as_millis() as u64,
            "Scan complete"
        );
        Ok(self.summary)
    }

    /// List `*.log` files directly inside the logs directory, sorted by
    /// path for a deterministic scan order.
    ///
    /// Directories are never candidates. A missing or unreadable logs
    /// directory yields no candidates (warned, not fatal) — the run then
    /// terminates with an empty result.
    fn enumerate(&mut self) -> Vec<PathBuf> {
        // The pattern is a compile-time constant exercised by every test
        // below, so a mistake fails tests rather than panicking at runtime.
        let pattern = glob::Pattern::new(constants::LOG_FILE_PATTERN)
            .expect("log file pattern: invalid glob");

        let mut files = Vec::new();
        let walker = walkdir::WalkDir::new(&self.logs_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(e) => {
                    let path_str = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.logs_dir.display().to_string());
                    let msg = format!("Cannot access '{path_str}': {e}");
                    tracing::info!("{msg}");
                    self.summary.warnings.push(msg);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Symlinks and other non-regular entries stay in the list; if
            // they cannot be opened the per-file skip handles them.
            let name = match entry.file_name().to_str() {
                Some(n) => n,
                None => {
                    let msg = format!(
                        "Skipping '{}': non-UTF-8 filename",
                        entry.path().display()
                    );
                    tracing::info!("{msg}");
                    self.summary.warnings.push(msg);
                    continue;
                }
            };

            if pattern.matches(name) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        tracing::debug!(candidates = files.len(), "Enumeration complete");
        files
    }

    /// Stream one file line-by-line, keeping matching lines — original
    /// terminators included — in the result buffer.
    fn scan_file(&mut self, path: &Path, file: File) {
        let mut reader = BufReader::new(file);
        let mut buf: Vec<u8> = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    // Mid-file failure: keep what already matched, abandon
                    // the rest of this file.
                    let msg = format!("Read error in '{}': {e}", path.display());
                    tracing::info!("{msg}");
                    self.summary.warnings.push(msg);
                    break;
                }
            }
            self.summary.lines_read += 1;

            // Lines are matched as text; invalid UTF-8 sequences are
            // replaced rather than rejected.
            let line = String::from_utf8_lossy(&buf).into_owned();
            if matcher::matches(&line, &self.spec) {
                let ts = timestamp::extract(&line);
                tracing::trace!(source = %path.display(), "Line matched");
                self.buffer.push(MatchedLine {
                    raw: line,
                    source: path.to_path_buf(),
                    timestamp: ts,
                });
                self.summary.lines_matched += 1;
            }
        }
    }

    /// Sort the buffer, persist it to `path`, and reset for the next
    /// chunk.
    fn flush(&mut self, path: PathBuf) -> error::Result<()> {
        sort_chronological(&mut self.buffer);
        let written = write_chunk(&path, &self.buffer)?;
        tracing::info!(path = %path.display(), lines = written, "Chunk written");
        self.summary.chunks_written.push(path);
        self.buffer.clear();
        self.chunks_flushed += 1;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
