// logsift - core/writer.rs
//
// Persists sorted results to disk as sequentially numbered chunk files.
//
// Naming: results_<sanitized terms>_<run stamp>[.<chunk index>].log
// The run stamp is fixed at scanner construction so all chunks of one run
// share a base name and repeated runs do not collide.

use crate::core::model::MatchedLine;
use crate::util::constants;
use crate::util::error::{self, WriteError};
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reduce search terms to a filename-safe base: the terms are
/// concatenated, lowercased, and every character outside `[a-z0-9-]` is
/// stripped.
pub fn sanitize_terms(terms: &[String]) -> String {
    terms
        .concat()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Names the result files for one run.
#[derive(Debug, Clone)]
pub struct OutputName {
    dir: PathBuf,
    stem: String,
}

impl OutputName {
    /// Build the base name from the sanitized terms and a second-precision
    /// run stamp (taken by the caller at scanner construction time).
    pub fn new(output_dir: &Path, terms: &[String], stamp: NaiveDateTime) -> Self {
        let stem = format!(
            "{}_{}_{}",
            constants::OUTPUT_FILE_PREFIX,
            sanitize_terms(terms),
            stamp.format(constants::OUTPUT_STAMP_FORMAT),
        );
        Self {
            dir: output_dir.to_path_buf(),
            stem,
        }
    }

    /// Path for a numbered chunk: `<stem>.<index>.log`.
    pub fn chunk_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!(
            "{}.{}.{}",
            self.stem, index, constants::OUTPUT_FILE_EXTENSION
        ))
    }

    /// Path used when the whole run fits in a single chunk: `<stem>.log`.
    pub fn single_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.stem, constants::OUTPUT_FILE_EXTENSION))
    }
}

/// Write `lines` to `path`, truncating any existing file, and return the
/// number of lines written.
///
/// The parent directory is created first if missing (safe to repeat).
/// Raw text is written unchanged: original line terminators are kept and
/// no separators are added. The file handle is released on every exit
/// path — a write error partway still closes the file before the error
/// reaches the caller.
pub fn write_chunk(path: &Path, lines: &[MatchedLine]) -> error::Result<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| WriteError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writer
            .write_all(line.raw.as_bytes())
            .map_err(|e| WriteError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    writer.flush().map_err(|e| WriteError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(lines.len())
}
