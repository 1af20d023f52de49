// logsift - tests/e2e_scan.rs
//
// End-to-end tests for the full scan pipeline.
//
// These tests exercise the real filesystem, real walkdir enumeration,
// real chrono timestamp parsing, and real chunk files on disk — no mocks,
// no stubs. Each test builds a throwaway logs directory, runs a complete
// scan, and inspects the files the run produced.

use logsift::core::scanner::{LogScanner, ScanConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}

fn scan(logs: &Path, out: &Path, terms: &[&str], inclusive: bool) -> Vec<PathBuf> {
    let config = ScanConfig::new(
        logs.to_path_buf(),
        out.to_path_buf(),
        owned(terms),
        inclusive,
    );
    LogScanner::new(config)
        .run()
        .expect("scan should succeed")
        .chunks_written
}

/// All result files in `out`, sorted by name.
fn output_files(out: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(out)
        .map(|rd| rd.filter_map(|e| e.ok().map(|e| e.path())).collect())
        .unwrap_or_default();
    files.sort();
    files
}

fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

// =============================================================================
// Matching and sorting
// =============================================================================

/// Matched lines from both header styles come out in chronological order
/// even when the input order is reversed; the single chunk carries the
/// un-suffixed name.
#[test]
fn e2e_sorts_across_files_and_header_styles() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // Later instant first, split across two files.
    fs::write(
        logs.path().join("new-style.log"),
        "01-02-2020 @ 03:04:05 needle later entry\n",
    )
    .unwrap();
    fs::write(
        logs.path().join("old-style.log"),
        "2020-01-01T00:00:00 needle earlier entry\nno needle here\n",
    )
    .unwrap();

    let chunks = scan(logs.path(), out.path(), &["needle"], false);
    assert_eq!(chunks.len(), 1);

    let name = chunks[0].file_name().unwrap().to_str().unwrap();
    assert!(
        name.starts_with("results_needle_") && name.ends_with(".log"),
        "unexpected name: {name}"
    );
    assert!(
        !name.trim_end_matches(".log").ends_with(".0"),
        "sole chunk must be un-suffixed: {name}"
    );

    let content = fs::read_to_string(&chunks[0]).unwrap();
    assert_eq!(
        content,
        "2020-01-01T00:00:00 needle earlier entry\n01-02-2020 @ 03:04:05 needle later entry\n"
    );
}

/// Lines with no parsable timestamp keep their relative input order.
#[test]
fn e2e_missing_timestamps_are_stable() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        logs.path().join("app.log"),
        "needle first plain line\nneedle second plain line\nneedle third plain line\n",
    )
    .unwrap();

    let chunks = scan(logs.path(), out.path(), &["needle"], false);
    let content = fs::read_to_string(&chunks[0]).unwrap();
    assert_eq!(
        content,
        "needle first plain line\nneedle second plain line\nneedle third plain line\n"
    );
}

/// Inclusive mode keeps only lines containing every term; any-mode keeps
/// lines containing at least one.
#[test]
fn e2e_inclusive_vs_any_mode() {
    let logs = TempDir::new().unwrap();
    fs::write(
        logs.path().join("mixed.log"),
        "only alpha here\nonly beta here\nalpha and beta together\nneither one\n",
    )
    .unwrap();

    let out_any = TempDir::new().unwrap();
    let chunks = scan(logs.path(), out_any.path(), &["alpha", "beta"], false);
    assert_eq!(line_count(&chunks[0]), 3);

    let out_all = TempDir::new().unwrap();
    let chunks = scan(logs.path(), out_all.path(), &["alpha", "beta"], true);
    assert_eq!(line_count(&chunks[0]), 1);
    assert_eq!(
        fs::read_to_string(&chunks[0]).unwrap(),
        "alpha and beta together\n"
    );
}

// =============================================================================
// Chunking
// =============================================================================

/// 2500 matching lines against the default threshold of 1000 produce
/// exactly 3 chunks. The flush check runs after each file's contribution
/// (never mid-file) and is strictly greater-than, so with 25 files of 100
/// matches each the buffer first exceeds 1000 after file 11: the chunks
/// carry 1100, 1100, and 300 lines.
#[test]
fn e2e_chunking_2500_lines_default_threshold() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    for i in 0..25 {
        fs::write(
            logs.path().join(format!("part-{i:02}.log")),
            "needle entry\n".repeat(100),
        )
        .unwrap();
    }

    let chunks = scan(logs.path(), out.path(), &["needle"], false);
    assert_eq!(chunks.len(), 3, "chunks: {chunks:?}");

    let names: Vec<&str> = chunks
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert!(names[0].ends_with(".0.log"), "got: {}", names[0]);
    assert!(names[1].ends_with(".1.log"), "got: {}", names[1]);
    assert!(names[2].ends_with(".2.log"), "got: {}", names[2]);

    assert_eq!(line_count(&chunks[0]), 1100);
    assert_eq!(line_count(&chunks[1]), 1100);
    assert_eq!(line_count(&chunks[2]), 300);

    // Nothing but the three chunks in the output directory.
    assert_eq!(output_files(out.path()).len(), 3);
}

// =============================================================================
// Naming
// =============================================================================

/// The base name is built from the terms sanitized to [a-z0-9-] plus a
/// second-precision run stamp.
#[test]
fn e2e_output_name_is_sanitized_and_stamped() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("a.log"), "Foo Bar! seen\n").unwrap();

    let chunks = scan(logs.path(), out.path(), &["Foo Bar!", "baz"], false);
    let name = chunks[0].file_name().unwrap().to_str().unwrap();

    // results_foobarbaz_YYYY-MM-DD_HH-MM-SS.log
    assert!(name.starts_with("results_foobarbaz_"), "got: {name}");
    assert!(name.ends_with(".log"), "got: {name}");
    let stamp = name
        .strip_prefix("results_foobarbaz_")
        .unwrap()
        .strip_suffix(".log")
        .unwrap();
    assert_eq!(stamp.len(), "2024-01-15_14-30-22".len(), "stamp: {stamp}");
    assert!(
        stamp
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '_'),
        "stamp: {stamp}"
    );
}

// =============================================================================
// Terminal states and tolerances
// =============================================================================

/// A directory whose files contain none of the terms produces zero output
/// files and a non-error completion.
#[test]
fn e2e_empty_match_writes_nothing() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("a.log"), "quiet day\nnothing happened\n").unwrap();
    fs::write(logs.path().join("b.log"), "still quiet\n").unwrap();

    let config = ScanConfig::new(
        logs.path().to_path_buf(),
        out.path().to_path_buf(),
        owned(&["needle"]),
        false,
    );
    let summary = LogScanner::new(config).run().expect("empty is not an error");
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.lines_matched, 0);
    assert!(summary.chunks_written.is_empty());
    assert!(output_files(out.path()).is_empty());
}

/// Two runs over unchanged input produce output sets with identical
/// content (the filenames differ by run stamp when the seconds tick over,
/// so each run gets its own output directory here).
#[test]
fn e2e_rerun_produces_identical_content() {
    let logs = TempDir::new().unwrap();
    fs::write(
        logs.path().join("app.log"),
        "2024-01-02T03:04:05 needle b\nneedle plain\n01-01-2024 @ 00:00:00 needle a\n",
    )
    .unwrap();

    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();
    let chunks1 = scan(logs.path(), out1.path(), &["needle"], false);
    let chunks2 = scan(logs.path(), out2.path(), &["needle"], false);

    let content1: String = chunks1
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    let content2: String = chunks2
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert_eq!(content1, content2);
}

/// Original line terminators (including CRLF and a missing final newline)
/// survive the round trip to the result file unchanged.
#[test]
fn e2e_line_terminators_preserved() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        logs.path().join("crlf.log"),
        b"needle windows line\r\nneedle no trailing newline",
    )
    .unwrap();

    let chunks = scan(logs.path(), out.path(), &["needle"], false);
    let content = fs::read(&chunks[0]).unwrap();
    assert_eq!(
        content,
        b"needle windows line\r\nneedle no trailing newline"
    );
}

/// An unopenable candidate (dangling symlink matching *.log) is skipped;
/// the rest of the scan completes normally.
#[cfg(unix)]
#[test]
fn e2e_unreadable_candidate_skipped() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("good.log"), "needle survives\n").unwrap();
    std::os::unix::fs::symlink("/nonexistent/elsewhere", logs.path().join("gone.log")).unwrap();

    let config = ScanConfig::new(
        logs.path().to_path_buf(),
        out.path().to_path_buf(),
        owned(&["needle"]),
        false,
    );
    let summary = LogScanner::new(config).run().expect("skip is not fatal");
    assert_eq!(summary.files_skipped, 1);
    assert_eq!(summary.lines_matched, 1);
    assert_eq!(summary.chunks_written.len(), 1);
}

/// An unwritable output destination is a fatal error naming the path.
#[test]
fn e2e_unwritable_output_is_fatal() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("a.log"), "needle\n").unwrap();

    // Block the output "directory" with a regular file.
    let blocked = out.path().join("blocked");
    fs::write(&blocked, "file, not dir").unwrap();

    let config = ScanConfig::new(
        logs.path().to_path_buf(),
        blocked.clone(),
        owned(&["needle"]),
        false,
    );
    let err = LogScanner::new(config).run().expect_err("must fail");
    assert!(
        err.to_string().contains("blocked"),
        "message should name the failing path: {err}"
    );
}
