// logsift - core/sort.rs
//
// Chronological ordering of matched lines.
//
// A line without an extractable timestamp compares as "no preference"
// against every other line, so the comparator is deliberately not a total
// order. The stable sort keeps the original relative order among all
// equal-comparing entries; there is no secondary tie-break, so two lines
// from different files with identical printed timestamps stay in input
// order.

use crate::core::model::MatchedLine;
use std::cmp::Ordering;

/// Stable sort of `lines` by extracted timestamp, ascending.
pub fn sort_chronological(lines: &mut [MatchedLine]) {
    lines.sort_by(compare);
}

fn compare(a: &MatchedLine, b: &MatchedLine) -> Ordering {
    match (a.timestamp, b.timestamp) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        _ => Ordering::Equal,
    }
}
