// logsift - core/matcher.rs
//
// Decides whether a single line satisfies the term-selection policy.
// Pure logic, no I/O.

use crate::core::model::SearchSpec;

/// Returns true when `line` satisfies `spec`.
///
/// Matching is case-sensitive literal substring containment, so a term
/// embedded in a larger word still counts. Inclusive mode requires every
/// term to occur in the line; any-mode requires at least one.
///
/// An empty term list follows the quantifier semantics of those
/// definitions: "all of nothing" holds vacuously (every line matches),
/// "any of nothing" never holds (no line matches).
pub fn matches(line: &str, spec: &SearchSpec) -> bool {
    if spec.inclusive {
        spec.terms.iter().all(|term| line.contains(term.as_str()))
    } else {
        spec.terms.iter().any(|term| line.contains(term.as_str()))
    }
}
