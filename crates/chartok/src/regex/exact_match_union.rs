//! Exact Match Union Patterns

use regex::Regex;

use crate::errors::{CTResult, ChartokError};

/// Create a union pattern of exact matches.
///
/// Alternatives are escaped and kept in order; empty alternatives are dropped.
///
/// ## Arguments
/// * `alts` - A slice of string-like alternatives to union.
///
/// ## Returns
/// The union pattern, or `None` if there are no non-empty alternatives.
pub fn exact_match_union_pattern<S: AsRef<str>>(alts: &[S]) -> Option<String> {
    let parts = alts
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>();

    if parts.is_empty() {
        return None;
    }
    Some(format!("({})", parts.join("|")))
}

/// Compile a union regex of exact matches.
///
/// Matching is leftmost-first: at a given position, earlier alternatives win.
///
/// ## Arguments
/// * `alts` - A slice of string-like alternatives to union.
///
/// ## Returns
/// The compiled regex, or `None` if there are no non-empty alternatives.
pub fn exact_match_union_regex<S: AsRef<str>>(alts: &[S]) -> CTResult<Option<Regex>> {
    exact_match_union_pattern(alts)
        .map(|pattern| {
            Regex::new(&pattern).map_err(|e| ChartokError::InvalidOptions(e.to_string()))
        })
        .transpose()
}
