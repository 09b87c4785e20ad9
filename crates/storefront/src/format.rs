//! Text formatting helpers for presentation layers.

use shopfront_core::group_thousands;

/// Shorten `s` to at most `length` characters, appending "..." when cut.
///
/// ```
/// use shopfront_storefront::format::truncate;
///
/// assert_eq!(truncate("Smart Watch", 5), "Smart...");
/// assert_eq!(truncate("Desk", 10), "Desk");
/// ```
#[must_use]
pub fn truncate(s: &str, length: usize) -> String {
    match s.char_indices().nth(length) {
        Some((cut, _)) => format!("{}...", s.get(..cut).unwrap_or(s)),
        None => s.to_owned(),
    }
}

/// Format a count with comma-grouped thousands (e.g., "1,294").
#[must_use]
pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Choose the singular or plural noun for a count.
#[must_use]
pub const fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
