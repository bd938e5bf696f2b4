//! Text canonicalization for answer comparison

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize a string for comparison
///
/// Uppercases, applies canonical decomposition (NFD) and drops every
/// combining mark, leaving an accent-free uppercase string.
///
/// # Examples
/// ```
/// use abc_daily::core::normalize;
///
/// assert_eq!(normalize("Orléans"), "ORLEANS");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_uppercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}
