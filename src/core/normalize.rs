//! Accent-insensitive text normalization
//!
//! All word comparisons in the game go through [`normalize`]: the secret and
//! every guess are reduced to the same canonical form so that "écrémé" and
//! "ecreme" compare equal.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text into the canonical comparison form
///
/// Decomposes to NFD and drops combining marks (accent removal, independent
/// of script), lowercases, and keeps only alphabetic characters. Digits,
/// punctuation, whitespace and hyphens are dropped, not replaced.
///
/// The function is pure, total and idempotent.
///
/// # Examples
/// ```
/// use motus::core::normalize;
///
/// assert_eq!(normalize("écrémé"), "ecreme");
/// assert_eq!(normalize("Porte-clés 2!"), "portecles");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}
