//! URL-friendly identifiers derived from country display names.
//!
//! The REST Countries API exposes no canonical country id, so routes identify
//! a country by a slug derived from its display name ("San Marino" ->
//! "san-marino"). [`from_slug`] turns a route segment back into a search term;
//! it is lossy and meant for lookups, not display.

/// Convert a display name into a URL-friendly slug.
///
/// Every maximal run of whitespace becomes a single hyphen, anything that is
/// not an ASCII letter, digit, or hyphen is stripped (not transliterated),
/// and the result is lower-cased.
///
/// Idempotent: `to_slug(to_slug(s)) == to_slug(s)`.
pub fn to_slug(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Best-effort inverse of [`to_slug`]: every hyphen becomes a space and the
/// result is lower-cased. Original capitalization and stripped characters are
/// unrecoverable.
pub fn from_slug(input: &str) -> String {
    input.replace('-', " ").to_lowercase()
}
