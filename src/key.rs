//! Translation key path utilities.

/// Separator used between path segments when none is configured.
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Returns the final segment of a key path.
///
/// Used as the display text when no locale resolves the path.
///
/// # Examples
/// ```
/// use intl_helper::key::last_segment;
///
/// assert_eq!(last_segment("validation.someEntity.required", "."), "required");
/// assert_eq!(last_segment("plain", "."), "plain");
/// ```
#[must_use]
pub fn last_segment<'a>(path: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return path;
    }
    path.rsplit(separator).next().unwrap_or(path)
}

/// Joins key parts with the separator, keeping empty parts as empty segments.
#[must_use]
pub fn join_key(parts: &[&str], separator: &str) -> String {
    parts.join(separator)
}

/// Normalizes a locale identifier to the form used as the first level of a message tree.
///
/// Only case is folded; `-` and `_` are kept as-is.
#[must_use]
pub fn locale_key(locale: &str) -> String {
    locale.to_lowercase()
}
