/// Placeholder for bytes that did not decode as UTF-8.
pub const PLACEHOLDER: char = '?';

/// Trim whitespace and swap decoding leftovers (U+FFFD) for [`PLACEHOLDER`].
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(char::REPLACEMENT_CHARACTER, &PLACEHOLDER.to_string())
}
