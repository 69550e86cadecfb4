/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw configuration value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - A `#` or `//` starts a comment only when whitespace precedes it, so
///   `#RRGGBB` colors, URL schemes, and URL fragments (`apps.json#v2`) are kept.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let cut = s.char_indices().find_map(|(i, c)| {
        let marker = c == '#' || s[i..].starts_with("//");
        let after_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
        (marker && after_space).then_some(i)
    });
    cut.map_or(s, |i| &s[..i]).trim()
}

/// What: Split a `key = value` config line into a normalized key and a comment-free value.
///
/// Inputs:
/// - `line`: One raw line of the config file.
///
/// Output:
/// - `Some((key, value))` for assignment lines; `None` for blanks, comments, and junk.
///
/// Details:
/// - Keys are lowercased with `.`, `-`, and spaces mapped to `_`.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}
