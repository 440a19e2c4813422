//! Text cleanup for feed excerpts
//!
//! Tag stripping here is pattern based, not an HTML parser: anything shaped
//! like `<...>` is removed and entities are left untouched.

use super::patterns::TAG;

/// Suffix appended to every excerpt
pub const ELLIPSIS: &str = "...";

/// Remove every tag-shaped run from the text
///
/// # Examples
///
/// ```
/// use feedsplice::parser::sanitize::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <strong>World</strong></p>"), "Hello World");
/// assert_eq!(strip_tags("a &amp; b"), "a &amp; b");
/// ```
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").to_string()
}

/// Keep the first `max_chars` characters and append [`ELLIPSIS`]
///
/// The ellipsis is appended even when nothing was cut.
///
/// # Examples
///
/// ```
/// use feedsplice::parser::sanitize::excerpt;
///
/// assert_eq!(excerpt("Some text", 180), "Some text...");
/// assert_eq!(excerpt("abcdef", 3), "abc...");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Build an excerpt from a raw description: trim, strip tags, cut, append ellipsis
pub fn description_excerpt(raw: &str, max_chars: usize) -> String {
    excerpt(&strip_tags(raw.trim()), max_chars)
}
