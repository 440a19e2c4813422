//! Regular expressions for RSS entry extraction
//!
//! Each field pattern prefers the CDATA-wrapped form and falls back to the
//! plain form. Alternation is leftmost-first, so the first element of a kind
//! inside the entry wins, whichever form it uses.

use regex::Regex;
use std::sync::LazyLock;

/// One `<item>` element, matched lazily across newlines
pub(crate) static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item>.*?</item>").expect("Invalid item pattern"));

/// Title, single line. Group 1 is the CDATA form, group 2 the plain form.
pub(crate) static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<title><!\[CDATA\[(.*?)\]\]></title>|<title>(.*?)</title>")
        .expect("Invalid title pattern")
});

/// Link, single line, plain form only
pub(crate) static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<link>(.*?)</link>").expect("Invalid link pattern"));

/// Publication date, single line, plain form only
pub(crate) static PUB_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pubDate>(.*?)</pubDate>").expect("Invalid pubDate pattern"));

/// Description, across newlines. Group 1 is the CDATA form, group 2 the plain form.
pub(crate) static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<description><!\[CDATA\[(.*?)\]\]></description>|<description>(.*?)</description>",
    )
    .expect("Invalid description pattern")
});

/// Leading RFC 2822 day-of-week, e.g. "Tue, "
pub(crate) static WEEKDAY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3},\s*").expect("Invalid weekday pattern"));

/// Anything shaped like a markup tag
pub(crate) static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag pattern"));

/// First non-empty capture among `groups` of the first match in `haystack`
pub(crate) fn first_capture<'h>(re: &Regex, haystack: &'h str, groups: &[usize]) -> Option<&'h str> {
    let caps = re.captures(haystack)?;
    groups
        .iter()
        .filter_map(|&i| caps.get(i))
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
}
