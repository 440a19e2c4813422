//! RSS entry extraction
//!
//! This module scans raw feed text for `<item>` blocks and derives a
//! [`FeedItem`] from each one using block-scoped pattern matching. It does
//! not validate the feed: a missing field falls back to a default and an
//! unterminated block is skipped.

pub mod date;
pub(crate) mod patterns;
pub mod sanitize;

pub use date::format_pub_date;

use crate::config::FeedConfig;
use crate::models::{FeedItem, MISSING_LINK, UNTITLED};
use patterns::{first_capture, DESCRIPTION, ITEM, LINK, PUB_DATE, TITLE};

/// Extracts feed items from raw RSS text
#[derive(Debug, Clone)]
pub struct FeedParser {
    /// Maximum number of entries returned
    max_items: usize,

    /// Excerpt length in characters, before the ellipsis
    excerpt_chars: usize,
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedParser {
    /// Create a parser with the default limits (8 items, 180-character excerpts)
    pub fn new() -> Self {
        Self::from_config(&FeedConfig::default())
    }

    /// Create a parser using the limits from the feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            max_items: config.max_items,
            excerpt_chars: config.excerpt_chars,
        }
    }

    /// Extract up to `max_items` entries in document order
    pub fn parse(&self, rss: &str) -> Vec<FeedItem> {
        let items: Vec<FeedItem> = ITEM
            .find_iter(rss)
            .take(self.max_items)
            .map(|m| self.parse_entry(m.as_str()))
            .collect();

        tracing::info!(
            count = items.len(),
            max_items = self.max_items,
            "Extracted feed items"
        );

        items
    }

    /// Derive one item from a single `<item>...</item>` block
    pub fn parse_entry(&self, block: &str) -> FeedItem {
        let title = first_capture(&TITLE, block, &[1, 2])
            .unwrap_or(UNTITLED)
            .trim()
            .to_string();

        let link = first_capture(&LINK, block, &[1])
            .unwrap_or(MISSING_LINK)
            .trim()
            .to_string();

        let pub_date = first_capture(&PUB_DATE, block, &[1]).unwrap_or_default();

        let description = first_capture(&DESCRIPTION, block, &[1, 2]).unwrap_or_default();

        let item = FeedItem {
            title,
            link,
            excerpt: sanitize::description_excerpt(description, self.excerpt_chars),
            published_date: format_pub_date(pub_date),
        };

        tracing::debug!(title = %item.title, link = %item.link, date = %item.published_date, "Parsed entry");

        item
    }
}

/// Extract items with the default limits
pub fn parse_items(rss: &str) -> Vec<FeedItem> {
    FeedParser::new().parse(rss)
}
