// Core data structures for the feedsplice pipeline

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Title used when an entry has no title
pub const UNTITLED: &str = "Untitled";

/// Link used when an entry has no link
pub const MISSING_LINK: &str = "#";

/// Displayed when a publication date cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// One post extracted from the feed, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub excerpt: String,        // Plain text, always ends with "..."
    pub published_date: String, // "January 1, 2024" or "Invalid Date"
}

/// The static page being updated
#[derive(Debug, Clone)]
pub struct PageDocument {
    pub path: PathBuf,
    pub content: String,
}

impl PageDocument {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Byte offsets of the two markers inside a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceRegion {
    /// Offset of the first byte of the start marker
    pub start: usize,
    /// Offset of the first byte of the end marker
    pub end: usize,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerenderReport {
    pub posts_rendered: usize,
    pub schema_entries: usize,
    pub page_path: PathBuf,
    pub bytes_written: usize,
    /// Whether the structured-data tag found a head-close tag to land before
    pub schema_inserted: bool,
    pub dry_run: bool,
}
