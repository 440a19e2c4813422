//! Marker-delimited page splicing
//!
//! The page is treated as three spans: everything up to and including the
//! start marker, the replaceable body, and everything from the end marker on.
//! Only the body is replaced; the markers themselves are kept so the next run
//! finds them again.

use crate::config::PageConfig;
use crate::models::SpliceRegion;
use crate::utils::error::TemplateError;

/// Result of a splice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub content: String,
    /// False when no head-close tag follows the end marker
    pub schema_inserted: bool,
}

/// Locates the markers in a page and substitutes rendered content between them
#[derive(Debug, Clone)]
pub struct Splicer {
    start_marker: String,
    end_marker: String,
    head_close: String,
}

impl Splicer {
    pub fn new(
        start_marker: impl Into<String>,
        end_marker: impl Into<String>,
        head_close: impl Into<String>,
    ) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
            head_close: head_close.into(),
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(
            config.start_marker.clone(),
            config.end_marker.clone(),
            config.head_close.clone(),
        )
    }

    /// Find the first occurrence of each marker
    pub fn locate(&self, page: &str) -> Result<SpliceRegion, TemplateError> {
        let start = page
            .find(&self.start_marker)
            .ok_or_else(|| TemplateError::MarkerNotFound {
                marker: self.start_marker.clone(),
            })?;
        let end = page
            .find(&self.end_marker)
            .ok_or_else(|| TemplateError::MarkerNotFound {
                marker: self.end_marker.clone(),
            })?;

        if end < start + self.start_marker.len() {
            return Err(TemplateError::MarkersOutOfOrder);
        }

        Ok(SpliceRegion { start, end })
    }

    /// Replace the body between the markers with `fragment` and insert
    /// `schema_tag` before the first head-close tag after the end marker.
    ///
    /// `region` must come from [`Splicer::locate`] on the same `page`.
    pub fn splice(
        &self,
        page: &str,
        region: SpliceRegion,
        fragment: &str,
        schema_tag: &str,
    ) -> Spliced {
        let before = &page[..region.start + self.start_marker.len()];
        let after = &page[region.end..];

        let schema_inserted = after.contains(&self.head_close);
        let after = if schema_inserted {
            after.replacen(
                &self.head_close,
                &format!("{schema_tag}\n{}", self.head_close),
                1,
            )
        } else {
            after.to_string()
        };

        let mut content =
            String::with_capacity(before.len() + fragment.len() + after.len() + 2);
        content.push_str(before);
        content.push('\n');
        content.push_str(fragment);
        content.push('\n');
        content.push_str(&after);

        Spliced {
            content,
            schema_inserted,
        }
    }

    /// Locate the markers and splice in one step
    pub fn splice_page(
        &self,
        page: &str,
        fragment: &str,
        schema_tag: &str,
    ) -> Result<Spliced, TemplateError> {
        let region = self.locate(page)?;
        Ok(self.splice(page, region, fragment, schema_tag))
    }

    /// Text currently between the markers, if both are present
    pub fn body<'p>(&self, page: &'p str) -> Option<&'p str> {
        let region = self.locate(page).ok()?;
        Some(&page[region.start + self.start_marker.len()..region.end])
    }
}

impl Default for Splicer {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}
