//! Page rendering
//!
//! - [`html`] - posts fragment from a Handlebars template
//! - [`schema`] - schema.org `ItemList` JSON-LD script tag
//! - [`splice`] - substitution between the page markers

pub mod html;
pub mod schema;
pub mod splice;

pub use html::PostsRenderer;
pub use schema::{ItemListSchema, ListItemSchema};
pub use splice::{Spliced, Splicer};

use crate::config::PageConfig;
use crate::error::Result;
use crate::models::{FeedItem, SpliceRegion};

/// Rendered page ready to be written
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub content: String,
    pub posts_rendered: usize,
    pub schema_entries: usize,
    pub schema_inserted: bool,
}

/// Combines fragment rendering, structured data and splicing
pub struct PageRenderer<'a> {
    posts: PostsRenderer<'a>,
    splicer: Splicer,
    schema_items: usize,
}

impl PageRenderer<'_> {
    /// Create a renderer from the page configuration
    pub fn from_config(config: &PageConfig) -> Result<Self> {
        let posts = match &config.template_path {
            Some(path) => PostsRenderer::with_template(path)?,
            None => PostsRenderer::new()?,
        };

        Ok(Self {
            posts,
            splicer: Splicer::from_config(config),
            schema_items: config.schema_items,
        })
    }

    pub fn splicer(&self) -> &Splicer {
        &self.splicer
    }

    /// Render `items` into `page` at the already located `region`
    pub fn render(&self, page: &str, region: SpliceRegion, items: &[FeedItem]) -> Result<RenderedPage> {
        let fragment = self.posts.render(items)?;
        let schema = ItemListSchema::from_items(items, self.schema_items);
        let schema_tag = schema.to_script_tag()?;

        let spliced = self.splicer.splice(page, region, &fragment, &schema_tag);

        if !spliced.schema_inserted {
            tracing::warn!("No head-close tag after the end marker, structured data not inserted");
        }

        tracing::debug!(
            fragment_bytes = fragment.len(),
            schema_entries = schema.len(),
            "Rendered page"
        );

        Ok(RenderedPage {
            content: spliced.content,
            posts_rendered: items.len(),
            schema_entries: schema.len(),
            schema_inserted: spliced.schema_inserted,
        })
    }
}
