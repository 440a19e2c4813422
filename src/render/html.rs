//! Posts fragment rendering with the Handlebars template engine
//!
//! HTML escaping is disabled: titles and links are emitted exactly as the
//! feed supplied them, so inline markup in a CDATA title survives.

use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::models::FeedItem;

/// Default posts template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/posts.hbs");

const TEMPLATE_NAME: &str = "posts";

/// Template data for rendering
#[derive(Debug, Serialize)]
struct PostsTemplateData<'a> {
    posts: &'a [FeedItem],
}

/// Renders the list of posts into the blog grid fragment
pub struct PostsRenderer<'a> {
    /// Handlebars template engine
    handlebars: Handlebars<'a>,
}

impl<'a> PostsRenderer<'a> {
    /// Create a renderer with the built-in template
    pub fn new() -> Result<Self> {
        let mut handlebars = Self::engine();
        handlebars.register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Create a renderer with a custom template file
    ///
    /// The template receives a `posts` array whose entries carry `title`,
    /// `link`, `excerpt` and `published_date`.
    pub fn with_template(template_path: &Path) -> Result<Self> {
        let mut handlebars = Self::engine();
        handlebars.register_template_file(TEMPLATE_NAME, template_path)?;

        tracing::debug!(template = %template_path.display(), "Registered custom posts template");

        Ok(Self { handlebars })
    }

    fn engine() -> Handlebars<'a> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    }

    /// Render the posts fragment
    pub fn render(&self, items: &[FeedItem]) -> Result<String> {
        let data = PostsTemplateData { posts: items };
        Ok(self.handlebars.render(TEMPLATE_NAME, &data)?)
    }
}
