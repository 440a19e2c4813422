//! Pre-render pipeline
//!
//! One run, strictly sequential:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Preflight  │     │   Fetcher   │     │  Extractor  │     │  Renderer   │     │    Write    │
//! │ read page,  │────▶│  HTTPS GET  │────▶│ <item> →    │────▶│ HTML + JSON │────▶│ temp+rename │
//! │ find markers│     │             │     │  FeedItem   │     │ -LD, splice │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The markers are located before the feed is requested, so a page without
//! markers fails without any network traffic. Any error aborts the run
//! before the write.
//!
//! # Example
//!
//! ```no_run
//! use feedsplice::config::Config;
//! use feedsplice::pipeline::Prerenderer;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let prerenderer = Prerenderer::new(Config::default())?;
//! let report = prerenderer.run().await?;
//!
//! println!("Pre-rendered {} posts", report.posts_rendered);
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::error::{Error, Result};
use crate::feed::FeedFetcher;
use crate::models::{PageDocument, PrerenderReport};
use crate::parser::FeedParser;
use crate::render::{PageRenderer, RenderedPage};
use crate::storage;

/// Drives preflight, fetch, extraction, rendering and the page write
pub struct Prerenderer<'a> {
    config: Config,
    fetcher: FeedFetcher,
    parser: FeedParser,
    renderer: PageRenderer<'a>,
}

impl Prerenderer<'_> {
    /// Build the pipeline from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::config(e.to_string()))?;

        let fetcher = FeedFetcher::new(&config.feed)?;
        let parser = FeedParser::from_config(&config.feed);
        let renderer = PageRenderer::from_config(&config.page)?;

        Ok(Self {
            config,
            fetcher,
            parser,
            renderer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Produce the updated page without writing it
    pub async fn render(&self) -> Result<(PageDocument, RenderedPage)> {
        let page_path = &self.config.page.path;
        let feed_url = &self.config.feed.url;

        let page = storage::read_page(page_path).await?;
        let region = self.renderer.splicer().locate(&page.content)?;

        tracing::info!(
            page = %page_path.display(),
            start = region.start,
            end = region.end,
            "Located static markers"
        );

        let rss = self.fetcher.fetch(feed_url).await?;
        let items = self.parser.parse(&rss);
        let rendered = self.renderer.render(&page.content, region, &items)?;

        Ok((page, rendered))
    }

    /// Run the full pipeline and overwrite the page
    pub async fn run(&self) -> Result<PrerenderReport> {
        let (page, rendered) = self.render().await?;
        let bytes_written = storage::write_page(page.path(), &rendered.content).await?;

        tracing::info!(
            page = %page.path().display(),
            posts = rendered.posts_rendered,
            schema_entries = rendered.schema_entries,
            bytes = bytes_written,
            "Page rewritten"
        );

        Ok(Self::report(page, &rendered, bytes_written, false))
    }

    /// Run everything except the write
    pub async fn dry_run(&self) -> Result<(PrerenderReport, String)> {
        let (page, rendered) = self.render().await?;
        let report = Self::report(page, &rendered, 0, true);
        Ok((report, rendered.content))
    }

    fn report(
        page: PageDocument,
        rendered: &RenderedPage,
        bytes_written: usize,
        dry_run: bool,
    ) -> PrerenderReport {
        PrerenderReport {
            posts_rendered: rendered.posts_rendered,
            schema_entries: rendered.schema_entries,
            page_path: page.path,
            bytes_written,
            schema_inserted: rendered.schema_inserted,
            dry_run,
        }
    }
}
