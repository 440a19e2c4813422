//! feedsplice - RSS to static page pre-renderer
//!
//! Fetches an RSS feed, extracts the most recent posts and splices a rendered
//! post grid plus schema.org structured data into a static HTML page between
//! two marker comments. Intended to run once per site build.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`feed`] - HTTPS retrieval of the raw feed
//! - [`parser`] - `<item>` extraction and field normalization
//! - [`render`] - Posts fragment, JSON-LD and marker splicing
//! - [`storage`] - Page document read and atomic write
//! - [`pipeline`] - Orchestration of a single run
//! - [`models`] - Core data structures and types
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```no_run
//! use feedsplice::config::Config;
//! use feedsplice::pipeline::Prerenderer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let report = Prerenderer::new(config)?.run().await?;
//!     println!("Pre-rendered {} posts", report.posts_rendered);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod storage;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::feed::FeedFetcher;
    pub use crate::models::{FeedItem, PageDocument, PrerenderReport};
    pub use crate::parser::FeedParser;
    pub use crate::pipeline::Prerenderer;
    pub use crate::render::{ItemListSchema, PageRenderer, PostsRenderer, Splicer};
}

// Direct re-exports for convenience
pub use models::{FeedItem, PageDocument, PrerenderReport};
