//! Feed retrieval
//!
//! - [`fetcher`] - HTTPS GET of the raw feed text

pub mod fetcher;

pub use fetcher::FeedFetcher;
