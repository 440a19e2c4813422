//! HTTP fetcher for RSS feeds
//!
//! Performs a single GET per run and buffers the whole body. There is no
//! retry loop and no request timeout: a non-2xx status or a transport error
//! fails the run.

use crate::config::FeedConfig;
use crate::utils::error::FetchError;
use crate::utils::{extract_host, parse_feed_url};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};

/// Accept header sent with feed requests
const FEED_ACCEPT: &str =
    "application/rss+xml, application/xml;q=0.9, text/xml;q=0.8, */*;q=0.5";

/// RSS feed fetcher
pub struct FeedFetcher {
    /// HTTP client with compression enabled
    client: Client,

    /// Permit plain `http://` URLs
    allow_insecure: bool,
}

impl FeedFetcher {
    /// Create a fetcher from the feed configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &FeedConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .gzip(true)
            .default_headers(Self::build_headers(&config.user_agent))
            .build()?;

        Ok(Self {
            client,
            allow_insecure: config.allow_insecure,
        })
    }

    /// Fetch the feed body as text
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidUrl` / `FetchError::InsecureScheme` before any request
    /// - `FetchError::Status` for any status outside 200..300
    /// - `FetchError::Http` for transport failures
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = parse_feed_url(url, self.allow_insecure)?;
        let host = extract_host(&url);

        tracing::debug!(url = %url, host = %host, "Fetching feed");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Feed request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        tracing::info!(
            host = %host,
            status = status.as_u16(),
            bytes = body.len(),
            "Fetched feed"
        );

        Ok(body)
    }

    /// Build default headers for feed requests
    fn build_headers(user_agent: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static(FEED_ACCEPT));

        if let Ok(value) = HeaderValue::from_str(user_agent) {
            headers.insert(USER_AGENT, value);
        }

        headers
    }
}
