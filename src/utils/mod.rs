//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

pub mod error;

use url::Url;

use self::error::FetchError;

/// Parse a feed URL, requiring an encrypted transport unless `allow_insecure`
/// is set.
pub fn parse_feed_url(raw: &str, allow_insecure: bool) -> Result<Url, FetchError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;

    match parsed.scheme() {
        "https" => Ok(parsed),
        "http" if allow_insecure => Ok(parsed),
        _ => Err(FetchError::InsecureScheme(raw.to_string())),
    }
}

/// Extract host from URL, for log fields
pub fn extract_host(url: &Url) -> String {
    url.host_str().map(|s| s.to_string()).unwrap_or_default()
}
