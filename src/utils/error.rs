//! Error types for the feedsplice pipeline
//!
//! This module defines the domain-specific error types raised by the fetcher
//! and the page splicer.

use thiserror::Error;

/// Errors that can occur while fetching the feed
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (DNS, connection, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Request failed: {0}")]
    Status(u16),

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL does not use an encrypted transport
    #[error("Refusing to fetch over an unencrypted transport: {0}")]
    InsecureScheme(String),
}

impl FetchError {
    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors raised while locating the replaceable region of a page
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// A required marker string is absent from the page
    #[error("Static marker not found in page: {marker}")]
    MarkerNotFound { marker: String },

    /// The end marker appears before the start marker
    #[error("End marker appears before start marker")]
    MarkersOutOfOrder,
}
