//! Unified error handling for the feedsplice crate
//!
//! This module consolidates the domain-specific errors into a single `Error`
//! enum so the pipeline can propagate any failure with `?` while still
//! exposing what went wrong.
//!
//! - [`ErrorCategory`] - Classification of errors for reporting
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! Every variant is fatal: the pipeline aborts on the first error and never
//! writes a partially spliced page.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use crate::utils::error::{FetchError, TemplateError};

/// Classification of errors for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Feed transport errors (HTTP status, network)
    Network,
    /// Page markers missing or malformed
    Template,
    /// Reading or writing the page document
    Storage,
    /// Building the HTML fragment or structured data
    Rendering,
    /// Configuration and validation errors
    Config,
}

impl ErrorCategory {
    /// Short name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Template => "template",
            Self::Storage => "storage",
            Self::Rendering => "rendering",
            Self::Config => "config",
        }
    }
}

/// Unified error type for the feedsplice crate
#[derive(Error, Debug)]
pub enum Error {
    /// Feed fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Page marker errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Read or write failure on the page document
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Handlebars rendering errors
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Handlebars template registration errors
    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a filesystem error for the given path
    pub fn filesystem(path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(_) => ErrorCategory::Network,
            Self::Template(_) => ErrorCategory::Template,
            Self::Filesystem { .. } => ErrorCategory::Storage,
            Self::Render(_) | Self::TemplateRegistration(_) | Self::Json(_) => {
                ErrorCategory::Rendering
            }
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::TemplateRegistration(Box::new(err))
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
