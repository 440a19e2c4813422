//! Configuration management for feedsplice
//!
//! This module handles loading and validating configuration from environment
//! variables, TOML files, and command-line arguments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Feed fetched when no URL is supplied
pub const DEFAULT_FEED_URL: &str = "https://silicode.substack.com/feed";

/// Page rewritten when no path is supplied
pub const DEFAULT_PAGE_PATH: &str = "blog/index.html";

pub const DEFAULT_START_MARKER: &str = "<!-- BLOG_STATIC_START -->";
pub const DEFAULT_END_MARKER: &str = "<!-- BLOG_STATIC_END -->";
pub const DEFAULT_HEAD_CLOSE: &str = "</head>";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed source configuration
    pub feed: FeedConfig,

    /// Target page configuration
    pub page: PageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Feed source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// RSS feed URL
    pub url: String,

    /// Maximum number of posts rendered
    pub max_items: usize,

    /// Excerpt length in characters, before the ellipsis
    pub excerpt_chars: usize,

    /// User agent string
    pub user_agent: String,

    /// Permit plain `http://` feed URLs
    pub allow_insecure: bool,
}

/// Target page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page document rewritten in place
    pub path: PathBuf,

    /// Marker opening the replaceable region
    pub start_marker: String,

    /// Marker closing the replaceable region
    pub end_marker: String,

    /// Tag the structured-data script is inserted before
    pub head_close: String,

    /// Maximum number of posts listed in the structured data
    pub schema_items: usize,

    /// Custom Handlebars template for the posts fragment
    pub template_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_FEED_URL),
            max_items: 8,
            excerpt_chars: 180,
            user_agent: format!("feedsplice/{}", env!("CARGO_PKG_VERSION")),
            allow_insecure: false,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PAGE_PATH),
            start_marker: String::from(DEFAULT_START_MARKER),
            end_marker: String::from(DEFAULT_END_MARKER),
            head_close: String::from(DEFAULT_HEAD_CLOSE),
            schema_items: 5,
            template_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Override fields from `FEEDSPLICE_*` environment variables
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("FEEDSPLICE_FEED_URL") {
            self.feed.url = url;
        }

        if let Ok(path) = std::env::var("FEEDSPLICE_PAGE_PATH") {
            self.page.path = PathBuf::from(path);
        }

        if let Ok(user_agent) = std::env::var("FEEDSPLICE_USER_AGENT") {
            self.feed.user_agent = user_agent;
        }

        if let Ok(level) = std::env::var("FEEDSPLICE_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(format) = std::env::var("FEEDSPLICE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.feed.max_items == 0 {
            anyhow::bail!("feed.max_items must be greater than 0");
        }

        if self.feed.url.trim().is_empty() {
            anyhow::bail!("feed.url must not be empty");
        }

        if self.page.start_marker.is_empty() || self.page.end_marker.is_empty() {
            anyhow::bail!("page markers must not be empty");
        }

        if self.page.start_marker == self.page.end_marker {
            anyhow::bail!("page.start_marker and page.end_marker must differ");
        }

        if self.page.head_close.is_empty() {
            anyhow::bail!("page.head_close must not be empty");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("logging.format must be 'text' or 'json'");
        }

        Ok(())
    }
}
