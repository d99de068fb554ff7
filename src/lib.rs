//! Linkharvest: a bounded-time link discovery crawler
//!
//! This crate implements a concurrent crawler that starts from a single seed
//! page, follows anchor hrefs for a fixed wall-clock budget, and reports
//! every unique link it discovered along the way.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for linkharvest operations
#[derive(Debug, Error)]
pub enum LinkharvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These are the only fatal errors in the system: a crawl either refuses to
/// start because of one of these, or it runs to completion.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),
}

/// Result type alias for linkharvest operations
pub type Result<T> = std::result::Result<T, LinkharvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, FileConfig, OutputConfig};
pub use crawler::{run_crawl, CrawlPhase, CrawlReport};
pub use crate::url::{canonicalize, host_in_scope, normalize_href};
