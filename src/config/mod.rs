//! Configuration module for linkharvest
//!
//! Settings come from an optional TOML file plus command-line overrides;
//! validation runs before any crawl starts.
//!
//! # Example
//!
//! ```no_run
//! use linkharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawl will run {} workers", config.crawl.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, FileConfig, OutputConfig};

// Re-export parser and validation entry points
pub use parser::load_config;
pub use validation::validate;
