//! Crawl engine
//!
//! This module contains the core crawling logic, including:
//! - The frontier queue and dedup set shared by all workers
//! - HTTP fetching with per-request timeouts and error classification
//! - Anchor link extraction
//! - Coordination of the worker pool, the deadline, and the bounded drain
//!
//! [`run_crawl`] is the entry point.

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;

pub use coordinator::{run_crawl, Coordinator, CrawlPhase, CrawlReport};
pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use frontier::Frontier;
