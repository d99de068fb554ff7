//! Output for crawl results
//!
//! The report goes two places: a JSON file for machines and a short stdout
//! summary for the person who ran the crawl.

mod json;

pub use json::{print_summary, write_json_report};
