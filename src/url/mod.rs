//! URL handling for linkharvest
//!
//! Everything the crawl compares or stores goes through this module first:
//! hrefs are resolved and reduced to one comparable form, and the optional
//! host scope filter decides which discoveries are kept.

mod normalize;
mod scope;

// Re-export main functions
pub use normalize::{canonicalize, normalize_href};
pub use scope::host_in_scope;
