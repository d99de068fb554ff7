//! Link extraction
//!
//! Anchors are the only link source: `a[href]` elements, nothing synthesized
//! from text, scripts, or other attributes. Parsing is best-effort; html5ever
//! builds a tree out of any input, so a hopeless body simply yields no
//! anchors rather than an error.

use crate::url::normalize_href;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the set of normalized outbound links from an HTML body
///
/// Every href is resolved against `base` (the fetched page's own URL) and
/// normalized; hrefs that cannot name a page are dropped, and duplicates
/// within the page collapse here, before the frontier ever sees them.
pub fn extract_links(html: &str, base: &Url) -> HashSet<Url> {
    let document = Html::parse_document(html);
    let mut links = HashSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(url) = normalize_href(href, base) {
                    links.insert(url);
                }
            }
        }
    }

    links
}
