use url::Url;

/// Href schemes that can never name a fetchable page
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Normalizes a raw href against the page it appeared on
///
/// Resolution follows RFC 3986 via [`Url::join`]; the result is then reduced
/// to the crawl's comparable form: fragment removed, scheme and host as the
/// `url` crate parses them (both lowercased), path and query untouched. Two
/// hrefs that name the same page normalize to the same value, and running an
/// already normalized URL through again changes nothing.
///
/// Returns `None` for hrefs that should be discarded rather than crawled:
///
/// - empty or whitespace-only values
/// - fragment-only values (same-page anchors like `#top`)
/// - `javascript:`, `mailto:`, `tel:`, and `data:` hrefs
/// - values that fail to resolve against the base
/// - anything that resolves to a non-http(s) URL
///
/// # Example
///
/// ```
/// use linkharvest::url::normalize_href;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/dir/page").unwrap();
/// let link = normalize_href("../about#team", &base).unwrap();
/// assert_eq!(link.as_str(), "https://example.com/about");
/// ```
pub fn normalize_href(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    // Empty hrefs and same-page anchors point back at the base
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if SKIPPED_SCHEMES.iter().any(|s| href.starts_with(s)) {
        return None;
    }

    let mut resolved = base.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);
    Some(resolved)
}

/// Reduces an already absolute URL to the crawl's comparable form
///
/// Used for the seed, which has no page to resolve against. Applying it to
/// an output of [`normalize_href`] changes nothing.
pub fn canonicalize(url: &Url) -> Option<Url> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    let mut url = url.clone();
    url.set_fragment(None);
    Some(url)
}
