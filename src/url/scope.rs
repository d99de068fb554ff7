use url::Url;

/// Checks whether a URL's host falls inside a host-suffix scope
///
/// The scope matches the host itself and any subdomain of it:
/// `wikipedia.org` admits `wikipedia.org`, `en.wikipedia.org`, and
/// `simple.m.wikipedia.org`, but not `notwikipedia.org`. Hosts arrive
/// lowercased from the `url` crate, so comparison is exact.
///
/// # Example
///
/// ```
/// use linkharvest::url::host_in_scope;
/// use url::Url;
///
/// let url = Url::parse("https://en.wikipedia.org/wiki/Rust").unwrap();
/// assert!(host_in_scope(&url, "wikipedia.org"));
/// assert!(!host_in_scope(&url, "wikipedia.com"));
/// ```
pub fn host_in_scope(url: &Url, scope: &str) -> bool {
    match url.host_str() {
        Some(host) => host == scope || host.ends_with(&format!(".{}", scope)),
        None => false,
    }
}
