// src/extract/urls.rs
// =============================================================================
// This module is the URL toolbox: everything keyword-ish or identity-ish we
// derive from a URL itself.
//
// What lives here:
// - authority(): the host[:port] string that defines the crawl's scope
// - normalize(): the scheme+authority+path dedup key (query/fragment dropped)
// - query_keys(): the distinct query-parameter names of a URL
// - path_segments(): the non-empty pieces between the '/'s of a path
//
// Rust concepts:
// - The url crate parses once into a Url struct; we read typed parts of it
//   instead of slicing strings by hand
// - Cow<str>: query_pairs() returns percent-decoded copy-on-write strings
// =============================================================================

use std::collections::HashSet;
use url::Url;

/// Returns the authority of a URL: the host, plus `:port` when the port is
/// explicit and non-default.
///
/// Examples:
///   https://example.com/a      -> "example.com"
///   http://127.0.0.1:8080/a    -> "127.0.0.1:8080"
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Reduces a URL to its dedup key: scheme + authority + path.
///
/// Query string and fragment are stripped, so `/a?x=1` and `/a?x=2` collapse
/// to the same key and the page is fetched only once.
pub fn normalize(url: &Url) -> String {
    format!("{}://{}{}", url.scheme(), authority(url), url.path())
}

/// Extracts the distinct query-parameter names of a URL.
///
/// Standard `key=value&key2=value2` decomposition with percent-decoding.
/// A key appearing multiple times contributes once; values are ignored.
/// Empty key names (as in `?=5`) are dropped.
pub fn query_keys(url: &Url) -> HashSet<String> {
    url.query_pairs()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, _)| key.into_owned())
        .collect()
}

/// Extracts the non-empty path segments of a URL.
///
/// Example: https://example.com/api/v2/users/ -> {"api", "v2", "users"}
pub fn path_segments(url: &Url) -> HashSet<String> {
    match url.path_segments() {
        Some(segments) => segments
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
            .collect(),
        None => HashSet::new(),
    }
}
