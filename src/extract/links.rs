// src/extract/links.rs
// =============================================================================
// This module discovers crawlable links in a parsed page.
//
// Two link sources:
// - <a href="...">: pages to crawl
// - <script src="...">: script files to fetch and mine for keywords (they are
//   never parsed as HTML themselves)
//
// Scope rule: the crawl never leaves the target site. A resolved URL is kept
// only if its authority (host[:port]) equals the crawl domain.
//
// Keyword mining is fused into the anchor walk: every in-scope anchor URL
// immediately contributes its query keys and path segments, whether or not
// the target page ends up being fetched. That is what lets /a?x=1 and /a?x=2
// both contribute `x` even though the normalized page /a is fetched once.
//
// Rust concepts:
// - Returning a struct of two sets keeps the extractor a pure function; the
//   scheduler merges the results into its own state
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use super::urls;

/// Everything harvested from one pass over a page's links.
#[derive(Debug, Default)]
pub struct LinkHarvest {
    /// In-scope absolute URLs to enqueue (anchors and script sources).
    pub links: HashSet<String>,
    /// Query keys and path segments mined from in-scope anchor URLs.
    pub words: HashSet<String>,
}

/// Discovers same-domain links in a parsed document and mines anchor URLs
/// for keywords.
///
/// Parameters:
///   document: the parsed page
///   base: the URL of the page itself, for resolving relative hrefs
///   domain: the crawl's fixed authority (host[:port])
pub fn discover_links(document: &Html, base: &Url, domain: &str) -> LinkHarvest {
    let mut harvest = LinkHarvest::default();

    // Both selectors are constant and known to be valid
    let anchor_selector = Selector::parse("a[href]").unwrap();
    let script_selector = Selector::parse("script[src]").unwrap();

    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = resolve_link(base, href) {
                if is_in_scope(&resolved, domain) {
                    harvest.words.extend(urls::query_keys(&resolved));
                    harvest.words.extend(urls::path_segments(&resolved));
                    harvest.links.insert(resolved.to_string());
                }
            }
        }
    }

    for element in document.select(&script_selector) {
        if let Some(src) = element.value().attr("src") {
            if let Some(resolved) = resolve_link(base, src) {
                if is_in_scope(&resolved, domain) {
                    harvest.links.insert(resolved.to_string());
                }
            }
        }
    }

    harvest
}

/// Checks whether a URL belongs to the crawl's target domain.
///
/// A URL with no host at all is treated as in-scope. After resolution against
/// an HTTP(S) base that should not occur, but it is checked defensively
/// rather than assumed.
pub fn is_in_scope(url: &Url, domain: &str) -> bool {
    match url.host_str() {
        Some(_) => urls::authority(url) == domain,
        None => true,
    }
}

/// Resolves a possibly-relative href to an absolute HTTP(S) URL.
///
/// Returns None for fragment-only links and non-web schemes, so the frontier
/// never sees something it cannot fetch.
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    // Skip anchors and special protocols
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let resolved = base.join(href).ok()?;

    match resolved.scheme() {
        "http" | "https" => Some(resolved),
        _ => None,
    }
}
