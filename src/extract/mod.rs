// src/extract/mod.rs
// =============================================================================
// This module contains all keyword/parameter extraction logic.
//
// Submodules:
// - noise: the fixed table of JS keywords/builtins excluded from output
// - keywords: heuristic mining of raw page text (any content type)
// - structure: form field names and element ids from parsed HTML
// - links: same-domain anchor/script discovery, fused with URL mining
// - urls: query keys, path segments, normalization, authority
//
// Every extractor is a pure function of its input returning a set; the crawl
// scheduler owns the accumulated state and merges these results into it.
// =============================================================================

mod keywords;
mod links;
mod noise;
mod structure;
mod urls;

// Re-export the public API so callers write `extract::extract_keywords()`
// instead of reaching into submodules
pub use keywords::extract_keywords;
pub use links::{discover_links, is_in_scope, LinkHarvest};
pub use structure::extract_html_params;
pub use urls::{authority, normalize, path_segments, query_keys};
