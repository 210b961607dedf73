// src/output/mod.rs
// =============================================================================
// This module serializes the crawl's results.
//
// The crawl's deliverable is two sorted, newline-delimited text files (the
// wordlist and the visited-URL list) plus an end-of-run summary for the
// terminal, either human-readable or JSON.
// =============================================================================

mod writer;

// Re-export the public API
pub use writer::{write_results, CrawlSummary};
