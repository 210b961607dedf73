// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Submodules:
// - fetch: the HTTP collaborator (reqwest client, User-Agent, timeout)
// - scheduler: the breadth-first loop owning frontier/visited/keyword state
//
// Features:
// - Breadth-first traversal from a seed URL
// - Same-domain restriction (never leaves the target site)
// - Configurable depth limit and politeness delay
// - Pop-time dedup on normalized URLs (query/fragment stripped)
// =============================================================================

mod fetch;
mod scheduler;

// Re-export the public API
pub use fetch::DEFAULT_USER_AGENT;
pub use scheduler::{CrawlOptions, Crawler};
