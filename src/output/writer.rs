// src/output/writer.rs
// =============================================================================
// This module writes the crawl's two deliverables:
// - <domain>_wordlist.txt: every keyword/parameter found, sorted
// - <domain>_crawled_urls.txt: every normalized URL visited, sorted
//
// Both files are newline-delimited UTF-8, sorted ascending by code point,
// and overwritten if they already exist. Any colon in the domain (a port
// separator) becomes an underscore, since ':' is not filename-safe on every
// platform.
//
// A write failure here is the one fatal error of a finished crawl: the files
// are the whole point of the run.
//
// Rust concepts:
// - Sorting a Vec of borrowed &String avoids cloning the whole set
// - fs::write creates-or-truncates in one call
// =============================================================================

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Serialize;

/// End-of-run totals, printable as text or JSON (--json).
#[derive(Debug, Serialize)]
pub struct CrawlSummary {
    /// The authority the crawl was scoped to.
    pub domain: String,
    /// Number of pages/files visited (fetch attempts, successful or not).
    pub pages_visited: usize,
    /// Number of unique keywords/parameters collected.
    pub unique_words: usize,
    /// Path of the wordlist file.
    pub wordlist_file: String,
    /// Path of the visited-URL file.
    pub urls_file: String,
}

/// Writes the wordlist and visited-URL files into `dir`.
///
/// Returns the two paths written, wordlist first.
pub fn write_results(
    dir: &Path,
    domain: &str,
    words: &HashSet<String>,
    visited: &HashSet<String>,
) -> Result<(PathBuf, PathBuf)> {
    let safe_domain = domain.replace(':', "_");

    let wordlist_path = dir.join(format!("{}_wordlist.txt", safe_domain));
    let urls_path = dir.join(format!("{}_crawled_urls.txt", safe_domain));

    write_sorted(&wordlist_path, words)?;
    write_sorted(&urls_path, visited)?;

    Ok((wordlist_path, urls_path))
}

// Writes one set as sorted, newline-terminated lines.
fn write_sorted(path: &Path, entries: &HashSet<String>) -> Result<()> {
    let mut sorted: Vec<&String> = entries.iter().collect();
    sorted.sort();

    let mut contents = String::new();
    for entry in sorted {
        contents.push_str(entry);
        contents.push('\n');
    }

    fs::write(path, contents)
        .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))
}
