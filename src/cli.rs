// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is a Rust struct and clap
// generates the parsing code from the #[...] attributes.
//
// The tool does exactly one thing, so there are no subcommands: a target URL,
// a depth, and a handful of knobs with sensible defaults.
// =============================================================================

use clap::Parser;

use crate::crawl::DEFAULT_USER_AGENT;

#[derive(Parser, Debug)]
#[command(
    name = "param-scout",
    version = "0.1.0",
    about = "Crawls a website and mines parameter names and keywords into wordlists",
    long_about = "param-scout breadth-first crawls a single domain, collecting candidate \
                  parameter names and keywords from URLs, forms, and page/script text. \
                  It writes a sorted wordlist and a sorted visited-URL list, ready to feed \
                  into a fuzzer or content-discovery tool."
)]
pub struct Cli {
    /// Target URL to start crawling from (e.g., https://example.com)
    #[arg(short, long)]
    pub url: String,

    /// Crawling depth: how many link hops from the start URL to follow
    ///
    /// Depth 0 = just the start URL
    /// Depth 1 = start URL + everything it links to
    /// etc.
    #[arg(short, long, default_value_t = 2)]
    pub depth: usize,

    /// Politeness delay between requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// User-Agent header to present to the target site
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Hard cap on the number of pages fetched (unbounded when omitted)
    ///
    /// Without a cap, a site that keeps producing fresh links keeps the
    /// crawl running; use this on large targets
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Print the end-of-run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
