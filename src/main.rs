// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the crawl from the given seed URL
// 3. Write the wordlist and visited-URL files
// 4. Print a summary and exit with proper code (0 = success, 2 = error)
//
// The crawl itself never fails mid-loop; the two fatal cases are an invalid
// seed URL (before the crawl) and a result-file write failure (after it).
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - fetch + breadth-first scheduler
mod extract; // src/extract/ - keyword/parameter extraction
mod output; // src/output/ - sorted result files

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use crawl::{CrawlOptions, Crawler};
use output::CrawlSummary;

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
// Returns:
//   Ok(0) = crawl completed and results written
//   Err = invalid seed URL or write failure
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let options = CrawlOptions {
        max_depth: cli.depth,
        delay: Duration::from_millis(cli.delay_ms),
        user_agent: cli.user_agent.clone(),
        max_pages: cli.max_pages,
    };

    // Validates the seed URL and fixes the domain scope
    let mut crawler = Crawler::new(&cli.url, options)?;

    println!("🔍 Target domain: {}", crawler.domain());

    // Drain the frontier; failures inside are logged, not fatal
    crawler.run().await;

    // The two result files are the deliverable - a write failure is fatal
    let (wordlist_path, urls_path) = output::write_results(
        Path::new("."),
        crawler.domain(),
        crawler.words(),
        crawler.visited(),
    )?;

    let summary = CrawlSummary {
        domain: crawler.domain().to_string(),
        pages_visited: crawler.visited().len(),
        unique_words: crawler.words().len(),
        wordlist_file: wordlist_path.display().to_string(),
        urls_file: urls_path.display().to_string(),
    };

    if cli.json {
        // Machine-readable summary for scripting
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(0)
}

// Prints the human-readable end-of-run summary
fn print_summary(summary: &CrawlSummary) {
    println!();
    println!("✅ Crawl finished for {}", summary.domain);
    println!("📊 Summary:");
    println!("   📄 Pages/files visited: {}", summary.pages_visited);
    println!("   🔑 Unique words/params: {}", summary.unique_words);
    println!("📁 Files saved:");
    println!("   -> {}", summary.wordlist_file);
    println!("   -> {}", summary.urls_file);
}
