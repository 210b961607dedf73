// src/crawl/scheduler.rs
// =============================================================================
// This module implements the breadth-first crawl loop.
//
// How it works:
// 1. Start with the seed URL in a queue at depth 0
// 2. Pop the front entry, normalize its URL, skip it if already visited or
//    past the depth limit
// 3. Fetch the page; mine its URL, body text, and (for HTML) its form fields
// 4. Discover same-domain links and push them back at depth + 1
// 5. Repeat until the queue is empty
//
// Dedup happens at pop time against the normalized URL (query and fragment
// stripped), not at enqueue time: the same page may sit in the queue several
// times under different query strings, but it is fetched exactly once.
//
// Politeness:
// - A fixed delay after every processed entry, success or failure
// - One outstanding request at a time, strictly sequential
// - Only crawls the seed's own domain
//
// Rust concepts:
// - HashSet: To track visited URLs and accumulated words (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first ordering
// - Url: For parsing, normalizing, and comparing authorities
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use anyhow::{anyhow, Result};
use scraper::Html;
use url::Url;

use crate::extract;

use super::fetch::{Fetcher, DEFAULT_USER_AGENT};

// A page waiting in the crawl queue
#[derive(Debug, Clone)]
struct CrawlTarget {
    url: String,
    depth: usize, // How many link hops from the seed this was discovered at
}

/// Knobs for a crawl run. `Default` matches the CLI defaults.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum link distance from the seed; pages beyond it are dropped.
    pub max_depth: usize,
    /// Fixed politeness delay after each processed page.
    pub delay: Duration,
    /// User-Agent presented to the target site.
    pub user_agent: String,
    /// Optional hard cap on pages fetched. None = unbounded, which on a
    /// large or infinitely-linking site means an unbounded crawl.
    pub max_pages: Option<usize>,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            delay: Duration::from_millis(500),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: None,
        }
    }
}

/// The crawl scheduler: owns the frontier, the visited set, and the
/// accumulated keyword set.
pub struct Crawler {
    domain: String,
    max_depth: usize,
    delay: Duration,
    max_pages: Option<usize>,
    fetcher: Fetcher,
    frontier: VecDeque<CrawlTarget>,
    visited: HashSet<String>,
    words: HashSet<String>,
}

impl Crawler {
    /// Sets up a crawl rooted at `seed_url`.
    ///
    /// The seed's authority (host[:port]) becomes the crawl's fixed domain
    /// scope: nothing outside it is ever fetched.
    pub fn new(seed_url: &str, options: CrawlOptions) -> Result<Self> {
        let seed = Url::parse(seed_url)
            .map_err(|e| anyhow!("Invalid URL '{}': {}", seed_url, e))?;

        if seed.host_str().is_none() {
            return Err(anyhow!("URL has no host: {}", seed_url));
        }

        let domain = extract::authority(&seed);
        let fetcher = Fetcher::new(&options.user_agent)?;

        let mut frontier = VecDeque::new();
        frontier.push_back(CrawlTarget {
            url: seed_url.to_string(),
            depth: 0,
        });

        Ok(Self {
            domain,
            max_depth: options.max_depth,
            delay: options.delay,
            max_pages: options.max_pages,
            fetcher,
            frontier,
            visited: HashSet::new(),
            words: HashSet::new(),
        })
    }

    /// The authority (host[:port]) this crawl is scoped to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The accumulated keyword/parameter set.
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// The set of normalized URLs that were fetched (or attempted).
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Drains the frontier. Fetch failures are logged and skipped; nothing
    /// inside the loop is fatal.
    pub async fn run(&mut self) {
        println!(
            "--- Starting crawl on {} (max depth: {}) ---",
            self.domain, self.max_depth
        );

        while let Some(target) = self.frontier.pop_front() {
            // Only absolute URLs are ever enqueued, so this parse should not
            // fail; if it somehow does, the entry is just dropped
            let parsed = match Url::parse(&target.url) {
                Ok(url) => url,
                Err(_) => continue,
            };

            // Dedup key: scheme + authority + path, query/fragment stripped.
            // Re-checked here at pop time, not at enqueue time
            let clean = extract::normalize(&parsed);
            if self.visited.contains(&clean) {
                continue;
            }

            if target.depth > self.max_depth {
                continue;
            }

            if let Some(cap) = self.max_pages {
                if self.visited.len() >= cap {
                    println!("  Page cap of {} reached, stopping", cap);
                    break;
                }
            }

            self.visited.insert(clean);

            println!("  Crawling [depth {}]: {}", target.depth, target.url);

            let links = self.fetch_and_analyze(&parsed).await;

            for link in links {
                self.frontier.push_back(CrawlTarget {
                    url: link,
                    depth: target.depth + 1,
                });
            }

            // Polite crawling: fixed delay after every processed entry,
            // whether the fetch succeeded or not
            tokio::time::sleep(self.delay).await;
        }
    }

    // Fetches one URL and runs the extraction pipeline on the response.
    // Returns the in-scope links discovered on the page (empty on any fetch
    // failure or for script-like content).
    async fn fetch_and_analyze(&mut self, url: &Url) -> HashSet<String> {
        let page = match self.fetcher.fetch(url.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                eprintln!("  Warning: failed to fetch {}: {}", url, e);
                return HashSet::new();
            }
        };

        // The fetched URL contributes its own query keys...
        self.words.extend(extract::query_keys(url));
        // ...and the raw body is mined whatever the content type is
        self.words.extend(extract::extract_keywords(&page.body));

        // Script/data responses are mined above but never parsed as HTML,
        // so they produce no parameters and no links
        if page.is_script_like() {
            return HashSet::new();
        }

        let document = Html::parse_document(&page.body);
        self.words.extend(extract::extract_html_params(&document));

        let harvest = extract::discover_links(&document, url, &self.domain);
        self.words.extend(harvest.words);

        harvest.links
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why normalize at pop time instead of enqueue time?
//    - The same page can be discovered under many query strings
//      (/a?x=1, /a?x=2) before it is first processed
//    - Each discovery still mines its query keys into the wordlist at
//      link-discovery time; the pop-time check only stops repeat fetches
//
// 2. Why is depth attached to the queue entry?
//    - Depth records how the page was discovered, not a property of the page
//    - FIFO order means the first (shallowest) discovery wins the fetch;
//      later discoveries of the same page hit the visited check
//
// 3. Why is a failed fetch still "visited"?
//    - No retries: a URL gets exactly one attempt per crawl, so marking it
//      before fetching is what prevents a second attempt
//
// 4. Why does run() not return Result?
//    - Nothing inside the loop is fatal: failures degrade to "no content"
//      and the crawl drains the rest of the frontier
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_options() -> CrawlOptions {
        CrawlOptions {
            delay: Duration::ZERO,
            ..CrawlOptions::default()
        }
    }

    async fn html_page(
        server: &mut mockito::Server,
        path: &str,
        body: &str,
    ) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_crawl_collects_pages_words_and_params() {
        let mut server = mockito::Server::new_async().await;

        let _root = html_page(
            &mut server,
            "/",
            r#"<html><body>
                <input name="csrf_token">
                <a href="/a?x=1">first</a>
                <a href="/a?x=2">second</a>
                <a href="/contact">contact</a>
                <script src="/static/app.js"></script>
            </body></html>"#,
        )
        .await;

        // Both /a?x=1 and /a?x=2 normalize to /a: exactly one fetch
        let page_a = server
            .mock("GET", "/a")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>alpha</body></html>")
            .expect(1)
            .create_async()
            .await;

        let _contact = html_page(
            &mut server,
            "/contact",
            r#"<form><input name="email"></form>"#,
        )
        .await;

        // Script responses are mined for keywords but never parsed as HTML:
        // the markup inside the string literal must not become a link
        let _script = server
            .mock("GET", "/static/app.js")
            .with_status(200)
            .with_header("content-type", "application/javascript")
            .with_body(r#"var token = getCookie('session_id'); var x = '<a href="/from-js">';"#)
            .create_async()
            .await;

        let mut crawler = Crawler::new(&server.url(), test_options()).unwrap();
        crawler.run().await;

        page_a.assert_async().await;

        assert_eq!(crawler.visited().len(), 4);
        let base = server.url();
        assert!(crawler.visited().contains(&format!("{}/", base)));
        assert!(crawler.visited().contains(&format!("{}/a", base)));
        assert!(crawler.visited().contains(&format!("{}/contact", base)));
        assert!(crawler.visited().contains(&format!("{}/static/app.js", base)));
        assert!(!crawler.visited().contains(&format!("{}/from-js", base)));

        // Query keys mined at discovery time, form fields from parsed pages,
        // string literals from the script body
        assert!(crawler.words().contains("x"));
        assert!(crawler.words().contains("csrf_token"));
        assert!(crawler.words().contains("email"));
        assert!(crawler.words().contains("contact"));
        assert!(crawler.words().contains("session_id"));
    }

    #[tokio::test]
    async fn test_depth_limit_is_enforced() {
        let mut server = mockito::Server::new_async().await;

        let _root = html_page(&mut server, "/", r#"<a href="/level1">l1</a>"#).await;
        let _level1 = html_page(&mut server, "/level1", r#"<a href="/level2">l2</a>"#).await;
        // Reachable only at depth 2: must never be fetched with max_depth 1
        let level2 = server
            .mock("GET", "/level2")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("nope")
            .expect(0)
            .create_async()
            .await;

        let options = CrawlOptions {
            max_depth: 1,
            ..test_options()
        };
        let mut crawler = Crawler::new(&server.url(), options).unwrap();
        crawler.run().await;

        level2.assert_async().await;
        assert_eq!(crawler.visited().len(), 2);
    }

    #[tokio::test]
    async fn test_failing_fetch_still_terminates() {
        let mut server = mockito::Server::new_async().await;
        let _root = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let mut crawler = Crawler::new(&server.url(), test_options()).unwrap();
        crawler.run().await;

        // The seed is marked visited, contributes nothing, and is not retried
        assert_eq!(crawler.visited().len(), 1);
        assert!(crawler.words().is_empty());
    }

    #[tokio::test]
    async fn test_page_cap_stops_the_crawl() {
        let mut server = mockito::Server::new_async().await;

        let _root = html_page(
            &mut server,
            "/",
            r#"<a href="/p1">1</a><a href="/p2">2</a><a href="/p3">3</a>"#,
        )
        .await;
        let _p1 = html_page(&mut server, "/p1", "one").await;
        let _p2 = html_page(&mut server, "/p2", "two").await;
        let _p3 = html_page(&mut server, "/p3", "three").await;

        let options = CrawlOptions {
            max_pages: Some(2),
            ..test_options()
        };
        let mut crawler = Crawler::new(&server.url(), options).unwrap();
        crawler.run().await;

        assert_eq!(crawler.visited().len(), 2);
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        assert!(Crawler::new("not a url", CrawlOptions::default()).is_err());
    }

    #[test]
    fn test_domain_includes_the_port() {
        let crawler =
            Crawler::new("http://example.com:8080/start", CrawlOptions::default()).unwrap();
        assert_eq!(crawler.domain(), "example.com:8080");
    }
}
