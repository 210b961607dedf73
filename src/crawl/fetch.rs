// src/crawl/fetch.rs
// =============================================================================
// This module wraps the HTTP client used by the crawl loop.
//
// Key behavior:
// - One reqwest client for the whole crawl (connection pooling)
// - Fixed 10 second timeout per request
// - Configurable User-Agent, set once at client construction
// - Any failure (timeout, connection error, non-2xx status) comes back as an
//   error; the scheduler treats it as "no content" and moves on
//
// Rust concepts:
// - reqwest's Client is cheap to clone and reusable across requests
// - anyhow! builds an ad-hoc error value for the non-2xx case
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

// Browser-identifying User-Agent strings. Plenty of sites answer differently
// (or not at all) to an obvious bot UA, so we present a desktop browser by
// default. The first entry is the default; --user-agent overrides it.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.1 Safari/605.1.15",
];

pub const DEFAULT_USER_AGENT: &str = USER_AGENTS[0];

// Per-request timeout. Fixed: no retries, no adaptive backoff.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A successfully fetched response.
#[derive(Debug)]
pub struct FetchedPage {
    /// The URL as requested (before any redirects).
    pub url: String,
    /// The declared Content-Type header, empty if absent.
    pub content_type: String,
    /// The response body as text.
    pub body: String,
}

impl FetchedPage {
    /// Returns true if this response is script or structured-data content
    /// rather than an HTML page.
    ///
    /// Script-like responses are still mined for keywords, but they are never
    /// parsed as HTML and contribute no links.
    pub fn is_script_like(&self) -> bool {
        self.content_type.contains("javascript")
            || self.content_type.contains("json")
            || self.url.ends_with(".js")
    }
}

/// The HTTP side of the crawl: one client, one request at a time.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds the client with the crawl's User-Agent and timeout.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a URL and returns its body and content type.
    ///
    /// Non-2xx statuses are errors: a 404 page or a 500 error page is not
    /// content we want in the wordlist.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.text().await?;

        Ok(FetchedPage {
            url: url.to_string(),
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_is_not_script_like() {
        let page = FetchedPage {
            url: "https://example.com/index".to_string(),
            content_type: "text/html; charset=utf-8".to_string(),
            body: String::new(),
        };
        assert!(!page.is_script_like());
    }

    #[test]
    fn test_content_type_marks_script_like() {
        for content_type in [
            "application/javascript",
            "text/javascript",
            "application/json",
        ] {
            let page = FetchedPage {
                url: "https://example.com/data".to_string(),
                content_type: content_type.to_string(),
                body: String::new(),
            };
            assert!(page.is_script_like(), "{} should be script-like", content_type);
        }
    }

    #[test]
    fn test_js_suffix_marks_script_like() {
        // Even when the server mislabels the content type
        let page = FetchedPage {
            url: "https://example.com/static/app.js".to_string(),
            content_type: "text/plain".to_string(),
            body: String::new(),
        };
        assert!(page.is_script_like());
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_content_type() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>hello</html>")
            .create_async()
            .await;

        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        let page = fetcher
            .fetch(&format!("{}/page", server.url()))
            .await
            .unwrap();

        assert_eq!(page.body, "<html>hello</html>");
        assert_eq!(page.content_type, "text/html");
    }

    #[tokio::test]
    async fn test_fetch_sends_the_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ua")
            .match_header("user-agent", "scout-test-agent")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let fetcher = Fetcher::new("scout-test-agent").unwrap();
        fetcher.fetch(&format!("{}/ua", server.url())).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        let result = fetcher.fetch(&format!("{}/missing", server.url())).await;

        assert!(result.is_err());
    }
}
