//! Pluggable page-fetching transports.
//!
//! Extraction and enrichment are written against the [`PageFetcher`]
//! trait only, so a live browser, an HTTP gateway, and a canned mock are
//! interchangeable. Both real transports must implement identical
//! extraction semantics downstream; only the "fetch rendered HTML for a
//! URL" mechanics differ.

pub mod browser;
pub mod http;
pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::FetchResult;

pub use browser::{BrowserFetcher, BrowserSession};
pub use http::HttpFetcher;
pub use mock::MockFetcher;

/// Rendered page content, before any extraction.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL this content was fetched from
    pub url: String,
    /// Rendered HTML
    pub html: String,
    /// Page title if the transport captured one
    pub title: Option<String>,
    /// When the content was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page with minimal fields.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            title: None,
            fetched_at: Utc::now(),
        }
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Check if this page has content.
    pub fn has_content(&self) -> bool {
        !self.html.trim().is_empty()
    }
}

/// A transport that can fetch rendered HTML for a URL.
///
/// Implementations:
/// - [`BrowserFetcher`] — drives a remote headless browser over CDP
/// - [`HttpFetcher`] — plain HTTP gateway transport
/// - [`MockFetcher`] — canned pages for tests
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the rendered HTML for one URL.
    async fn fetch_html(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Fetch several independent URLs, skipping failures.
    ///
    /// Used for the mutually-independent company sub-page reads. The
    /// default implementation is sequential; transports may batch.
    async fn fetch_many(&self, urls: &[String]) -> Vec<FetchedPage> {
        let mut pages = Vec::with_capacity(urls.len());
        for url in urls {
            match self.fetch_html(url).await {
                Ok(page) => pages.push(page),
                Err(e) => {
                    warn!(url = %url, error = %e, "skipping page in batch fetch");
                }
            }
        }
        pages
    }

    /// Transport name, recorded as `metadata.agent`.
    fn name(&self) -> &str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_page_builder() {
        let page = FetchedPage::new("https://example.com", "<html></html>").with_title("Example");
        assert_eq!(page.url, "https://example.com");
        assert_eq!(page.title, Some("Example".to_string()));
        assert!(page.has_content());
    }

    #[test]
    fn test_empty_content_detection() {
        let page = FetchedPage::new("https://example.com", "   ");
        assert!(!page.has_content());
    }
}
