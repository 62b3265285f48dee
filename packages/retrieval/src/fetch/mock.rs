//! Mock transport for testing.
//!
//! Canned pages indexed by URL, injectable failures, and a call log so
//! tests can verify exactly which URLs the pipeline touched. URLs with
//! no canned page behave like a dead host, which is what enrichment
//! sources see for unreachable sites.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::fetch::{FetchedPage, PageFetcher};

/// Configurable mock implementation of [`PageFetcher`].
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashSet<String>>>,
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create an empty mock; every fetch fails until pages are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page (builder pattern).
    pub fn with_page(self, url: &str, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Mark a URL as failing even if a page exists for it.
    pub fn with_failure(self, url: &str) -> Self {
        self.failures.write().unwrap().insert(url.to_string());
        self
    }

    /// Add a canned page.
    pub fn add_page(&self, url: &str, html: impl Into<String>) {
        self.pages
            .write()
            .unwrap()
            .insert(url.to_string(), html.into());
    }

    /// URLs requested via `fetch_html`, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Number of fetches attempted.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            failures: Arc::clone(&self.failures),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_html(&self, url: &str) -> FetchResult<FetchedPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        if self.failures.read().unwrap().contains(url) {
            return Err(FetchError::Other(format!("simulated failure for {url}")));
        }

        let pages = self.pages.read().unwrap();
        match pages.get(url) {
            Some(html) => Ok(FetchedPage::new(url, html.clone())),
            None => Err(FetchError::Other(format!("connection refused: {url}"))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
