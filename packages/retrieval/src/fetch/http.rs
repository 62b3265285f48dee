//! HTTP gateway transport.
//!
//! Fetches raw HTML over plain HTTP. Suitable for pages that render
//! server-side and for the secondary enrichment sources; JavaScript-heavy
//! job boards need the browser transport instead.

use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::fetch::{FetchedPage, PageFetcher};

/// How many sub-fetches run concurrently in one batch window.
const BATCH_WINDOW: usize = 3;

/// Fixed delay between batch windows.
const BATCH_DELAY: Duration = Duration::from_millis(500);

/// HTTP transport backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    accept_language: Option<String>,
}

impl HttpFetcher {
    /// Create a fetcher with the given user agent and request timeout.
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        Self::with_proxy(user_agent, timeout, None)
    }

    /// Create a fetcher, optionally routed through an HTTP proxy.
    pub fn with_proxy(
        user_agent: impl Into<String>,
        timeout: Duration,
        proxy: Option<&str>,
    ) -> FetchResult<Self> {
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(proxy) = proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| FetchError::Http(Box::new(e)))?;
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
            accept_language: None,
        })
    }

    /// Send an Accept-Language header with every request.
    pub fn with_accept_language(mut self, locale: impl Into<String>) -> Self {
        self.accept_language = Some(locale.into());
        self
    }

    /// Extract the `<title>` from raw HTML.
    fn extract_title(html: &str) -> Option<String> {
        let title_pattern = regex::Regex::new(r"(?s)<title[^>]*>(.*?)</title>").ok()?;
        title_pattern
            .captures(html)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> FetchResult<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");
        let mut request = self.client.get(url).header("User-Agent", &self.user_agent);
        if let Some(locale) = &self.accept_language {
            request = request.header("Accept-Language", locale);
        }
        let response = request
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                if e.is_timeout() {
                    FetchError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    FetchError::Http(Box::new(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let mut page = FetchedPage {
            url: url.to_string(),
            html,
            title: None,
            fetched_at: Utc::now(),
        };
        page.title = Self::extract_title(&page.html);
        Ok(page)
    }

    /// Batched fetch: a fixed window of concurrent requests with a fixed
    /// delay between windows. Deliberately not adaptive.
    async fn fetch_many(&self, urls: &[String]) -> Vec<FetchedPage> {
        let mut pages = Vec::with_capacity(urls.len());
        let mut first = true;
        for window in urls.chunks(BATCH_WINDOW) {
            if !first {
                tokio::time::sleep(BATCH_DELAY).await;
            }
            first = false;

            let results = join_all(window.iter().map(|url| self.fetch_html(url))).await;
            for (url, result) in window.iter().zip(results) {
                match result {
                    Ok(page) => pages.push(page),
                    Err(e) => warn!(url = %url, error = %e, "skipping page in batch fetch"),
                }
            }
        }
        pages
    }

    fn name(&self) -> &str {
        "http"
    }
}
