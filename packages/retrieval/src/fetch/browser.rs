//! Remote-browser transport (CDP over WebSocket).
//!
//! [`BrowserSession`] owns one lazily-established browser connection per
//! retrieval run and hands out pages with an anti-friction setup applied:
//! realistic user agent, heavy resource types blocked at the network
//! layer, and opportunistic cookie-banner dismissal.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::network::{EnableParams, SetBlockedUrLsParams};
use chromiumoxide::Page;
use chrono::Utc;
use futures::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{FetchError, FetchResult};
use crate::fetch::{FetchedPage, PageFetcher};
use crate::types::BrowserEndpoint;

/// URL patterns aborted at the network layer. Images, media, fonts and
/// stylesheets carry no extractable job data and dominate page weight.
const BLOCKED_URL_PATTERNS: &[&str] = &[
    "*.png", "*.jpg", "*.jpeg", "*.gif", "*.svg", "*.webp", "*.ico", "*.css", "*.woff",
    "*.woff2", "*.ttf", "*.otf", "*.eot", "*.mp4", "*.webm", "*.avi", "*.mp3", "*.wav",
];

/// Best-effort consent-banner dismissal. Matches common consent-button
/// selectors first, then button text; clicks the first match and reports
/// whether anything was clicked. Failures are ignored by the caller.
const CONSENT_DISMISS_JS: &str = r#"
(() => {
  const selectors = [
    '#onetrust-accept-btn-handler',
    '#CybotCookiebotDialogBodyLevelButtonLevelOptinAllowAll',
    '#accept-cookies',
    '.cookie-consent-accept',
    '.cc-allow',
    'button[data-testid="cookie-accept"]',
    'button[id*="accept"]',
  ];
  for (const sel of selectors) {
    const el = document.querySelector(sel);
    if (el) { el.click(); return true; }
  }
  const texts = ['accept all', 'accept cookies', 'allow all', 'i agree', 'agree', 'got it', 'accept'];
  const candidates = document.querySelectorAll('button, a[role="button"], input[type="button"], input[type="submit"]');
  for (const el of candidates) {
    const label = ((el.innerText || el.value || '') + '').trim().toLowerCase();
    if (label && texts.some(t => label === t || label.includes(t))) { el.click(); return true; }
  }
  return false;
})()
"#;

struct SessionHandle {
    browser: Browser,
    event_loop: JoinHandle<()>,
}

/// A retry budget of zero still navigates once.
fn attempt_budget(max_retries: u32) -> u32 {
    max_retries.max(1)
}

/// Owns the connection to a remote browser automation endpoint.
///
/// `connect` is lazy and idempotent; `close` is safe to call repeatedly.
/// One session is exclusively owned by one retrieval run.
pub struct BrowserSession {
    endpoint: BrowserEndpoint,
    user_agent: String,
    nav_timeout: Duration,
    inner: Mutex<Option<SessionHandle>>,
}

impl BrowserSession {
    /// Create a session for an endpoint. No connection is made yet.
    pub fn new(endpoint: BrowserEndpoint, user_agent: impl Into<String>, nav_timeout: Duration) -> Self {
        Self {
            endpoint,
            user_agent: user_agent.into(),
            nav_timeout,
            inner: Mutex::new(None),
        }
    }

    /// Endpoint description safe for logs (no token).
    fn endpoint_label(&self) -> String {
        match &self.endpoint {
            BrowserEndpoint::Local { ws_url } => ws_url.clone(),
            BrowserEndpoint::Cloud { base_url, .. } => base_url.clone(),
        }
    }

    /// Establish the shared browser connection.
    ///
    /// Fails fast when the endpoint is unreachable. Subsequent calls
    /// reuse the existing connection.
    pub async fn connect(&self) -> FetchResult<()> {
        let mut guard = self.inner.lock().await;
        if guard.is_some() {
            return Ok(());
        }

        let ws_url = self.endpoint.ws_url();
        info!(endpoint = %self.endpoint_label(), "connecting to browser endpoint");
        let (browser, mut handler) =
            Browser::connect(ws_url)
                .await
                .map_err(|e| FetchError::Connect {
                    endpoint: self.endpoint_label(),
                    message: e.to_string(),
                })?;

        // The handler stream must be polled for the connection to make
        // progress; it ends when the connection drops.
        let event_loop = tokio::task::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        *guard = Some(SessionHandle {
            browser,
            event_loop,
        });
        Ok(())
    }

    /// Open a page with the anti-friction configuration applied.
    pub async fn new_page(&self) -> FetchResult<Page> {
        self.connect().await?;
        let guard = self.inner.lock().await;
        let handle = guard.as_ref().ok_or(FetchError::EndpointUnconfigured)?;

        let page = handle
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| FetchError::Browser(e.to_string()))?;

        page.set_user_agent(self.user_agent.as_str())
            .await
            .map_err(|e| FetchError::Browser(e.to_string()))?;

        page.execute(EnableParams::default())
            .await
            .map_err(|e| FetchError::Browser(e.to_string()))?;
        let patterns: Vec<String> = BLOCKED_URL_PATTERNS.iter().map(|p| p.to_string()).collect();
        page.execute(SetBlockedUrLsParams::new(patterns))
            .await
            .map_err(|e| FetchError::Browser(e.to_string()))?;

        // Banners render at unpredictable times; fire twice after load.
        let dismisser = page.clone();
        tokio::task::spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Self::dismiss_consent(&dismisser).await;
            tokio::time::sleep(Duration::from_secs(3)).await;
            Self::dismiss_consent(&dismisser).await;
        });

        Ok(page)
    }

    /// Click through a consent banner if one is present. Silent on failure.
    async fn dismiss_consent(page: &Page) {
        if let Err(e) = page.evaluate(CONSENT_DISMISS_JS).await {
            debug!(error = %e, "consent dismissal script failed");
        }
    }

    /// Navigate with retries and linear backoff.
    ///
    /// Waits for both DOM-ready and the navigation lifecycle to settle.
    /// On failure, retries with `attempt * 2000ms` backoff; the final
    /// error embeds the last underlying message. After a successful
    /// navigation, waits ~3s and re-attempts banner dismissal (banners
    /// that render after navigation completes).
    pub async fn navigate_with_retry(
        &self,
        page: &Page,
        url: &str,
        max_retries: u32,
    ) -> FetchResult<()> {
        let attempts = attempt_budget(max_retries);
        let mut last_error = String::from("no attempts made");

        for attempt in 1..=attempts {
            let navigation = async {
                page.goto(url).await?;
                page.wait_for_navigation().await?;
                Ok::<_, chromiumoxide::error::CdpError>(())
            };

            match tokio::time::timeout(self.nav_timeout, navigation).await {
                Ok(Ok(())) => {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    Self::dismiss_consent(page).await;
                    return Ok(());
                }
                Ok(Err(e)) => last_error = e.to_string(),
                Err(_) => {
                    last_error = format!("navigation timed out after {:?}", self.nav_timeout)
                }
            }

            warn!(url = %url, attempt, error = %last_error, "navigation attempt failed");
            if attempt < attempts {
                tokio::time::sleep(Duration::from_millis(u64::from(attempt) * 2000)).await;
            }
        }

        Err(FetchError::Navigation {
            url: url.to_string(),
            attempts,
            message: last_error,
        })
    }

    /// Release the browser connection. No-op if never connected or
    /// already closed.
    pub async fn close(&self) {
        let mut guard = self.inner.lock().await;
        if let Some(mut handle) = guard.take() {
            if let Err(e) = handle.browser.close().await {
                debug!(error = %e, "browser close failed");
            }
            handle.event_loop.abort();
        }
    }
}

/// [`PageFetcher`] over a [`BrowserSession`]: one page per URL, closed
/// before the result is returned.
pub struct BrowserFetcher {
    session: BrowserSession,
    max_retries: u32,
}

impl BrowserFetcher {
    /// Wrap a session; `max_retries` applies per navigation.
    pub fn new(session: BrowserSession, max_retries: u32) -> Self {
        Self {
            session,
            max_retries,
        }
    }

    /// Release the underlying browser connection.
    pub async fn close(&self) {
        self.session.close().await;
    }

    async fn render(&self, page: &Page, url: &str) -> FetchResult<FetchedPage> {
        self.session
            .navigate_with_retry(page, url, self.max_retries)
            .await?;

        let html = page
            .content()
            .await
            .map_err(|e| FetchError::Browser(e.to_string()))?;
        let title = page.get_title().await.ok().flatten();

        Ok(FetchedPage {
            url: url.to_string(),
            html,
            title,
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl PageFetcher for BrowserFetcher {
    async fn fetch_html(&self, url: &str) -> FetchResult<FetchedPage> {
        let page = self.session.new_page().await?;
        let result = self.render(&page, url).await;
        // The page is owned by this fetch and must be closed before the
        // session itself can be closed.
        if let Err(e) = page.close().await {
            debug!(url = %url, error = %e, "page close failed");
        }
        result
    }

    fn name(&self) -> &str {
        "browser"
    }
}
