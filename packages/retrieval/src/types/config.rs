//! Retriever configuration.

use std::time::Duration;

/// Realistic desktop user agent applied by default; many job boards serve
/// stripped pages to obvious bot agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default per-navigation timeout.
pub const DEFAULT_NAV_TIMEOUT: Duration = Duration::from_secs(30);

/// Default navigation retry budget.
pub const DEFAULT_NAV_RETRIES: u32 = 3;

/// Remote browser endpoint, in one of two supported variants.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEndpoint {
    /// Local or self-hosted browser exposing a CDP WebSocket directly.
    Local { ws_url: String },
    /// Managed cloud endpoint reached via a token-bearing WebSocket URL,
    /// with optional browser-engine and proxy-country query parameters.
    Cloud {
        base_url: String,
        token: String,
        engine: Option<String>,
        proxy_country: Option<String>,
    },
}

impl BrowserEndpoint {
    /// A local/self-hosted endpoint.
    pub fn local(ws_url: impl Into<String>) -> Self {
        Self::Local {
            ws_url: ws_url.into(),
        }
    }

    /// A managed cloud endpoint.
    pub fn cloud(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Cloud {
            base_url: base_url.into(),
            token: token.into(),
            engine: None,
            proxy_country: None,
        }
    }

    /// Select a specific browser engine on the cloud endpoint.
    pub fn with_engine(self, engine: impl Into<String>) -> Self {
        match self {
            Self::Cloud {
                base_url,
                token,
                proxy_country,
                ..
            } => Self::Cloud {
                base_url,
                token,
                engine: Some(engine.into()),
                proxy_country,
            },
            local => local,
        }
    }

    /// Route cloud traffic through a proxy in the given country.
    pub fn with_proxy_country(self, country: impl Into<String>) -> Self {
        match self {
            Self::Cloud {
                base_url,
                token,
                engine,
                ..
            } => Self::Cloud {
                base_url,
                token,
                engine,
                proxy_country: Some(country.into()),
            },
            local => local,
        }
    }

    /// The WebSocket URL to hand to the CDP client.
    pub fn ws_url(&self) -> String {
        match self {
            Self::Local { ws_url } => ws_url.clone(),
            Self::Cloud {
                base_url,
                token,
                engine,
                proxy_country,
            } => {
                let mut url = format!("{}?token={}", base_url.trim_end_matches('/'), token);
                if let Some(engine) = engine {
                    url.push_str(&format!("&browser={engine}"));
                }
                if let Some(country) = proxy_country {
                    url.push_str(&format!("&proxyCountry={country}"));
                }
                url
            }
        }
    }
}

/// Configuration for one retrieval run.
#[derive(Debug, Clone)]
pub struct RetrieverConfig {
    /// The job-posting URL to retrieve (required).
    pub job_url: String,
    /// Browser endpoint; when absent the HTTP transport is used.
    pub endpoint: Option<BrowserEndpoint>,
    pub user_agent: String,
    /// Per-navigation timeout.
    pub nav_timeout: Duration,
    /// Navigation attempts before surfacing failure.
    pub max_nav_retries: u32,
    /// Optional HTTP proxy for the gateway transport.
    pub proxy: Option<String>,
    /// Optional locale hint (Accept-Language).
    pub locale: Option<String>,
}

impl RetrieverConfig {
    /// Create a config for a job URL with defaults everywhere else.
    pub fn new(job_url: impl Into<String>) -> Self {
        Self {
            job_url: job_url.into(),
            endpoint: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            nav_timeout: DEFAULT_NAV_TIMEOUT,
            max_nav_retries: DEFAULT_NAV_RETRIES,
            proxy: None,
            locale: None,
        }
    }

    /// Use a remote browser endpoint instead of plain HTTP.
    pub fn with_endpoint(mut self, endpoint: BrowserEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the navigation timeout (e.g. shorter for smoke tests).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.nav_timeout = timeout;
        self
    }

    /// Override the navigation retry budget.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_nav_retries = retries;
        self
    }

    /// Route gateway requests through an HTTP proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set a locale hint.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ws_url_passthrough() {
        let endpoint = BrowserEndpoint::local("ws://127.0.0.1:9222/devtools/browser/abc");
        assert_eq!(endpoint.ws_url(), "ws://127.0.0.1:9222/devtools/browser/abc");
    }

    #[test]
    fn test_cloud_ws_url_carries_token_and_params() {
        let endpoint = BrowserEndpoint::cloud("wss://cloud.example/", "tok123")
            .with_engine("chromium")
            .with_proxy_country("us");
        assert_eq!(
            endpoint.ws_url(),
            "wss://cloud.example?token=tok123&browser=chromium&proxyCountry=us"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = RetrieverConfig::new("https://example.com/job")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(1);
        assert_eq!(config.job_url, "https://example.com/job");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.nav_timeout, Duration::from_secs(5));
        assert_eq!(config.max_nav_retries, 1);
        assert!(config.endpoint.is_none());
    }
}
