//! Pipeline orchestrator.
//!
//! One retrieval is one sequential run: fetch the job page, extract,
//! enrich, normalize, validate. `retrieve()` never fails; any error is
//! converted into a diagnostic note on the minimal valid record, so the
//! caller always receives a full-shaped result.

use tracing::{error, info, warn};

use crate::enrich::enrich_company;
use crate::error::Result;
use crate::extract::extract_job;
use crate::fetch::{BrowserFetcher, BrowserSession, HttpFetcher, PageFetcher};
use crate::normalize::normalize;
use crate::schema;
use crate::types::{JobData, Metadata, RetrieverConfig};

/// Retrieves one job posting into a schema-valid [`JobData`].
pub struct Retriever {
    config: RetrieverConfig,
}

impl Retriever {
    pub fn new(config: RetrieverConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline with the configured transport.
    ///
    /// Always resolves. Transport construction failures, fetch failures,
    /// and schema rejections all degrade to the minimal valid record
    /// with diagnostic notes.
    pub async fn retrieve(&self) -> JobData {
        match &self.config.endpoint {
            Some(endpoint) => {
                let session = BrowserSession::new(
                    endpoint.clone(),
                    self.config.user_agent.clone(),
                    self.config.nav_timeout,
                );
                let fetcher = BrowserFetcher::new(session, self.config.max_nav_retries);
                let data = self.retrieve_with_fetcher(&fetcher).await;
                fetcher.close().await;
                data
            }
            None => {
                match HttpFetcher::with_proxy(
                    self.config.user_agent.clone(),
                    self.config.nav_timeout,
                    self.config.proxy.as_deref(),
                ) {
                    Ok(fetcher) => {
                        let fetcher = match &self.config.locale {
                            Some(locale) => fetcher.with_accept_language(locale.clone()),
                            None => fetcher,
                        };
                        self.retrieve_with_fetcher(&fetcher).await
                    }
                    Err(e) => {
                        error!(error = %e, "HTTP transport construction failed");
                        let mut data = JobData::minimal(&self.config.job_url, "http");
                        data.metadata.notes.push(format!("transport unavailable: {e}"));
                        data
                    }
                }
            }
        }
    }

    /// Run the pipeline against any transport. Used directly by tests
    /// and by callers that manage their own transport lifecycle.
    pub async fn retrieve_with_fetcher(&self, fetcher: &dyn PageFetcher) -> JobData {
        let url = &self.config.job_url;
        info!(url = %url, agent = fetcher.name(), "retrieval starting");

        match self.run(fetcher).await {
            Ok(data) => {
                info!(url = %url, title = %data.job.title, "retrieval complete");
                data
            }
            Err(e) => {
                warn!(url = %url, error = %e, "retrieval degraded to minimal record");
                let mut data = JobData::minimal(url, fetcher.name());
                data.metadata.notes.push(format!("retrieval failed: {e}"));
                data
            }
        }
    }

    async fn run(&self, fetcher: &dyn PageFetcher) -> Result<JobData> {
        let page = fetcher.fetch_html(&self.config.job_url).await?;

        let extracted = extract_job(&page.html, &self.config.job_url);
        let enrichment = enrich_company(fetcher, &extracted.company_seed, &page.html).await;

        let mut metadata = Metadata::new(fetcher.name());
        metadata.notes.extend(enrichment.notes);

        let mut data = JobData {
            job: extracted.job,
            company: enrichment.company,
            metadata,
        };
        normalize(&mut data);
        Ok(schema::validate(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockFetcher;

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_minimal() {
        let retriever = Retriever::new(RetrieverConfig::new("https://jobs.example/1"));
        let fetcher = MockFetcher::new();

        let data = retriever.retrieve_with_fetcher(&fetcher).await;

        assert_eq!(data.job.source_url, "https://jobs.example/1");
        assert_eq!(data.metadata.agent, "mock");
        assert!(data.metadata.notes.iter().any(|n| n.contains("retrieval failed")));
    }

    #[tokio::test]
    async fn test_enrichment_notes_surface_on_success() {
        let retriever = Retriever::new(RetrieverConfig::new("https://jobs.example/2"));
        let fetcher = MockFetcher::new()
            .with_page("https://jobs.example/2", "<html><body><h1>Backend Engineer</h1></body></html>");

        let data = retriever.retrieve_with_fetcher(&fetcher).await;

        assert_eq!(data.job.title, "Backend Engineer");
        assert!(!data.metadata.notes.is_empty());
    }
}
