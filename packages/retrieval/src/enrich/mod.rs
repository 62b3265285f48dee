//! Progressive company enrichment.
//!
//! Sources are tried in a fixed priority order (job page, company
//! website, Wikipedia, LinkedIn). Each source is independently guarded;
//! a failing or irrelevant source leaves the record unchanged from that
//! step and the pipeline moves on.

pub mod linkedin;
pub mod patterns;
pub mod website;
pub mod wikipedia;

use tracing::debug;

use crate::fetch::PageFetcher;
use crate::types::{Company, CompanySeed};

/// The enriched company plus human-readable notes on which sources were
/// consulted or skipped.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub company: Company,
    pub notes: Vec<String>,
}

/// Build a company record from every available source, best-effort.
pub async fn enrich_company(
    fetcher: &dyn PageFetcher,
    seed: &CompanySeed,
    job_page_html: &str,
) -> Enrichment {
    let mut company = Company::default();
    let mut notes = Vec::new();

    if let Some(name) = &seed.name {
        company.name = name.clone();
    }

    // Website: caller-provided hiring-organization URL wins, anchor
    // scanning over the job page is the fallback.
    if let Some(website) = &seed.website {
        company.website = website.clone();
    } else if let Some(website) = website::discover_website(job_page_html, &company.name) {
        debug!(website = %website, "discovered company website from job page");
        company.website = website;
    }

    if company.website.is_empty() {
        notes.push("company website not found".to_string());
    } else {
        website::enrich_from_site(fetcher, &mut company).await;
    }

    if !wikipedia::enrich_from_wikipedia(fetcher, &mut company).await {
        notes.push("wikipedia source unavailable or irrelevant".to_string());
    }
    if !linkedin::enrich_from_linkedin(fetcher, &mut company).await {
        notes.push("linkedin source unavailable or rejected".to_string());
    }

    Enrichment { company, notes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockFetcher;

    fn seed(name: &str) -> CompanySeed {
        CompanySeed {
            name: Some(name.to_string()),
            website: None,
        }
    }

    #[tokio::test]
    async fn test_all_sources_down_still_returns_record() {
        let fetcher = MockFetcher::new();
        let enrichment = enrich_company(&fetcher, &seed("Acme"), "<html></html>").await;

        assert_eq!(enrichment.company.name, "Acme");
        assert!(enrichment.company.data_sources.is_empty());
        assert_eq!(enrichment.notes.len(), 3);
    }

    #[tokio::test]
    async fn test_wikipedia_failure_does_not_block_linkedin() {
        let fetcher = MockFetcher::new()
            .with_failure("https://en.wikipedia.org/wiki/Acme")
            .with_page(
                "https://www.linkedin.com/company/acme",
                r#"<html><head><title>Acme | LinkedIn</title>
                   <meta name="description" content="Acme designs rocketry for ambitious desert predators.">
                   </head><body></body></html>"#,
            );

        let enrichment = enrich_company(&fetcher, &seed("Acme"), "<html></html>").await;

        assert_eq!(
            enrichment.company.linkedin_url,
            "https://www.linkedin.com/company/acme"
        );
        assert!(enrichment.company.wikipedia_url.is_empty());
    }

    #[tokio::test]
    async fn test_seed_website_preferred_over_discovery() {
        let fetcher = MockFetcher::new().with_page("https://acme.example", "<html></html>");
        let job_page = r#"<a href="https://other.example">Visit our website</a>"#;

        let enrichment = enrich_company(
            &fetcher,
            &CompanySeed {
                name: Some("Acme".to_string()),
                website: Some("https://acme.example".to_string()),
            },
            job_page,
        )
        .await;

        assert_eq!(enrichment.company.website, "https://acme.example");
        assert_eq!(
            enrichment.company.data_sources,
            vec!["https://acme.example".to_string()]
        );
    }
}
