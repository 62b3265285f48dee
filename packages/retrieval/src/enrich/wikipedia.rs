//! Wikipedia enrichment source.
//!
//! Single attempt, no retry; the page is accepted only when its text
//! reads like a company article. Rejected pages are never recorded in
//! `data_sources`.

use tracing::{debug, warn};

use crate::enrich::patterns;
use crate::extract::dom::page_text;
use crate::fetch::PageFetcher;
use crate::types::Company;

/// Build the article URL for a company name.
pub fn article_url(name: &str) -> String {
    let slug = name.trim().split_whitespace().collect::<Vec<_>>().join("_");
    format!("https://en.wikipedia.org/wiki/{slug}")
}

/// True when the article text plausibly describes a company.
fn is_relevant(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("company") || lowered.contains("corporation") || lowered.contains("founded")
}

/// Fetch and fold in the Wikipedia article for `company.name`.
///
/// Returns whether the article was accepted.
pub async fn enrich_from_wikipedia(fetcher: &dyn PageFetcher, company: &mut Company) -> bool {
    if company.name.is_empty() {
        return false;
    }
    let url = article_url(&company.name);

    let page = match fetcher.fetch_html(&url).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %url, error = %e, "wikipedia fetch failed");
            return false;
        }
    };

    let text = page_text(&page.html);
    if !is_relevant(&text) {
        debug!(url = %url, "wikipedia article not about a company, skipping");
        return false;
    }

    company.record_source(&page.url);
    company.wikipedia_url = page.url.clone();

    if company.founded_year.is_none() {
        company.founded_year = patterns::detect_founded_year(&text);
    }
    if company.industry.is_empty() {
        if let Some(industry) = patterns::detect_industry(&text) {
            company.industry = industry;
        }
    }
    // A fuller article lead may replace a thin meta-description summary.
    if let Some(paragraph) = patterns::representative_paragraph(&page.html) {
        if paragraph.len() > company.about_summary.len() {
            company.about_summary = paragraph;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockFetcher;

    #[test]
    fn test_article_url_underscores() {
        assert_eq!(
            article_url("Acme Rocket Corp"),
            "https://en.wikipedia.org/wiki/Acme_Rocket_Corp"
        );
    }

    #[tokio::test]
    async fn test_relevant_article_accepted() {
        let body = format!(
            "<p>{}</p>",
            "Acme is an American corporation founded in 1952, known for elaborate rocketry products. ".repeat(2)
        );
        let fetcher = MockFetcher::new().with_page(
            "https://en.wikipedia.org/wiki/Acme",
            format!("<html><body>{body}</body></html>"),
        );

        let mut company = Company {
            name: "Acme".to_string(),
            ..Default::default()
        };
        let accepted = enrich_from_wikipedia(&fetcher, &mut company).await;

        assert!(accepted);
        assert_eq!(company.wikipedia_url, "https://en.wikipedia.org/wiki/Acme");
        assert_eq!(company.founded_year, Some(1952));
        assert!(company
            .data_sources
            .contains(&"https://en.wikipedia.org/wiki/Acme".to_string()));
    }

    #[tokio::test]
    async fn test_irrelevant_article_rejected_without_trace() {
        let fetcher = MockFetcher::new().with_page(
            "https://en.wikipedia.org/wiki/Acme",
            "<html><body><p>A river in a fictional landscape, notable for waterfalls.</p></body></html>",
        );

        let mut company = Company {
            name: "Acme".to_string(),
            ..Default::default()
        };
        let accepted = enrich_from_wikipedia(&fetcher, &mut company).await;

        assert!(!accepted);
        assert!(company.data_sources.is_empty());
        assert!(company.wikipedia_url.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_silent() {
        let fetcher = MockFetcher::new().with_failure("https://en.wikipedia.org/wiki/Acme");
        let mut company = Company {
            name: "Acme".to_string(),
            ..Default::default()
        };
        assert!(!enrich_from_wikipedia(&fetcher, &mut company).await);
        assert!(company.data_sources.is_empty());
    }
}
