//! LinkedIn enrichment source.
//!
//! Single attempt, no retry. LinkedIn frequently answers with a
//! sign-in or join wall; those pages are rejected and leave no trace in
//! `data_sources`.

use tracing::{debug, warn};

use crate::enrich::patterns;
use crate::fetch::PageFetcher;
use crate::types::Company;

/// Build the company-page URL for a company name.
pub fn company_url(name: &str) -> String {
    let slug = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>();
    let slug = slug.split('-').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("-");
    format!("https://www.linkedin.com/company/{slug}")
}

/// True when a page title reads as a login or join wall.
fn is_auth_wall(title: &str) -> bool {
    let lowered = title.to_lowercase();
    lowered.contains("sign in")
        || lowered.contains("sign up")
        || lowered.contains("join linkedin")
        || lowered.contains("log in")
}

/// Fetch and fold in the LinkedIn company page for `company.name`.
///
/// Returns whether the page was accepted.
pub async fn enrich_from_linkedin(fetcher: &dyn PageFetcher, company: &mut Company) -> bool {
    if company.name.is_empty() {
        return false;
    }
    let url = company_url(&company.name);

    let page = match fetcher.fetch_html(&url).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %url, error = %e, "linkedin fetch failed");
            return false;
        }
    };

    let title = page.title.clone().unwrap_or_else(|| page_title(&page.html));
    if is_auth_wall(&title) {
        debug!(url = %url, title = %title, "linkedin auth wall, skipping");
        return false;
    }

    company.record_source(&page.url);
    company.linkedin_url = page.url.clone();

    if company.about_summary.is_empty() {
        if let Some(description) = patterns::meta_description(&page.html) {
            company.about_summary = description;
        }
    }
    true
}

fn page_title(html: &str) -> String {
    regex::Regex::new(r"(?is)<title[^>]*>(.*?)</title>")
        .unwrap()
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| crate::text::clean_text(m.as_str()))
        .unwrap_or_default()
}
