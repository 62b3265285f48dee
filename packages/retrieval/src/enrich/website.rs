//! Company-website discovery and enrichment.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::enrich::patterns;
use crate::extract::dom::page_text;
use crate::fetch::PageFetcher;
use crate::text::clean_text;
use crate::types::Company;

/// Hosts that are job boards or aggregators, never the company itself.
const JOB_BOARD_HOSTS: &[&str] = &[
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "monster.com",
    "ziprecruiter.com",
    "lever.co",
    "greenhouse.io",
    "workable.com",
    "stepstone.de",
    "xing.com",
    "wikipedia.org",
    "facebook.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "youtube.com",
];

/// Conventional company subpages tried after the homepage.
const SUBPAGE_PATHS: &[&str] = &["/about", "/company", "/about-us", "/careers"];

/// Scan job-page anchors for a plausible company-website link.
///
/// A link qualifies when its text suggests an official site ("website",
/// "visit", "company") or its href contains the whitespace-stripped
/// company name, and its host is not a job board or social network.
pub fn discover_website(job_page_html: &str, company_name: &str) -> Option<String> {
    let document = Html::parse_document(job_page_html);
    let anchors = Selector::parse("a[href]").ok()?;

    let compact_name: String = company_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.starts_with("http") {
            continue;
        }
        let Ok(parsed) = url::Url::parse(href) else {
            continue;
        };
        let Some(host) = parsed.host_str() else {
            continue;
        };
        if JOB_BOARD_HOSTS.iter().any(|board| host.ends_with(board)) {
            continue;
        }

        let text = clean_text(&anchor.text().collect::<Vec<_>>().join(" ")).to_lowercase();
        let text_suggests_site = text.contains("website")
            || text.contains("visit")
            || text.contains("company site")
            || text.contains("homepage");
        let href_contains_name = !compact_name.is_empty()
            && compact_name.len() >= 3
            && href.to_lowercase().replace(['-', '_', '.'], "").contains(&compact_name);

        if text_suggests_site || href_contains_name {
            return Some(href.to_string());
        }
    }
    None
}

/// Enrich a company from its own website: homepage plus conventional
/// subpages. Every page actually fetched is recorded in `data_sources`.
pub async fn enrich_from_site(fetcher: &dyn PageFetcher, company: &mut Company) {
    let website = company.website.clone();
    if website.is_empty() {
        return;
    }

    let homepage = match fetcher.fetch_html(&website).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %website, error = %e, "company homepage unreachable");
            return;
        }
    };
    company.record_source(&homepage.url);
    apply_page(company, &homepage.html, false);

    let base = website.trim_end_matches('/');
    let subpage_urls: Vec<String> = SUBPAGE_PATHS
        .iter()
        .map(|path| format!("{base}{path}"))
        .collect();

    for page in fetcher.fetch_many(&subpage_urls).await {
        debug!(url = %page.url, "company subpage fetched");
        company.record_source(&page.url);
        apply_page(company, &page.html, true);
    }
}

/// Fold one company page into the record, filling only unset fields.
/// Subpages additionally contribute a summary paragraph and the culture
/// and benefit keyword scans.
fn apply_page(company: &mut Company, html: &str, is_subpage: bool) {
    let text = page_text(html);

    if company.about_summary.is_empty() {
        if let Some(description) = patterns::meta_description(html) {
            company.about_summary = description;
        }
    }
    if company.industry.is_empty() {
        if let Some(industry) = patterns::detect_industry(&text) {
            company.industry = industry;
        }
    }
    if company.size_employees == Default::default() {
        if let Some(range) = patterns::detect_employee_range(&text) {
            company.size_employees = range;
        }
    }
    if company.founded_year.is_none() {
        company.founded_year = patterns::detect_founded_year(&text);
    }
    if company.hq_location == Default::default() {
        if let Some(hq) = patterns::detect_headquarters(&text) {
            company.hq_location = hq;
        }
    }

    if is_subpage {
        if company.about_summary.is_empty() {
            if let Some(paragraph) = patterns::representative_paragraph(html) {
                company.about_summary = paragraph;
            }
        }
        if company.work_culture.values.is_empty() {
            company.work_culture.values = patterns::scan_keywords(
                &text,
                patterns::CULTURE_VALUES,
                patterns::MAX_CULTURE_VALUES,
            );
        }
        if company.work_culture.benefits.is_empty() {
            company.work_culture.benefits =
                patterns::scan_keywords(&text, patterns::BENEFITS, patterns::MAX_BENEFITS);
        }
    }
}
