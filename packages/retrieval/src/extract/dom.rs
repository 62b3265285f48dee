//! DOM-based fallback extraction.
//!
//! Used for every field the JSON-LD pass left empty. Each field has an
//! ordered list of CSS-selector candidates, from job-board-specific to
//! generic; the first non-empty, length-plausible match wins.

use scraper::{Html, Selector};

use crate::text::clean_text;
use crate::types::JobLocation;

/// Title candidates, most specific first.
const TITLE_SELECTORS: &[&str] = &[
    "h1.top-card-layout__title",
    ".jobs-unified-top-card__job-title",
    "h1[data-test-id='job-title']",
    "h1[class*='job-title']",
    "h1[class*='title']",
    ".job-title",
    "[class*='posting-title']",
    "h1",
];

const DESCRIPTION_SELECTORS: &[&str] = &[
    ".jobs-description__content",
    ".show-more-less-html__markup",
    "[data-test-id='job-description']",
    "[class*='job-description']",
    "#job-details",
    "[class*='description']",
    "article",
    "main",
];

const LOCATION_SELECTORS: &[&str] = &[
    "[data-test-id='job-location']",
    ".jobs-unified-top-card__bullet",
    ".top-card-layout__first-subline",
    "[class*='job-location']",
    "[class*='location']",
];

const COMPANY_NAME_SELECTORS: &[&str] = &[
    ".jobs-unified-top-card__company-name",
    "[data-test-id='company-name']",
    "[class*='company-name']",
    "[class*='employer']",
    "[class*='organization']",
    "a[class*='company']",
];

/// Plausible job titles are 5–200 characters.
pub fn extract_title(document: &Html) -> Option<String> {
    first_matching_text(document, TITLE_SELECTORS, 5, 200)
}

/// Plausible descriptions are longer than 100 characters.
pub fn extract_description(document: &Html) -> Option<String> {
    first_matching_text(document, DESCRIPTION_SELECTORS, 101, usize::MAX)
}

/// Any non-empty location text is accepted and comma-split.
pub fn extract_location(document: &Html) -> Option<JobLocation> {
    first_matching_text(document, LOCATION_SELECTORS, 1, 200).map(|text| parse_location(&text))
}

/// Company name, for seeding enrichment when JSON-LD had none.
pub fn extract_company_name(document: &Html) -> Option<String> {
    first_matching_text(document, COMPANY_NAME_SELECTORS, 2, 100)
}

/// First selector whose first match yields text within the length gate.
pub fn first_matching_text(
    document: &Html,
    selectors: &[&str],
    min_len: usize,
    max_len: usize,
) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = clean_text(&element.text().collect::<Vec<_>>().join(" "));
            if text.len() >= min_len && text.len() <= max_len {
                return Some(text);
            }
        }
    }
    None
}

/// Comma-split free-text location into city/region/country; a "remote"
/// substring anywhere flags the remote policy.
pub fn parse_location(text: &str) -> JobLocation {
    let mut location = JobLocation::default();
    if text.to_lowercase().contains("remote") {
        location.remote_policy = "remote".to_string();
    }

    let parts: Vec<String> = text
        .split(',')
        .map(|part| clean_text(part))
        .filter(|part| !part.is_empty() && !part.eq_ignore_ascii_case("remote"))
        .collect();

    match parts.len() {
        0 => {}
        1 => location.city = parts[0].clone(),
        2 => {
            location.city = parts[0].clone();
            location.country = parts[1].clone();
        }
        _ => {
            location.city = parts[0].clone();
            location.region = parts[1].clone();
            location.country = parts[2].clone();
        }
    }
    location
}

/// Visible page text with scripts and styles removed, for the lexicon
/// and regex passes.
pub fn page_text(html: &str) -> String {
    let script_pattern = regex::Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = regex::Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    let cleaned = script_pattern.replace_all(html, " ");
    let cleaned = style_pattern.replace_all(&cleaned, " ");

    let document = Html::parse_document(&cleaned);
    let body_selector = Selector::parse("body").unwrap();
    match document.select(&body_selector).next() {
        Some(body) => clean_text(&body.text().collect::<Vec<_>>().join(" ")),
        None => crate::text::strip_tags(html),
    }
}
