//! Regex and lexicon passes shared by all enrichment sources.
//!
//! Every function here is pure over page text; the source modules decide
//! which fields to overwrite and when.

use chrono::{Datelike, Utc};

use crate::text::clean_text;
use crate::types::{CompanyLocation, EmployeeRange};

/// Industry keywords, checked in order; first match wins. More specific
/// entries come before the generic ones they overlap with ("fintech"
/// before "financial").
pub const INDUSTRIES: &[(&str, &str)] = &[
    ("fintech", "Fintech"),
    ("financial services", "Financial services"),
    ("financial", "Financial services"),
    ("banking", "Banking"),
    ("insurance", "Insurance"),
    ("healthtech", "Healthtech"),
    ("healthcare", "Healthcare"),
    ("biotech", "Biotechnology"),
    ("pharmaceutical", "Pharmaceuticals"),
    ("e-commerce", "E-commerce"),
    ("ecommerce", "E-commerce"),
    ("retail", "Retail"),
    ("edtech", "Edtech"),
    ("education", "Education"),
    ("cybersecurity", "Cybersecurity"),
    ("artificial intelligence", "Artificial intelligence"),
    ("machine learning", "Artificial intelligence"),
    ("cloud computing", "Cloud computing"),
    ("saas", "SaaS"),
    ("software", "Software"),
    ("telecommunications", "Telecommunications"),
    ("logistics", "Logistics"),
    ("transportation", "Transportation"),
    ("real estate", "Real estate"),
    ("energy", "Energy"),
    ("manufacturing", "Manufacturing"),
    ("consulting", "Consulting"),
    ("media", "Media"),
    ("gaming", "Gaming"),
    ("travel", "Travel"),
    ("hospitality", "Hospitality"),
    ("nonprofit", "Nonprofit"),
];

/// Culture-value keywords scanned on company subpages.
pub const CULTURE_VALUES: &[&str] = &[
    "innovation",
    "integrity",
    "transparency",
    "diversity",
    "inclusion",
    "collaboration",
    "customer focus",
    "excellence",
    "ownership",
    "sustainability",
    "work-life balance",
    "continuous learning",
];

/// Benefit keywords scanned on company subpages.
pub const BENEFITS: &[&str] = &[
    "health insurance",
    "dental",
    "vision",
    "401k",
    "pension",
    "equity",
    "stock options",
    "remote work",
    "flexible hours",
    "unlimited pto",
    "paid time off",
    "parental leave",
    "gym membership",
    "learning budget",
    "home office stipend",
];

pub const MAX_CULTURE_VALUES: usize = 8;
pub const MAX_BENEFITS: usize = 10;

/// First matching industry keyword, in table order.
pub fn detect_industry(text: &str) -> Option<String> {
    let haystack = text.to_lowercase();
    INDUSTRIES
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, label)| label.to_string())
}

/// Employee head-count from "N-M employees", "N+ employees", "team of N",
/// or qualitative size words.
pub fn detect_employee_range(text: &str) -> Option<EmployeeRange> {
    let range = regex::Regex::new(r"(?i)(\d{1,3}(?:,\d{3})*)\s*(?:-|–|to)\s*(\d{1,3}(?:,\d{3})*)\s*employees").unwrap();
    if let Some(cap) = range.captures(text) {
        return Some(EmployeeRange {
            min: parse_count(cap.get(1)?.as_str()),
            max: parse_count(cap.get(2)?.as_str()),
        });
    }

    let open_ended = regex::Regex::new(r"(?i)(\d{1,3}(?:,\d{3})*)\+\s*employees").unwrap();
    if let Some(cap) = open_ended.captures(text) {
        return Some(EmployeeRange {
            min: parse_count(cap.get(1)?.as_str()),
            max: None,
        });
    }

    let team_of = regex::Regex::new(r"(?i)team of (\d{1,3}(?:,\d{3})*)").unwrap();
    if let Some(cap) = team_of.captures(text) {
        let count = parse_count(cap.get(1)?.as_str());
        return Some(EmployeeRange {
            min: count,
            max: count,
        });
    }

    let lowered = text.to_lowercase();
    if lowered.contains("small team") || lowered.contains("small company") {
        return Some(EmployeeRange {
            min: Some(1),
            max: Some(50),
        });
    }
    if lowered.contains("medium-sized company") || lowered.contains("mid-sized company") {
        return Some(EmployeeRange {
            min: Some(51),
            max: Some(500),
        });
    }
    if lowered.contains("large company") || lowered.contains("large enterprise") {
        return Some(EmployeeRange {
            min: Some(501),
            max: None,
        });
    }

    None
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.replace(',', "").parse().ok()
}

/// Founding year from "founded/established/since/est. YYYY", bounded to
/// [1800, current year].
pub fn detect_founded_year(text: &str) -> Option<i32> {
    let pattern =
        regex::Regex::new(r"(?i)(?:founded|established|since|est\.)\s*(?:in\s*)?(\d{4})").unwrap();
    let year: i32 = pattern.captures(text)?.get(1)?.as_str().parse().ok()?;
    let current = Utc::now().year();
    if (1800..=current).contains(&year) {
        Some(year)
    } else {
        None
    }
}

/// Headquarters location from "headquartered/based/located in City, ...".
pub fn detect_headquarters(text: &str) -> Option<CompanyLocation> {
    let pattern = regex::Regex::new(
        r"(?i)(?:headquartered|based|located)\s+in\s+([A-Z][A-Za-z .'-]+(?:,\s*[A-Z][A-Za-z .'-]+){0,2})",
    )
    .unwrap();
    let captured = pattern.captures(text)?.get(1)?.as_str();

    let parts: Vec<String> = captured
        .split(',')
        .map(clean_text)
        .filter(|part| !part.is_empty())
        .collect();

    let mut location = CompanyLocation::default();
    match parts.len() {
        0 => return None,
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
    Some(location)
}

/// Content of `<meta name="description">` or the OpenGraph equivalent.
pub fn meta_description(html: &str) -> Option<String> {
    let pattern = regex::Regex::new(
        r#"(?is)<meta[^>]+(?:name=["']description["']|property=["']og:description["'])[^>]+content=["']([^"']{20,})["']"#,
    )
    .unwrap();
    let reversed = regex::Regex::new(
        r#"(?is)<meta[^>]+content=["']([^"']{20,})["'][^>]+(?:name=["']description["']|property=["']og:description["'])"#,
    )
    .unwrap();

    pattern
        .captures(html)
        .or_else(|| reversed.captures(html))
        .and_then(|cap| cap.get(1))
        .map(|m| clean_text(m.as_str()))
}

/// First paragraph of body text in the 100..=500 char range, as a
/// stand-in summary when no meta description exists.
pub fn representative_paragraph(html: &str) -> Option<String> {
    let paragraph = regex::Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap();
    for cap in paragraph.captures_iter(html) {
        let text = crate::text::strip_tags(cap.get(1)?.as_str());
        if (100..=500).contains(&text.chars().count()) {
            return Some(text);
        }
    }
    None
}

/// Scan text for lexicon keywords, returning them capped in table order.
pub fn scan_keywords(text: &str, lexicon: &[&str], cap: usize) -> Vec<String> {
    let haystack = text.to_lowercase();
    lexicon
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .take(cap)
        .map(|keyword| keyword.to_string())
        .collect()
}
