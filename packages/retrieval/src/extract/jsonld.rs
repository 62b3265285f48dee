//! JSON-LD structured-data extraction.
//!
//! Job boards that embed a schema.org `JobPosting` block give us a
//! semi-reliable machine-readable record; it always takes precedence
//! over DOM heuristics. Malformed blocks are skipped, never fatal.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::text::strip_tags;
use crate::types::{CompanySeed, Job};

/// Find the first `JobPosting` object in any `ld+json` script block.
///
/// Searches the top level, array elements, and an optional `@graph`
/// array. First match wins.
pub fn find_job_posting(html: &str) -> Option<Value> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();

    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        if let Some(posting) = locate_job_posting(&value) {
            return Some(posting.clone());
        }
    }
    None
}

fn locate_job_posting(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.iter().find_map(locate_job_posting),
        Value::Object(map) => {
            if is_job_posting(value) {
                return Some(value);
            }
            map.get("@graph").and_then(locate_job_posting)
        }
        _ => None,
    }
}

fn is_job_posting(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t == "JobPosting",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("JobPosting")),
        _ => false,
    }
}

/// Map JobPosting fields onto a partial [`Job`].
///
/// The raw blob is kept in `raw_schema_org` for audit/debug. Dates are
/// left as-is here; the normalizer parses them to ISO-8601 or passes the
/// original through.
pub fn apply_job_posting(job: &mut Job, posting: &Value) {
    job.raw_schema_org = Some(posting.clone());

    if let Some(title) = string_field(posting, "title") {
        job.title = title;
    }
    if let Some(description) = string_field(posting, "description") {
        job.description_text = strip_tags(&description);
    }
    if let Some(date) = string_field(posting, "datePosted") {
        job.posting_date = date;
    }
    if let Some(date) = string_field(posting, "validThrough") {
        job.application_deadline = date;
    }

    apply_location(job, posting);
    apply_salary(job, posting);
    apply_employment_type(job, posting);
    apply_requirements(job, posting);

    if job.hard_skills.is_empty() {
        job.hard_skills = string_list(posting.get("skills"));
    }
    if job.responsibilities.is_empty() {
        job.responsibilities = string_list(posting.get("responsibilities"));
    }

    apply_remote_inference(job, posting);
}

/// Hiring-organization name and URL, which seed the company enricher.
pub fn hiring_organization(posting: &Value) -> CompanySeed {
    let org = posting.get("hiringOrganization");
    CompanySeed {
        name: org
            .and_then(|o| o.get("name"))
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        website: org
            .and_then(|o| o.get("url").or_else(|| o.get("sameAs")))
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    }
}

fn apply_location(job: &mut Job, posting: &Value) {
    // jobLocation may be a single Place or an array of them.
    let place = match posting.get("jobLocation") {
        Some(Value::Array(places)) => places.first(),
        Some(place) => Some(place),
        None => None,
    };
    let Some(address) = place.and_then(|p| p.get("address")) else {
        return;
    };

    if let Some(city) = string_field(address, "addressLocality") {
        job.location.city = city;
    }
    if let Some(region) = string_field(address, "addressRegion") {
        job.location.region = region;
    }
    // addressCountry is either a string or a {name} object
    match address.get("addressCountry") {
        Some(Value::String(country)) => job.location.country = country.trim().to_string(),
        Some(obj) => {
            if let Some(name) = string_field(obj, "name") {
                job.location.country = name;
            }
        }
        None => {}
    }
}

fn apply_salary(job: &mut Job, posting: &Value) {
    let Some(base) = posting.get("baseSalary") else {
        return;
    };

    if let Some(currency) = string_field(base, "currency") {
        job.salary.currency = currency;
    }

    let Some(value) = base.get("value") else {
        return;
    };
    let min = number_field(value, "minValue");
    let max = number_field(value, "maxValue");
    let single = number_field(value, "value");

    job.salary.min = min.or(single);
    job.salary.max = max.or(single);
    if let Some(unit) = string_field(value, "unitText") {
        job.salary.period = unit;
    }
}

fn apply_employment_type(job: &mut Job, posting: &Value) {
    let employment = match posting.get("employmentType") {
        Some(Value::Array(types)) => types.first().and_then(Value::as_str).map(str::to_string),
        Some(Value::String(t)) => Some(t.clone()),
        _ => None,
    };
    if let Some(t) = employment {
        job.contract_type = t;
    }
}

fn apply_requirements(job: &mut Job, posting: &Value) {
    match posting.get("experienceRequirements") {
        Some(Value::String(text)) => {
            if let Some(years) = years_from_text(text) {
                job.required_experience.min_years = Some(years);
            }
        }
        Some(obj) => {
            if let Some(months) = number_field(obj, "monthsOfExperience") {
                job.required_experience.min_years = Some(months / 12.0);
            }
        }
        None => {}
    }

    match posting.get("educationRequirements") {
        Some(Value::String(text)) => job.required_education = text.trim().to_string(),
        Some(obj) => {
            if let Some(category) = string_field(obj, "credentialCategory") {
                job.required_education = category;
            }
        }
        None => {}
    }
}

fn apply_remote_inference(job: &mut Job, posting: &Value) {
    if !job.work_model.is_empty() {
        return;
    }
    let location_type = string_field(posting, "jobLocationType").unwrap_or_default();
    let description = job.description_text.to_lowercase();
    if location_type.eq_ignore_ascii_case("TELECOMMUTE")
        || description.contains("remote")
        || description.contains("telecommute")
    {
        job.work_model = "remote".to_string();
        if job.location.remote_policy.is_empty() {
            job.location.remote_policy = "remote".to_string();
        }
    }
}

fn years_from_text(text: &str) -> Option<f64> {
    let pattern = regex::Regex::new(r"(\d+)\s*\+?\s*year").unwrap();
    pattern
        .captures(&text.to_lowercase())
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn number_field(value: &Value, key: &str) -> Option<f64> {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        // Some boards emit numbers as strings
        Some(Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}
