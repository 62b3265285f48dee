//! Canonicalization of extracted and enriched records.
//!
//! Pure, deterministic, total. Normalization never removes a field; it
//! only canonicalizes and caps values already present. Running it twice
//! is a no-op the second time: every canonical form is a fixed point of
//! its own lookup.

pub mod tables;

use chrono::NaiveDate;

use crate::text::{clean_text, truncate_chars};
use crate::types::{Company, Job, JobData};

/// Free-text fields are capped at this many characters.
const MAX_TEXT_LEN: usize = 1000;
/// General string arrays are capped at this many entries.
const MAX_LIST_LEN: usize = 50;
/// Skills arrays are capped tighter.
const MAX_SKILLS_LEN: usize = 30;

/// Country name or alias to ISO-2; unknown input is upper-cased.
pub fn normalize_country(raw: &str) -> String {
    let trimmed = clean_text(raw);
    if trimmed.is_empty() {
        return trimmed;
    }
    let key = trimmed.to_lowercase();
    tables::COUNTRIES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| trimmed.to_uppercase())
}

/// Currency symbol or word to ISO-4217; unknown input is upper-cased.
pub fn normalize_currency(raw: &str) -> String {
    let trimmed = clean_text(raw);
    if trimmed.is_empty() {
        return trimmed;
    }
    let key = trimmed.to_lowercase();
    tables::CURRENCIES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| trimmed.to_uppercase())
}

/// Pay period to one of {year, month, week, day, hour}; unmatched input
/// passes through unchanged.
pub fn normalize_period(raw: &str) -> String {
    let trimmed = clean_text(raw);
    let key = trimmed.to_lowercase();
    tables::PERIODS
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(trimmed)
}

fn substring_lookup(raw: &str, table: &[(&str, &str)]) -> String {
    let trimmed = clean_text(raw);
    let key = trimmed.to_lowercase();
    table
        .iter()
        .find(|(needle, _)| key.contains(needle))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(trimmed)
}

/// Contract type via ordered substring match; unmatched passes through.
pub fn normalize_contract_type(raw: &str) -> String {
    substring_lookup(raw, tables::CONTRACT_TYPES)
}

/// Work model via ordered substring match; unmatched passes through.
pub fn normalize_work_model(raw: &str) -> String {
    substring_lookup(raw, tables::WORK_MODELS)
}

/// Seniority via ordered substring match; unmatched passes through.
pub fn normalize_seniority(raw: &str) -> String {
    substring_lookup(raw, tables::SENIORITIES)
}

/// Trim, collapse whitespace, strip control characters, cap length.
pub fn normalize_text(raw: &str) -> String {
    truncate_chars(&clean_text(raw), MAX_TEXT_LEN)
}

/// Trim entries, drop empties, case-sensitive dedup, cap at 50.
pub fn normalize_string_list(list: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    list.iter()
        .map(|entry| normalize_text(entry))
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.clone()))
        .take(MAX_LIST_LEN)
        .collect()
}

/// Skills: canonical capitalization for well-known technologies,
/// case-insensitive dedup, cap at 30.
pub fn normalize_skills(list: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    list.iter()
        .map(|entry| {
            let trimmed = clean_text(entry);
            let key = trimmed.to_lowercase();
            tables::SKILL_CAPS
                .iter()
                .find(|(alias, _)| *alias == key)
                .map(|(_, canonical)| canonical.to_string())
                .unwrap_or(trimmed)
        })
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .take(MAX_SKILLS_LEN)
        .collect()
}

/// Prefix bare `//` with `https:` and schemeless strings with
/// `https://`; empty input stays empty.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = clean_text(raw);
    if trimmed.is_empty() || trimmed.contains("://") {
        trimmed
    } else if trimmed.starts_with("//") {
        format!("https:{trimmed}")
    } else {
        format!("https://{trimmed}")
    }
}

/// Best-effort date canonicalization to `YYYY-MM-DD`; unparsable input
/// passes through unchanged.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = clean_text(raw);
    if trimmed.is_empty() {
        return trimmed;
    }

    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(&trimmed) {
        return datetime.format("%Y-%m-%d").to_string();
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y", "%B %d, %Y", "%B %d %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    trimmed
}

/// Normalize a job record in place.
pub fn normalize_job(job: &mut Job) {
    job.source_url = normalize_url(&job.source_url);
    job.title = normalize_text(&job.title);
    job.role_seniority = normalize_seniority(&job.role_seniority);
    job.department_function = normalize_text(&job.department_function);
    job.contract_type = normalize_contract_type(&job.contract_type);
    job.work_model = normalize_work_model(&job.work_model);

    job.location.city = normalize_text(&job.location.city);
    job.location.region = normalize_text(&job.location.region);
    job.location.country = normalize_country(&job.location.country);
    job.location.remote_policy = normalize_work_model(&job.location.remote_policy);

    job.salary.currency = normalize_currency(&job.salary.currency);
    job.salary.period = normalize_period(&job.salary.period);
    if let (Some(min), Some(max)) = (job.salary.min, job.salary.max) {
        if min > max {
            job.salary.min = Some(max);
            job.salary.max = Some(min);
        }
    }
    if let (Some(min), Some(max)) = (job.required_experience.min_years, job.required_experience.max_years) {
        if min > max {
            job.required_experience.min_years = Some(max);
            job.required_experience.max_years = Some(min);
        }
    }

    job.required_education = normalize_text(&job.required_education);
    job.languages = normalize_string_list(&job.languages);
    job.hard_skills = normalize_skills(&job.hard_skills);
    job.soft_skills = normalize_skills(&job.soft_skills);
    job.tech_stack = normalize_skills(&job.tech_stack);
    job.responsibilities = normalize_string_list(&job.responsibilities);
    job.nice_to_have = normalize_string_list(&job.nice_to_have);
    job.posting_date = normalize_date(&job.posting_date);
    job.application_deadline = normalize_date(&job.application_deadline);
    job.description_text = normalize_text(&job.description_text);
    job.detected_duplicates = normalize_string_list(&job.detected_duplicates);
}

/// Normalize a company record in place.
pub fn normalize_company(company: &mut Company) {
    company.name = normalize_text(&company.name);
    company.aka = normalize_string_list(&company.aka);
    company.website = normalize_url(&company.website);
    company.linkedin_url = normalize_url(&company.linkedin_url);
    company.wikipedia_url = normalize_url(&company.wikipedia_url);
    company.industry = normalize_text(&company.industry);
    company.company_type = normalize_text(&company.company_type);

    if let (Some(min), Some(max)) = (company.size_employees.min, company.size_employees.max) {
        if min > max {
            company.size_employees.min = Some(max);
            company.size_employees.max = Some(min);
        }
    }

    company.hq_location.city = normalize_text(&company.hq_location.city);
    company.hq_location.region = normalize_text(&company.hq_location.region);
    company.hq_location.country = normalize_country(&company.hq_location.country);
    for location in &mut company.locations {
        location.city = normalize_text(&location.city);
        location.region = normalize_text(&location.region);
        location.country = normalize_country(&location.country);
    }

    company.work_culture.values = normalize_string_list(&company.work_culture.values);
    company.work_culture.benefits = normalize_string_list(&company.work_culture.benefits);
    company.work_culture.remote_policy = normalize_work_model(&company.work_culture.remote_policy);

    company.funding.status = normalize_text(&company.funding.status);
    company.funding.latest_round = normalize_text(&company.funding.latest_round);
    company.funding.investors = normalize_string_list(&company.funding.investors);

    company.public_ticker = normalize_text(&company.public_ticker);
    company.about_summary = normalize_text(&company.about_summary);
    company.data_sources = company.data_sources.iter().map(|url| normalize_url(url)).collect();
}

/// Normalize a full result in place.
pub fn normalize(data: &mut JobData) {
    normalize_job(&mut data.job);
    normalize_company(&mut data.company);
    data.metadata.agent = normalize_text(&data.metadata.agent);
    data.metadata.notes = data.metadata.notes.iter().map(|note| normalize_text(note)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_country_lookup_and_fallback() {
        assert_eq!(normalize_country("usa"), "US");
        assert_eq!(normalize_country("United States"), "US");
        assert_eq!(normalize_country("Deutschland"), "DE");
        assert_eq!(normalize_country("Wakanda"), "WAKANDA");
        assert_eq!(normalize_country(""), "");
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(normalize_currency("$"), "USD");
        assert_eq!(normalize_currency("€"), "EUR");
        assert_eq!(normalize_currency("pounds"), "GBP");
        assert_eq!(normalize_currency("doubloons"), "DOUBLOONS");
    }

    #[test]
    fn test_period_canonicalization() {
        assert_eq!(normalize_period("annually"), "year");
        assert_eq!(normalize_period("hr"), "hour");
        assert_eq!(normalize_period("fortnight"), "fortnight");
    }

    #[test]
    fn test_contract_and_work_model() {
        assert_eq!(normalize_contract_type("Full Time position"), "full-time");
        assert_eq!(normalize_contract_type("Summer Internship"), "internship");
        assert_eq!(normalize_contract_type("equity only"), "equity only");
        assert_eq!(normalize_work_model("Hybrid remote"), "hybrid");
        assert_eq!(normalize_work_model("100% Remote"), "remote");
    }

    #[test]
    fn test_seniority_passthrough() {
        assert_eq!(normalize_seniority("Senior"), "senior");
        assert_eq!(normalize_seniority("wizard"), "wizard");
    }

    #[test]
    fn test_skills_canonical_caps_and_ci_dedup() {
        let raw: Vec<String> = vec!["javascript", "JavaScript", "JAVASCRIPT", "nodejs", "Fortran"]
            .into_iter()
            .map(String::from)
            .collect();
        let skills = normalize_skills(&raw);
        assert_eq!(skills, vec!["JavaScript", "Node.js", "Fortran"]);
    }

    #[test]
    fn test_skills_capped_at_30() {
        let raw: Vec<String> = (0..40).map(|i| format!("skill-{i}")).collect();
        assert_eq!(normalize_skills(&raw).len(), 30);
    }

    #[test]
    fn test_url_prefixing() {
        assert_eq!(normalize_url("//acme.example"), "https://acme.example");
        assert_eq!(normalize_url("acme.example"), "https://acme.example");
        assert_eq!(normalize_url("http://acme.example"), "http://acme.example");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(normalize_date("2024-03-15T10:30:00Z"), "2024-03-15");
        assert_eq!(normalize_date("03/15/2024"), "2024-03-15");
        assert_eq!(normalize_date("March 15, 2024"), "2024-03-15");
        assert_eq!(normalize_date("soonish"), "soonish");
    }

    #[test]
    fn test_salary_swap() {
        let mut job = Job::default();
        job.salary.min = Some(120000.0);
        job.salary.max = Some(90000.0);
        normalize_job(&mut job);
        assert_eq!(job.salary.min, Some(90000.0));
        assert_eq!(job.salary.max, Some(120000.0));
    }

    #[test]
    fn test_normalize_is_idempotent_on_sample() {
        let mut job = Job::new("jobs.example/1");
        job.title = "  Senior   Backend\tEngineer ".to_string();
        job.role_seniority = "Sr.  Senior".to_string();
        job.contract_type = "Full Time".to_string();
        job.location.country = "usa".to_string();
        job.salary.currency = "$".to_string();
        job.salary.period = "annual".to_string();
        job.tech_stack = vec!["javascript".to_string(), "JS ".to_string()];

        normalize_job(&mut job);
        let once = job.clone();
        normalize_job(&mut job);
        assert_eq!(job, once);
    }

    proptest! {
        #[test]
        fn prop_scalar_normalizers_idempotent(raw in "\\PC{0,60}") {
            prop_assert_eq!(normalize_country(&normalize_country(&raw)), normalize_country(&raw));
            prop_assert_eq!(normalize_currency(&normalize_currency(&raw)), normalize_currency(&raw));
            prop_assert_eq!(normalize_period(&normalize_period(&raw)), normalize_period(&raw));
            prop_assert_eq!(
                normalize_contract_type(&normalize_contract_type(&raw)),
                normalize_contract_type(&raw)
            );
            prop_assert_eq!(
                normalize_work_model(&normalize_work_model(&raw)),
                normalize_work_model(&raw)
            );
            prop_assert_eq!(
                normalize_seniority(&normalize_seniority(&raw)),
                normalize_seniority(&raw)
            );
            prop_assert_eq!(normalize_date(&normalize_date(&raw)), normalize_date(&raw));
        }

        #[test]
        fn prop_text_cap_holds(raw in "\\PC{0,2000}") {
            prop_assert!(normalize_text(&raw).chars().count() <= 1000);
        }
    }
}
