//! Job extraction from a fetched page.
//!
//! Extraction is layered: structured data (schema.org JSON-LD) first,
//! DOM selectors for whatever the structured pass left empty, then
//! free-text heuristics over the visible page text. Later layers never
//! overwrite values an earlier layer already filled.

pub mod dom;
pub mod heuristics;
pub mod jsonld;
pub mod lexicons;

use scraper::Html;
use tracing::debug;

use crate::types::{CompanySeed, Job};

/// Everything the extractor recovered from one job page.
#[derive(Debug, Clone, Default)]
pub struct ExtractedJob {
    pub job: Job,
    /// Hiring-organization hints for the enricher.
    pub company_seed: CompanySeed,
}

/// Extract a job record from raw HTML.
///
/// Total: any input, including garbage, yields a record whose
/// `source_url` is set and whose other fields are best-effort.
pub fn extract_job(html: &str, source_url: &str) -> ExtractedJob {
    let mut job = Job::new(source_url);
    let mut seed = CompanySeed::default();

    if let Some(posting) = jsonld::find_job_posting(html) {
        debug!(url = %source_url, "found JSON-LD JobPosting");
        jsonld::apply_job_posting(&mut job, &posting);
        seed = jsonld::hiring_organization(&posting);
    }

    // DOM pass fills only what JSON-LD left empty.
    {
        let document = Html::parse_document(html);
        if job.title.is_empty() {
            if let Some(title) = dom::extract_title(&document) {
                job.title = title;
            }
        }
        if job.description_text.is_empty() {
            if let Some(description) = dom::extract_description(&document) {
                job.description_text = description;
            }
        }
        if job.location == Default::default() {
            if let Some(location) = dom::extract_location(&document) {
                job.location = location;
            }
        }
        if seed.name.is_none() {
            seed.name = dom::extract_company_name(&document);
        }
    }

    // Free-text heuristics. Work-model inference reads the description
    // (the spot where remote/office policy is stated); the salary and
    // skill passes read the whole visible page, since compensation
    // banners and skill chips often sit outside the description block.
    let page_text = dom::page_text(html);
    let description = if job.description_text.is_empty() {
        &page_text
    } else {
        &job.description_text
    };

    if job.role_seniority.is_empty() {
        if let Some(level) = heuristics::seniority_from_title(&job.title) {
            job.role_seniority = level.to_string();
        }
    }
    if job.work_model.is_empty() {
        if let Some(model) = heuristics::work_model_from_text(description) {
            job.work_model = model.to_string();
        }
    }
    if job.salary.is_empty() {
        if let Some(salary) = heuristics::parse_salary(&page_text) {
            job.salary = salary;
        }
    }
    if job.tech_stack.is_empty() {
        job.tech_stack = heuristics::scan_tech_stack(&page_text);
    }
    if job.soft_skills.is_empty() {
        job.soft_skills = heuristics::scan_soft_skills(&page_text);
    }
    if job.hard_skills.is_empty() {
        job.hard_skills = heuristics::skill_phrases(&page_text);
    }

    debug!(
        url = %source_url,
        title = %job.title,
        tech_stack = job.tech_stack.len(),
        "extraction complete"
    );

    ExtractedJob {
        job,
        company_seed: seed,
    }
}
