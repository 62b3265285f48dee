//! Provenance envelope and the single externally-visible output unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::Company;
use super::job::Job;

/// Provenance for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// When the pipeline ran (ISO-8601 in JSON output)
    pub scraped_at: DateTime<Utc>,
    /// Which scraping backend executed (e.g. "browser", "http")
    pub agent: String,
    /// Append-only diagnostics accumulated across every stage.
    /// Never cleared; surfaced to the caller even on success.
    pub notes: Vec<String>,
}

impl Metadata {
    /// Create metadata stamped now for the given backend.
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            scraped_at: Utc::now(),
            agent: agent.into(),
            notes: Vec::new(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new("")
    }
}

/// The one guaranteed output shape of a retrieval run.
///
/// Constructed fresh per request and never mutated after being returned.
/// Persistence is an external concern (callers typically key stored
/// records by `job.source_url`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobData {
    pub job: Job,
    pub company: Company,
    pub metadata: Metadata,
}

impl JobData {
    /// The minimal valid record: source URL, empty company, provenance.
    ///
    /// This is the top-level fallback shape; every field in it is already
    /// schema-default-shaped, so it always passes the final schema pass.
    pub fn minimal(source_url: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            job: Job::new(source_url),
            company: Company::default(),
            metadata: Metadata::new(agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_shape() {
        let data = JobData::minimal("https://example.com/job/1", "http");
        assert_eq!(data.job.source_url, "https://example.com/job/1");
        assert_eq!(data.company, Company::default());
        assert_eq!(data.metadata.agent, "http");
        assert!(data.metadata.notes.is_empty());
    }

    #[test]
    fn test_scraped_at_serializes_iso8601() {
        let data = JobData::minimal("https://example.com", "mock");
        let value = serde_json::to_value(&data).unwrap();
        let stamp = value["metadata"]["scraped_at"].as_str().unwrap();
        // RFC 3339 / ISO-8601: 2024-01-01T00:00:00Z style
        assert!(stamp.contains('T'), "not ISO-8601: {stamp}");
    }
}
