//! Company record types.
//!
//! Same totality rule as [`super::job`]: every field has a type-correct
//! default and the record is never missing a field.

use serde::{Deserialize, Serialize};

/// Employee head-count range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// A company office location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyLocation {
    pub city: String,
    pub region: String,
    pub country: String,
}

/// Culture signals collected from the company's own pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkCulture {
    pub values: Vec<String>,
    pub benefits: Vec<String>,
    pub remote_policy: String,
}

/// Funding profile. Sparse by nature; secondary sources rarely carry it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Funding {
    pub status: String,
    pub latest_round: String,
    pub investors: Vec<String>,
}

/// One hiring organization, progressively enriched from multiple sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub aka: Vec<String>,
    pub website: String,
    pub linkedin_url: String,
    pub wikipedia_url: String,
    pub industry: String,
    pub company_type: String,
    pub founded_year: Option<i32>,
    pub size_employees: EmployeeRange,
    pub hq_location: CompanyLocation,
    pub locations: Vec<CompanyLocation>,
    pub work_culture: WorkCulture,
    pub funding: Funding,
    pub public_ticker: String,
    pub about_summary: String,
    /// Audit trail: every URL actually fetched and accepted during
    /// enrichment, in discovery order. Append-only; never contains a URL
    /// that was not fetched.
    pub data_sources: Vec<String>,
}

impl Company {
    /// Record that a source URL was consulted, keeping the trail
    /// duplicate-free and in discovery order.
    pub fn record_source(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.data_sources.contains(&url) {
            self.data_sources.push(url);
        }
    }
}

/// Seed for the enricher, taken from the job page's declared hiring
/// organization when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanySeed {
    pub name: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_total() {
        let company = Company::default();
        assert_eq!(company.name, "");
        assert!(company.founded_year.is_none());
        assert!(company.data_sources.is_empty());
        assert_eq!(company.work_culture, WorkCulture::default());
    }

    #[test]
    fn test_record_source_dedupes_preserving_order() {
        let mut company = Company::default();
        company.record_source("https://acme.example");
        company.record_source("https://en.wikipedia.org/wiki/Acme");
        company.record_source("https://acme.example");
        assert_eq!(
            company.data_sources,
            vec![
                "https://acme.example".to_string(),
                "https://en.wikipedia.org/wiki/Acme".to_string(),
            ]
        );
    }
}
