//! Job record types.
//!
//! Every field carries a type-correct default (empty string/array/None)
//! so a record is never missing a field, no matter how little the
//! extraction managed to recover. `#[serde(default)]` keeps that
//! guarantee across deserialization of partial JSON.

use serde::{Deserialize, Serialize};

/// Where a job is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobLocation {
    pub city: String,
    pub region: String,
    /// ISO-2 code where resolvable, best-effort otherwise
    pub country: String,
    pub remote_policy: String,
}

/// Advertised compensation range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Salary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// ISO-4217 code where resolvable
    pub currency: String,
    /// One of year/month/week/day/hour where resolvable
    pub period: String,
}

impl Salary {
    /// True when no salary information was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.currency.is_empty()
    }
}

/// Required years of experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRange {
    pub min_years: Option<f64>,
    pub max_years: Option<f64>,
}

/// One job posting, as extracted from a single source URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub source_url: String,
    pub title: String,
    /// internship/junior/mid-level/senior/lead/principal/director/executive
    pub role_seniority: String,
    pub department_function: String,
    /// full-time/part-time/contract/freelance/internship/temporary/permanent
    pub contract_type: String,
    /// remote/hybrid/on-site
    pub work_model: String,
    pub location: JobLocation,
    pub salary: Salary,
    pub required_experience: ExperienceRange,
    pub required_education: String,
    pub languages: Vec<String>,
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tech_stack: Vec<String>,
    pub responsibilities: Vec<String>,
    pub nice_to_have: Vec<String>,
    /// Tri-state: unknown when None
    pub visa_sponsorship: Option<bool>,
    /// Tri-state: unknown when None
    pub relocation: Option<bool>,
    /// ISO-8601 where parsable, source text otherwise
    pub posting_date: String,
    /// ISO-8601 where parsable, source text otherwise
    pub application_deadline: String,
    pub description_text: String,
    /// Captured JSON-LD JobPosting blob, kept opaque for audit/debug
    pub raw_schema_org: Option<serde_json::Value>,
    /// Reserved, currently always empty
    pub detected_duplicates: Vec<String>,
}

impl Job {
    /// Create an empty job for a source URL.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_total() {
        let job = Job::default();
        assert_eq!(job.title, "");
        assert!(job.hard_skills.is_empty());
        assert!(job.visa_sponsorship.is_none());
        assert!(job.salary.is_empty());
        assert!(job.raw_schema_org.is_none());
        assert!(job.detected_duplicates.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // Deserializing a sparse object must still yield the full shape.
        let job: Job = serde_json::from_str(r#"{"title": "Engineer"}"#).unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.source_url, "");
        assert_eq!(job.location, JobLocation::default());
        assert!(job.relocation.is_none());
    }

    #[test]
    fn test_serialized_shape_has_every_field() {
        let value = serde_json::to_value(Job::default()).unwrap();
        let obj = value.as_object().unwrap();
        for field in [
            "source_url",
            "title",
            "role_seniority",
            "department_function",
            "contract_type",
            "work_model",
            "location",
            "salary",
            "required_experience",
            "required_education",
            "languages",
            "hard_skills",
            "soft_skills",
            "tech_stack",
            "responsibilities",
            "nice_to_have",
            "visa_sponsorship",
            "relocation",
            "posting_date",
            "application_deadline",
            "description_text",
            "raw_schema_org",
            "detected_duplicates",
        ] {
            assert!(obj.contains_key(field), "missing field: {field}");
        }
    }
}
