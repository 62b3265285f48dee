//! Final schema pass.
//!
//! The record types carry total defaults, so "missing field" cannot
//! happen by construction; this pass only rejects genuinely malformed
//! values. On rejection the orchestrator falls back to the minimal
//! valid record, so a retrieval still resolves.

use chrono::{Datelike, Utc};

use crate::error::SchemaError;
use crate::types::JobData;

/// Validate a normalized record, returning it unchanged on success.
pub fn validate(data: JobData) -> Result<JobData, SchemaError> {
    if data.job.source_url.trim().is_empty() {
        return Err(SchemaError::MissingSourceUrl);
    }

    check_finite(data.job.salary.min, "job.salary.min")?;
    check_finite(data.job.salary.max, "job.salary.max")?;
    check_finite(data.job.required_experience.min_years, "job.required_experience.min_years")?;
    check_finite(data.job.required_experience.max_years, "job.required_experience.max_years")?;

    if let Some(year) = data.company.founded_year {
        let current = Utc::now().year();
        if !(1800..=current).contains(&year) {
            return Err(SchemaError::OutOfRange {
                field: "company.founded_year",
                value: year as i64,
            });
        }
    }

    Ok(data)
}

fn check_finite(value: Option<f64>, field: &'static str) -> Result<(), SchemaError> {
    match value {
        Some(v) if !v.is_finite() => Err(SchemaError::NonFiniteNumber { field }),
        _ => Ok(()),
    }
}
