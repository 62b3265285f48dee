//! Data model for the retrieval pipeline.

pub mod company;
pub mod config;
pub mod job;
pub mod metadata;

pub use company::{Company, CompanyLocation, CompanySeed, EmployeeRange, Funding, WorkCulture};
pub use config::{BrowserEndpoint, RetrieverConfig, DEFAULT_NAV_RETRIES, DEFAULT_NAV_TIMEOUT, DEFAULT_USER_AGENT};
pub use job::{ExperienceRange, Job, JobLocation, Salary};
pub use metadata::{JobData, Metadata};
