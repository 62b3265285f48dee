//! Job-posting retrieval and normalization pipeline.
//!
//! Fetches an arbitrary job-posting URL, extracts a structured
//! job/company record from heterogeneous HTML (schema.org JSON-LD, DOM
//! heuristics, free-text patterns), enriches the company profile from
//! secondary sources, and normalizes the result into a strict schema
//! with total defaults.
//!
//! The top-level entry point is [`Retriever::retrieve`], which never
//! fails: any error along the way degrades to a minimal, schema-valid
//! record carrying diagnostic notes.
//!
//! ```no_run
//! use retrieval::{Retriever, RetrieverConfig};
//!
//! # async fn example() {
//! let config = RetrieverConfig::new("https://jobs.example/postings/123");
//! let data = Retriever::new(config).retrieve().await;
//! println!("{}", serde_json::to_string_pretty(&data).unwrap());
//! # }
//! ```

pub mod enrich;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod retriever;
pub mod schema;
pub mod text;
pub mod types;

pub use error::{FetchError, FetchResult, Result, RetrievalError, SchemaError};
pub use fetch::{BrowserFetcher, BrowserSession, FetchedPage, HttpFetcher, MockFetcher, PageFetcher};
pub use retriever::Retriever;
pub use types::{BrowserEndpoint, Company, Job, JobData, Metadata, RetrieverConfig};
