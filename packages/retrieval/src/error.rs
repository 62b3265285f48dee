//! Typed errors for the retrieval library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during a retrieval run.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Transport-level failure (connection, navigation, HTTP)
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Final schema pass rejected the assembled record
    #[error("schema validation failed: {0}")]
    Schema(#[from] SchemaError),
}

/// Errors that can occur while fetching rendered pages.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No browser endpoint was configured for the browser transport
    #[error("browser endpoint not configured")]
    EndpointUnconfigured,

    /// Could not establish the browser connection
    #[error("failed to connect to browser endpoint {endpoint}: {message}")]
    Connect { endpoint: String, message: String },

    /// Navigation failed after all retry attempts
    #[error("navigation to {url} failed after {attempts} attempts: {message}")]
    Navigation {
        url: String,
        attempts: u32,
        message: String,
    },

    /// Browser command failed (CDP-level error)
    #[error("browser error: {0}")]
    Browser(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Request or navigation timed out
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// Catch-all for injected/simulated failures
    #[error("fetch failed: {0}")]
    Other(String),
}

/// Errors raised by the final schema pass for genuinely malformed values.
///
/// Missing-but-defaultable fields are never an error here; the record
/// types carry total defaults by construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A numeric field holds NaN or infinity
    #[error("non-finite number in {field}")]
    NonFiniteNumber { field: &'static str },

    /// A numeric field is outside its plausible range
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// The record lost its source URL somewhere upstream
    #[error("source URL missing")]
    MissingSourceUrl,
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
