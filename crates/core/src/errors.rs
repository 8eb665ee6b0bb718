//! Core error types for the engine.
//!
//! This module defines backend-agnostic error types. Storage-specific errors
//! are converted to these types by the storage layer. Numeric anomalies (a
//! missing quote, an unconvertible currency, an over-sold position) are NOT
//! errors: they propagate as NaN through the valuation pipeline so one bad
//! instrument cannot abort a whole report.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data source operation failed: {0}")]
    Source(#[from] SourceError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for source load operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (document store, SQL, HTTP, etc.) into
/// this format.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to reach or authenticate against the backend.
    #[error("Failed to connect to data source: {0}")]
    ConnectionFailed(String),

    /// A query against the backend failed to execute.
    #[error("Source query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record came back in a shape the engine cannot use.
    #[error("Malformed record: {0}")]
    Malformed(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
