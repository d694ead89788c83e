//! Error types for the search crate.
//!
//! The search pipeline itself never fails; these cover decoding the
//! records it runs over.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while decoding search inputs.
#[derive(Debug, Error)]
pub enum SearchError {
    /// JSON had the wrong shape
    #[error("Invalid records: {0}")]
    InvalidRecords(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with nearbite-core error handling.
/// Range: 20xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// JSON had the wrong shape
    InvalidRecords = 20001,
    /// JSON parsing error
    JsonParsing = 20002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidRecords(_) => SearchErrorCode::InvalidRecords,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}
