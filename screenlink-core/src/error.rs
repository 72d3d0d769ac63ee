//! Error types for screenlink-core

/// Result type alias for wire contract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wire contract errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Response body was not the expected JSON counter report
    #[error("Malformed counter report: {0}")]
    MalformedReport(#[from] serde_json::Error),

    /// A wire code fell outside the documented ranges
    #[error("Invalid wire code: {0}")]
    InvalidCode(#[from] screenlink_types::Error),
}
