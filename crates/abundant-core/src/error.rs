// Rust guideline compliant 2026-10-19

//! Error types for the Abundant core library.

use thiserror::Error;

/// Result type alias for Abundant operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Abundant operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The prefix matches no known item.
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// The prefix matches several items and none of them exactly.
    #[error("Ambiguous prefix: {prefix} matches {candidates:?}")]
    AmbiguousPrefix {
        /// The prefix as typed by the user.
        prefix: String,
        /// Matching items in index order.
        candidates: Vec<String>,
    },

    /// No issue file exists for the given ID.
    #[error("No issue could be found at: {0}")]
    NoSuchIssue(String),

    /// An issue file exists but could not be parsed.
    #[error("Invalid issue: {0}")]
    InvalidIssue(String),

    /// A configuration file or value is malformed.
    #[error("Config error: {0}")]
    Config(String),
}
