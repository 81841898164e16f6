// Rust guideline compliant 2026-10-19

//! Error handling for Abundant application services.

use abundant_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for structured error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested issue or user was not found.
    NotFound,
    /// The provided prefix matched multiple entities.
    AmbiguousPrefix,
    /// The command refused to run.
    Aborted,
    /// IO failure while reading or writing database data.
    IoError,
    /// No database was found.
    DatabaseNotFound,
    /// A database already exists where one was to be created.
    DatabaseExists,
    /// The request included invalid inputs.
    InvalidInput,
    /// An issue or config file could not be parsed.
    InvalidData,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `.ab` directory in the start directory or any parent.
    #[error("No Abundant database found.")]
    DatabaseNotFound {
        /// Directory discovery started from.
        path: PathBuf,
    },

    /// `init` target already holds a database.
    #[error("Abundant database already exists.")]
    DatabaseExists {
        /// Path of the existing `.ab` directory.
        path: PathBuf,
    },

    /// A command refused to proceed; the message is shown to the user.
    #[error("{0}")]
    Abort(String),

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DatabaseNotFound { .. } => ErrorCode::DatabaseNotFound,
            AppError::DatabaseExists { .. } => ErrorCode::DatabaseExists,
            AppError::Abort(_) => ErrorCode::Aborted,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::UnknownPrefix(_) | CoreError::NoSuchIssue(_) => ErrorCode::NotFound,
                CoreError::AmbiguousPrefix { .. } => ErrorCode::AmbiguousPrefix,
                CoreError::InvalidIssue(_) | CoreError::Config(_) => ErrorCode::InvalidData,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns true for errors the user is expected to correct, as opposed
    /// to unexpected failures.
    #[must_use]
    pub fn is_abort(&self) -> bool {
        !matches!(
            self.code(),
            ErrorCode::IoError | ErrorCode::JsonError | ErrorCode::InvalidData
        )
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::DatabaseNotFound { path } | AppError::DatabaseExists { path } => {
                Some(serde_json::json!({
                    "path": path,
                }))
            }
            AppError::Core(CoreError::AmbiguousPrefix { prefix, candidates }) => {
                Some(serde_json::json!({
                    "prefix": prefix,
                    "candidates": candidates,
                }))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_prefix_details() {
        let error = AppError::from(CoreError::AmbiguousPrefix {
            prefix: "ab".to_string(),
            candidates: vec!["abc".to_string(), "abd".to_string()],
        });
        assert_eq!(error.code(), ErrorCode::AmbiguousPrefix);
        let details = error.details().unwrap();
        assert_eq!(details["candidates"][1], "abd");
        assert!(error.is_abort());
    }

    #[test]
    fn test_error_codes_serialize_snake_case() {
        let json = serde_json::to_string(&ErrorCode::DatabaseNotFound).unwrap();
        assert_eq!(json, "\"database_not_found\"");
    }

    #[test]
    fn test_io_errors_are_unexpected() {
        let error = AppError::from(std::io::Error::other("disk full"));
        assert_eq!(error.code(), ErrorCode::IoError);
        assert!(!error.is_abort());
        assert!(error.details().is_none());
    }
}
