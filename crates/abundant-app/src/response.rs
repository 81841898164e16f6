// Rust guideline compliant 2026-10-19

//! Structured error envelope for machine-readable failure output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Error envelope written when a command fails.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_missing_details() {
        let envelope = ErrorEnvelope::from_error(&AppError::Abort("stop".to_string()));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], "aborted");
        assert_eq!(json["message"], "stop");
        assert!(json.get("details").is_none());
    }
}
