// Rust guideline compliant 2026-10-19

//! Timestamp helpers for Abundant.

use crate::error::{AppError, Result};
use chrono::{Local, TimeZone};
use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in seconds.
///
/// # Errors
///
/// Returns an error if the system clock is before the Unix epoch.
pub fn unix_timestamp() -> Result<i64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| AppError::InvalidInput(format!("System time before epoch: {err}")))?
        .as_secs() as i64;
    Ok(now)
}

/// Formats a Unix timestamp in local time with a strftime-style `format`.
///
/// Falls back to the raw number when the timestamp is out of range or the
/// format string is invalid.
#[must_use]
pub fn format_timestamp(timestamp: i64, format: &str) -> String {
    let Some(local) = Local.timestamp_opt(timestamp, 0).single() else {
        return timestamp.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        tracing::warn!(format, "invalid date format");
        return timestamp.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_timestamp_is_recent() {
        assert!(unix_timestamp().unwrap() > 1_600_000_000);
    }

    #[test]
    fn test_format_timestamp_year() {
        let text = format_timestamp(1_300_000_000, "%Y");
        assert!(text == "2011", "unexpected year {text}");
    }

    #[test]
    fn test_format_timestamp_invalid_format_falls_back() {
        assert_eq!(format_timestamp(42, "%Q"), "42");
    }
}
