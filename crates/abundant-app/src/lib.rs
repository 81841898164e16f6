// Rust guideline compliant 2026-10-19

//! Shared application services for Abundant.
//!
//! This crate provides reusable, non-CLI-specific helpers for database
//! discovery, prefix resolution with user-facing aborts, list filtering,
//! date formatting, and standardized response envelopes.

pub mod db;
pub mod error;
pub mod list;
pub mod repo;
pub mod response;
pub mod time;

pub use db::Database;
pub use error::{AppError, ErrorCode, Result};
pub use list::{list_issues, Assignee, ListOptions};
pub use repo::RepoContext;
pub use response::ErrorEnvelope;
pub use time::{format_timestamp, unix_timestamp};
