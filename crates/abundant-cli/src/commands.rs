// Rust guideline compliant 2026-10-19

//! Command implementations for the Abundant CLI.
//!
//! Every command takes the open [`abundant_app::Database`] (except `init`
//! and `version`) and writes its results to a [`crate::ui::Ui`].

pub mod adduser;
pub mod assign;
pub mod child;
pub mod comment;
pub mod details;
pub mod duplicate;
pub mod init;
pub mod list;
pub mod new;
pub mod open;
pub mod resolve;
pub mod tasks;
pub mod update;
pub mod version;

use abundant_app::AppError;

/// Builds the error for a command that refuses to proceed.
pub(crate) fn abort(message: impl Into<String>) -> anyhow::Error {
    AppError::Abort(message.into()).into()
}
