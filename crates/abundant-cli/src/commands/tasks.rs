// Rust guideline compliant 2026-10-19

//! Implementation of the `ab tasks` command.

use super::list::{self, FilterArgs};
use crate::ui::Ui;
use abundant_app::{db::ME, Database};
use anyhow::Result;
use std::io::Write;

/// Lists issues assigned to `user`, or to the current user by default.
///
/// All `list` filters apply as usual.
///
/// # Errors
///
/// Returns an error if the user or a filter does not resolve.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    user: Option<&str>,
    filters: &FilterArgs,
) -> Result<usize> {
    list::execute(db, ui, Some(user.unwrap_or(ME)), filters)
}
