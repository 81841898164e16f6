// Rust guideline compliant 2026-10-19

//! Implementation of the `ab assign` command.

use super::update::{self, UpdateArgs};
use crate::ui::Ui;
use abundant_app::Database;
use anyhow::Result;
use std::io::Write;

/// Assigns an issue to a user. `me` and `nobody` work as expected.
///
/// # Errors
///
/// Returns an error if either prefix does not resolve or the issue cannot be
/// saved.
pub fn execute<W: Write>(db: &Database, ui: &mut Ui<W>, prefix: &str, user: &str) -> Result<()> {
    let args = UpdateArgs {
        assign_to: Some(user.to_string()),
        ..UpdateArgs::default()
    };
    update::execute(db, ui, prefix, &args)
}
