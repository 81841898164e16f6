// Rust guideline compliant 2026-10-19

//! Implementation of the `ab details` command.

use crate::output;
use crate::ui::Ui;
use abundant_app::Database;
use abundant_core::Field;
use anyhow::Result;
use std::io::Write;

/// Displays every detail of an issue.
///
/// In a single-user database the creator and assignee are left out unless
/// output is verbose.
///
/// # Errors
///
/// Returns an error if the prefix does not resolve or the issue cannot be
/// read.
pub fn execute<W: Write>(db: &Database, ui: &mut Ui<W>, prefix: &str) -> Result<()> {
    let issue = db.issue(prefix)?;
    let skip = people_skip(db, ui);
    ui.write(output::details(&issue, db, &skip))?;
    Ok(())
}

/// Fields naming people, hidden in single-user databases below verbose
/// output.
pub(crate) fn people_skip<W: Write>(db: &Database, ui: &Ui<W>) -> Vec<Field> {
    if db.single_user() && !ui.is_verbose() {
        vec![Field::Creator, Field::AssignedTo]
    } else {
        Vec::new()
    }
}
