// Rust guideline compliant 2026-10-19

//! Implementation of the `ab duplicate` command.

use super::{abort, child::reparent};
use crate::ui::Ui;
use abundant_app::{unix_timestamp, Database};
use abundant_core::MetaKind;
use anyhow::Result;
use std::io::Write;

/// Resolution given to an open issue marked as a duplicate.
const DUPLICATE: &str = "duplicate";

/// Marks an issue as a duplicate of another.
///
/// The duplicate becomes a child of the issue it duplicates, leaving any
/// former parent. An open duplicate is resolved with resolution `duplicate`.
///
/// # Errors
///
/// Returns an error if either prefix does not resolve, both name the same
/// issue, or the issues cannot be saved.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    dup_prefix: &str,
    parent_prefix: &str,
) -> Result<()> {
    let mut dup = db.issue(dup_prefix)?;
    let mut parent = db.issue(parent_prefix)?;
    if dup.id == parent.id {
        return Err(abort(format!(
            "Cannot mark issue {} as a duplicate of itself.",
            dup_prefix
        )));
    }

    let previous = reparent(db, &mut dup, &mut parent)?;
    dup.duplicates = Some(parent.id.clone());
    if !dup.is_resolved() {
        dup.resolution = Some(DUPLICATE.to_string());
        dup.resolved_date = Some(unix_timestamp()?);
        if let Some(status) = db.config().metadata.resolved_for(MetaKind::Status) {
            dup.status = Some(status.to_string());
        }
    }

    let mut changed = vec![&dup, &parent];
    changed.extend(previous.as_ref());
    db.save(&changed)?;

    ui.write(format!(
        "Marked issue {} as a duplicate of issue {}",
        dup_prefix, parent_prefix
    ))?;
    Ok(())
}
