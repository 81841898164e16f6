// Rust guideline compliant 2026-10-19

//! Implementation of the `ab child` command.

use super::abort;
use crate::ui::Ui;
use abundant_app::Database;
use abundant_core::Issue;
use anyhow::Result;
use std::io::Write;

/// Marks one issue as a child of another.
///
/// This only records the relationship; a parent can still be resolved while
/// its children are open.
///
/// # Errors
///
/// Returns an error if either prefix does not resolve, both name the same
/// issue, or the issues cannot be saved.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    child_prefix: &str,
    parent_prefix: &str,
) -> Result<()> {
    let mut child = db.issue(child_prefix)?;
    let mut parent = db.issue(parent_prefix)?;
    if child.id == parent.id {
        return Err(abort(format!(
            "Cannot make issue {} a child of itself.",
            child_prefix
        )));
    }

    let previous = reparent(db, &mut child, &mut parent)?;
    if let Some(previous) = &previous {
        ui.write(format!(
            "Issue {} is no longer a child of issue {}",
            child_prefix,
            db.short_id(&previous.id)
        ))?;
    }

    let mut changed = vec![&child, &parent];
    changed.extend(previous.as_ref());
    db.save(&changed)?;

    ui.write(format!(
        "Marked issue {} as a child of issue {}",
        child_prefix, parent_prefix
    ))?;
    Ok(())
}

/// Moves `child` under `parent`, updating both children lists.
///
/// # Returns
///
/// The former parent, with `child` removed from its children, when `child`
/// had a different parent before. The caller saves every returned issue.
///
/// # Errors
///
/// Returns an error if the former parent cannot be loaded.
pub(crate) fn reparent(db: &Database, child: &mut Issue, parent: &mut Issue) -> Result<Option<Issue>> {
    let previous = match child.parent.as_deref() {
        Some(old) if old != parent.id => {
            let mut old_parent = db.issue(old)?;
            old_parent.children.retain(|id| id != &child.id);
            Some(old_parent)
        }
        _ => None,
    };

    child.parent = Some(parent.id.clone());
    if !parent.children.contains(&child.id) {
        parent.children.push(child.id.clone());
    }
    Ok(previous)
}
