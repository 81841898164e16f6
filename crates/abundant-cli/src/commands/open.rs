// Rust guideline compliant 2026-10-19

//! Implementation of the `ab open` command.

use super::abort;
use crate::ui::Ui;
use abundant_app::Database;
use abundant_core::MetaKind;
use anyhow::Result;
use std::io::Write;

/// Reopens a resolved issue.
///
/// The status becomes `status` when given, otherwise the configured status
/// for reopened issues. The resolution and resolution date are cleared.
///
/// # Errors
///
/// Returns an error if the prefix or status does not resolve, the issue is
/// already open, or the issue cannot be saved.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    prefix: &str,
    status: Option<&str>,
) -> Result<()> {
    let mut issue = db.issue(prefix)?;
    if !issue.is_resolved() {
        return Err(abort(format!(
            "Cannot open issue {}, it is already open.\nUse resolve to close an open issue.",
            db.pref_str(&issue.id, true)
        )));
    }

    issue.status = match status {
        Some(status) => Some(db.meta(MetaKind::Status, status)?),
        None => db
            .config()
            .metadata
            .opened_for(MetaKind::Status)
            .map(str::to_string),
    };
    issue.resolution = None;
    issue.resolved_date = None;
    db.save(&[&issue])?;

    let id = db.pref_str(&issue.id, true);
    match &issue.status {
        Some(status) => ui.write(format!("Reopened issue {}, set status to {}", id, status))?,
        None => ui.write(format!("Reopened issue {}", id))?,
    }
    Ok(())
}
