// Rust guideline compliant 2026-10-19

//! Implementation of the `ab resolve` command.

use super::abort;
use crate::ui::Ui;
use abundant_app::{unix_timestamp, Database};
use abundant_core::MetaKind;
use anyhow::Result;
use std::io::Write;

/// Resolution used when neither the command line nor the config names one.
const RESOLVED: &str = "resolved";

/// Marks an issue resolved.
///
/// An issue concluded as, for instance, not worth fixing is still resolved,
/// so a custom resolution may be given. Otherwise the configured default is
/// used.
///
/// # Errors
///
/// Returns an error if the prefix or resolution does not resolve, the issue
/// is already resolved, or the issue cannot be saved.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    prefix: &str,
    resolution: Option<&str>,
) -> Result<()> {
    let resolution = match resolution {
        Some(resolution) => db.meta(MetaKind::Resolution, resolution)?,
        None => db
            .config()
            .metadata
            .default_for(MetaKind::Resolution)
            .unwrap_or(RESOLVED)
            .to_string(),
    };

    let mut issue = db.issue(prefix)?;
    if let Some(existing) = &issue.resolution {
        return Err(abort(format!(
            "Cannot resolve issue {}, it is already resolved with resolution {}.\n\
             Use open to reopen a resolved issue.",
            db.pref_str(&issue.id, true),
            existing
        )));
    }

    if let Some(status) = db.config().metadata.resolved_for(MetaKind::Status) {
        issue.status = Some(status.to_string());
    }
    issue.resolution = Some(resolution);
    issue.resolved_date = Some(unix_timestamp()?);
    db.save(&[&issue])?;

    ui.write(format!(
        "Resolved issue {} with resolution {}",
        db.pref_str(&issue.id, true),
        issue.resolution.as_deref().unwrap_or(RESOLVED)
    ))?;
    Ok(())
}
