// Rust guideline compliant 2026-10-19

//! Implementation of the `ab update` command.
//!
//! Updates the assignee, listeners and metadata of an existing issue and
//! reports every change made.

use super::abort;
use crate::output::describe_changes;
use crate::ui::Ui;
use abundant_app::{unix_timestamp, Database};
use abundant_core::MetaKind;
use anyhow::Result;
use std::io::Write;

/// Changes to apply to an issue. Users and metadata may be prefixes.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UpdateArgs {
    /// Assign the issue to the specified user
    #[arg(short, long)]
    pub assign_to: Option<String>,

    /// User who should follow this issue
    #[arg(short, long)]
    pub listener: Vec<String>,

    /// User who should no longer follow this issue
    #[arg(long = "rl", visible_alias = "removelistener", value_name = "USER")]
    pub remove_listener: Vec<String>,

    /// The type of issue, such as Bug or Feature Request
    #[arg(short, long)]
    pub issue: Option<String>,

    /// A target date or milestone for resolution
    #[arg(short, long)]
    pub target: Option<String>,

    /// The severity of the issue
    #[arg(short, long)]
    pub severity: Option<String>,

    /// The status of the issue
    #[arg(short = 'S', long)]
    pub status: Option<String>,

    /// The resolution of the issue
    #[arg(short = 'R', long)]
    pub resolution: Option<String>,

    /// Categorize the issue
    #[arg(short, long)]
    pub category: Option<String>,
}

impl UpdateArgs {
    /// Returns true if no change was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assign_to.is_none()
            && self.listener.is_empty()
            && self.remove_listener.is_empty()
            && self.issue.is_none()
            && self.target.is_none()
            && self.severity.is_none()
            && self.status.is_none()
            && self.resolution.is_none()
            && self.category.is_none()
    }
}

/// Applies `args` to the issue `prefix` names.
///
/// Setting a resolution on an open issue also records the resolution date.
///
/// # Errors
///
/// Returns an error if:
/// - No change was requested
/// - The issue, a user or a metadata value does not resolve
/// - The issue cannot be saved
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    prefix: &str,
    args: &UpdateArgs,
) -> Result<()> {
    let mut issue = db.issue(prefix)?;
    if args.is_empty() {
        return Err(abort(format!(
            "Did not specify any updates to make to issue {}",
            db.pref_str(&issue.id, true)
        )));
    }
    let old = issue.clone();

    if let Some(user) = &args.assign_to {
        issue.assigned_to = db.user(user)?;
    }
    for listener in db.users_for(&args.listener)? {
        if !issue.listeners.contains(&listener) {
            issue.listeners.push(listener);
        }
    }
    let removed = db.users_for(&args.remove_listener)?;
    issue.listeners.retain(|listener| !removed.contains(listener));

    let metadata = [
        (MetaKind::Issue, &args.issue, &mut issue.issue),
        (MetaKind::Severity, &args.severity, &mut issue.severity),
        (MetaKind::Status, &args.status, &mut issue.status),
        (MetaKind::Category, &args.category, &mut issue.category),
    ];
    for (kind, typed, slot) in metadata {
        if let Some(value) = typed {
            *slot = Some(db.meta(kind, value)?);
        }
    }
    if let Some(target) = &args.target {
        issue.target = Some(target.clone());
    }
    if let Some(resolution) = &args.resolution {
        if issue.resolved_date.is_none() {
            issue.resolved_date = Some(unix_timestamp()?);
        }
        issue.resolution = Some(db.meta(MetaKind::Resolution, resolution)?);
    }

    db.save(&[&issue])?;
    ui.write(format!("Updated issue {}", db.pref_str(&issue.id, true)))?;
    ui.write(describe_changes(&issue, &old, db, &[]))?;
    Ok(())
}
