// Rust guideline compliant 2026-10-19

//! Implementation of the `ab list` command.
//!
//! Lists open issues, or resolved ones with `-r`, narrowed by any number of
//! filters. Users and metadata values in filters may be prefixes.

use crate::output::{found_line, issue_table, list_line};
use crate::ui::Ui;
use abundant_app::{list_issues, Assignee, Database, ListOptions};
use anyhow::Result;
use std::io::Write;
use std::time::Instant;

/// Filters shared by `list` and `tasks`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterArgs {
    /// List resolved issues instead of open ones
    #[arg(short, long)]
    pub resolved: bool,

    /// Issues being followed by these users
    #[arg(short, long)]
    pub listener: Vec<String>,

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

    /// The category of the issue
    #[arg(short, long)]
    pub category: Option<String>,

    /// The user who filed the issue
    #[arg(short = 'C', long)]
    pub creator: Option<String>,

    /// The resolution of the issue
    #[arg(short = 'R', long)]
    pub resolution: Option<String>,

    /// Text to match in the title
    #[arg(short, long)]
    pub grep: Option<String>,
}

impl FilterArgs {
    /// Resolves the typed filters into list options.
    ///
    /// # Arguments
    ///
    /// * `db` - Database to resolve user and metadata prefixes against
    /// * `assigned_to` - User prefix the issues must be assigned to; any
    ///   assignment when `None`
    ///
    /// # Errors
    ///
    /// Returns an abort if a user prefix does not resolve or a metadata value
    /// is ambiguous.
    pub fn to_options(&self, db: &Database, assigned_to: Option<&str>) -> Result<ListOptions> {
        let assigned_to = match assigned_to {
            Some(prefix) => assignee(db, prefix)?,
            None => Assignee::Anyone,
        };
        let creator = match &self.creator {
            Some(prefix) => Some(assignee(db, prefix)?),
            None => None,
        };

        let mut options = ListOptions {
            resolved: self.resolved,
            assigned_to,
            listeners: db.users_for(&self.listener)?,
            issue: self.issue.clone(),
            target: self.target.clone(),
            severity: self.severity.clone(),
            status: self.status.clone(),
            category: self.category.clone(),
            resolution: self.resolution.clone(),
            creator,
            grep: self.grep.clone(),
        };
        options.resolve_meta(db)?;
        Ok(options)
    }
}

fn assignee(db: &Database, prefix: &str) -> Result<Assignee> {
    Ok(match db.user(prefix)? {
        Some(user) => Assignee::User(user),
        None => Assignee::Nobody,
    })
}

/// Lists the issues matching the filters.
///
/// Quiet output prints only the unique prefixes; verbose output prints a
/// table.
///
/// # Returns
///
/// The number of issues listed.
///
/// # Errors
///
/// Returns an error if a filter does not resolve or the issues cannot be
/// read.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    assigned_to: Option<&str>,
    filters: &FilterArgs,
) -> Result<usize> {
    let options = filters.to_options(db, assigned_to)?;

    let started = Instant::now();
    let issues = list_issues(db.all_issues()?, &options);
    tracing::debug!(
        count = issues.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "filtered issues"
    );

    if ui.is_verbose() && !issues.is_empty() {
        ui.write(issue_table(&issues, db))?;
    } else {
        for issue in &issues {
            if ui.is_quiet() {
                ui.quiet(db.short_id(&issue.id))?;
            } else {
                ui.write(list_line(issue, db))?;
            }
        }
    }
    ui.write(found_line(issues.len()))?;
    Ok(issues.len())
}
