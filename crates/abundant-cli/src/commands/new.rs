// Rust guideline compliant 2026-10-19

//! Implementation of the `ab new` command.
//!
//! Creates a new open issue. Unless given, the creator is the configured
//! user, who is also the default assignee. Metadata not given on the
//! command line takes the configured defaults.

use super::details::people_skip;
use crate::output::describe_changes;
use crate::ui::Ui;
use abundant_app::{db::ME, unix_timestamp, Database};
use abundant_core::{Field, Issue, MetaKind};
use anyhow::Result;
use std::io::Write;

/// Options for a new issue.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewArgs {
    /// Assign the issue to the specified user
    #[arg(short, long)]
    pub assign_to: Option<String>,

    /// User who should follow this issue
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

    /// Categorize the issue
    #[arg(short, long)]
    pub category: Option<String>,

    /// Specify a parent issue
    #[arg(short, long)]
    pub parent: Option<String>,

    /// The user filing the issue
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Creates a new issue.
///
/// Quiet output prints only the full ID of the new issue.
///
/// # Arguments
///
/// * `db` - Database to add the issue to
/// * `ui` - Output sink
/// * `title` - Title words, joined with spaces
/// * `args` - Issue options; users and metadata may be prefixes
///
/// # Errors
///
/// Returns an error if:
/// - A user, metadata value or parent prefix does not resolve
/// - The issue or its parent cannot be written
pub fn execute<W: Write>(
    db: &mut Database,
    ui: &mut Ui<W>,
    title: &[String],
    args: &NewArgs,
) -> Result<()> {
    let creator = db.user(args.user.as_deref().unwrap_or(ME))?;
    let assigned_to = match &args.assign_to {
        Some(prefix) => db.user(prefix)?,
        None => creator.clone(),
    };
    let listeners = db.users_for(&args.listener)?;
    let issue_type = meta_or_default(db, MetaKind::Issue, args.issue.as_deref())?;
    let severity = meta_or_default(db, MetaKind::Severity, args.severity.as_deref())?;
    let category = meta_or_default(db, MetaKind::Category, args.category.as_deref())?;
    let mut parent = match &args.parent {
        Some(prefix) => Some(db.issue(prefix)?),
        None => None,
    };

    let title = title.join(" ").trim().to_string();
    let mut issue = db.new_issue(title, creator, unix_timestamp()?);
    issue.assigned_to = assigned_to;
    issue.listeners = listeners;
    issue.issue = issue_type;
    issue.target = args.target.clone();
    issue.severity = severity;
    issue.category = category;
    issue.status = db
        .config()
        .metadata
        .default_for(MetaKind::Status)
        .map(str::to_string);

    if let Some(parent) = parent.as_mut() {
        issue.parent = Some(parent.id.clone());
        parent.children.push(issue.id.clone());
    }
    let related: Vec<&Issue> = parent.iter().collect();
    db.add_issue(&issue, &related)?;
    tracing::info!(id = %issue.id, "created issue");

    if ui.is_quiet() {
        ui.quiet(&issue.id)?;
    }
    ui.write(format!(
        "Created new issue with ID {}",
        db.pref_str(&issue.id, true)
    ))?;
    let mut skip = vec![Field::Id, Field::CreationDate];
    skip.extend(people_skip(db, ui));
    ui.write(describe_changes(&issue, &Issue::default(), db, &skip))?;
    Ok(())
}

fn meta_or_default(db: &Database, kind: MetaKind, typed: Option<&str>) -> Result<Option<String>> {
    Ok(match typed {
        Some(value) => Some(db.meta(kind, value)?),
        None => db.config().metadata.default_for(kind).map(str::to_string),
    })
}
