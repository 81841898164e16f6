// Rust guideline compliant 2026-10-19

//! Rendering of issues for the terminal.
//!
//! Issue IDs are always shown through the issue prefix index, so the part a
//! user needs to type is visibly separated from the rest (`4f:a91c...`).

use crate::terminal::wrap_text;
use abundant_app::{format_timestamp, Database};
use abundant_core::{Change, Comment, Field, Issue, Value};
use tabled::{builder::Builder, settings::Style};

/// Renders every non-empty field of an issue, one field per entry.
///
/// The issue's own ID is shown in full; related IDs use the short form.
/// Dates use the configured long date format.
///
/// # Arguments
/// * `issue` - The issue to render
/// * `db` - Database providing the prefix index and date formats
/// * `skip` - Fields to leave out
pub fn details(issue: &Issue, db: &Database, skip: &[Field]) -> String {
    let long_date = &db.config().ui.long_date;
    Field::ALL
        .iter()
        .copied()
        .filter(|field| !skip.contains(field))
        .filter_map(|field| {
            let parts: Vec<String> = match issue.value(field)? {
                Value::Text(text) if field.is_id() => vec![db.pref_str(text, field != Field::Id)],
                Value::Text(text) => vec![text.to_string()],
                Value::List(items) if field.is_id() => {
                    items.iter().map(|id| db.pref_str(id, true)).collect()
                }
                Value::List(items) => items.to_vec(),
                Value::Time(timestamp) => vec![format_timestamp(timestamp, long_date)],
                Value::Comments(comments) => comments
                    .iter()
                    .map(|comment| wrap_text(&comment_text(comment, db), 2))
                    .collect(),
            };
            Some(if field == Field::Comments {
                format!("{}:\n  {}", field.label(), parts.join("\n  "))
            } else if field.is_long() {
                format!("{}:\n  {}", field.label(), indent(&parts.join("\n")))
            } else {
                format!("{}: {}", field.label(), parts.join(", "))
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indents every line after the first by two spaces, leaving blank lines
/// empty.
fn indent(text: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a comment with its time and author.
pub fn comment_text(comment: &Comment, db: &Database) -> String {
    let at = format_timestamp(comment.timestamp, &db.config().ui.short_date);
    match &comment.author {
        Some(author) => format!("{}\n\nAt {} by {}", comment.text, at, author),
        None => format!("{}\n\nAt {}", comment.text, at),
    }
}

/// Describes how `new` differs from `old`, one indented line per field.
///
/// # Arguments
/// * `new` - The updated issue
/// * `old` - The issue before the update
/// * `db` - Database providing the prefix index and date formats
/// * `skip` - Fields to leave out
pub fn describe_changes(new: &Issue, old: &Issue, db: &Database, skip: &[Field]) -> String {
    new.changes_from(old, skip)
        .iter()
        .map(|change| format!("  {}", describe_change(change, db)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_change(change: &Change<'_>, db: &Database) -> String {
    match change {
        Change::Set { field, now, was } => {
            let mut line = format!("Set {} to {}", field.label(), render(*field, now, db));
            if let Some(was) = was {
                line.push_str(&format!(", was {}", render(*field, was, db)));
            }
            line
        }
        Change::Removed { field, was } => {
            format!("Removed {}, was {}", field.label(), render(*field, was, db))
        }
        Change::Listed {
            field,
            added,
            removed,
        } => {
            let show = |items: &[&str]| {
                items
                    .iter()
                    .map(|item| {
                        if field.is_id() {
                            db.pref_str(item, true)
                        } else {
                            item.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let mut line = String::new();
            if !added.is_empty() {
                line.push_str(&format!("Added {} to {}", show(added.as_slice()), field.label()));
            }
            if !added.is_empty() && !removed.is_empty() {
                line.push_str(", ");
            }
            if !removed.is_empty() {
                line.push_str(&format!("Removed {}", show(removed.as_slice())));
                if added.is_empty() {
                    line.push_str(&format!(" from {}", field.label()));
                }
            }
            line
        }
    }
}

fn render(field: Field, value: &Value<'_>, db: &Database) -> String {
    match value {
        Value::Text(text) if field.is_id() => db.pref_str(text, true),
        Value::Text(text) => text.to_string(),
        Value::List(items) => items.join(", "),
        Value::Time(timestamp) => format_timestamp(*timestamp, &db.config().ui.short_date),
        Value::Comments(comments) => comments
            .iter()
            .map(|comment| comment.text.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Renders the one-line list form `prefix:<TAB>title`.
pub fn list_line(issue: &Issue, db: &Database) -> String {
    format!("{}:\t{}", db.short_id(&issue.id), issue.title())
}

/// Renders issues as a table with their main metadata.
pub fn issue_table(issues: &[Issue], db: &Database) -> String {
    let short_date = &db.config().ui.short_date;
    let mut builder = Builder::default();
    builder.push_record(vec![
        "ID".to_string(),
        "Title".to_string(),
        "Severity".to_string(),
        "Status".to_string(),
        "Assigned To".to_string(),
        "Created".to_string(),
    ]);

    for issue in issues {
        builder.push_record(vec![
            db.short_id(&issue.id).to_string(),
            issue.title().to_string(),
            issue.severity.clone().unwrap_or_default(),
            issue.status.clone().unwrap_or_default(),
            issue.assigned_to.clone().unwrap_or_default(),
            format_timestamp(issue.creation_date, short_date),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Renders the closing count line of a listing.
pub fn found_line(count: usize) -> String {
    match count {
        0 => "Found no matching issues".to_string(),
        1 => "Found 1 matching issue".to_string(),
        n => format!("Found {} matching issues", n),
    }
}
