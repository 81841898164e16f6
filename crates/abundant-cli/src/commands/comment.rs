// Rust guideline compliant 2026-10-19

//! Implementation of the `ab comment` command.

use super::abort;
use crate::output::comment_text;
use crate::ui::Ui;
use abundant_app::{unix_timestamp, Database};
use abundant_core::Comment;
use anyhow::Result;
use std::io::Write;

/// Appends a time-stamped comment to an issue.
///
/// The comment author is the configured username, if any.
///
/// # Errors
///
/// Returns an error if the prefix does not resolve, the message is blank, or
/// the issue cannot be saved.
pub fn execute<W: Write>(db: &Database, ui: &mut Ui<W>, prefix: &str, message: &str) -> Result<()> {
    let mut issue = db.issue(prefix)?;

    let text = message.trim();
    if text.is_empty() {
        return Err(abort("Must provide a comment for the specified issue."));
    }

    let comment = Comment {
        author: db.config().ui.username.clone(),
        timestamp: unix_timestamp()?,
        text: text.to_string(),
    };
    issue.comments.push(comment.clone());
    db.save(&[&issue])?;

    ui.write(format!("Added Comment to Issue {}:", db.short_id(&issue.id)))?;
    ui.write(comment_text(&comment, db))?;
    Ok(())
}
