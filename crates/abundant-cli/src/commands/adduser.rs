// Rust guideline compliant 2026-10-19

//! Implementation of the `ab adduser` command.

use super::abort;
use crate::ui::Ui;
use abundant_app::Database;
use abundant_core::users;
use anyhow::Result;
use std::io::Write;

/// Appends a user line to the users file.
///
/// The name words are joined with spaces. With an email the line becomes
/// `NAME <EMAIL>`, which also makes the email usable as a user prefix.
///
/// # Errors
///
/// Returns an error if the name is blank or the users file cannot be written.
pub fn execute<W: Write>(
    db: &Database,
    ui: &mut Ui<W>,
    name: &[String],
    email: Option<&str>,
) -> Result<()> {
    let mut line = name.join(" ").trim().to_string();
    if line.is_empty() {
        return Err(abort("Must provide a name for the new user."));
    }
    if let Some(email) = email.map(str::trim).filter(|email| !email.is_empty()) {
        line = format!("{} <{}>", line, email);
    }

    users::append_user(db.repo().users_path(), &line)?;
    tracing::info!(user = %line, "added user");
    ui.write(format!("Added {} to the list of users", line))?;
    Ok(())
}
