// Rust guideline compliant 2026-10-19

//! Implementation of the `ab init` command.
//!
//! Creates the `.ab` database layout in the chosen directory.

use crate::ui::Ui;
use abundant_app::RepoContext;
use anyhow::Result;
use std::env;
use std::io::Write;
use std::path::Path;

/// Initializes a new Abundant database.
///
/// # Arguments
///
/// * `ui` - Output sink
/// * `dir` - Directory to create `.ab` in; the current directory if `None`
///
/// # Errors
///
/// Returns an error if:
/// - A database already exists in the directory
/// - The directory layout cannot be created
pub fn execute<W: Write>(ui: &mut Ui<W>, dir: Option<&Path>) -> Result<()> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir()?,
    };

    let repo = RepoContext::init(&root)?;
    tracing::info!(path = %repo.db_dir().display(), "initialized database");
    ui.write(format!(
        "Created Abundant issue database in {}",
        repo.root().display()
    ))?;
    Ok(())
}
