// Rust guideline compliant 2026-10-19

//! Implementation of the `ab version` command.

use crate::ui::Ui;
use anyhow::Result;
use std::io::Write;

const LICENSE: &str = "This is free software, released under the GPL 3+ license,\n\
available at http://www.gnu.org/licenses/.\n\n\
This program is distributed in the hope that it will be useful,\n\
but WITHOUT ANY WARRANTY; without even the implied warranty of\n\
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.";

/// Prints version and licensing information.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn execute<W: Write>(ui: &mut Ui<W>) -> Result<()> {
    ui.write(format!(
        "Abundant Issue Tracking - Version {}\n",
        env!("CARGO_PKG_VERSION")
    ))?;
    ui.write(LICENSE)?;
    Ok(())
}
