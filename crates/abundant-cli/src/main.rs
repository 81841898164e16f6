// Rust guideline compliant 2026-10-19

//! Abundant CLI application.
//!
//! Command-line interface for the Abundant issue tracker.

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let code = abundant_cli::run(args);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
