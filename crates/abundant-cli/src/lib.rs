// Rust guideline compliant 2026-10-19

//! Abundant CLI library.
//!
//! This library exposes the CLI modules and the [`run`] entry point for use
//! in tests and the `ab` binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
pub mod ui;

use abundant_app::{AppError, Database, ErrorEnvelope, RepoContext};
use clap::{CommandFactory, Parser};
use cli::{expand_command, Cli, Commands};
use commands::{
    adduser, assign, child, comment, details, duplicate, init, list, new, open, resolve, tasks,
    update, version,
};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use termcolor::Color;
use ui::Ui;

pub use terminal::{get_terminal_width, should_use_color, wrap_text};

/// Exit code of a successful command.
pub const EXIT_OK: i32 = 0;

/// Exit code of a listing that found nothing.
pub const EXIT_NO_MATCHES: i32 = 1;

/// Exit code of a command that refused to proceed.
pub const EXIT_ABORT: i32 = 2;

/// Exit code of invalid command-line usage.
pub const EXIT_USAGE: i32 = 3;

/// Exit code of an unexpected failure.
pub const EXIT_UNEXPECTED: i32 = 10;

/// Runs `ab` with the given arguments and returns the process exit code.
///
/// The first argument is the program name.
pub fn run(args: Vec<String>) -> i32 {
    let args = match expand_command(args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n", message);
            let _ = Cli::command().print_help();
            return EXIT_USAGE;
        }
    };

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { EXIT_USAGE } else { EXIT_OK };
        }
    };

    let use_color = !cli.no_color && should_use_color();
    let _guard = match logging::init_tracing(cli.volume(), cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            terminal::print_abort(&format!("Cannot open log file: {}", err), use_color);
            return EXIT_ABORT;
        }
    };

    let stdout = io::stdout();
    let mut ui = Ui::new(stdout.lock(), cli.volume());
    match dispatch(cli, &mut ui) {
        Ok(code) => code,
        Err(err) => report(&err, use_color),
    }
}

/// Runs a parsed command line, writing results to `ui`.
///
/// # Returns
///
/// The exit code of a command that completed.
///
/// # Errors
///
/// Returns the command's failure; [`AppError`] aborts are meant to be shown
/// to the user as they are.
pub fn dispatch<W: Write>(cli: Cli, ui: &mut Ui<W>) -> anyhow::Result<i32> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(EXIT_OK);
    };

    let started = Instant::now();
    let code = match command {
        Commands::Init { dir } => {
            init::execute(ui, dir.as_deref().or(cli.database.as_deref()))?;
            EXIT_OK
        }
        Commands::Version => {
            version::execute(ui)?;
            EXIT_OK
        }
        command => {
            let mut db = open_database(cli.database.as_deref())?;
            run_with_database(command, &mut db, ui)?
        }
    };
    tracing::debug!(
        elapsed_us = started.elapsed().as_micros() as u64,
        code,
        "command finished"
    );
    Ok(code)
}

fn open_database(start: Option<&Path>) -> anyhow::Result<Database> {
    let repo = RepoContext::discover(start)?;
    tracing::debug!(root = %repo.root().display(), "found database");
    let config = repo.load_config()?;
    Ok(Database::open(repo, config)?)
}

fn run_with_database<W: Write>(
    command: Commands,
    db: &mut Database,
    ui: &mut Ui<W>,
) -> anyhow::Result<i32> {
    match command {
        Commands::Adduser { name, email } => adduser::execute(db, ui, &name, email.as_deref())?,
        Commands::Assign { prefix, user } => assign::execute(db, ui, &prefix, &user)?,
        Commands::Child {
            child: child_prefix,
            parent,
        } => child::execute(db, ui, &child_prefix, &parent)?,
        Commands::Comment { prefix, message } => comment::execute(db, ui, &prefix, &message)?,
        Commands::Details { prefix } => details::execute(db, ui, &prefix)?,
        Commands::Duplicate {
            duplicate: dup_prefix,
            parent,
        } => duplicate::execute(db, ui, &dup_prefix, &parent)?,
        Commands::List {
            assigned_to,
            filters,
        } => return Ok(listing_code(list::execute(db, ui, assigned_to.as_deref(), &filters)?)),
        Commands::New { title, args } => new::execute(db, ui, &title, &args)?,
        Commands::Open { prefix, status } => open::execute(db, ui, &prefix, status.as_deref())?,
        Commands::Resolve { prefix, resolution } => {
            resolve::execute(db, ui, &prefix, resolution.as_deref())?
        }
        Commands::Tasks { user, filters } => {
            return Ok(listing_code(tasks::execute(db, ui, user.as_deref(), &filters)?))
        }
        Commands::Update { prefix, args } => update::execute(db, ui, &prefix, &args)?,
        Commands::Init { .. } | Commands::Version => {
            anyhow::bail!("command does not run against a database")
        }
    }
    Ok(EXIT_OK)
}

fn listing_code(count: usize) -> i32 {
    if count == 0 {
        EXIT_NO_MATCHES
    } else {
        EXIT_OK
    }
}

/// Reports a failed command on stderr and returns its exit code.
fn report(err: &anyhow::Error, use_color: bool) -> i32 {
    if let Some(app) = err.downcast_ref::<AppError>() {
        let envelope = ErrorEnvelope::from_error(app);
        tracing::debug!(
            envelope = %serde_json::to_string(&envelope).unwrap_or_default(),
            "command failed"
        );
        if app.is_abort() {
            terminal::print_abort(&app.to_string(), use_color);
            return EXIT_ABORT;
        }
    }
    terminal::print_status("Unexpected error", Color::Red, &format!("{:#}", err), use_color);
    EXIT_UNEXPECTED
}
