// Rust guideline compliant 2026-10-19

//! Command-line definition for `ab`.
//!
//! Command names may be abbreviated to any unique prefix. The abbreviation
//! is expanded before clap sees the arguments, through a prefix index over
//! the subcommand names clap knows about.

use crate::commands::{list::FilterArgs, new::NewArgs, update::UpdateArgs};
use crate::ui::Volume;
use abundant_core::{Match, PrefixIndex};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Global options that consume the following argument.
const VALUE_FLAGS: [&str; 3] = ["-D", "--database", "--log-file"];

#[derive(Parser, Debug)]
#[command(
    name = "ab",
    version,
    about = "Abundant: distributed issue tracking",
    long_about = "Abundant keeps issues as plain files next to your code. Any issue, user or command can be named by a unique prefix.",
    after_help = "Examples:\n  ab init\n  ab new Crash on start -s high\n  ab li -S open\n  ab det 4f\n  ab res 4f wontfix\n"
)]
pub struct Cli {
    /// Directory to search for the database from
    #[arg(short = 'D', long, global = true, value_name = "DIR")]
    pub database: Option<PathBuf>,

    /// Only print essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print additional detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print debug diagnostics, including timings
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Append diagnostics to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Returns the output volume selected by the flags.
    #[must_use]
    pub fn volume(&self) -> Volume {
        if self.debug {
            Volume::Debug
        } else if self.verbose {
            Volume::Verbose
        } else if self.quiet {
            Volume::Quiet
        } else {
            Volume::Normal
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Manually add a user to the list of users
    Adduser {
        /// Name of the user; all words are joined
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Email address, stored as `NAME <EMAIL>`
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Assign an issue to a user ('me' and 'nobody' work as expected)
    Assign {
        /// Issue prefix
        prefix: String,

        /// User prefix
        user: String,
    },

    /// Mark an issue as a child of another issue
    Child {
        /// Prefix of the child issue
        child: String,

        /// Prefix of the parent issue
        parent: String,
    },

    /// Add a comment to an issue
    Comment {
        /// Issue prefix
        prefix: String,

        /// Comment text
        #[arg(short, long)]
        message: String,
    },

    /// Display all the details and status of an issue
    Details {
        /// Issue prefix
        prefix: String,
    },

    /// Mark an issue as a duplicate of another
    Duplicate {
        /// Prefix of the duplicate issue
        duplicate: String,

        /// Prefix of the issue being duplicated
        parent: String,
    },

    /// Initialize an Abundant database
    Init {
        /// Directory to create the database in
        dir: Option<PathBuf>,
    },

    /// List open issues, or resolved ones with -r
    List {
        /// Issues assigned to this user
        #[arg(short, long)]
        assigned_to: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Create a new issue
    New {
        /// Title of the issue; all words are joined
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        #[command(flatten)]
        args: NewArgs,
    },

    /// Reopen a resolved issue
    Open {
        /// Issue prefix
        prefix: String,

        /// Status to set
        status: Option<String>,
    },

    /// Mark an issue resolved
    Resolve {
        /// Issue prefix
        prefix: String,

        /// Resolution, such as wontfix
        resolution: Option<String>,
    },

    /// List issues assigned to the current user
    Tasks {
        /// User to list tasks for
        user: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Update the information associated with an issue
    Update {
        /// Issue prefix
        prefix: String,

        #[command(flatten)]
        args: UpdateArgs,
    },

    /// Abundant version information and licensing
    Version,
}

/// Returns every command name, including clap's generated `help`.
#[must_use]
pub fn command_names() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .map(|command| command.get_name().to_string())
        .chain(std::iter::once("help".to_string()))
        .collect()
}

/// Expands an abbreviated command name in `args` to its full name.
///
/// Global options before the command are skipped over.
///
/// # Errors
///
/// Returns the message to show when the command is unknown or ambiguous.
pub fn expand_command(mut args: Vec<String>) -> Result<Vec<String>, String> {
    let mut position = None;
    let mut iter = args.iter().enumerate().skip(1);
    while let Some((i, arg)) = iter.next() {
        if arg == "--" {
            break;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
            continue;
        }
        if !arg.starts_with('-') {
            position = Some(i);
            break;
        }
    }
    let Some(i) = position else {
        return Ok(args);
    };

    let names: PrefixIndex = command_names().into_iter().collect();
    match names.search(&args[i]) {
        Match::Found(name) => {
            tracing::trace!(typed = %args[i], command = name, "expanded command");
            args[i] = name.to_string();
            Ok(args)
        }
        Match::Ambiguous(choices) => Err(format!(
            "Ambiguous Command: {}\nDid you mean: {}",
            args[i],
            choices.join(", ")
        )),
        Match::NotFound => Err(format!("Unknown Command: {}", args[i])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_expand_unique_prefix() {
        assert_eq!(
            expand_command(args(&["ab", "det", "4f"])).unwrap(),
            args(&["ab", "details", "4f"])
        );
        assert_eq!(
            expand_command(args(&["ab", "-D", "repo", "-q", "ne", "Title"])).unwrap(),
            args(&["ab", "-D", "repo", "-q", "new", "Title"])
        );
    }

    #[test]
    fn test_expand_exact_name_and_no_command() {
        assert_eq!(
            expand_command(args(&["ab", "list"])).unwrap(),
            args(&["ab", "list"])
        );
        assert_eq!(
            expand_command(args(&["ab", "--version"])).unwrap(),
            args(&["ab", "--version"])
        );
    }

    #[test]
    fn test_expand_ambiguous_and_unknown() {
        let err = expand_command(args(&["ab", "d", "4f"])).unwrap_err();
        assert_eq!(
            err,
            "Ambiguous Command: d\nDid you mean: details, duplicate"
        );
        let err = expand_command(args(&["ab", "zap"])).unwrap_err();
        assert_eq!(err, "Unknown Command: zap");
    }

    #[test]
    fn test_command_index_covers_every_command() {
        let names: PrefixIndex = command_names().into_iter().collect();
        assert_eq!(names.len(), command_names().len());
        assert_eq!(names.lookup("adduser").unwrap(), "adduser");
        assert_eq!(names.lookup("h").unwrap(), "help");
    }

    #[test]
    fn test_volume_from_flags() {
        let cli = Cli::try_parse_from(["ab", "-q", "version"]).unwrap();
        assert_eq!(cli.volume(), Volume::Quiet);
        let cli = Cli::try_parse_from(["ab", "--debug", "version"]).unwrap();
        assert_eq!(cli.volume(), Volume::Debug);
    }
}
