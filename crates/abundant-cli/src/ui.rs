// Rust guideline compliant 2026-10-19

//! Volume-aware output for command results.
//!
//! Command results go to a [`Ui`], which drops informational lines when the
//! user asked for quiet output. Diagnostics go through `tracing` instead.

use std::fmt::Display;
use std::io::{self, Write};

/// How much normal output a command prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Volume {
    /// Only essential output, such as IDs of created issues.
    Quiet,
    #[default]
    Normal,
    /// Extra detail, such as fields hidden in single-user databases.
    Verbose,
    /// Verbose output plus debug diagnostics.
    Debug,
}

/// Output sink for command results.
pub struct Ui<W: Write> {
    out: W,
    volume: Volume,
}

impl<W: Write> Ui<W> {
    /// Creates a new output sink.
    pub fn new(out: W, volume: Volume) -> Self {
        Self { out, volume }
    }

    /// Returns the configured volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn is_quiet(&self) -> bool {
        self.volume <= Volume::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.volume >= Volume::Verbose
    }

    /// Writes a line unless output is quiet. Empty messages are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write(&mut self, msg: impl Display) -> io::Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        self.line(msg)
    }

    /// Writes a line regardless of volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn quiet(&mut self, msg: impl Display) -> io::Result<()> {
        self.line(msg)
    }

    fn line(&mut self, msg: impl Display) -> io::Result<()> {
        let text = msg.to_string();
        if text.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", text)
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
