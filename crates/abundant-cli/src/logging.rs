// Rust guideline compliant 2026-10-19

//! Diagnostic logging setup.

use crate::ui::Volume;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Maps the output volume to the most detailed log level shown.
#[must_use]
pub fn level_for(volume: Volume) -> Level {
    match volume {
        Volume::Quiet => Level::ERROR,
        Volume::Normal => Level::WARN,
        Volume::Verbose => Level::INFO,
        Volume::Debug => Level::DEBUG,
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or are appended to `log_file` through a non-blocking
/// writer when one is given.
///
/// # Returns
///
/// The writer guard for a log file; it must be held until exit so buffered
/// lines are flushed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(volume: Volume, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = level_for(volume);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_follows_volume() {
        assert_eq!(level_for(Volume::Quiet), Level::ERROR);
        assert_eq!(level_for(Volume::Normal), Level::WARN);
        assert_eq!(level_for(Volume::Debug), Level::DEBUG);
    }
}
