// Rust guideline compliant 2026-10-19

//! Storage module for issue files.
//!
//! Every issue lives in its own JSON file named `<id>.issue` inside the
//! issues directory. The set of file stems is the authoritative list of
//! issue IDs that prefix indices are built from.

use crate::issue::{Issue, ISSUE_EXT};
use crate::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Storage engine for issues.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the issues directory.
    dir: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `dir` - Path to the issues directory
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the issues directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path an issue with `id` is stored at.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, ISSUE_EXT))
    }

    /// Lists the IDs of all stored issues.
    ///
    /// Files without the issue extension are ignored.
    ///
    /// # Returns
    ///
    /// Issue IDs in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ISSUE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_string());
            }
        }
        Ok(ids)
    }

    /// Loads the issue with the exact ID `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No file exists for `id` (`NoSuchIssue`)
    /// - The file does not contain a valid issue (`InvalidIssue`)
    pub fn load(&self, id: &str) -> Result<Issue> {
        let path = self.path_for(id);
        let file = File::open(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::NoSuchIssue(path.display().to_string()),
            _ => Error::Io(err),
        })?;
        let mut issue: Issue = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| Error::InvalidIssue(format!("{}: {}", path.display(), err)))?;
        if issue.id.is_empty() {
            issue.id = id.to_string();
        }
        Ok(issue)
    }

    /// Loads every stored issue, skipping files that fail to parse.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be read.
    pub fn load_all(&self) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        for id in self.ids()? {
            match self.load(&id) {
                Ok(issue) => issues.push(issue),
                Err(Error::InvalidIssue(msg)) => {
                    tracing::warn!("Skipping invalid issue file {}", msg);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(issues)
    }

    /// Saves an issue, replacing any previous version.
    ///
    /// Writes to a temp file and renames it into place under the directory
    /// lock, so readers never see a partial file.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is held elsewhere or the issue cannot be
    /// serialized or written.
    pub fn save(&self, issue: &Issue) -> Result<()> {
        self.with_lock(|| self.write_unlocked(issue))
    }

    /// Saves several issues under one lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be taken or any write fails.
    pub fn save_all(&self, issues: &[&Issue]) -> Result<()> {
        self.with_lock(|| {
            issues
                .iter()
                .try_for_each(|issue| self.write_unlocked(issue))
        })
    }

    /// Writes one issue file. Callers hold the directory lock.
    fn write_unlocked(&self, issue: &Issue) -> Result<()> {
        if issue.id.is_empty() {
            return Err(Error::InvalidIssue("Issue ID cannot be empty".to_string()));
        }
        let path = self.path_for(&issue.id);
        let temp_path = path.with_extension("issue.tmp");
        {
            let mut file = File::create(&temp_path)?;
            serde_json::to_writer_pretty(&mut file, issue)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &path)?;
        tracing::debug!(id = %issue.id, "saved issue");
        Ok(())
    }

    /// Executes a closure with an exclusive lock on the issues directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock is held by another process
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.dir.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}
