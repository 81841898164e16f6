// Rust guideline compliant 2026-10-19

//! Database discovery and path management utilities.

use crate::error::{AppError, Result};
use abundant_core::config::CONFIG_FILE;
use abundant_core::{Config, ConfigLoader, Storage};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the database directory.
pub const DB_DIR: &str = ".ab";

/// Path metadata for an Abundant database.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    db_dir: PathBuf,
    issues_dir: PathBuf,
    cache_dir: PathBuf,
    config_path: PathBuf,
    local_config_path: PathBuf,
    users_path: PathBuf,
}

impl RepoContext {
    /// Describes the database that would live directly under `root`.
    ///
    /// Nothing is checked on disk; use [`RepoContext::exists`].
    #[must_use]
    pub fn at(root: &Path) -> Self {
        let db_dir = root.join(DB_DIR);
        Self {
            root: root.to_path_buf(),
            issues_dir: db_dir.join("issues"),
            cache_dir: db_dir.join(".cache"),
            config_path: db_dir.join(CONFIG_FILE),
            local_config_path: db_dir.join("ab.local.conf"),
            users_path: db_dir.join("users"),
            db_dir,
        }
    }

    /// Discovers a database in `start` or the nearest parent holding one.
    ///
    /// # Arguments
    ///
    /// * `start` - Directory to search from, or the current directory
    ///
    /// # Returns
    ///
    /// A `RepoContext` rooted at the directory containing `.ab`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - No directory up to the filesystem root contains `.ab`
    pub fn discover(start: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let start = match start {
            Some(path) => cwd.join(path),
            None => cwd,
        };

        let found = start
            .ancestors()
            .find(|dir| dir.join(DB_DIR).is_dir())
            .map(Self::at);
        match found {
            Some(repo) => {
                tracing::debug!(root = %repo.root.display(), "found database");
                Ok(repo)
            }
            None => Err(AppError::DatabaseNotFound { path: start }),
        }
    }

    /// Creates an empty database under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `root` already holds a database (`DatabaseExists`)
    /// - Any directory or file cannot be created
    pub fn init(root: &Path) -> Result<Self> {
        let repo = Self::at(root);
        if repo.exists() {
            return Err(AppError::DatabaseExists {
                path: repo.db_dir.clone(),
            });
        }
        fs::create_dir_all(&repo.issues_dir)?;
        fs::create_dir(&repo.cache_dir)?;
        for file in [&repo.config_path, &repo.local_config_path, &repo.users_path] {
            fs::File::create(file)?;
        }
        tracing::info!(path = %repo.db_dir.display(), "created database");
        Ok(repo)
    }

    /// Returns true if the `.ab` directory exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.db_dir.exists()
    }

    /// Returns the directory containing `.ab`.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.ab` directory path.
    #[must_use]
    pub fn db_dir(&self) -> &Path {
        self.db_dir.as_path()
    }

    /// Returns the directory holding issue files.
    #[must_use]
    pub fn issues_dir(&self) -> &Path {
        self.issues_dir.as_path()
    }

    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        self.cache_dir.as_path()
    }

    /// Returns the shared database config path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Returns the per-checkout config path.
    #[must_use]
    pub fn local_config_path(&self) -> &Path {
        self.local_config_path.as_path()
    }

    /// Returns the users file path.
    #[must_use]
    pub fn users_path(&self) -> &Path {
        self.users_path.as_path()
    }

    /// Opens storage for the issues directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.issues_dir.clone())?)
    }

    /// Returns a loader for the system files followed by both database files.
    #[must_use]
    pub fn config_loader(&self) -> ConfigLoader {
        ConfigLoader::system()
            .with_path(&self.config_path)
            .with_path(&self.local_config_path)
    }

    /// Loads layered configuration for this database.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is malformed.
    pub fn load_config(&self) -> Result<Config> {
        Ok(self.config_loader().load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let repo = RepoContext::init(temp_dir.path()).unwrap();
        assert!(repo.issues_dir().is_dir());
        assert!(repo.cache_dir().is_dir());
        assert!(repo.config_path().is_file());
        assert!(repo.local_config_path().is_file());
        assert!(repo.users_path().is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp_dir = TempDir::new().unwrap();
        RepoContext::init(temp_dir.path()).unwrap();
        assert!(matches!(
            RepoContext::init(temp_dir.path()),
            Err(AppError::DatabaseExists { .. })
        ));
    }

    #[test]
    fn test_discover_walks_up_to_database() {
        let temp_dir = TempDir::new().unwrap();
        RepoContext::init(temp_dir.path()).unwrap();
        let nested = temp_dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let repo = RepoContext::discover(Some(&nested)).unwrap();
        assert_eq!(repo.root(), temp_dir.path());
    }

    #[test]
    fn test_discover_without_database() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            RepoContext::discover(Some(temp_dir.path())),
            Err(AppError::DatabaseNotFound { .. })
        ));
    }
}
