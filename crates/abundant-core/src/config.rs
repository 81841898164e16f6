// Rust guideline compliant 2026-10-19

//! Configuration management for Abundant.
//!
//! Configuration is layered from several TOML files. A [`ConfigLoader`] is
//! built explicitly by the caller with the files to read, in precedence
//! order, and produces an owned [`Config`] that is passed down the call
//! chain.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of configuration files, both system-wide and per database.
pub const CONFIG_FILE: &str = "ab.conf";

/// Environment variable listing extra configuration files.
pub const CONFIG_PATH_VAR: &str = "ABCONFPATH";

/// User interface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Current user, resolved against the users file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Editor command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// strftime format for compact dates.
    #[serde(default = "default_short_date")]
    pub short_date: String,

    /// strftime format for detailed dates.
    #[serde(default = "default_long_date")]
    pub long_date: String,
}

fn default_short_date() -> String {
    "%d/%m/%y %I:%M%p".to_string()
}

fn default_long_date() -> String {
    "%a, %b. %d %y at %I:%M:%S%p".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            username: None,
            editor: None,
            short_date: default_short_date(),
            long_date: default_long_date(),
        }
    }
}

/// Issue metadata that can be restricted to a configured vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    /// Issue type.
    Issue,
    Severity,
    Status,
    Resolution,
    Category,
}

impl MetaKind {
    /// Every metadata kind.
    pub const ALL: [MetaKind; 5] = [
        MetaKind::Issue,
        MetaKind::Severity,
        MetaKind::Status,
        MetaKind::Resolution,
        MetaKind::Category,
    ];

    /// Returns the configuration key of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MetaKind::Issue => "issue",
            MetaKind::Severity => "severity",
            MetaKind::Status => "status",
            MetaKind::Resolution => "resolution",
            MetaKind::Category => "category",
        }
    }
}

impl std::fmt::Display for MetaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Vocabulary and defaults for one metadata kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaField {
    /// Accepted values.
    #[serde(default)]
    pub choices: Vec<String>,

    /// Value for new issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Value applied when an issue is reopened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened: Option<String>,

    /// Value applied when an issue is resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

impl MetaField {
    /// Returns every accepted value, including the configured defaults.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        self.choices
            .iter()
            .chain(&self.default)
            .chain(&self.resolved)
            .chain(&self.opened)
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Metadata vocabularies, one optional table per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<MetaField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<MetaField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MetaField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<MetaField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MetaField>,
}

impl MetadataConfig {
    /// Returns the configuration of `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: MetaKind) -> Option<&MetaField> {
        match kind {
            MetaKind::Issue => self.issue.as_ref(),
            MetaKind::Severity => self.severity.as_ref(),
            MetaKind::Status => self.status.as_ref(),
            MetaKind::Resolution => self.resolution.as_ref(),
            MetaKind::Category => self.category.as_ref(),
        }
    }

    /// Returns the value new issues get for `kind`.
    #[must_use]
    pub fn default_for(&self, kind: MetaKind) -> Option<&str> {
        self.get(kind).and_then(|field| field.default.as_deref())
    }

    /// Returns the value applied to `kind` on resolution.
    #[must_use]
    pub fn resolved_for(&self, kind: MetaKind) -> Option<&str> {
        self.get(kind).and_then(|field| field.resolved.as_deref())
    }

    /// Returns the value applied to `kind` on reopening.
    #[must_use]
    pub fn opened_for(&self, kind: MetaKind) -> Option<&str> {
        self.get(kind).and_then(|field| field.opened.as_deref())
    }
}

/// Configuration for Abundant behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,
}

impl Config {
    /// Parses a single configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML for a `Config`.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Applies environment overrides looked up through `var`.
    ///
    /// Supported variables:
    /// - `AB_USERNAME` - current user
    /// - `AB_EDITOR` - editor command
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(username) = var("AB_USERNAME").filter(|v| !v.trim().is_empty()) {
            self.ui.username = Some(username);
        }
        if let Some(editor) = var("AB_EDITOR").filter(|v| !v.trim().is_empty()) {
            self.ui.editor = Some(editor);
        }
    }
}

/// Ordered list of configuration files to merge.
///
/// Later files override earlier ones key by key; missing files are skipped.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader for the system and user configuration files.
    ///
    /// Files, lowest precedence first: `/etc/abundant/ab.conf`,
    /// `$HOME/.ab.conf`, then each entry of `ABCONFPATH`.
    #[must_use]
    pub fn system() -> Self {
        let mut loader = Self::new().with_path(Path::new("/etc/abundant").join(CONFIG_FILE));
        if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            loader = loader.with_path(PathBuf::from(home).join(".ab.conf"));
        }
        if let Some(extra) = std::env::var_os(CONFIG_PATH_VAR) {
            loader
                .paths
                .extend(std::env::split_paths(&extra).filter(|p| !p.as_os_str().is_empty()));
        }
        loader
    }

    /// Appends a file with higher precedence than those already added.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Returns the files in precedence order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Loads and merges every file, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file exists but cannot be read
    /// - A file is not valid TOML
    /// - The merged values do not form a valid configuration
    pub fn load(&self) -> Result<Config> {
        self.load_with(|key| std::env::var(key).ok())
    }

    fn load_with(&self, var: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let mut merged = toml::Table::new();
        for path in &self.paths {
            if !path.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(path)?;
            let table: toml::Table = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            merge_tables(&mut merged, table);
        }

        let mut config: Config = toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| Error::Config(e.to_string()))?;
        config.apply_overrides(var);
        Ok(config)
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.username, None);
        assert_eq!(config.ui.short_date, "%d/%m/%y %I:%M%p");
        assert!(config.metadata.get(MetaKind::Status).is_none());
    }

    #[test]
    fn test_load_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new().with_path(temp_dir.path().join(CONFIG_FILE));
        assert_eq!(loader.load_with(no_env).unwrap(), Config::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let temp_dir = TempDir::new().unwrap();
        let system = temp_dir.path().join("system.conf");
        let local = temp_dir.path().join("local.conf");
        std::fs::write(
            &system,
            r#"
[ui]
username = "Jane Doe <jane@example.com>"
editor = "vi"

[metadata.status]
choices = ["open", "in progress"]
default = "open"
"#,
        )
        .unwrap();
        std::fs::write(
            &local,
            r#"
[ui]
editor = "nano"

[metadata.status]
resolved = "closed"
"#,
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_path(&system)
            .with_path(&local)
            .load_with(no_env)
            .unwrap();
        assert_eq!(
            config.ui.username.as_deref(),
            Some("Jane Doe <jane@example.com>")
        );
        assert_eq!(config.ui.editor.as_deref(), Some("nano"));
        assert_eq!(config.metadata.default_for(MetaKind::Status), Some("open"));
        assert_eq!(config.metadata.resolved_for(MetaKind::Status), Some("closed"));
        assert_eq!(
            config.metadata.get(MetaKind::Status).unwrap().vocabulary(),
            vec!["open", "in progress", "open", "closed"]
        );
    }

    #[test]
    fn test_invalid_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[ui\nusername = ").unwrap();
        let err = ConfigLoader::new().with_path(&path).load_with(no_env).unwrap_err();
        assert!(matches!(&err, Error::Config(msg) if msg.contains(CONFIG_FILE)));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[ui]\nusername = \"file user\"\n").unwrap();

        let env: HashMap<&str, &str> = [("AB_USERNAME", "env user"), ("AB_EDITOR", "  ")]
            .into_iter()
            .collect();
        let config = ConfigLoader::new()
            .with_path(&path)
            .load_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.ui.username.as_deref(), Some("env user"));
        assert_eq!(config.ui.editor, None);
    }

    #[test]
    fn test_save_and_parse() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        let mut original = Config::default();
        original.ui.username = Some("bob".to_string());
        original.metadata.severity = Some(MetaField {
            choices: vec!["low".to_string(), "high".to_string()],
            default: Some("low".to_string()),
            ..MetaField::default()
        });

        std::fs::write(&path, toml::to_string_pretty(&original).unwrap()).unwrap();
        let loaded = ConfigLoader::new().with_path(&path).load_with(|_| None).unwrap();
        assert_eq!(original, loaded);
    }
}
