// Rust guideline compliant 2026-10-19

//! Parsing and updating the users file.
//!
//! The users file holds one user per line, typically `Name <email>`. Blank
//! lines and lines starting with `#` are ignored.

use crate::alias::AliasTable;
use crate::prefix::PrefixIndex;
use crate::Result;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// A user line from the users file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    /// The full, trimmed line.
    pub name: String,
    /// Text between the first `<` and the first `>` after it, if any.
    pub alias: Option<String>,
}

impl UserEntry {
    /// Parses a single trimmed user line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        Self {
            name: line.to_string(),
            alias: bracketed(line).map(str::to_string),
        }
    }
}

/// Extracts the `<...>` span of a user name.
///
/// # Returns
///
/// The text between the brackets, or `None` if there is no non-empty span.
#[must_use]
pub fn bracketed(name: &str) -> Option<&str> {
    let lt = name.find('<')?;
    let gt = lt + name[lt..].find('>')?;
    Some(&name[lt + 1..gt]).filter(|inner| !inner.is_empty())
}

/// Parses the content of a users file.
#[must_use]
pub fn parse_users(content: &str) -> Vec<UserEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(UserEntry::parse)
        .collect()
}

/// Reads the users file, treating a missing file as empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_users(path: &Path) -> Result<Vec<UserEntry>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_users(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

/// Appends a user line to the users file, creating it if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append_user(path: &Path, name: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", name.trim())?;
    Ok(())
}

/// Builds the user alias table from parsed user entries.
///
/// Each `<...>` span becomes an alias for its full line. Lines whose span
/// collides with another user are left without an alias.
#[must_use]
pub fn user_table(entries: &[UserEntry]) -> AliasTable {
    let mut table = AliasTable::new(PrefixIndex::from_items(
        entries.iter().map(|entry| entry.name.clone()),
    ));
    for entry in entries {
        if let Some(alias) = &entry.alias {
            register_alias(&mut table, alias, &entry.name);
        }
    }
    table
}

/// Registers `alias` for the user `name`, logging instead of failing.
pub fn register_alias(table: &mut AliasTable, alias: &str, name: &str) {
    if let Err(err) = table.alias(alias, name) {
        tracing::warn!(alias, user = name, "could not register user alias: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_users_skips_blank_and_comments() {
        let users = parse_users("# team\n\n  Jane Doe <jane@example.com>  \nbob\n");
        assert_eq!(
            users,
            vec![
                UserEntry {
                    name: "Jane Doe <jane@example.com>".to_string(),
                    alias: Some("jane@example.com".to_string()),
                },
                UserEntry {
                    name: "bob".to_string(),
                    alias: None,
                },
            ]
        );
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed("a <b> c"), Some("b"));
        assert_eq!(bracketed("a > b <c"), None);
        assert_eq!(bracketed("a <>"), None);
        assert_eq!(bracketed("plain"), None);
    }

    #[test]
    fn test_user_table_resolves_email_alias() {
        let users = parse_users("Jane Doe <jane@example.com>\nJohn Smith <js@example.com>\n");
        let table = user_table(&users);
        assert_eq!(
            table.resolve("jane@example.com").unwrap(),
            "Jane Doe <jane@example.com>"
        );
        assert_eq!(table.resolve("js").unwrap(), "John Smith <js@example.com>");
        assert_eq!(
            table.resolve("jane d").unwrap(),
            "Jane Doe <jane@example.com>"
        );
        assert!(table.resolve("ja").is_err());
        assert!(table.resolve("J").is_err());
    }

    #[test]
    fn test_read_and_append_users() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users");
        assert!(read_users(&path).unwrap().is_empty());

        append_user(&path, "Jane Doe <jane@example.com>").unwrap();
        append_user(&path, " bob ").unwrap();
        let users = read_users(&path).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "bob");
    }
}
