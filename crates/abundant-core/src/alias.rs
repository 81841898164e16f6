// Rust guideline compliant 2026-10-19

//! Manually registered names layered over a [`PrefixIndex`].

use crate::prefix::{fold, PrefixIndex};
use crate::Result;
use std::collections::HashMap;

/// A prefix index whose items may also be aliases for other items.
///
/// An alias such as `me` is searchable like any other item, but resolving it
/// yields the canonical item it was registered against. The target is
/// captured when the alias is created.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    index: PrefixIndex,
    /// Folded alias name to canonical item.
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Wraps an existing index with no aliases.
    #[must_use]
    pub fn new(index: PrefixIndex) -> Self {
        Self {
            index,
            aliases: HashMap::new(),
        }
    }

    /// Returns the underlying index, which includes alias names as items.
    #[must_use]
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Inserts a plain item.
    pub fn insert(&mut self, item: impl Into<String>) {
        self.index.insert(item);
    }

    /// Registers `name` as an alias for whatever `target` resolves to.
    ///
    /// # Arguments
    ///
    /// * `name` - The alias name, itself made searchable by prefix
    /// * `target` - A prefix of the canonical item
    ///
    /// # Returns
    ///
    /// The canonical item the alias now points at.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPrefix` or `AmbiguousPrefix` if `target` does not
    /// resolve; the table is left unchanged in that case.
    pub fn alias(&mut self, name: &str, target: &str) -> Result<String> {
        let canonical = self.resolve(target)?.to_string();
        tracing::trace!(alias = name, target = %canonical, "registered alias");
        self.aliases.insert(fold(name), canonical.clone());
        self.index.insert(name);
        Ok(canonical)
    }

    /// Returns the canonical item for an alias name, if `name` is one.
    #[must_use]
    pub fn target(&self, name: &str) -> Option<&str> {
        self.aliases.get(&fold(name)).map(String::as_str)
    }

    /// Resolves an alias name or an item prefix to a canonical item.
    ///
    /// An exact alias name bypasses prefix matching entirely. Otherwise the
    /// prefix is looked up in the index, and if it lands on an alias name the
    /// alias target is returned.
    ///
    /// # Arguments
    ///
    /// * `name_or_prefix` - Alias name or leading substring of an item
    ///
    /// # Returns
    ///
    /// The canonical item.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is unknown or ambiguous.
    pub fn resolve(&self, name_or_prefix: &str) -> Result<&str> {
        if let Some(target) = self.target(name_or_prefix) {
            return Ok(target);
        }
        let item = self.index.lookup(name_or_prefix)?;
        Ok(self.target(item).unwrap_or(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample() -> AliasTable {
        AliasTable::new(PrefixIndex::from_items(["abc123", "abd456", "xyz789"]))
    }

    #[test]
    fn test_alias_resolves_to_target() {
        let mut table = sample();
        assert_eq!(table.alias("me", "abc123").unwrap(), "abc123");

        assert_eq!(table.resolve("me").unwrap(), "abc123");
        assert_eq!(table.resolve("abc123").unwrap(), "abc123");
        assert_eq!(table.index().lookup("m").unwrap(), "me");
        assert_eq!(table.resolve("m").unwrap(), "abc123");
        assert_eq!(table.resolve("ME").unwrap(), "abc123");
    }

    #[test]
    fn test_alias_target_may_be_a_prefix() {
        let mut table = sample();
        table.alias("home", "x").unwrap();
        assert_eq!(table.resolve("home").unwrap(), "xyz789");
        assert_eq!(table.target("home"), Some("xyz789"));
        assert_eq!(table.target("xyz789"), None);
    }

    #[test]
    fn test_alias_against_unresolvable_target_fails() {
        let mut table = sample();
        assert!(matches!(
            table.alias("me", "ab"),
            Err(Error::AmbiguousPrefix { .. })
        ));
        assert!(matches!(
            table.alias("me", "nope"),
            Err(Error::UnknownPrefix(_))
        ));
        assert!(table.target("me").is_none());
        assert!(!table.index().contains("me"));
    }

    #[test]
    fn test_alias_of_alias_points_at_canonical() {
        let mut table = sample();
        table.alias("me", "abc").unwrap();
        table.alias("myself", "me").unwrap();
        assert_eq!(table.resolve("myself").unwrap(), "abc123");
    }

    #[test]
    fn test_alias_is_a_snapshot() {
        let mut table = AliasTable::new(PrefixIndex::from_items(["jane"]));
        table.alias("lead", "jane").unwrap();
        table.insert("Jane");
        assert_eq!(table.resolve("lead").unwrap(), "jane");
        assert_eq!(table.resolve("ja").unwrap(), "Jane");
    }

    #[test]
    fn test_alias_takes_part_in_ambiguity() {
        let mut table = AliasTable::new(PrefixIndex::from_items(["nobody", "norma"]));
        table.alias("nora", "norma").unwrap();
        assert!(matches!(
            table.resolve("nor"),
            Err(Error::AmbiguousPrefix { candidates, .. }) if candidates == vec!["nora", "norma"]
        ));
        assert_eq!(table.resolve("nora").unwrap(), "norma");
    }
}
