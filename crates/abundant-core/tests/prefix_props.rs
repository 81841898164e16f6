// Rust guideline compliant 2026-10-19

//! Property-based tests for prefix resolution.
//!
//! These tests validate lookup, shortest-prefix and alias behavior across
//! arbitrary item sets.

use abundant_core::prefix::fold;
use abundant_core::{AliasTable, Error, Match, PrefixIndex};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Generates item sets that are distinct after case folding.
fn arb_items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-fA-F0-9]{1,8}").unwrap(), 1..20)
        .prop_map(|items| {
            let mut seen = BTreeMap::new();
            for item in items {
                seen.entry(fold(&item)).or_insert(item);
            }
            seen.into_values().collect()
        })
}

/// Returns the items whose folded form starts with the folded prefix.
fn matching<'a>(items: &'a [String], prefix: &str) -> Vec<&'a String> {
    let key = fold(prefix);
    items.iter().filter(|item| fold(item).starts_with(&key)).collect()
}

proptest! {
    /// Every inserted item resolves to itself, case preserved.
    #[test]
    fn test_lookup_returns_exact_item(items in arb_items()) {
        let index = PrefixIndex::from_items(items.clone());
        for item in &items {
            prop_assert_eq!(index.lookup(item).unwrap(), item.as_str());
        }
    }

    /// Lookup is case-insensitive.
    #[test]
    fn test_lookup_ignores_case(items in arb_items(), pick in any::<prop::sample::Index>(), len in 1usize..8) {
        let index = PrefixIndex::from_items(items.clone());
        let item = pick.get(&items);
        let prefix: String = item.chars().take(len).collect();
        let upper = index.search(&prefix.to_uppercase());
        let lower = index.search(&prefix.to_lowercase());
        prop_assert_eq!(upper, lower);
    }

    /// Search agrees with a linear scan of the items.
    #[test]
    fn test_search_matches_linear_scan(items in arb_items(), prefix in "[a-fA-F0-9]{0,4}") {
        let index = PrefixIndex::from_items(items.clone());
        let matches = matching(&items, &prefix);
        let exact = matches.iter().find(|item| fold(item) == fold(&prefix));

        match index.search(&prefix) {
            Match::NotFound => prop_assert!(matches.is_empty()),
            Match::Found(found) => {
                prop_assert!(matches.len() == 1 || exact.is_some());
                if let Some(exact) = exact {
                    prop_assert_eq!(found, exact.as_str());
                } else {
                    prop_assert_eq!(found, matches[0].as_str());
                }
            }
            Match::Ambiguous(candidates) => {
                prop_assert!(matches.len() > 1);
                prop_assert!(exact.is_none());
                let mut expected: Vec<&str> = matches.iter().map(|s| s.as_str()).collect();
                expected.sort_by_key(|s| fold(s));
                prop_assert_eq!(candidates, expected);
            }
        }
    }

    /// The shortest unique prefix resolves back to its item and is minimal.
    #[test]
    fn test_shortest_unique_prefix_is_minimal(items in arb_items()) {
        let index = PrefixIndex::from_items(items.clone());
        for item in &items {
            let unique = index.shortest_unique_prefix(item).unwrap();
            prop_assert!(!unique.is_empty());
            prop_assert!(item.starts_with(unique));
            prop_assert_eq!(index.lookup(unique).unwrap(), item.as_str());

            let len = unique.chars().count();
            if len > 1 && items.len() > 1 {
                let shorter: String = item.chars().take(len - 1).collect();
                prop_assert!(
                    index.lookup(&shorter).map(|found| found != item).unwrap_or(true),
                    "{} already identifies {}", shorter, item
                );
            }
        }
    }

    /// Incremental inserts build the same index as bulk construction.
    #[test]
    fn test_insert_matches_bulk_construction(items in arb_items()) {
        let bulk = PrefixIndex::from_items(items.clone());
        let mut incremental = PrefixIndex::new();
        for item in items.iter().rev() {
            incremental.insert(item.clone());
        }
        prop_assert_eq!(bulk.items().collect::<Vec<_>>(), incremental.items().collect::<Vec<_>>());
    }

    /// An alias and its target resolve to the same canonical item.
    #[test]
    fn test_alias_and_target_agree(items in arb_items(), pick in any::<prop::sample::Index>()) {
        let target = pick.get(&items).clone();
        let mut table = AliasTable::new(PrefixIndex::from_items(items));
        table.alias("zz-alias", &target).unwrap();
        prop_assert_eq!(table.resolve("zz-alias").unwrap(), target.as_str());
        prop_assert_eq!(table.resolve(&target).unwrap(), target.as_str());
        prop_assert_eq!(table.resolve("z").unwrap(), target.as_str());
    }
}

#[test]
fn test_reference_scenarios() {
    let index = PrefixIndex::from_items(["abc123", "abd456", "xyz789"]);
    assert_eq!(index.lookup("x").unwrap(), "xyz789");
    assert_eq!(index.search("a"), Match::Ambiguous(vec!["abc123", "abd456"]));
    assert_eq!(index.search("ab"), Match::Ambiguous(vec!["abc123", "abd456"]));
    assert_eq!(index.lookup("abc").unwrap(), "abc123");
    assert_eq!(index.lookup("abc123").unwrap(), "abc123");
    assert_eq!(index.shortest_unique_prefix("abc123"), Some("abc"));
    assert_eq!(index.shortest_unique_prefix("xyz789"), Some("x"));

    let mut table = AliasTable::new(index);
    table.alias("me", "abc123").unwrap();
    assert_eq!(table.resolve("me").unwrap(), "abc123");
    assert_eq!(table.index().lookup("m").unwrap(), "me");
}

#[test]
fn test_ambiguous_error_lists_candidates() {
    let index = PrefixIndex::from_items(["code", "contribute", "a"]);
    let err = index.lookup("co").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Ambiguous prefix: co"), "unexpected message {msg}");
    match err {
        Error::AmbiguousPrefix { candidates, .. } => {
            assert_eq!(candidates, vec!["code", "contribute"]);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}
