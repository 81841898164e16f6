// Rust guideline compliant 2026-10-19

//! Unique-prefix resolution over a set of opaque identifiers.
//!
//! A [`PrefixIndex`] lets a user refer to a long identifier (an issue hash,
//! a username, a command name) by typing any case-insensitive leading
//! substring that matches nothing else. The index is a sorted array of
//! folded keys searched with binary search; it is rebuilt per invocation
//! and never persisted.

use crate::{Error, Result};
use std::ops::Range;

/// Number of tail characters kept by the short display form.
const SHORT_TAIL: usize = 4;

/// Folds an item to its case-insensitive comparison key.
///
/// Every character maps to exactly one character, so character offsets in
/// the key line up with offsets in the original item.
#[must_use]
pub fn fold(item: &str) -> String {
    item.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Outcome of searching the index for a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<'a> {
    /// Exactly one item matches, or one item equals the prefix.
    Found(&'a str),
    /// Several items match and none of them equals the prefix.
    Ambiguous(Vec<&'a str>),
    /// Nothing matches.
    NotFound,
}

impl<'a> Match<'a> {
    /// Converts the outcome into a `Result`, attributing failures to `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPrefix` for `NotFound` and `AmbiguousPrefix` for
    /// `Ambiguous`.
    pub fn into_result(self, prefix: &str) -> Result<&'a str> {
        match self {
            Match::Found(item) => Ok(item),
            Match::Ambiguous(candidates) => Err(Error::AmbiguousPrefix {
                prefix: prefix.to_string(),
                candidates: candidates.into_iter().map(str::to_string).collect(),
            }),
            Match::NotFound => Err(Error::UnknownPrefix(prefix.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    item: String,
}

impl Entry {
    fn new(item: String) -> Self {
        Self {
            key: fold(&item),
            item,
        }
    }
}

/// Sorted index of items addressable by unique case-insensitive prefix.
///
/// Entries are unique by folded key. Two items differing only by case
/// collapse into one entry holding whichever was inserted last. Empty items
/// are ignored since they have no prefix to type.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    entries: Vec<Entry>,
}

impl PrefixIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a sequence of items.
    ///
    /// When two items fold to the same key, the later one in `items` wins.
    ///
    /// # Arguments
    ///
    /// * `items` - Items to index, in precedence order
    ///
    /// # Returns
    ///
    /// A new index holding every distinct folded item.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<Entry> = items
            .into_iter()
            .map(Into::into)
            .filter(|item: &String| !item.is_empty())
            .map(Entry::new)
            .collect();
        // Stable sort keeps input order among equal keys, so the last
        // duplicate seen is the one that survives below.
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        let mut unique: Vec<Entry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match unique.last_mut() {
                Some(last) if last.key == entry.key => *last = entry,
                _ => unique.push(entry),
            }
        }

        Self { entries: unique }
    }

    /// Returns the number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored items in folded-key order.
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.item.as_str())
    }

    /// Returns true if an item folding to the same key as `item` is present.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.position(&fold(item)).is_ok()
    }

    /// Inserts an item, replacing any stored item with the same folded key.
    ///
    /// # Arguments
    ///
    /// * `item` - The item to insert
    pub fn insert(&mut self, item: impl Into<String>) {
        let item = item.into();
        if item.is_empty() {
            return;
        }
        let entry = Entry::new(item);
        match self.position(&entry.key) {
            Ok(idx) => self.entries[idx].item = entry.item,
            Err(idx) => self.entries.insert(idx, entry),
        }
    }

    fn position(&self, key: &str) -> std::result::Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.key.as_str().cmp(key))
    }

    /// Returns the contiguous range of entries whose key starts with `key`.
    fn range(&self, key: &str) -> Range<usize> {
        let lo = self.entries.partition_point(|entry| entry.key.as_str() < key);
        let len = self.entries[lo..].partition_point(|entry| entry.key.starts_with(key));
        lo..lo + len
    }

    /// Searches for the items matching `prefix`.
    ///
    /// An item equal to the prefix (ignoring case) is always found, even when
    /// longer items share that prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Leading substring typed by the user
    ///
    /// # Returns
    ///
    /// The tagged search outcome.
    #[must_use]
    pub fn search(&self, prefix: &str) -> Match<'_> {
        let key = fold(prefix);
        let range = self.range(&key);
        let matched = &self.entries[range];

        match matched {
            [] => Match::NotFound,
            [only] => Match::Found(&only.item),
            [first, ..] if first.key == key => Match::Found(&first.item),
            _ => Match::Ambiguous(matched.iter().map(|entry| entry.item.as_str()).collect()),
        }
    }

    /// Resolves `prefix` to the single item it identifies.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Leading substring typed by the user
    ///
    /// # Returns
    ///
    /// The stored item, with its original case.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No item starts with `prefix` (`UnknownPrefix`)
    /// - Several items start with `prefix` and none equals it (`AmbiguousPrefix`)
    pub fn lookup(&self, prefix: &str) -> Result<&str> {
        self.search(prefix).into_result(prefix)
    }

    /// Computes the shortest leading substring that uniquely resolves to `item`.
    ///
    /// Only the lexicographic neighbours of the item can share its longest
    /// common prefix, so the answer is one character past the longer of the
    /// two common prefixes, capped at the item's length. A lone item yields
    /// its first character; the result is never empty.
    ///
    /// # Arguments
    ///
    /// * `item` - The item (or a leading part of it) to measure
    ///
    /// # Returns
    ///
    /// The prefix as a slice of the stored item, or `None` if no stored key
    /// starts with `item`.
    #[must_use]
    pub fn shortest_unique_prefix(&self, item: &str) -> Option<&str> {
        let key = fold(item);
        if key.is_empty() {
            return None;
        }
        let idx = match self.position(&key) {
            Ok(idx) => idx,
            Err(idx) if idx < self.len() && self.entries[idx].key.starts_with(&key) => idx,
            Err(_) => return None,
        };

        let entry = &self.entries[idx];
        let before = idx
            .checked_sub(1)
            .map_or(0, |prev| common_prefix_len(&entry.key, &self.entries[prev].key));
        let after = self
            .entries
            .get(idx + 1)
            .map_or(0, |next| common_prefix_len(&entry.key, &next.key));

        let chars = (before.max(after) + 1).min(entry.key.chars().count());
        Some(char_prefix(&entry.item, chars))
    }

    /// Formats the item `prefix` resolves to as `<unique>:<tail>`.
    ///
    /// With `short` set, a tail longer than four characters is cut to four
    /// characters followed by `...`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Leading substring identifying the item
    /// * `short` - Whether to truncate the tail
    ///
    /// # Returns
    ///
    /// The display string.
    ///
    /// # Errors
    ///
    /// Returns an error if `prefix` does not resolve to exactly one item.
    pub fn pref_str(&self, prefix: &str, short: bool) -> Result<String> {
        let item = self.lookup(prefix)?;
        let unique = self.shortest_unique_prefix(item).unwrap_or(item);
        Ok(mark_prefix(item, unique.len(), short))
    }
}

impl<S: Into<String>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

/// Renders `item` with a colon after its first `split` bytes.
///
/// # Arguments
///
/// * `item` - The full item
/// * `split` - Byte length of the unique prefix (must be a char boundary)
/// * `short` - Whether to truncate the tail to four characters
#[must_use]
pub fn mark_prefix(item: &str, split: usize, short: bool) -> String {
    let (head, tail) = item.split_at(split);
    if short && tail.chars().count() > SHORT_TAIL {
        format!("{}:{}...", head, char_prefix(tail, SHORT_TAIL))
    } else {
        format!("{}:{}", head, tail)
    }
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
