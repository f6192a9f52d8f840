//! The alphabet index.
//!
//! An `AlphabetIndex` keeps one independent [`PrefixTree`] per leading
//! character and routes every insert and search to the tree for that
//! character.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use tracing::{debug, warn};

use crate::error::{Error, Input, Result};
use crate::node::WordEntry;
use crate::tree::PrefixTree;
use crate::util::leading_char;

/// A dictionary index made of one AVL prefix tree per leading character.
///
/// Buckets are created lazily on the first insertion of a word starting with
/// their character. Within a bucket every word is filed under its one-character
/// prefix, and searches filter the bucket's entries by full starts-with.
///
/// Mutation needs `&mut self` and searches need `&self`, so exclusive access
/// for writers is enforced by the borrow checker. Callers sharing an index
/// across threads wrap it in a lock.
///
/// # Examples
///
/// ```
/// use avl_prefix_index::AlphabetIndex;
///
/// let mut index = AlphabetIndex::new();
/// index.insert_word("apple", "A fruit").unwrap();
/// index.insert_word("apricot", "A fruit").unwrap();
///
/// assert_eq!(index.find_by_prefix("app").unwrap(), vec!["apple"]);
/// assert!(index.find_by_prefix("c").unwrap().is_empty());
/// assert!(index.find_by_prefix("").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetIndex {
    buckets: BTreeMap<char, PrefixTree>,
}

impl AlphabetIndex {
    /// Creates a new, empty index.
    pub fn new() -> Self {
        AlphabetIndex {
            buckets: BTreeMap::new(),
        }
    }

    /// Returns the total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(PrefixTree::len).sum()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the number of leading characters seen so far.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the tree for `letter`, if any word starting with it was inserted.
    pub fn bucket(&self, letter: char) -> Option<&PrefixTree> {
        self.buckets.get(&letter)
    }

    /// Iterates over `(letter, tree)` pairs in character order.
    pub fn buckets(&self) -> btree_map::Iter<'_, char, PrefixTree> {
        self.buckets.iter()
    }

    /// Inserts `word` with its `meaning`.
    ///
    /// Inserting the same word again adds a second entry; both are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `word` is empty. The index is left
    /// untouched.
    pub fn insert_word(&mut self, word: impl Into<String>, meaning: impl Into<String>) -> Result<()> {
        let word = word.into();
        let (letter, prefix) = match leading_char(&word) {
            Some(split) => split,
            None => {
                warn!("refusing to insert an empty word");
                return Err(Error::EmptyInput(Input::Word));
            }
        };

        let tree = self.buckets.entry(letter).or_insert_with(|| {
            debug!(%letter, "creating bucket");
            PrefixTree::new()
        });
        tree.insert(&prefix, WordEntry::new(word, meaning));

        Ok(())
    }

    /// Returns every inserted word starting with `prefix`.
    ///
    /// Words come back in the traversal order of the bucket tree and, within
    /// one tree node, in insertion order. A leading character with no bucket
    /// yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `prefix` is empty.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let mut results = Vec::new();
        if let Some(tree) = self.bucket_for(prefix)? {
            tree.search(prefix, &mut results);
        }
        Ok(results)
    }

    /// Like [`find_by_prefix`](Self::find_by_prefix), but yields whole entries
    /// so meanings are available too.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `prefix` is empty.
    pub fn find_entries_by_prefix(&self, prefix: &str) -> Result<Vec<&WordEntry>> {
        Ok(self
            .bucket_for(prefix)?
            .map(|tree| tree.find_entries(prefix))
            .unwrap_or_default())
    }

    fn bucket_for(&self, prefix: &str) -> Result<Option<&PrefixTree>> {
        let (letter, _) = match leading_char(prefix) {
            Some(split) => split,
            None => {
                warn!("empty prefix supplied to search");
                return Err(Error::EmptyInput(Input::Prefix));
            }
        };

        match self.buckets.get(&letter) {
            Some(tree) => {
                debug!(%prefix, nodes = tree.node_count(), "searching bucket");
                Ok(Some(tree))
            }
            None => {
                debug!(%letter, "no bucket for leading character");
                Ok(None)
            }
        }
    }
}

impl fmt::Display for AlphabetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, tree) in &self.buckets {
            writeln!(f, "Tree for letter {}:", letter)?;
            write!(f, "{}", tree)?;
        }
        Ok(())
    }
}
