//! The AVL prefix tree.
//!
//! This module contains the `PrefixTree` type: a height-balanced binary search
//! tree keyed by string prefixes, where each node collects every entry inserted
//! under its prefix.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::node::{height, rebalance, PrefixNode, WordEntry};
use crate::util::prefix_related;

/// A self-balancing binary search tree of prefixes.
///
/// Insertion keeps the AVL condition (`|height(left) - height(right)| <= 1`)
/// at every node. Searching, on the other hand, deliberately visits every
/// node: whether a query and a key are prefix-related is not monotonic in the
/// lexicographic order, so the key order cannot be used to prune.
///
/// # Examples
///
/// ```
/// use avl_prefix_index::{PrefixTree, WordEntry};
///
/// let mut tree = PrefixTree::new();
/// tree.insert("a", WordEntry::new("apple", "A fruit"));
/// tree.insert("a", WordEntry::new("apricot", "A fruit"));
///
/// assert_eq!(tree.find("ap"), vec!["apple", "apricot"]);
/// assert_eq!(tree.find("app"), vec!["apple"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTree {
    /// The root node of the tree
    root: Option<Box<PrefixNode>>,

    /// The number of entries stored in the tree
    len: usize,
}

/// Pre-order iterator over the nodes of a [`PrefixTree`].
///
/// Yields a node, then everything in its left subtree, then everything in its
/// right subtree; the same order searches report matches in.
pub struct Iter<'a> {
    stack: Vec<&'a PrefixNode>,
}

/// In-order iterator over the nodes of a [`PrefixTree`], smallest prefix first.
pub struct InOrder<'a> {
    stack: VecDeque<&'a PrefixNode>,
    next: Option<&'a PrefixNode>,
}

impl PrefixTree {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_prefix_index::PrefixTree;
    ///
    /// let tree = PrefixTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        PrefixTree { root: None, len: 0 }
    }

    /// Returns the number of entries stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct prefixes (nodes) in the tree.
    pub fn node_count(&self) -> usize {
        self.root().map_or(0, PrefixNode::subtree_size)
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&PrefixNode> {
        self.root.as_deref()
    }

    /// Inserts `entry` under `prefix`, rebalancing on the way back up.
    ///
    /// Entries inserted under an existing prefix are appended to that node;
    /// nothing is deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_prefix_index::{PrefixTree, WordEntry};
    ///
    /// let mut tree = PrefixTree::new();
    /// for key in ["a", "b", "c"].iter() {
    ///     tree.insert(key, WordEntry::new(*key, ""));
    /// }
    ///
    /// // Three ascending inserts trigger a left rotation at the root
    /// assert_eq!(tree.root().unwrap().prefix(), "b");
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, prefix: &str, entry: WordEntry) {
        let root = self.root.take();
        self.root = Some(insert_recursive(root, prefix, entry));
        self.len += 1;
    }

    /// Appends to `results` every word that starts with `query`.
    ///
    /// Results are appended in pre-order (node, left subtree, right subtree)
    /// and in insertion order within a node. Every node is visited.
    pub fn search(&self, query: &str, results: &mut Vec<String>) {
        visit_matches(self.root(), query, &mut |entry| {
            results.push(entry.word().to_string())
        });
    }

    /// Returns every word that starts with `query`, in search order.
    pub fn find(&self, query: &str) -> Vec<String> {
        let mut results = Vec::new();
        self.search(query, &mut results);
        results
    }

    /// Like [`find`](Self::find), but yields the full entries.
    pub fn find_entries(&self, query: &str) -> Vec<&WordEntry> {
        let mut results = Vec::new();
        visit_matches(self.root(), query, &mut |entry| results.push(entry));
        results
    }

    /// Returns a pre-order iterator over the nodes.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Returns an iterator over the nodes in ascending prefix order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder {
            stack: VecDeque::new(),
            next: self.root(),
        }
    }
}

// Returns the new subtree root, which the caller must store in place of `node`
fn insert_recursive(node: Option<Box<PrefixNode>>, prefix: &str, entry: WordEntry) -> Box<PrefixNode> {
    let mut node = match node {
        Some(node) => node,
        None => return Box::new(PrefixNode::with_entry(prefix, entry)),
    };

    match prefix.cmp(node.prefix.as_str()) {
        Ordering::Less => {
            let left = node.left.take();
            node.left = Some(insert_recursive(left, prefix, entry));
        }
        Ordering::Greater => {
            let right = node.right.take();
            node.right = Some(insert_recursive(right, prefix, entry));
        }
        Ordering::Equal => node.entries.push(entry),
    }

    node.update_height();
    rebalance(node)
}

fn visit_matches<'a, F>(node: Option<&'a PrefixNode>, query: &str, f: &mut F)
where
    F: FnMut(&'a WordEntry),
{
    let node = match node {
        Some(node) => node,
        None => return,
    };

    if prefix_related(query, &node.prefix) {
        for entry in node.entries.iter().filter(|e| e.word().starts_with(query)) {
            f(entry);
        }
    }

    // No pruning: a prefix-related key may sit on either side
    visit_matches(node.left(), query, f);
    visit_matches(node.right(), query, f);
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PrefixNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node)
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a PrefixNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.stack.push_front(node);
            self.next = node.left();
        }

        let node = self.stack.pop_front()?;
        self.next = node.right();
        Some(node)
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type Item = &'a PrefixNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PrefixTree {
    /// One line per node, in pre-order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self {
            write!(f, "Prefix: {} | Words: ", node.prefix())?;
            for entry in node.entries() {
                write!(f, "{}({}) ", entry.word(), entry.meaning())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
