//! Node implementation for the AVL prefix tree.
//!
//! This module contains the `PrefixNode` structure that forms the backbone of
//! each bucket tree, along with the height bookkeeping and rotation primitives
//! used to keep a tree balanced. Every node exclusively owns its two children,
//! so a rotation is a move of boxed subtrees rather than pointer patching.

use tracing::trace;

/// A dictionary word together with its meaning.
///
/// Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    word: String,
    meaning: String,
}

impl WordEntry {
    /// Creates a new entry
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        WordEntry {
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    /// The word itself
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The meaning attached to the word
    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}

/// A node of an AVL prefix tree.
///
/// Each node is keyed by a prefix and holds every entry inserted under that
/// prefix, in insertion order. The stored `height` always equals
/// `1 + max(height(left), height(right))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixNode {
    /// The key this node is ordered by
    pub(crate) prefix: String,

    /// Entries sharing this prefix, oldest first
    pub(crate) entries: Vec<WordEntry>,

    /// Subtree of strictly smaller prefixes
    pub(crate) left: Option<Box<PrefixNode>>,

    /// Subtree of strictly greater prefixes
    pub(crate) right: Option<Box<PrefixNode>>,

    /// Height of the subtree rooted here; a leaf has height 1
    pub(crate) height: usize,
}

impl PrefixNode {
    /// Creates a leaf node holding a single entry
    pub fn with_entry(prefix: impl Into<String>, entry: WordEntry) -> Self {
        PrefixNode {
            prefix: prefix.into(),
            entries: vec![entry],
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The key of this node
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Entries stored under this node's prefix, in insertion order
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// The left (smaller) subtree, if any
    pub fn left(&self) -> Option<&PrefixNode> {
        self.left.as_deref()
    }

    /// The right (greater) subtree, if any
    pub fn right(&self) -> Option<&PrefixNode> {
        self.right.as_deref()
    }

    /// Stored height of the subtree rooted at this node
    pub fn height(&self) -> usize {
        self.height
    }

    /// `height(left) - height(right)`
    pub fn balance_factor(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of nodes in this subtree
    pub fn subtree_size(&self) -> usize {
        1 + self.left().map_or(0, PrefixNode::subtree_size)
            + self.right().map_or(0, PrefixNode::subtree_size)
    }

    /// Recomputes the stored height from the children's stored heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

/// Height of an optional node; an absent node has height 0.
pub fn height(node: Option<&PrefixNode>) -> usize {
    node.map_or(0, |n| n.height)
}

/// Balance factor of an optional node; an absent node is balanced.
pub fn balance_factor(node: Option<&PrefixNode>) -> isize {
    node.map_or(0, PrefixNode::balance_factor)
}

/// Rotates the subtree rooted at `x` to the left.
///
/// `x.right` becomes the new subtree root and `x` its left child. If `x` has
/// no right child there is nothing to rotate and `x` is returned unchanged.
pub fn rotate_left(mut x: Box<PrefixNode>) -> Box<PrefixNode> {
    match x.right.take() {
        Some(mut y) => {
            trace!(pivot = %x.prefix, new_root = %y.prefix, "rotate left");
            x.right = y.left.take();
            // x is now y's child, so its height must be settled first
            x.update_height();
            y.left = Some(x);
            y.update_height();
            y
        }
        None => x,
    }
}

/// Rotates the subtree rooted at `y` to the right.
///
/// Mirror image of [`rotate_left`]; requires `y.left`.
pub fn rotate_right(mut y: Box<PrefixNode>) -> Box<PrefixNode> {
    match y.left.take() {
        Some(mut x) => {
            trace!(pivot = %y.prefix, new_root = %x.prefix, "rotate right");
            y.left = x.right.take();
            y.update_height();
            x.right = Some(y);
            x.update_height();
            x
        }
        None => y,
    }
}

/// Restores the AVL balance condition at `node`.
///
/// Expects the children of `node` to be balanced and their heights current,
/// which is exactly the situation on the way back up from an insertion.
pub fn rebalance(mut node: Box<PrefixNode>) -> Box<PrefixNode> {
    let factor = node.balance_factor();

    if factor < -1 {
        // Right-left: straighten the right child first
        if balance_factor(node.right()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    if factor > 1 {
        // Left-right
        if balance_factor(node.left()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    node
}
