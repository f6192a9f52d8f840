//! # AVL Prefix Index
//!
//! A dictionary index built from height-balanced binary search trees keyed by
//! string prefixes.
//!
//! The index keeps one independent AVL tree per leading character. Each tree
//! node is keyed by a prefix and collects every word inserted under it, so
//! looking words up by prefix only ever touches a single bucket.
//!
//! ## Features
//!
//! - **Self-balancing**: every insertion restores `|height(left) - height(right)| <= 1`
//!   through single and double rotations
//! - **Owned structure**: each node owns its children outright; rotations move
//!   boxed subtrees instead of patching pointers
//! - **Prefix search**: bidirectional prefix containment between the query and
//!   node keys, followed by a starts-with filter over the stored words
//! - **Rendering**: `Display` output for trees and whole indexes
//!
//! ## Example
//!
//! ```rust
//! use avl_prefix_index::AlphabetIndex;
//!
//! let mut index = AlphabetIndex::new();
//! index.insert_word("apple", "A fruit")?;
//! index.insert_word("apricot", "A fruit")?;
//! index.insert_word("banana", "A tropical fruit")?;
//!
//! assert_eq!(index.find_by_prefix("ap")?, vec!["apple", "apricot"]);
//! assert_eq!(index.find_by_prefix("ba")?, vec!["banana"]);
//! assert!(index.find_by_prefix("c")?.is_empty());
//! # Ok::<(), avl_prefix_index::Error>(())
//! ```

mod error;
mod index;
pub mod node;
mod tree;
mod util;

// Re-export public types
pub use crate::error::{Error, Input, Result};
pub use crate::index::AlphabetIndex;
pub use crate::node::{PrefixNode, WordEntry};
pub use crate::tree::{InOrder, Iter, PrefixTree};
