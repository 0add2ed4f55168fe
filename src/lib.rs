//! This crate exposes a generic, unbalanced Binary Search Tree (BST) whose
//! ordering is supplied by a pluggable comparator.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here "less" and "greater" are whatever a [`Comparator`] says they are. The
//! default, [`NaturalOrder`], defers to [`Ord`]; any
//! `Fn(&T, &T) -> Ordering` works too.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree never rebalances, so its height depends on insertion order: random
//! order gives roughly `O(lg N)`, sorted order gives `O(N)`.
//! [`Tree::find_all_at_max_depth`] reports exactly which leaves make up that
//! height.
//!
//! ```
//! use ordered_tree::{ReverseOrder, Tree};
//!
//! let mut tree = Tree::with_comparator(ReverseOrder);
//! tree.bulk_insert([7, 4, 11, 2, 6, 9, 12, 1, 3, 5, 8, 10]);
//!
//! let deepest = tree.find_all_at_max_depth();
//! assert_eq!(deepest.deepest, vec![&10, &8, &5, &3, &1]);
//! assert_eq!(deepest.depth, 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comparator;
pub mod tree;

pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use tree::{DeepestLeaves, Node, Tree};
