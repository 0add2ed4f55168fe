//! A mutable, unbalanced BST holding a set of keys.
//!
//! Keys are placed by a [`Comparator`] chosen when the tree is built. Nothing
//! ever rebalances the tree, so its shape is entirely determined by the order
//! in which keys were inserted and removed. Inserting sorted keys produces a
//! tree that is really a linked list; every operation here walks links in a
//! loop rather than recursing so that such trees are still safe to use.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.bulk_insert([2, 3, 1]);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.data(), &2);
//! assert_eq!(root.left().map(|n| n.data()), Some(&1));
//! assert_eq!(root.right().map(|n| n.data()), Some(&3));
//!
//! // Keys are a set - duplicates are dropped.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 3);
//!
//! assert!(tree.search(&1));
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(!tree.search(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::comparator::{Comparator, NaturalOrder};

type Link<T> = Option<Box<Node<T>>>;

/// A single key in a [`Tree`] with up to two children. Each child is owned by
/// exactly one parent.
///
/// Two nodes are equal when their subtrees have the same shape and keys.
#[derive(Debug)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.data != b.data {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// The result of [`Tree::find_all_at_max_depth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepestLeaves<'a, T> {
    /// Keys of every leaf at `depth`, left subtree before right subtree.
    pub deepest: Vec<&'a T>,
    /// Number of edges between the root and the deepest leaves.
    pub depth: usize,
}

/// A Binary Search Tree storing a set of keys ordered by `C`.
///
/// For every node, all keys in its left subtree compare [`Ordering::Less`]
/// than its own key and all keys in its right subtree compare
/// [`Ordering::Greater`]. No two keys compare [`Ordering::Equal`].
pub struct Tree<T, C = NaturalOrder> {
    root: Link<T>,
    compare: C,
    len: usize,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` whose keys are placed by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &&str, b: &&str| b.cmp(a));
    /// tree.bulk_insert(["b", "c", "a"]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.data(), &"b");
    /// assert_eq!(root.left().map(|n| n.data()), Some(&"c"));
    /// assert_eq!(root.right().map(|n| n.data()), Some(&"a"));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
            len: 0,
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every key, keeping the comparator.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// Finds every leaf that sits at the maximum depth of the tree.
    ///
    /// The root is at depth `0`. Leaves are reported left to right. An empty
    /// tree reports no leaves at depth `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [12, 11, 90, 82, 7, 9].into_iter().collect();
    /// let deepest = tree.find_all_at_max_depth();
    ///
    /// assert_eq!(deepest.deepest, vec![&9]);
    /// assert_eq!(deepest.depth, 3);
    /// ```
    pub fn find_all_at_max_depth(&self) -> DeepestLeaves<'_, T> {
        let mut deepest = Vec::new();
        let mut max_depth = 0;

        // Right children are pushed first so left subtrees are visited first.
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            if node.is_leaf() {
                match depth.cmp(&max_depth) {
                    Ordering::Greater => {
                        max_depth = depth;
                        deepest.clear();
                        deepest.push(&node.data);
                    }
                    Ordering::Equal => deepest.push(&node.data),
                    Ordering::Less => {}
                }
                continue;
            }
            if let Some(right) = node.right() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, depth + 1));
            }
        }

        DeepestLeaves {
            deepest,
            depth: max_depth,
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `data` into the tree. Returns `false` and drops `data`, leaving
    /// the tree untouched, when an equal key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.data(), &1);
    /// assert!(root.left().is_none());
    /// assert!(root.right().unwrap().is_leaf());
    /// ```
    pub fn insert(&mut self, data: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.compare.compare(&data, &node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("discarding duplicate key");
                    return false;
                }
            };
        }

        *link = Some(Node::new_boxed(data));
        self.len += 1;
        true
    }

    /// Inserts each item in iteration order. The resulting shape depends on
    /// that order since the tree never rebalances.
    pub fn bulk_insert<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Whether a key comparing equal to `data` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.bulk_insert([3, 5, 2, 4, 1]);
    ///
    /// assert!(tree.search(&4));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, data: &T) -> bool {
        let mut link = self.root();
        while let Some(node) = link {
            link = match self.compare.compare(data, &node.data) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Removes the key comparing equal to `data` and returns it. If no such
    /// key exists, nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// smallest key of its right subtree). The successor's own right subtree
    /// takes the successor's old place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.bulk_insert([4, 2, 1, 3]);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.data(), &4);
    /// let left = root.left().unwrap();
    /// assert_eq!(left.data(), &3);
    /// assert_eq!(left.left().map(|n| n.data()), Some(&1));
    /// ```
    pub fn remove(&mut self, data: &T) -> Option<T> {
        let Self { root, compare, len } = self;

        let mut link = root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => compare.compare(data, &node.data),
                None => {
                    trace!("key to remove not found");
                    return None;
                }
            };
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
                Ordering::Equal => break,
            };
        }

        let mut removed = link.take()?;
        *link = match (removed.left.take(), removed.right.take()) {
            (None, None) => {
                trace!("removing leaf");
                None
            }
            (Some(left), None) => {
                trace!("removing node with only a left child");
                Some(left)
            }
            (None, Some(right)) => {
                trace!("removing node with only a right child");
                Some(right)
            }
            (Some(left), Some(right)) => {
                trace!("removing node with two children");
                let mut right = Some(right);
                let mut successor = take_leftmost(&mut right)?;
                if cfg!(debug_assertions) {
                    assert!(successor.left.is_none());
                }
                successor.left = Some(left);
                successor.right = right;
                Some(successor)
            }
        };

        *len -= 1;
        Some(removed.data)
    }
}

/// Detaches the leftmost node of the subtree at `link`, putting that node's
/// right subtree where it used to be.
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }

    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}

/// Copies a subtree node by node, filling each new child slot from a work
/// stack instead of recursing.
fn clone_subtree<T: Clone>(source: Option<&Node<T>>) -> Link<T> {
    let mut root = None;
    let mut stack = Vec::new();
    if let Some(node) = source {
        stack.push((node, &mut root));
    }

    while let Some((node, slot)) = stack.pop() {
        let copy = slot.insert(Node::new_boxed(node.data.clone()));
        let Node { left, right, .. } = &mut **copy;
        if let Some(source_right) = node.right() {
            stack.push((source_right, right));
        }
        if let Some(source_left) = node.left() {
            stack.push((source_left, left));
        }
    }

    root
}

/// Drops a subtree without recursing so degenerate trees can't blow the stack.
fn drop_subtree<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: clone_subtree(self.root()),
            compare: self.compare.clone(),
            len: self.len,
        }
    }
}

// The comparator is left out, it is usually a closure. The nested output
// recurses once per level.
impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.bulk_insert(iter);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.bulk_insert(iter);
        tree
    }
}
