//! Three-way orderings used by a [`Tree`][crate::Tree] to decide where keys go.
//!
//! Every tree operation asks its comparator one question: does this key sort
//! before ([`Ordering::Less`]), after ([`Ordering::Greater`]), or on top of
//! ([`Ordering::Equal`]) the key stored in the current node? Any closure of the
//! shape `Fn(&T, &T) -> Ordering` is a comparator, as are the two unit structs
//! in this module.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use ordered_tree::comparator::{Comparator, NaturalOrder, ReverseOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"xyz"), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// A strategy for ordering keys of type `T`.
///
/// Implementations must be consistent (the same pair always yields the same
/// answer) and must describe a strict weak ordering. A tree does not check
/// this. Breaking the contract leaves the tree in an unspecified, but still
/// memory safe, shape.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`. `Equal` means the two are the same key.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation. This is the default comparator
/// of a [`Tree`][crate::Tree].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation, so larger keys
/// end up in left subtrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
