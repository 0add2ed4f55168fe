//! Property tests driving random operation sequences through the tree.

use quickcheck::{Arbitrary, Gen};


/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the key into the data structure
    Insert(T),
    /// Remove the key from the data structure
    Remove(T),
    /// Check whether the key is present
    Search(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Search(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(t) => Box::new(t.shrink().map(Op::Insert)),
            Op::Remove(t) => Box::new(t.shrink().map(Op::Remove)),
            Op::Search(t) => Box::new(t.shrink().map(Op::Search)),
        }
    }
}
