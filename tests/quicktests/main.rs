//! Property tests against the public API of the word tree.

mod tree;

use quickcheck::{Arbitrary, Gen};

/// Something to do to both the tree under test and a model set.
#[derive(Clone, Debug)]
pub enum Op {
    /// Insert the word
    Insert(String),
    /// Delete the word
    Delete(String),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // Short words over a tiny alphabet so deletes actually hit something.
        let len = usize::arbitrary(g) % 3 + 1;
        let word = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c', 'd']).unwrap())
            .collect();
        if bool::arbitrary(g) {
            Op::Insert(word)
        } else {
            Op::Delete(word)
        }
    }
}
