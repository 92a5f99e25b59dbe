//! An owned, unbalanced BST. Every subtree is an exclusively owned
//! `Option<Box<Node>>` so unlinking a node is just overwriting the slot that
//! owns it.
//!
//! # Examples
//!
//! ```
//! use wordbst::tree::Tree;
//!
//! let mut tree: Tree<&str> = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&"pear"));
//!
//! tree.insert("pear");
//! tree.insert("apple");
//! assert!(tree.contains(&"pear"));
//!
//! // Inserting an existing key does nothing.
//! tree.insert("pear");
//! assert_eq!(tree.len(), 2);
//!
//! tree.delete(&"pear");
//! assert!(!tree.contains(&"pear"));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&"apple"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of distinct keys. No balancing is done so inserting
/// keys in sorted order degrades it to a list.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A `Node` holds a key and owns both of its children.
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The default drop recurses once per level which a degenerate tree can't afford.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree built from sorted keys has a height equal to its length.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns an iterator over the keys in ascending order. The walk is lazy and every call
    /// starts over from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::tree::Tree;
    ///
    /// let tree: Tree<_> = ["b", "c", "a"].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&"a", &"b", &"c"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Inserts the key into the tree. Inserting a key that is already present is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return,
            };
        }
        *link = Some(Node::new_boxed(key));
        self.len += 1;
    }

    /// Whether a node holding the given key exists. As with the standard collections, the key
    /// may be any borrowed form of the stored key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Deletes the node containing the given key. If the tree does not contain the key, nothing
    /// happens.
    ///
    /// A node with two children is not unlinked itself: it takes over the key of its in-order
    /// successor (the smallest key of its right subtree) and the successor's node is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.delete(&2);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = Self::slot_mut(&mut self.root, key);
        let Some(node) = slot else {
            return;
        };

        if node.left.is_some() && node.right.is_some() {
            if let Some(successor) = Self::take_min(&mut node.right) {
                node.key = successor;
            }
        } else {
            // Leaf or single child: the child (if any) takes this node's place.
            let child = node.left.take().or_else(|| node.right.take());
            *slot = child;
        }
        self.len -= 1;
    }

    /// Walks down from `link` and returns the slot that owns the node with `key`, or the empty
    /// slot where it would be inserted.
    fn slot_mut<'a, Q>(mut link: &'a mut Link<K>, key: &Q) -> &'a mut Link<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(node.key.borrow()),
                None => return link,
            };
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Unlinks the smallest node of the subtree at `link`, replacing it with its right child,
    /// and returns its key.
    fn take_min(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let Node { key, right, .. } = *link.take()?;
        *link = right;
        Some(key)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet. Their left subtrees have already been pushed.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same keys, in the same order, in both.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
    where
        K: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    bst.insert(k.clone());
                    set.insert(k.clone());
                }
                Op::Remove(k) => {
                    bst.delete(k);
                    set.remove(k);
                }
                Op::Iter => {
                    if !bst.iter().eq(set.iter()) {
                        return false;
                    }
                }
            }
        }

        bst.len() == set.len()
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set)
                && (i8::MIN..=i8::MAX).all(|key| tree.contains(&key) == set.contains(&key))
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn iter_is_strictly_ascending(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let keys: Vec<_> = tree.iter().collect();

            keys.windows(2).all(|pair| pair[0] < pair[1])
        }
    }
}
