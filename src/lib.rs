//! An in-memory ordered word store built on an unbalanced Binary Search Tree (BST), plus a
//! plain-text mirror of the same words on disk.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores a single
//! word and owns up to two child `Node`s. The invariants of the tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a word less
//!    than its own word.
//! 2. For every `Node`, all the `Node`s in its right subtree have a word
//!    greater than its own word.
//! 3. No word is stored twice.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Nothing rebalances the tree, so the height is
//! `O(lg N)` for words arriving in random order and `O(N)` for sorted input.
//! Visiting the left subtree, then the subtree root, then the right subtree
//! yields the words in sorted order.
//!
//! ## Mirror
//!
//! The [`Mirror`] is a flat file with one word per line. A [`Dictionary`] keeps it
//! loosely in step with its tree: adding a word appends a line and deleting a word
//! rewrites the file without it. The two can drift apart, and
//! [`Dictionary::compare_search_time`] reports when they do.
//!
//! Words are compared byte by byte; there is no locale-aware collation.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod ingest;
pub mod mirror;
pub mod tree;


pub use compare::Comparison;
pub use config::Config;
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use mirror::Mirror;
pub use tree::Tree;
