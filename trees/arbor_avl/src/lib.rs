//! A self-balancing binary search tree (classic AVL).
//!
//! Values are plain `i64`, unique within a tree: inserting a duplicate or
//! removing an absent value is a no-op, so none of the mutating operations
//! have an error channel. After every structural change the tree restores
//! the height-balance invariant `|height(left) - height(right)| <= 1` at
//! every node via single or double rotations, which keeps search, insert
//! and remove at `O(log n)`.

#![warn(missing_docs)]

pub mod tree;

pub use tree::AvlTree;
