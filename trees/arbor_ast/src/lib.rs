//! Binary tree types for the bracket notation.
//!
//! The parser in `arbor_parser` turns a bracket string such as
//! `(8 (9 (5)) (1))` into the [`BinaryTree`] defined here. The tree is
//! deliberately unbalanced: it mirrors the nesting of the source text
//! exactly, left to right. Its pre-order traversal is the value feed used
//! to build a balanced AVL tree in `arbor_avl`.

#![warn(missing_docs)]

pub mod tree;

pub use tree::{BinaryTree, TreeNode};
