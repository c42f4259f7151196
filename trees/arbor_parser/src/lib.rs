//! Parser for the bracket notation of binary trees.
//!
//! Grammar (EBNF-like):
//!
//! ```text
//! tree  := '(' [ value child? child? ] ')'
//! child := tree
//! value := '-'? digit+
//! ```
//!
//! Whitespace between tokens is insignificant. An empty pair `()` denotes
//! an absent subtree. The first child becomes the node's left subtree, the
//! second its right; a third child is a structural error because the
//! encoded tree would not be binary.

pub mod parser;

pub use parser::{check_balance, parse_tree, rebuild, ParseError};
