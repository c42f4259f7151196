//! Lexical analysis for the bracket notation.
//!
//! The bracket notation encodes a binary tree as nested parentheses, e.g.
//! `(8 (9 (5)) (1))`. This crate turns such a string into a stream of
//! tokens (`(`, `)` and signed integer literals) for the parser, rejecting
//! any character outside the notation's alphabet.

#![warn(missing_docs)]

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, LexError, Lexer};
pub use token::{Location, Token, TokenKind};
