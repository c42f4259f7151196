//! Recursive-descent parser for the bracket notation.
//!
//! Parsing runs in three stages: a cheap bracket-balance pre-pass over the
//! raw text, tokenization via `arbor_lexer`, and a single left-to-right
//! recursive descent over the token stream. Any failure tears down every
//! partially built node (ownership takes care of that) and leaves the
//! caller with only the error.

pub mod token_stream;

use arbor_ast::{BinaryTree, TreeNode};
use arbor_lexer::{tokenize, LexError, Location, TokenKind};
use log::debug;

pub use token_stream::TokenStream;

/// An error produced while parsing a bracket string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    #[error("empty input: expected a bracket expression")]
    EmptyInput,

    /// The input ended in the middle of a subtree.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A subtree did not start with `(`.
    #[error("expected '(' at {location}")]
    ExpectedOpenParen {
        /// Where the offending token starts.
        location: Location,
    },

    /// A node value was expected but something else was found.
    #[error("expected a number at {location}")]
    ExpectedNumber {
        /// Where the offending token starts.
        location: Location,
    },

    /// A `)` was expected but something else was found.
    #[error("expected ')' at {location}")]
    ExpectedCloseParen {
        /// Where the offending token starts.
        location: Location,
    },

    /// A node has more than two children, so the encoding is not a binary
    /// tree.
    #[error("node has more than two children at {location}: not a binary tree")]
    TooManyChildren {
        /// Where the third child starts.
        location: Location,
    },

    /// Non-whitespace input remains after the outermost `)`.
    #[error("trailing characters after the outermost ')' at {location}")]
    TrailingCharacters {
        /// Where the trailing input starts.
        location: Location,
    },

    /// A `)` with no matching `(` (balance pre-pass).
    #[error("unmatched ')' at byte offset {offset}")]
    UnmatchedCloseParen {
        /// Byte offset of the unmatched `)`.
        offset: usize,
    },

    /// A `(` that is never closed (balance pre-pass).
    #[error("unclosed '(' at byte offset {offset}")]
    UnclosedParen {
        /// Byte offset of the first unclosed `(`.
        offset: usize,
    },

    /// A lexical error: an illegal character or an out-of-range literal.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Fast bracket-balance pre-pass over the raw text.
///
/// Rejects a `)` that would take the running balance negative and a final
/// balance other than zero, before any structural parsing begins. Other
/// characters are left for the lexer to judge.
pub fn check_balance(source: &str) -> Result<(), ParseError> {
    let mut open_offsets = Vec::new();
    for (offset, ch) in source.char_indices() {
        match ch {
            '(' => open_offsets.push(offset),
            ')' => {
                if open_offsets.pop().is_none() {
                    return Err(ParseError::UnmatchedCloseParen { offset });
                }
            }
            _ => {}
        }
    }
    match open_offsets.first() {
        Some(&offset) => Err(ParseError::UnclosedParen { offset }),
        None => Ok(()),
    }
}

/// Parses a bracket string into a [`BinaryTree`].
///
/// The returned tree mirrors the nesting of the source exactly: the first
/// child of each node becomes `left`, the second `right`. `()` denotes an
/// absent subtree, so `parse_tree("()")` yields an empty tree and
/// `(5 () (7))` a root with only a right child. On error nothing is
/// returned besides the error itself; no partially built tree escapes.
pub fn parse_tree(source: &str) -> Result<BinaryTree, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    check_balance(source)?;
    let tokens = tokenize(source)?;
    debug!("parsing {} tokens", tokens.len());

    let mut stream = TokenStream::new(&tokens);
    let root = parse_subtree(&mut stream)?;
    if let Some(extra) = stream.peek() {
        return Err(ParseError::TrailingCharacters {
            location: extra.location,
        });
    }
    Ok(BinaryTree::from_root(root))
}

/// Re-parses `source` into an existing tree, replacing its previous
/// contents.
///
/// On failure the tree is left empty, never partially populated.
pub fn rebuild(tree: &mut BinaryTree, source: &str) -> Result<(), ParseError> {
    *tree = BinaryTree::new();
    *tree = parse_tree(source)?;
    Ok(())
}

/// Parses one `tree` production, consuming from `(` through its matching
/// `)`. Returns `None` for the empty pair `()`.
fn parse_subtree(stream: &mut TokenStream<'_>) -> Result<Option<Box<TreeNode>>, ParseError> {
    match stream.next() {
        Some(token) if token.kind == TokenKind::LParen => {}
        Some(token) => {
            return Err(ParseError::ExpectedOpenParen {
                location: token.location,
            })
        }
        None => return Err(ParseError::UnexpectedEnd),
    }

    // () is an explicit absent-subtree marker.
    if stream.peek_kind(TokenKind::RParen) {
        stream.next();
        return Ok(None);
    }

    let value = match stream.next() {
        Some(token) => match token.kind {
            TokenKind::Integer(value) => value,
            _ => {
                return Err(ParseError::ExpectedNumber {
                    location: token.location,
                })
            }
        },
        None => return Err(ParseError::UnexpectedEnd),
    };

    let mut node = Box::new(TreeNode::leaf(value));
    let mut children = 0usize;
    loop {
        match stream.peek() {
            None => return Err(ParseError::UnexpectedEnd),
            Some(token) if token.kind == TokenKind::RParen => {
                stream.next();
                return Ok(Some(node));
            }
            Some(token) => {
                if children == 2 {
                    // A number here is a stray token, a '(' a third child.
                    return Err(match token.kind {
                        TokenKind::LParen => ParseError::TooManyChildren {
                            location: token.location,
                        },
                        _ => ParseError::ExpectedCloseParen {
                            location: token.location,
                        },
                    });
                }
                let child = parse_subtree(stream)?;
                if children == 0 {
                    node.left = child;
                } else {
                    node.right = child;
                }
                children += 1;
            }
        }
    }
}
