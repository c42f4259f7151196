//! Lexer for the bracket notation, built on the `logos` crate.
//!
//! Produces `(`, `)` and signed integer tokens, skipping whitespace and
//! reporting any other character as a lexical error with its position.

use logos::Logos;

use crate::token::{Location, Token, TokenKind};

/// Raw token type recognized by the generated logos lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// A signed decimal integer. The callback fails on overflow, which
    /// surfaces as a lexer error over the whole literal.
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),
}

/// An error produced while tokenizing bracket notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character outside the notation's alphabet (`0-9`, `-`, `(`, `)`,
    /// whitespace).
    #[error("invalid character '{ch}' at {location}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Where it occurs.
        location: Location,
    },

    /// An integer literal that does not fit in an `i64`.
    #[error("integer literal '{lexeme}' out of range at {location}")]
    IntegerOverflow {
        /// The literal as written.
        lexeme: String,
        /// Where it starts.
        location: Location,
    },
}

/// Streaming lexer that wraps the logos lexer and tracks source positions.
pub struct Lexer<'a> {
    source: &'a str,
    line: usize,
    column: usize,
    offset: usize,
    inner: logos::Lexer<'a, RawToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: RawToken::lexer(source),
        }
    }

    /// Advances the tracked line/column/offset to the given byte position.
    fn advance_to(&mut self, target: usize) {
        for c in self.source[self.offset..target].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;
    }

    fn classify_error(&self, lexeme: &str, location: Location) -> LexError {
        // logos hands back either a single foreign character or an integer
        // literal whose parse callback failed (i64 overflow).
        let looks_numeric = lexeme.chars().any(|c| c.is_ascii_digit())
            && lexeme.chars().all(|c| c.is_ascii_digit() || c == '-');
        if looks_numeric {
            LexError::IntegerOverflow {
                lexeme: lexeme.to_string(),
                location,
            }
        } else {
            LexError::InvalidCharacter {
                ch: lexeme.chars().next().unwrap_or('\0'),
                location,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = self.inner.slice();

        self.advance_to(span.start);
        let location = Location {
            line: self.line,
            column: self.column,
            offset: span.start,
        };
        self.advance_to(span.end);

        match raw {
            Ok(RawToken::LParen) => Some(Ok(Token::new(TokenKind::LParen, lexeme, location))),
            Ok(RawToken::RParen) => Some(Ok(Token::new(TokenKind::RParen, lexeme, location))),
            Ok(RawToken::Integer(value)) => {
                Some(Ok(Token::new(TokenKind::Integer(value), lexeme, location)))
            }
            Err(()) => Some(Err(self.classify_error(lexeme, location))),
        }
    }
}

/// Tokenizes an entire source string, stopping at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for item in Lexer::new(source) {
        let token = item?;
        log::trace!("lexed {token}");
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("tokenize failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_simple_tree() {
        assert_eq!(
            kinds("(8 (9 (5)) (1))"),
            vec![
                TokenKind::LParen,
                TokenKind::Integer(8),
                TokenKind::LParen,
                TokenKind::Integer(9),
                TokenKind::LParen,
                TokenKind::Integer(5),
                TokenKind::RParen,
                TokenKind::RParen,
                TokenKind::RParen,
                TokenKind::LParen,
                TokenKind::Integer(1),
                TokenKind::RParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn lexes_negative_values() {
        assert_eq!(
            kinds("(-3 (-7) (4))"),
            vec![
                TokenKind::LParen,
                TokenKind::Integer(-3),
                TokenKind::LParen,
                TokenKind::Integer(-7),
                TokenKind::RParen,
                TokenKind::LParen,
                TokenKind::Integer(4),
                TokenKind::RParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant() {
        assert_eq!(kinds("( 5 )"), kinds("(5)"));
        assert_eq!(kinds("(\n  5\n)"), kinds("(5)"));
    }

    #[test]
    fn reports_invalid_character_with_position() {
        let err = tokenize("(5 x)").unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidCharacter {
                ch: 'x',
                location: Location {
                    line: 1,
                    column: 4,
                    offset: 3,
                },
            }
        );
    }

    #[test]
    fn reports_overflowing_literal() {
        let err = tokenize("(99999999999999999999)").unwrap_err();
        match err {
            LexError::IntegerOverflow { lexeme, .. } => {
                assert_eq!(lexeme, "99999999999999999999");
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn tracks_line_numbers() {
        let tokens = tokenize("(1\n(2))").expect("tokenize failed");
        assert_eq!(tokens[2].location.line, 2);
        assert_eq!(tokens[2].location.column, 1);
    }

    #[test]
    fn i64_bounds_are_accepted() {
        assert_eq!(
            kinds("(9223372036854775807)"),
            vec![
                TokenKind::LParen,
                TokenKind::Integer(i64::MAX),
                TokenKind::RParen,
            ]
        );
        assert_eq!(
            kinds("(-9223372036854775808)"),
            vec![
                TokenKind::LParen,
                TokenKind::Integer(i64::MIN),
                TokenKind::RParen,
            ]
        );
    }
}
