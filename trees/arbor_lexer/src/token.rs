use std::fmt;

/// A token's position in the source text.
///
/// Line and column are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number.
    pub line: usize,
    /// The 1-based column number.
    pub column: usize,
    /// The 0-based byte offset from the start of the source.
    pub offset: usize,
}

/// The kind of a bracket-notation token.
///
/// The notation's alphabet is deliberately tiny: parentheses and signed
/// integer literals. Whitespace separates tokens and is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `(` — opens a subtree.
    LParen,
    /// `)` — closes a subtree.
    RParen,
    /// A signed integer node value, e.g. `42` or `-7`.
    Integer(i64),
}

/// A token together with its source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The original source text of the token.
    pub lexeme: String,
    /// Where the token starts in the source.
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_display_includes_position() {
        let location = Location {
            line: 1,
            column: 4,
            offset: 3,
        };
        let token = Token::new(TokenKind::Integer(-7), "-7", location);
        assert_eq!(token.to_string(), "-7@1:4");
    }

    #[test]
    fn paren_kinds_compare_by_discriminant() {
        assert_eq!(TokenKind::LParen, TokenKind::LParen);
        assert_ne!(TokenKind::LParen, TokenKind::RParen);
        assert_ne!(TokenKind::Integer(1), TokenKind::Integer(2));
    }
}
