use arbor_lexer::{Token, TokenKind};

/// A cursor over the tokens produced by the lexer.
pub struct TokenStream<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Current position in the token stream
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new token stream from a slice of tokens
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Get the next token and advance the position
    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Look ahead at the next token without consuming it
    pub fn peek_kind(&self, expected: TokenKind) -> bool {
        matches!(self.peek(), Some(token) if token.kind == expected)
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
