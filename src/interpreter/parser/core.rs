use crate::{
    error::ParseError,
    interpreter::lexer::{Lexeme, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A read-only cursor over a token sequence produced by the lexer.
///
/// The cursor never moves past the final `EOF` token, so every grammar
/// function can peek without checking for the end of the slice. The sequence
/// handed to [`TokenStream::new`] must end with `EOF`, as the lexer
/// guarantees; a sequence without one is treated as if it had one.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens:   &'a [Lexeme],
    position: usize,
    eof:      Lexeme,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Lexeme]) -> Self {
        let line = tokens.last().map_or(1, |lexeme| lexeme.line);
        Self { tokens,
               position: 0,
               eof: Lexeme { token: Token::Eof,
                             line } }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &Lexeme {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    /// Returns the token after the current one without consuming anything.
    ///
    /// This is the single two-token lookahead of the grammar, used to tell
    /// `ID '=' Expr` apart from an expression starting with `ID`.
    #[must_use]
    pub fn peek_second(&self) -> &Lexeme {
        self.tokens.get(self.position + 1).unwrap_or(&self.eof)
    }

    /// Consumes and returns the current token. At `EOF` the cursor stays put.
    pub fn advance(&mut self) -> &Lexeme {
        if self.tokens
               .get(self.position)
               .is_some_and(|lexeme| lexeme.token != Token::Eof)
        {
            self.position += 1;
            return &self.tokens[self.position - 1];
        }
        self.peek()
    }

    /// Whether the current token is `EOF`.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().token == Token::Eof
    }

    /// Line of the most recently consumed token, if any.
    #[must_use]
    pub fn previous_line(&self) -> Option<usize> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map(|lexeme| lexeme.line)
    }
}

/// Consumes the current token if it has the expected kind.
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `expected`: The kind the grammar requires at this point.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] carrying the expected kind, the kind
/// actually found and its line.
pub fn expect<'a>(tokens: &'a mut TokenStream<'_>, expected: TokenKind) -> ParseResult<&'a Lexeme> {
    let current = tokens.peek();
    if current.kind() != expected {
        return Err(ParseError::UnexpectedToken { expected,
                                                 found: current.kind(),
                                                 line: current.line });
    }
    Ok(tokens.advance())
}
