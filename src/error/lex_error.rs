use thiserror::Error;

/// A character the lexer does not recognise.
///
/// Only digits, ASCII letters, `_`, whitespace and `+ - * / ( ) = .` (the
/// latter inside a number) may appear in the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: Unrecognized character '{character}'.")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// The source line where the error occurred.
    pub line:      usize,
}
