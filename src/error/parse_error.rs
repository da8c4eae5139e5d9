use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A required token was not found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token kind the grammar requires here.
        expected: TokenKind,
        /// The token kind actually present.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A factor was expected but the current token cannot start one.
    #[error("Error on line {line}: Invalid factor {found}; expected '(', NUM or ID.")]
    InvalidFactor {
        /// The token kind actually present.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement was followed by a token on the same line that continues
    /// neither the statement nor starts a new one.
    #[error("Error on line {line}: Unexpected {found} after the end of a statement; expected an operator.")]
    TrailingToken {
        /// The token kind actually present.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::InvalidFactor { line, .. }
            | Self::TrailingToken { line, .. } => *line,
        }
    }

    /// Returns the kind of the offending token.
    #[must_use]
    pub const fn found(&self) -> TokenKind {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::InvalidFactor { found, .. }
            | Self::TrailingToken { found, .. } => *found,
        }
    }
}
