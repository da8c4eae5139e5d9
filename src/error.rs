/// Lexical errors.
///
/// Raised by the lexer when the source contains a character outside the
/// language's alphabet.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an AST from tokens:
/// a missing required token, an invalid factor, or a statement that does not
/// end where it should.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while computing a statement's value: reading an
/// undefined variable and dividing by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced while processing source text.
///
/// Lexing and parsing errors reject the whole input; evaluation errors belong
/// to a single statement.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed to evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line(),
            Self::Eval(e) => e.line(),
        }
    }
}
