use logos::Logos;
use tracing::debug;

use crate::{error::LexError, util::num::format_real};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `foo_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// End of input. Never matched; appended once by [`tokenize`].
    Eof,

    /// Line breaks advance the line counter and produce no token.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Num,
            Self::Identifier(_) => TokenKind::Id,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Equals => TokenKind::Assign,
            Self::Eof | Self::NewLine | Self::Ignored => TokenKind::Eof,
        }
    }
}

/// The kind of a token, without its payload.
///
/// Parse errors and the grammar tables talk about token kinds, never about
/// concrete numbers or names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// A numeric literal.
    Num,
    /// An identifier.
    Id,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Assign,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Num => "NUM",
            Self::Id => "ID",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Assign => "'='",
            Self::Eof => "EOF",
        };
        write!(f, "{kind}")
    }
}

/// A token together with the source line it was found on.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token.
    pub token: Token,
    /// 1-based source line.
    pub line:  usize,
}

impl Lexeme {
    /// Returns the kind of the wrapped token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind().to_string();
        let kind = kind.trim_matches('\'');
        match &self.token {
            Token::Number(value) => write!(f, "Token({kind}, {}, L{})", format_real(*value), self.line),
            Token::Identifier(name) => write!(f, "Token({kind}, {name}, L{})", self.line),
            Token::Eof => write!(f, "Token({kind}, L{})", self.line),
            _ => write!(f, "Token({kind}, {kind}, L{})", self.line),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts source text into a fully materialized token sequence.
///
/// The scan runs left to right; newlines advance the line counter. The
/// returned sequence always ends with exactly one [`Token::Eof`] carrying the
/// final line number.
///
/// # Errors
/// Returns a [`LexError`] for the first character that cannot start a token.
///
/// # Example
/// ```
/// use attrcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("3.5 + foo_1").unwrap()
///                                                 .into_iter()
///                                                 .map(|lexeme| lexeme.token)
///                                                 .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Number(3.5),
///                 Token::Plus,
///                 Token::Identifier("foo_1".to_string()),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut lexemes = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            lexemes.push(Lexeme { token,
                                  line: lexer.extras.line });
        } else {
            let character = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError { character,
                                  line: lexer.extras.line });
        }
    }

    lexemes.push(Lexeme { token: Token::Eof,
                          line:  lexer.extras.line, });
    debug!(count = lexemes.len(), lines = lexer.extras.line, "tokenized source");

    Ok(lexemes)
}
