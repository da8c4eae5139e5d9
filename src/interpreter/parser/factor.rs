use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseResult, TokenStream, expect},
        },
    },
};

/// Parses a factor, the atom of the expression grammar.
///
/// Grammar:
/// ```text
///     Factor → '(' Expr ')' | NUM | ID
/// ```
/// Parentheses only group; they leave no node in the tree.
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Expr`].
///
/// # Errors
/// - [`ParseError::InvalidFactor`] if the current token cannot start a factor.
/// - [`ParseError::UnexpectedToken`] if a `(` is not closed.
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let current = tokens.peek();
    let line = current.line;

    match &current.token {
        Token::LParen => {
            tokens.advance();
            let inner = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(inner)
        },
        Token::Number(value) => {
            let value = *value;
            tokens.advance();
            Ok(Expr::NumberLiteral { value, line })
        },
        Token::Identifier(name) => {
            let name = name.clone();
            tokens.advance();
            Ok(Expr::VariableRef { name, line })
        },
        token => Err(ParseError::InvalidFactor { found: token.kind(),
                                                 line }),
    }
}
