use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseResult, TokenStream, expect},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment or an expression:
/// ```text
///     Statement → ID '=' Expr
///               | Expr
/// ```
/// Both alternatives may start with `ID`, so the parser peeks one token past
/// the current one; only `ID` directly followed by `=` is an assignment.
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of the statement.
///
/// # Returns
/// The statement's tree: an [`Expr::Assignment`] or a plain expression.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if let Token::Identifier(name) = &tokens.peek().token
       && tokens.peek_second().token == Token::Equals
    {
        let name = name.clone();
        let line = tokens.advance().line;
        expect(tokens, TokenKind::Assign)?;

        let expression = parse_expression(tokens)?;
        return Ok(Expr::Assignment { name,
                                     expression: Box::new(expression),
                                     line });
    }

    parse_expression(tokens)
}

/// Parses a whole program: one statement after another until `EOF`.
///
/// Statements have no terminator. A statement ends where the next token can no
/// longer continue it, and the next statement must then begin on a later line
/// than the last token of the previous one. Two operands on the same line with
/// nothing between them (`2 3`) are therefore an error rather than two
/// statements.
///
/// # Parameters
/// - `tokens`: The complete output of the lexer.
///
/// # Returns
/// The statements in source order.
///
/// # Errors
/// - Any error raised while parsing a statement.
/// - [`ParseError::TrailingToken`] for a token that follows a statement on
///   the same line.
///
/// # Example
/// ```
/// use attrcalc::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let tokens = tokenize("x = 5\nx + 3").unwrap();
/// assert_eq!(parse_program(&tokens).unwrap().len(), 2);
///
/// let tokens = tokenize("2 3").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(tokens: &[Lexeme]) -> ParseResult<Vec<Expr>> {
    let mut stream = TokenStream::new(tokens);
    let mut statements = Vec::new();

    while !stream.at_end() {
        let statement = parse_statement(&mut stream)?;
        debug!(index = statements.len() + 1, line = statement.line_number(), "parsed statement");
        statements.push(statement);

        let next = stream.peek();
        if next.token != Token::Eof
           && stream.previous_line()
                    .is_some_and(|line| next.line <= line)
        {
            return Err(ParseError::TrailingToken { found: next.kind(),
                                                   line:  next.line, });
        }
    }

    Ok(statements)
}

/// Parses exactly one statement spanning the whole token sequence.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] expecting `EOF` if tokens remain
/// after the statement, besides any error from [`parse_statement`].
///
/// # Example
/// ```
/// use attrcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::statement::parse_single_statement},
/// };
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let ast = parse_single_statement(&tokens).unwrap();
///
/// let Expr::BinaryOp { op, right, .. } = ast else { panic!("expected a binary node") };
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
/// ```
pub fn parse_single_statement(tokens: &[Lexeme]) -> ParseResult<Expr> {
    let mut stream = TokenStream::new(tokens);
    let statement = parse_statement(&mut stream)?;
    expect(&mut stream, TokenKind::Eof)?;
    Ok(statement)
}
