use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            factor::parse_factor,
        },
    },
};

/// Parses an additive expression.
///
/// The rule is: `Expr → Term Expr'`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the first token of the expression.
///
/// # Returns
/// The expression tree; `+` and `-` chains are left-associative.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let term = parse_term(tokens)?;
    parse_expression_tail(tokens, term)
}

/// Parses the tail of an additive expression.
///
/// The rule is: `Expr' → '+' Term Expr' | '-' Term Expr' | ε`
///
/// `left` is the inherited accumulator: the tree built so far. Each operator
/// found wraps it as the left operand of a new node before recursing, which is
/// what keeps `a - b - c` equal to `(a - b) - c`.
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `left`: Tree of everything to the left of the current token.
pub fn parse_expression_tail(tokens: &mut TokenStream<'_>, left: Expr) -> ParseResult<Expr> {
    let op = match tokens.peek().token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        _ => return Ok(left),
    };
    let line = tokens.advance().line;
    let right = parse_term(tokens)?;

    parse_expression_tail(tokens,
                          Expr::BinaryOp { op,
                                           left: Box::new(left),
                                           right: Box::new(right),
                                           line })
}

/// Parses a multiplicative expression.
///
/// The rule is: `Term → Factor Term'`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let factor = parse_factor(tokens)?;
    parse_term_tail(tokens, factor)
}

/// Parses the tail of a multiplicative expression.
///
/// The rule is: `Term' → '*' Factor Term' | '/' Factor Term' | ε`
///
/// Works like [`parse_expression_tail`] one precedence level down, so `*` and
/// `/` bind tighter than `+` and `-`.
pub fn parse_term_tail(tokens: &mut TokenStream<'_>, left: Expr) -> ParseResult<Expr> {
    let op = match tokens.peek().token {
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        _ => return Ok(left),
    };
    let line = tokens.advance().line;
    let right = parse_factor(tokens)?;

    parse_term_tail(tokens,
                    Expr::BinaryOp { op,
                                     left: Box::new(left),
                                     right: Box::new(right),
                                     line })
}
