use attrcalc::{
    BinaryOperator, Expr, ParseError, TokenKind, parse_program, parse_statement, tokenize,
};

fn num(value: f64, line: usize) -> Expr {
    Expr::NumberLiteral { value, line }
}

fn var(name: &str, line: usize) -> Expr {
    Expr::VariableRef { name: name.to_string(),
                        line }
}

fn bin(op: BinaryOperator, left: Expr, right: Expr, line: usize) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     line }
}

fn parse(src: &str) -> Result<Expr, ParseError> {
    parse_statement(&tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}")))
}

fn program(src: &str) -> Result<Vec<Expr>, ParseError> {
    parse_program(&tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}")))
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("2 + 3 * 4").unwrap(),
               bin(BinaryOperator::Add,
                   num(2.0, 1),
                   bin(BinaryOperator::Mul, num(3.0, 1), num(4.0, 1), 1),
                   1));
}

#[test]
fn parentheses_group_without_leaving_a_node() {
    assert_eq!(parse("(2 + 3) * 4").unwrap(),
               bin(BinaryOperator::Mul,
                   bin(BinaryOperator::Add, num(2.0, 1), num(3.0, 1), 1),
                   num(4.0, 1),
                   1));
    assert_eq!(parse("((x))").unwrap(), var("x", 1));
}

#[test]
fn same_precedence_operators_associate_left() {
    assert_eq!(parse("a - b - c").unwrap(),
               bin(BinaryOperator::Sub,
                   bin(BinaryOperator::Sub, var("a", 1), var("b", 1), 1),
                   var("c", 1),
                   1));
    assert_eq!(parse("a / b * c").unwrap(),
               bin(BinaryOperator::Mul,
                   bin(BinaryOperator::Div, var("a", 1), var("b", 1), 1),
                   var("c", 1),
                   1));
}

#[test]
fn identifier_followed_by_equals_is_an_assignment() {
    assert_eq!(parse("x = y + 1").unwrap(),
               Expr::Assignment { name:       "x".to_string(),
                                  expression: Box::new(bin(BinaryOperator::Add,
                                                           var("y", 1),
                                                           num(1.0, 1),
                                                           1)),
                                  line:       1, });
}

#[test]
fn identifier_not_followed_by_equals_is_an_expression() {
    assert_eq!(parse("x + 1").unwrap(),
               bin(BinaryOperator::Add, var("x", 1), num(1.0, 1), 1));
    assert_eq!(parse("x").unwrap(), var("x", 1));
}

#[test]
fn assignment_is_only_allowed_at_statement_start() {
    assert_eq!(parse("1 + x = 2"),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Eof,
                                                 found:    TokenKind::Assign,
                                                 line:     1, }));
    assert_eq!(parse("(x = 2)"),
               Err(ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                                 found:    TokenKind::Assign,
                                                 line:     1, }));
}

#[test]
fn missing_closing_parenthesis() {
    assert_eq!(parse("(1 + 2"),
               Err(ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                                 found:    TokenKind::Eof,
                                                 line:     1, }));
}

#[test]
fn invalid_factor_reports_the_offending_kind() {
    assert_eq!(parse("2 * )"),
               Err(ParseError::InvalidFactor { found: TokenKind::RParen,
                                               line:  1, }));
    assert_eq!(parse("1 +\n"),
               Err(ParseError::InvalidFactor { found: TokenKind::Eof,
                                               line:  2, }));
    assert_eq!(parse("x = \n*"),
               Err(ParseError::InvalidFactor { found: TokenKind::Star,
                                               line:  2, }));
}

#[test]
fn program_splits_statements_at_line_boundaries() {
    let statements = program("x = 5\nx + 3\n\n(x)").unwrap();

    assert_eq!(statements.len(), 3);
    assert!(matches!(&statements[0], Expr::Assignment { name, line: 1, .. } if name == "x"));
    assert_eq!(statements[1],
               bin(BinaryOperator::Add, var("x", 2), num(3.0, 2), 2));
    assert_eq!(statements[2], var("x", 4));
}

#[test]
fn two_operands_on_one_line_are_an_error() {
    assert_eq!(program("2 3"),
               Err(ParseError::TrailingToken { found: TokenKind::Num,
                                               line:  1, }));
    assert_eq!(program("x = 1 y = 2"),
               Err(ParseError::TrailingToken { found: TokenKind::Id,
                                               line:  1, }));
}

#[test]
fn a_statement_may_continue_on_the_next_line() {
    assert_eq!(program("1\n+ 2").unwrap(),
               vec![bin(BinaryOperator::Add, num(1.0, 1), num(2.0, 2), 2)]);
}

#[test]
fn stray_closing_parenthesis_after_a_statement() {
    assert_eq!(program("(1))"),
               Err(ParseError::TrailingToken { found: TokenKind::RParen,
                                               line:  1, }));
}

#[test]
fn empty_program() {
    assert_eq!(program("").unwrap(), Vec::new());
}

#[test]
fn single_statement_requires_end_of_input() {
    assert_eq!(parse("1\n2"),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Eof,
                                                 found:    TokenKind::Num,
                                                 line:     2, }));
    assert!(parse("").is_err());
}

#[test]
fn node_helpers() {
    let tree = parse("a = (1 + b) * 2").unwrap();
    assert_eq!(tree.node_count(), 6);
    assert_eq!(tree.children().len(), 1);
    assert_eq!(tree.line_number(), 1);
}
