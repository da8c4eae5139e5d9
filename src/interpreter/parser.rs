/// Core parsing machinery.
///
/// Contains the token cursor shared by all grammar functions, the
/// `ParseResult` alias and the helper that matches a required token.
pub mod core;

/// Additive and multiplicative expressions.
///
/// Implements `Expr → Term Expr'` and `Term → Factor Term'` together with their
/// tail productions, building left-associative `BinaryOp` nodes.
pub mod binary;

/// Factors.
///
/// Parses the atoms of the grammar: parenthesized expressions, numbers and
/// variable references.
pub mod factor;

/// Statements and programs.
///
/// Decides between assignment and expression statements and splits a token
/// sequence into consecutive statements.
pub mod statement;
