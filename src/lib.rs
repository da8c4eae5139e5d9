//! # attrcalc
//!
//! attrcalc is a syntax-directed evaluator for arithmetic expressions with
//! variable assignment, written in Rust. It tokenizes source text, parses it
//! with a recursive-descent parser for a left-recursion-free attribute
//! grammar, evaluates each node's synthesized value bottom-up and keeps a
//! symbol table of assigned variables across the statements of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents one statement as a
/// tree: number literals, variable references, binary operations and
/// assignments. The AST is built by the parser and traversed by the evaluator
/// and the renderer.
///
/// # Responsibilities
/// - Defines the four node kinds and the binary operators.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing source
/// text. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines one error type per phase (lexer, parser, evaluator).
/// - Provides a crate-level error that any phase's error converts into.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the symbol table and
/// rendering, and exposes the session that processes statements one after
/// another.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and table.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Currently the numeric formatting shared by every textual output.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::core::{evaluate, evaluate_traced},
        lexer::{Lexeme, Token, TokenKind, tokenize},
        parser::statement::{parse_program, parse_single_statement as parse_statement},
        render::{ReportOptions, format_table, render, render_report},
        session::{Run, Session},
        symbol_table::{Symbol, SymbolTable, SymbolType},
    },
};

/// Evaluates every statement of `source` in a fresh session.
///
/// This function tokenizes and parses the whole source, then evaluates its
/// statements in order against a new symbol table. Unlike [`Session::run`],
/// it stops at the first evaluation error.
///
/// # Errors
/// Returns an error if lexing, parsing or the evaluation of any statement
/// fails.
///
/// # Examples
/// ```
/// use attrcalc::get_result;
///
/// // Later statements see earlier assignments.
/// let values = get_result("x = 5\nx + 3").unwrap();
/// assert_eq!(values, vec![5.0, 8.0]);
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_result("z + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Vec<f64>, Error> {
    let tokens = tokenize(source)?;
    let statements = parse_program(&tokens)?;

    let mut table = SymbolTable::new();
    statements.iter()
              .map(|statement| evaluate(statement, &mut table).map_err(Error::from))
              .collect()
}
