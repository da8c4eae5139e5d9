/// The evaluator module computes the synthesized value of every AST node.
///
/// The evaluator walks a statement's tree bottom-up, reads variables from the
/// symbol table, applies arithmetic, and writes assignments back to the table.
/// It can also record a per-node trace of one pass.
///
/// # Responsibilities
/// - Evaluates all four node kinds.
/// - Reports undefined variables and division by zero.
/// - Never writes a failed assignment to the table.
pub mod evaluator;
/// The grammar module describes the parser's grammar as data.
///
/// It holds the production table of the left-recursion-free expression grammar
/// and derives its FIRST and FOLLOW sets.
pub mod grammar;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the complete token
/// sequence: numbers, identifiers, operators and parentheses, each with its
/// source line, terminated by a single `EOF`.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and counts newlines.
/// - Reports the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent LL(1) parser for the expression grammar
/// after left-recursion elimination, plus one extra token of lookahead to
/// recognize assignments.
///
/// # Responsibilities
/// - Converts tokens into one tree per statement.
/// - Keeps `*` and `/` above `+` and `-`, all left-associative.
/// - Reports the expected and found token kinds on failure.
pub mod parser;
/// Text renderings for diagnostics.
///
/// Turns tokens, trees (plain or decorated with values) and the symbol table
/// into human-readable text.
pub mod render;
/// The statement processor.
///
/// Ties the phases together for one input and keeps the symbol table alive
/// across statements and inputs.
pub mod session;
/// The symbol table.
///
/// Maps each assigned variable to its value, type tag and the line of its
/// latest assignment.
pub mod symbol_table;
