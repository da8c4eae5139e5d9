use tracing::{debug, info, warn};

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::{
            core::{EvalResult, evaluate_traced},
            trace::Trace,
        },
        lexer::{Lexeme, tokenize},
        parser::statement::parse_program,
        symbol_table::SymbolTable,
    },
};

/// The outcome of evaluating one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    /// The statement's value, or why it has none.
    pub result: EvalResult<f64>,
    /// Per-node outcomes recorded while evaluating.
    pub trace:  Trace,
}

/// Everything produced while processing one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// The lexer's output, ending with `EOF`.
    pub tokens:     Vec<Lexeme>,
    /// The parsed statements in source order.
    pub statements: Vec<Expr>,
    /// One execution per statement, in the same order.
    pub executions: Vec<Execution>,
}

impl Run {
    /// Values of the statements that evaluated successfully, in order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.executions
            .iter()
            .filter_map(|execution| execution.result.as_ref().ok().copied())
            .collect()
    }

    /// The value of the last statement that evaluated successfully.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.values().last().copied()
    }

    /// Whether any statement failed to evaluate.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.executions
            .iter()
            .any(|execution| execution.result.is_err())
    }
}

/// Stores the state of one evaluation session.
///
/// A session owns the symbol table for its whole lifetime and lends it to
/// every statement it evaluates, so later statements see the variables
/// assigned by earlier ones. Independent sessions never share a table.
///
/// ## Usage
///
/// ```
/// use attrcalc::interpreter::session::Session;
///
/// let mut session = Session::new();
/// session.run("x = 5").unwrap();
///
/// let run = session.run("x + 3").unwrap();
/// assert_eq!(run.last_value(), Some(8.0));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    table: SymbolTable,
}

impl Session {
    /// Creates a session with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's symbol table.
    #[must_use]
    pub const fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Evaluates one statement against the session's table.
    ///
    /// A failing statement leaves the table exactly as it was; the failure is
    /// reported in the returned [`Execution`] rather than as an `Err`, so the
    /// caller can carry on with the next statement.
    pub fn execute(&mut self, statement: &Expr) -> Execution {
        let (result, trace) = evaluate_traced(statement, &mut self.table);
        match &result {
            Ok(value) => debug!(line = statement.line_number(), value, "statement evaluated"),
            Err(error) => warn!(%error, "statement failed"),
        }
        Execution { result, trace }
    }

    /// Processes a whole input: tokenize, parse, then evaluate each statement.
    ///
    /// Tokenizing and parsing cover the complete input first; if either fails,
    /// nothing is evaluated. Evaluation errors are recorded per statement and
    /// do not stop the statements after them.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] or [`Error::Parse`] if the input is malformed.
    pub fn run(&mut self, source: &str) -> Result<Run, Error> {
        let tokens = tokenize(source)?;
        let statements = parse_program(&tokens)?;
        info!(statements = statements.len(), "running input");

        let executions = statements.iter()
                                   .map(|statement| self.execute(statement))
                                   .collect();

        Ok(Run { tokens,
                 statements,
                 executions })
    }
}
