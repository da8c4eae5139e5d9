use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::trace::{Recorder, Trace},
        symbol_table::{SymbolTable, SymbolType},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a tree and returns its synthesized value.
///
/// This is the main entry point for evaluation. Literals and variable
/// references are pure; a binary node evaluates its left operand, then its
/// right one, then combines them; an assignment evaluates its expression and
/// only then writes the result to `table`.
///
/// Evaluation is idempotent for trees without an assignment. Evaluating an
/// assignment twice writes the table twice, recording the second value.
///
/// # Parameters
/// - `expr`: Tree to evaluate.
/// - `table`: The session's symbol table.
///
/// # Errors
/// - [`EvalError::UndefinedVariable`] when reading a variable that is not in
///   `table`.
/// - [`EvalError::DivisionByZero`] when the right operand of `/` is zero.
///
/// A failed statement never writes to the table.
///
/// # Example
/// ```
/// use attrcalc::interpreter::{
///     evaluator::core::evaluate, lexer::tokenize, parser::statement::parse_single_statement,
///     symbol_table::SymbolTable,
/// };
///
/// let mut table = SymbolTable::new();
/// let ast = parse_single_statement(&tokenize("x = (2 + 3) * 4").unwrap()).unwrap();
///
/// assert_eq!(evaluate(&ast, &mut table).unwrap(), 20.0);
/// assert_eq!(table.lookup("x").unwrap().value, 20.0);
/// ```
pub fn evaluate(expr: &Expr, table: &mut SymbolTable) -> EvalResult<f64> {
    eval_node(expr, table, &mut ())
}

/// Evaluates a tree like [`evaluate`] while recording every node's outcome.
///
/// The returned [`Trace`] is what a decorated tree is rendered from, so the
/// decoration shows exactly the values this pass computed and the table is
/// written at most once.
pub fn evaluate_traced(expr: &Expr, table: &mut SymbolTable) -> (EvalResult<f64>, Trace) {
    let mut trace = Trace::default();
    let result = eval_node(expr, table, &mut trace);
    (result, trace)
}

fn eval_node<R: Recorder>(expr: &Expr, table: &mut SymbolTable, recorder: &mut R) -> EvalResult<f64> {
    let slot = recorder.enter();
    let result = eval_variant(expr, table, recorder);
    recorder.leave(slot, &result);
    result
}

fn eval_variant<R: Recorder>(expr: &Expr,
                             table: &mut SymbolTable,
                             recorder: &mut R)
                             -> EvalResult<f64> {
    match expr {
        Expr::NumberLiteral { value, .. } => Ok(*value),
        Expr::VariableRef { name, line } => eval_variable(name, *line, table),
        Expr::BinaryOp { op,
                         left,
                         right,
                         line, } => {
            let left = eval_node(left, table, recorder)?;
            let right = eval_node(right, table, recorder)?;
            op.apply(left, right, *line)
        },
        Expr::Assignment { name,
                           expression,
                           line, } => {
            let value = eval_node(expression, table, recorder)?;
            table.insert(name, SymbolType::Float, value, *line);
            Ok(value)
        },
    }
}

fn eval_variable(name: &str, line: usize, table: &SymbolTable) -> EvalResult<f64> {
    table.lookup(name)
         .map(|symbol| symbol.value)
         .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string(),
                                                       line })
}
