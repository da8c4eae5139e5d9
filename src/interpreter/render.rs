use std::fmt::Write as _;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::evaluate_traced,
            trace::{NodeOutcome, Trace},
        },
        lexer::{Lexeme, Token},
        session::{Execution, Run},
        symbol_table::SymbolTable,
    },
    util::num::{format_optional_real, format_real},
};

/// Which sections [`render_report`] includes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// The token listing.
    pub tokens:    bool,
    /// The structural tree.
    pub tree:      bool,
    /// The per-statement results.
    pub results:   bool,
    /// The tree decorated with synthesized values.
    pub decorated: bool,
    /// The final symbol table.
    pub table:     bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { tokens:    true,
               tree:      true,
               results:   true,
               decorated: true,
               table:     true, }
    }
}

/// Lists every token except the final `EOF`, one per line.
#[must_use]
pub fn format_tokens(tokens: &[Lexeme]) -> String {
    tokens.iter()
          .filter(|lexeme| lexeme.token != Token::Eof)
          .fold(String::new(), |mut out, lexeme| {
              let _ = writeln!(out, "  {lexeme}");
              out
          })
}

/// Renders a tree as indented text.
///
/// In structural mode every node shows only its label. In decorated mode each
/// node is also annotated with its synthesized value, computed by evaluating
/// `expr` against a private copy of `table`; the caller's table is never
/// modified. Decorated mode without a table falls back to structural mode.
///
/// # Example
/// ```
/// use attrcalc::interpreter::{
///     lexer::tokenize, parser::statement::parse_single_statement, render::render,
/// };
///
/// let ast = parse_single_statement(&tokenize("2 + 3").unwrap()).unwrap();
///
/// assert_eq!(render(&ast, false, None),
///            "└── OP(+)\n    ├── NUM: 2.0\n    └── NUM: 3.0\n");
/// ```
#[must_use]
pub fn render(expr: &Expr, decorated: bool, table: Option<&SymbolTable>) -> String {
    match table {
        Some(table) if decorated => {
            let mut scratch = table.clone();
            let (_, trace) = evaluate_traced(expr, &mut scratch);
            render_traced(expr, &trace)
        },
        _ => render_tree(expr, "", true, None),
    }
}

/// Renders a tree decorated with the outcomes recorded in `trace`.
#[must_use]
pub fn render_traced(expr: &Expr, trace: &Trace) -> String {
    render_tree(expr, "", true, Some(trace))
}

/// Renders all statements of a program.
///
/// A single statement is rendered as its own tree. Several statements hang
/// below a `PROGRAM` root, one `Statement i:` branch each. When `executions`
/// is given, trees are decorated from the recorded traces and each branch
/// header carries the statement's result.
#[must_use]
pub fn render_program(statements: &[Expr], executions: Option<&[Execution]>) -> String {
    let trace_of = |index: usize| executions.and_then(|e| e.get(index)).map(|e| &e.trace);

    if let [statement] = statements {
        return render_tree(statement, "", true, trace_of(0));
    }

    let mut out = String::from("PROGRAM\n");
    for (index, statement) in statements.iter().enumerate() {
        let is_last = index + 1 == statements.len();
        let (connector, extension) = if is_last { ("└── ", "    ") } else { ("├── ", "│   ") };
        let header = match executions.and_then(|e| e.get(index)) {
            Some(execution) => {
                format!("Statement {} (result={}):",
                        index + 1,
                        format_optional_real(execution.result.as_ref().ok().copied(), "ERROR"))
            },
            None => format!("Statement {}:", index + 1),
        };
        let _ = writeln!(out, "{connector}{header}");
        out.push_str(&render_tree(statement, extension, true, trace_of(index)));
    }
    out
}

/// Lists each statement's value or error.
#[must_use]
pub fn format_results(executions: &[Execution]) -> String {
    executions.iter()
              .enumerate()
              .fold(String::new(), |mut out, (index, execution)| {
                  let _ = match &execution.result {
                      Ok(value) => writeln!(out, "Statement {}: {}", index + 1, format_real(*value)),
                      Err(error) => writeln!(out, "Statement {}: ERROR - {error}", index + 1),
                  };
                  out
              })
}

/// Dumps the symbol table as an aligned listing.
///
/// # Example
/// ```
/// use attrcalc::interpreter::{render::format_table, symbol_table::SymbolTable};
///
/// assert_eq!(format_table(&SymbolTable::new()),
///            "SYMBOL TABLE\n(empty - no variables defined)\n");
/// ```
#[must_use]
pub fn format_table(table: &SymbolTable) -> String {
    let mut out = String::from("SYMBOL TABLE\n");
    if table.is_empty() {
        out.push_str("(empty - no variables defined)\n");
        return out;
    }

    let header = format!("{:<15} {:<10} {:<15} {:<10}", "Name", "Type", "Value", "Line");
    let _ = writeln!(out, "{}", header.trim_end());
    for symbol in table.iter() {
        let row = format!("{:<15} {:<10} {:<15} {:<10}",
                          symbol.name,
                          symbol.symbol_type.to_string(),
                          format_real(symbol.value),
                          symbol.line);
        let _ = writeln!(out, "{}", row.trim_end());
    }
    out
}

/// Renders the full diagnostic report of a run.
///
/// Sections appear in pipeline order (tokens, tree, results, decorated tree,
/// symbol table), each only if enabled in `options`, separated by blank lines.
#[must_use]
pub fn render_report(run: &Run, table: &SymbolTable, options: &ReportOptions) -> String {
    let mut sections = Vec::new();

    if options.tokens {
        sections.push(format!("TOKENS\n{}", format_tokens(&run.tokens)));
    }
    if options.tree {
        sections.push(format!("AST\n{}", render_program(&run.statements, None)));
    }
    if options.results {
        sections.push(format!("EVALUATION\n{}", format_results(&run.executions)));
    }
    if options.decorated {
        sections.push(format!("DECORATED AST\n{}",
                              render_program(&run.statements, Some(&run.executions))));
    }
    if options.table {
        sections.push(format_table(table));
    }

    sections.join("\n")
}

fn render_tree(expr: &Expr, prefix: &str, is_last: bool, trace: Option<&Trace>) -> String {
    let mut out = String::new();
    let mut index = 0;
    write_node(&mut out, expr, prefix, is_last, trace, &mut index);
    out
}

fn write_node(out: &mut String,
              expr: &Expr,
              prefix: &str,
              is_last: bool,
              trace: Option<&Trace>,
              index: &mut usize) {
    let connector = if is_last { "└── " } else { "├── " };
    let suffix = trace.map(|trace| decoration(trace.outcome(*index)))
                      .unwrap_or_default();
    *index += 1;
    let _ = writeln!(out, "{prefix}{connector}{}{suffix}", label(expr));

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let children = expr.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        write_node(out, child, &child_prefix, i + 1 == count, trace, index);
    }
}

fn label(expr: &Expr) -> String {
    match expr {
        Expr::NumberLiteral { value, .. } => format!("NUM: {}", format_real(*value)),
        Expr::VariableRef { name, .. } => format!("VAR: {name}"),
        Expr::BinaryOp { op, .. } => format!("OP({op})"),
        Expr::Assignment { name, .. } => format!("ASSIGN: {name}"),
    }
}

fn decoration(outcome: &NodeOutcome) -> String {
    match outcome {
        NodeOutcome::Value(value) => format!(" → val={}", format_real(*value)),
        NodeOutcome::Failed(error) => format!(" → ERROR: {error}"),
        NodeOutcome::NotReached => " → (not evaluated)".to_string(),
    }
}
