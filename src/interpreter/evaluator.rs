/// Core evaluation logic.
///
/// Computes the synthesized value of every node bottom-up and applies
/// assignments to the symbol table.
pub mod core;

/// Evaluation traces.
///
/// Records the outcome of every node visited during one evaluation pass so
/// that a decorated tree can be rendered without evaluating again.
pub mod trace;
