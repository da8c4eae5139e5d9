/// Numeric formatting helpers.
///
/// This module provides the single place where floating-point values are
/// turned into text, so that tokens, trees, evaluation results and the symbol
/// table all print numbers the same way.
pub mod num;
