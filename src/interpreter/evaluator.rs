/// Core evaluation logic.
///
/// Walks a compiled tree and computes its value, reading bound variables
/// fresh on every evaluation.
pub mod core;

/// Operator evaluation.
///
/// Implements the arithmetic behind the infix operators, unary negation and
/// the comma operator.
pub mod operator;

/// Constant folding.
///
/// Rewrites pure calls whose arguments are all constants into a single
/// constant node.
pub mod optimizer;

/// Function evaluation.
///
/// Handles host functions, closures and the builtin registry.
pub mod function;
