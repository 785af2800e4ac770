/// Parser state and entry points.
///
/// Holds the tokenizer and the single lookahead token, and parses the
/// top-level comma-separated list.
pub mod core;

/// Binary operator parsing.
///
/// Handles the left-associative additive and multiplicative levels and the
/// power level in both associativities.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles sign prefixes, literals, variables, calls and parenthesized
/// groups.
pub mod unary;

/// Call argument parsing.
///
/// Checks argument lists against the callee's arity.
pub mod call;
