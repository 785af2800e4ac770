/// The evaluator module computes values from compiled trees.
///
/// Besides plain evaluation it holds the operator arithmetic, the constant
/// folding pass and every kind of callable a call node can invoke: host
/// functions, host closures and the builtin registry.
///
/// # Responsibilities
/// - Evaluates trees, reading bound variables at evaluation time.
/// - Folds pure calls over constant arguments into constants.
/// - Defines the builtin math functions and their sorted lookup table.
pub mod evaluator;
/// The lexer module turns source text into resolved tokens.
///
/// Lexing proper is done by a `logos` lexer. On top of it the tokenizer
/// resolves identifiers against the caller's bindings and the builtin
/// registry, and tracks the character offset used in error reports.
///
/// # Responsibilities
/// - Recognizes numbers, names, operators, parentheses and commas.
/// - Resolves names to variables or callables; bindings shadow builtins.
/// - Reports unknown characters and unknown identifiers.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// A recursive-descent parser with one token of lookahead. Operator
/// precedence is encoded in the grammar levels; call arguments are checked
/// against the callee's arity.
///
/// # Responsibilities
/// - Builds the tree for lists, infix operators, signs, groups and calls.
/// - Applies the configured associativity of `^`.
/// - Reports the offset at which the input stopped making sense.
pub mod parser;
/// The value module defines what names can be bound to.
///
/// Holds the caller-owned variable storage and the bindings that map names
/// to variables, host functions and host closures.
pub mod value;
