//! # exprtree
//!
//! exprtree is an embeddable math expression engine written in Rust.
//! It compiles formulas such as `sqrt(x^2 + y^2)` into expression trees, folds
//! their constant parts, and evaluates them repeatedly against variables the
//! host updates between evaluations.
//!
//! ## Example
//! ```
//! use exprtree::{Binding, Slot, compile};
//!
//! let (x, y) = (Slot::new(3.0), Slot::new(4.0));
//! let bindings = [Binding::variable("x", &x), Binding::variable("y", &y)];
//!
//! let tree = compile("sqrt(x^2 + y^2)", &bindings).unwrap();
//! assert_eq!(tree.eval(), 5.0);
//!
//! y.set(0.0);
//! assert_eq!(tree.eval(), 3.0);
//! ```

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

use tracing::debug;

pub use crate::{
    ast::Expr,
    config::{Config, PowAssociativity},
    error::ParseError,
    interpreter::{
        evaluator::function::core::{Closure, Context, Function},
        value::{
            binding::{Binding, BindingKind},
            slot::Slot,
        },
    },
};
use crate::interpreter::parser::core::Parser;

/// Defines the structure of compiled expressions.
///
/// This module declares the `Expr` tree, its call nodes and the callables
/// they invoke. Trees are built by the parser, rewritten by the optimizer
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the node kinds: constants, variables and calls.
/// - Keeps every call's argument count equal to its callee's arity.
/// - Renders trees for debugging.
pub mod ast;
/// Compile-time options.
///
/// Selects the associativity of `^`, the meaning of `log`, and whether
/// constant folding runs after parsing.
pub mod config;
/// Provides the error type for compilation.
///
/// Evaluation cannot fail, so the only errors are the ones raised while
/// tokenizing or parsing. Each carries the 1-based character offset at which
/// the input stopped making sense.
pub mod error;
/// Ties together tokenizing, parsing, optimizing and evaluating.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Defines the bindings and storage the host shares with a tree.
pub mod interpreter;
/// General utilities for numeric conversion and offsets.
pub mod util;

/// Compiles `source` with the default [`Config`].
///
/// Names are resolved against `bindings` first and the builtin registry
/// second. The returned tree borrows every [`Slot`] it reads, so it cannot
/// outlive them.
///
/// # Errors
/// Returns a [`ParseError`] carrying the 1-based character offset at which
/// the input stopped making sense.
///
/// # Examples
/// ```
/// use exprtree::{Binding, Slot, compile};
///
/// let x = Slot::new(0.5);
/// let tree = compile("2 * x + 1", &[Binding::variable("x", &x)]).unwrap();
/// assert_eq!(tree.eval(), 2.0);
///
/// let error = compile("2 * y", &[Binding::variable("x", &x)]).unwrap_err();
/// assert_eq!(error.offset(), 5);
/// ```
pub fn compile<'a>(source: &str, bindings: &[Binding<'a>]) -> Result<Expr<'a>, ParseError> {
    compile_with(source, bindings, &Config::default())
}

/// Compiles `source` with explicit options.
///
/// Parses the whole input, then folds constant subtrees when
/// [`Config::optimize`] is set.
///
/// # Errors
/// Returns a [`ParseError`] carrying the 1-based character offset at which
/// the input stopped making sense.
pub fn compile_with<'a>(source: &str,
                        bindings: &[Binding<'a>],
                        config: &Config)
                        -> Result<Expr<'a>, ParseError> {
    let mut tree = Parser::new(source, bindings, config).parse()
                                                         .inspect_err(|error| {
                                                             debug!(len = source.len(),
                                                                    offset = error.offset(),
                                                                    %error,
                                                                    "compilation failed");
                                                         })?;

    if config.optimize {
        tree.optimize();
    }

    debug!(len = source.len(), nodes = tree.node_count(), "compiled expression");
    Ok(tree)
}

/// Compiles and evaluates `source` once, without bindings.
///
/// # Errors
/// Returns the [`ParseError`] from compilation.
///
/// # Examples
/// ```
/// use exprtree::interpret;
///
/// assert_eq!(interpret("(5+3)*2"), Ok(16.0));
/// assert_eq!(interpret("2^3^2"), Ok(512.0));
/// assert_eq!(interpret("(1+2").unwrap_err().offset(), 4);
/// ```
pub fn interpret(source: &str) -> Result<f64, ParseError> {
    compile(source, &[]).map(|tree| tree.eval())
}

/// Evaluates a tree that may be absent, such as the result of a failed
/// compilation turned into an `Option`.
///
/// Returns `NaN` for `None`.
///
/// # Examples
/// ```
/// use exprtree::{compile, evaluate};
///
/// let tree = compile("1 + 1", &[]).ok();
/// assert_eq!(evaluate(tree.as_ref()), 2.0);
/// assert!(evaluate(None).is_nan());
/// ```
#[must_use]
pub fn evaluate(tree: Option<&Expr<'_>>) -> f64 {
    tree.map_or(f64::NAN, Expr::eval)
}

/// Releases a tree that may be absent.
///
/// Trees own their nodes and are released when dropped; this exists for
/// hosts that want an explicit call, and accepts `None` as a no-op.
#[allow(clippy::needless_pass_by_value)]
pub fn free(tree: Option<Expr<'_>>) {
    drop(tree);
}
