/// Callable types.
///
/// Defines the plain host functions and context-carrying closures that a call
/// node may invoke, along with the argument array they receive.
pub mod core;
/// The builtin registry.
///
/// A sorted, compile-time table of named math functions and the binary
/// search that resolves identifiers against it.
pub mod builtin;
/// Combinatorial builtins.
///
/// Factorials, combinations and permutations that saturate to infinity on
/// overflow instead of wrapping.
pub mod choose;
