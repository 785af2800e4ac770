/// Compilation errors.
///
/// Defines every error that can stop an expression from compiling: unknown
/// characters and identifiers reported by the tokenizer, and grammar
/// violations reported by the parser. Each error carries the character offset
/// at which the input stopped making sense.
pub mod parse_error;

pub use parse_error::ParseError;
