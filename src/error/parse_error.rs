use thiserror::Error;

/// Represents all errors that can occur while tokenizing or parsing.
///
/// Every variant carries a 1-based character `offset` into the source text.
/// An offset of `0` never occurs, so callers may use it to mean "no error".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start or continue an expression.
    #[error("Error at offset {offset}: Unexpected token.")]
    UnexpectedToken {
        /// Character offset just past the offending token.
        offset: usize,
    },
    /// Found a character the tokenizer does not recognize.
    #[error("Error at offset {offset}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The unrecognized character.
        character: char,
        /// Character offset just past the offending character.
        offset:    usize,
    },
    /// An identifier matched neither a binding nor a builtin.
    #[error("Error at offset {offset}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The identifier as written.
        name:   String,
        /// Character offset of the identifier's first character.
        offset: usize,
    },
    /// A call received more or fewer arguments than its arity.
    #[error("Error at offset {offset}: '{name}' expects {expected} argument(s).")]
    ArgumentCountMismatch {
        /// The callee, as rendered in diagnostics.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// Character offset where the mismatch was detected.
        offset:   usize,
    },
    /// A call with two or more parameters was not followed by `(`.
    #[error("Error at offset {offset}: Expected '(' after '{name}'.")]
    ExpectedOpenParen {
        /// The callee, as rendered in diagnostics.
        name:   String,
        /// Character offset just past the token found instead.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at offset {offset}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Character offset just past the token found instead.
        offset: usize,
    },
    /// Input continued after a complete expression.
    #[error("Error at offset {offset}: Extra input after expression.")]
    TrailingInput {
        /// Character offset just past the first extra token.
        offset: usize,
    },
    /// Reached the end of input while an operand was still required.
    #[error("Error at offset {offset}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Character offset of the end of input.
        offset: usize,
    },
}

impl ParseError {
    /// Gets the 1-based character offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use exprtree::error::ParseError;
    ///
    /// let error = ParseError::TrailingInput { offset: 4 };
    ///
    /// assert_eq!(error.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset }
            | Self::UnexpectedCharacter { offset, .. }
            | Self::UnknownIdentifier { offset, .. }
            | Self::ArgumentCountMismatch { offset, .. }
            | Self::ExpectedOpenParen { offset, .. }
            | Self::ExpectedClosingParen { offset }
            | Self::TrailingInput { offset }
            | Self::UnexpectedEndOfInput { offset } => *offset,
        }
    }
}
