use crate::{
    ast::{Expr, Operator},
    config::{Config, PowAssociativity},
    error::ParseError,
    interpreter::{
        lexer::{Token, Tokenizer},
        value::binding::Binding,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a [`Tokenizer`].
///
/// Holds exactly one lookahead token. Each grammar level lives in its own
/// module as an `impl Parser` block:
///
/// ```text
///     list   := expr {"," expr}
///     expr   := term {("+" | "-") term}
///     term   := factor {("*" | "/" | "%") factor}
///     factor := power {"^" power}
///     power  := {("-" | "+")} base
///     base   := number | variable | call | "(" list ")"
/// ```
///
/// # Example
/// ```
/// use exprtree::{Config, interpreter::parser::core::Parser};
///
/// let tree = Parser::new("1, 2 + 3", &[], &Config::default()).parse().unwrap();
/// assert_eq!(tree.eval(), 5.0);
///
/// let error = Parser::new("1 2", &[], &Config::default()).parse().unwrap_err();
/// assert_eq!(error.offset(), 3);
/// ```
pub struct Parser<'s, 'b, 'a> {
    tokenizer:                    Tokenizer<'s, 'b, 'a>,
    pub(super) current:           Token<'a>,
    pub(super) pow_associativity: PowAssociativity,
}

impl<'s, 'b, 'a> Parser<'s, 'b, 'a> {
    /// Creates a parser and reads the first token.
    #[must_use]
    pub fn new(source: &'s str, bindings: &'b [Binding<'a>], config: &Config) -> Self {
        let mut tokenizer = Tokenizer::new(source, bindings, config);
        let current = tokenizer.next_token();
        Self { tokenizer,
               current,
               pow_associativity: config.pow_associativity }
    }

    /// Parses the whole input into an unoptimized tree.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered, or
    /// [`ParseError::TrailingInput`] when tokens remain after a complete
    /// list.
    pub fn parse(mut self) -> ParseResult<Expr<'a>> {
        let tree = self.parse_list()?;
        match self.current {
            Token::End => Ok(tree),
            _ => Err(self.failure(|offset| ParseError::TrailingInput { offset })),
        }
    }

    /// Parses a comma-separated list.
    ///
    /// Every element is evaluated; the list yields its last element.
    ///
    /// Grammar: `list := expr {"," expr}`
    pub(super) fn parse_list(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_expr()?;

        while let Token::Separator = self.current {
            self.advance();
            let right = self.parse_expr()?;
            left = Expr::binary(Operator::Comma, left, right);
        }

        Ok(left)
    }

    /// Moves to the next token.
    pub(super) fn advance(&mut self) {
        self.current = self.tokenizer.next_token();
    }

    /// Character offset just past the current token.
    pub(super) fn offset(&self) -> usize {
        self.tokenizer.offset()
    }

    /// Builds the error for an unexpected current token.
    ///
    /// A lexical error already held by the current token takes precedence
    /// over `fallback`, which receives the current offset.
    pub(super) fn failure(&self, fallback: impl FnOnce(usize) -> ParseError) -> ParseError {
        match &self.current {
            Token::Error(error) => error.clone(),
            _ => fallback(self.offset()),
        }
    }
}
