use logos::Logos;

use crate::{
    ast::{Callee, Operator},
    config::Config,
    error::ParseError,
    interpreter::{
        evaluator::function::builtin::find_builtin,
        value::{
            binding::{Binding, find_binding},
            slot::Slot,
        },
    },
    util::num::char_offset,
};

/// Represents a raw lexical unit in the source input.
///
/// Identifiers are not resolved here; [`Tokenizer`] turns them into variable
/// or call tokens using the bindings and the builtin registry.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Lexeme {
    /// Numeric literal, such as `3`, `3.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    #[regex(r"\.[0-9]+", lex_number)]
    Number(f64),
    /// Variable or function name, such as `x` or `atan2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// A resolved token, as seen by the parser.
///
/// The parser holds exactly one of these at a time.
#[derive(Debug, Clone)]
pub enum Token<'a> {
    /// End of input.
    End,
    /// `,`
    Separator,
    /// `(`
    Open,
    /// `)`
    Close,
    /// A numeric literal.
    Number(f64),
    /// A name bound to a variable slot.
    Variable(&'a Slot),
    /// One of `+ - * / ^ %`.
    Infix(Operator),
    /// A name bound to a builtin, host function or closure.
    Call {
        /// The resolved callable.
        callee: Callee,
        /// Whether calls may be constant-folded.
        pure:   bool,
    },
    /// Input the tokenizer could not make sense of.
    Error(ParseError),
}

/// Produces resolved tokens from source text, one at a time.
///
/// Wraps a logos lexer, tracks the position just past the last token for
/// error reporting, and resolves identifiers: bindings first, so they shadow
/// builtins, then the builtin registry.
///
/// # Example
/// ```
/// use exprtree::{
///     Config,
///     interpreter::lexer::{Token, Tokenizer},
/// };
///
/// let mut tokenizer = Tokenizer::new("sin(2)", &[], &Config::default());
///
/// assert!(matches!(tokenizer.next_token(), Token::Call { pure: true, .. }));
/// assert!(matches!(tokenizer.next_token(), Token::Open));
/// assert!(matches!(tokenizer.next_token(), Token::Number(n) if n == 2.0));
/// assert!(matches!(tokenizer.next_token(), Token::Close));
/// assert!(matches!(tokenizer.next_token(), Token::End));
/// assert_eq!(tokenizer.offset(), 6);
/// ```
pub struct Tokenizer<'s, 'b, 'a> {
    source:      &'s str,
    lexer:       logos::Lexer<'s, Lexeme>,
    bindings:    &'b [Binding<'a>],
    natural_log: bool,
    cursor:      usize,
}

impl<'s, 'b, 'a> Tokenizer<'s, 'b, 'a> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str, bindings: &'b [Binding<'a>], config: &Config) -> Self {
        Self { source,
               lexer: Lexeme::lexer(source),
               bindings,
               natural_log: config.natural_log,
               cursor: 0 }
    }

    /// Advances past the next token and returns it.
    ///
    /// Whitespace is skipped. Once the input is exhausted, every further call
    /// returns [`Token::End`].
    pub fn next_token(&mut self) -> Token<'a> {
        let Some(lexeme) = self.lexer.next() else {
            self.cursor = self.source.len();
            return Token::End;
        };

        let span = self.lexer.span();
        self.cursor = span.end;

        match lexeme {
            Ok(Lexeme::Number(value)) => Token::Number(value),
            Ok(Lexeme::Identifier) => self.resolve(self.lexer.slice(), span.start),
            Ok(Lexeme::Plus) => Token::Infix(Operator::Add),
            Ok(Lexeme::Minus) => Token::Infix(Operator::Sub),
            Ok(Lexeme::Star) => Token::Infix(Operator::Mul),
            Ok(Lexeme::Slash) => Token::Infix(Operator::Div),
            Ok(Lexeme::Caret) => Token::Infix(Operator::Pow),
            Ok(Lexeme::Percent) => Token::Infix(Operator::Rem),
            Ok(Lexeme::LParen) => Token::Open,
            Ok(Lexeme::RParen) => Token::Close,
            Ok(Lexeme::Comma) => Token::Separator,
            Err(()) => {
                Token::Error(ParseError::UnexpectedCharacter { character: self.lexer
                                                                              .slice()
                                                                              .chars()
                                                                              .next()
                                                                              .unwrap_or_default(),
                                                               offset:    self.offset(), })
            },
        }
    }

    /// Returns the 1-based character offset just past the current token.
    ///
    /// Never returns `0`, even before the first token.
    #[must_use]
    pub fn offset(&self) -> usize {
        char_offset(self.source, self.cursor)
    }

    /// Resolves an identifier that starts at byte `start`.
    fn resolve(&self, name: &str, start: usize) -> Token<'a> {
        if let Some(binding) = find_binding(self.bindings, name) {
            return binding.to_token();
        }

        let builtin_name = if self.natural_log && name == "log" { "ln" } else { name };

        match find_builtin(builtin_name) {
            Some(builtin) => Token::Call { callee: Callee::Builtin(builtin),
                                           pure:   builtin.pure, },
            None => {
                let preceding = self.source
                                    .get(..start)
                                    .map_or(start, |prefix| prefix.chars().count());
                Token::Error(ParseError::UnknownIdentifier { name:   name.to_owned(),
                                                             offset: preceding + 1, })
            },
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The regex only matches the mantissa. An exponent is appended here when
/// `e` or `E`, an optional sign and at least one digit follow, so `2e` stays
/// the number `2` followed by the identifier `e`.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value.
/// - `None`: If the slice is not a valid float.
fn lex_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    let exponent = exponent_len(lex.remainder().as_bytes());
    lex.bump(exponent);
    lex.slice().parse().ok()
}

/// Returns the length of a complete exponent (`e`, optional sign, digits) at
/// the start of `rest`, or `0` if there is none.
fn exponent_len(rest: &[u8]) -> usize {
    let Some((b'e' | b'E', tail)) = rest.split_first() else {
        return 0;
    };
    let sign = usize::from(matches!(tail.first(), Some(b'+' | b'-')));
    let digits = tail.iter()
                     .skip(sign)
                     .take_while(|byte| byte.is_ascii_digit())
                     .count();
    if digits == 0 { 0 } else { 1 + sign + digits }
}
