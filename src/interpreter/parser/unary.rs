use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<'a> Parser<'_, '_, 'a> {
    /// Parses a chain of sign prefixes followed by a base.
    ///
    /// Signs collapse: an odd number of `-` wraps the base in one negation,
    /// anything else yields the base unchanged. So `--x` is `x` and `-+-x`
    /// is `x`.
    ///
    /// Grammar: `power := {("-" | "+")} base`
    pub(crate) fn parse_power(&mut self) -> ParseResult<Expr<'a>> {
        let (base, negative) = self.parse_signed_base()?;
        Ok(if negative { Expr::negate(base) } else { base })
    }

    /// Parses a `power` without applying its sign.
    ///
    /// Returns the base together with `true` when the collapsed sign prefix
    /// is negative.
    pub(crate) fn parse_signed_base(&mut self) -> ParseResult<(Expr<'a>, bool)> {
        let mut negative = false;

        while let Token::Infix(op @ (Operator::Add | Operator::Sub)) = self.current {
            negative ^= op == Operator::Sub;
            self.advance();
        }

        Ok((self.parse_base()?, negative))
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     base := number
    ///           | variable
    ///           | call
    ///           | "(" list ")"
    /// ```
    ///
    /// # Errors
    /// - `ExpectedClosingParen` if a group is not closed.
    /// - `UnexpectedEndOfInput` if the input ends where an operand is needed.
    /// - `UnexpectedToken` for any other token that cannot start an operand.
    /// - The lexical error carried by an error token.
    pub(crate) fn parse_base(&mut self) -> ParseResult<Expr<'a>> {
        match &self.current {
            Token::Number(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::Constant(value))
            },
            Token::Variable(slot) => {
                let slot = *slot;
                self.advance();
                Ok(Expr::Variable(slot))
            },
            Token::Call { callee, pure } => {
                let (callee, pure) = (callee.clone(), *pure);
                self.parse_call(callee, pure)
            },
            Token::Open => {
                self.advance();
                let inner = self.parse_list()?;
                match self.current {
                    Token::Close => {
                        self.advance();
                        Ok(inner)
                    },
                    _ => Err(self.failure(|offset| ParseError::ExpectedClosingParen { offset })),
                }
            },
            Token::End => Err(ParseError::UnexpectedEndOfInput { offset: self.offset() }),
            _ => Err(self.failure(|offset| ParseError::UnexpectedToken { offset })),
        }
    }
}
