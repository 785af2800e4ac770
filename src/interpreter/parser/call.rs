use crate::{
    ast::{Call, Callee, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<'a> Parser<'_, '_, 'a> {
    /// Parses a call whose name is the current token.
    ///
    /// The argument syntax depends on the callee's arity:
    /// ```text
    ///     call := name0 ["(" ")"]
    ///           | name1 power
    ///           | nameN "(" expr {"," expr} ")"
    /// ```
    /// A one-argument call binds tighter than any infix operator, so
    /// `sin x^2` is `(sin x)^2`.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the argument list does not match the
    ///   arity.
    /// - `ExpectedOpenParen` if a call with two or more parameters is not
    ///   followed by `(`.
    /// - `ExpectedClosingParen` if the argument list is not closed.
    pub(crate) fn parse_call(&mut self, callee: Callee, pure: bool) -> ParseResult<Expr<'a>> {
        self.advance();

        let args = match callee.arity() {
            0 => {
                self.parse_empty_arguments(&callee)?;
                Vec::new()
            },
            1 => vec![self.parse_power()?],
            _ => self.parse_arguments(&callee)?,
        };

        Ok(Expr::Call(Call { callee, pure, args }))
    }

    /// Accepts an optional `()` after a call without parameters.
    fn parse_empty_arguments(&mut self, callee: &Callee) -> ParseResult<()> {
        if !matches!(self.current, Token::Open) {
            return Ok(());
        }

        self.advance();
        match self.current {
            Token::Close => {
                self.advance();
                Ok(())
            },
            Token::End => Err(ParseError::UnexpectedEndOfInput { offset: self.offset() }),
            _ => Err(self.failure(|offset| ParseError::ArgumentCountMismatch { name: callee.to_string(),
                                                                               expected: 0,
                                                                               offset })),
        }
    }

    /// Parses a parenthesized list of exactly `callee.arity()` arguments.
    fn parse_arguments(&mut self, callee: &Callee) -> ParseResult<Vec<Expr<'a>>> {
        let arity = callee.arity();

        if !matches!(self.current, Token::Open) {
            return Err(self.failure(|offset| ParseError::ExpectedOpenParen { name: callee.to_string(),
                                                                             offset }));
        }

        let mut args = Vec::with_capacity(arity);
        loop {
            self.advance();
            args.push(self.parse_expr()?);
            if args.len() == arity || !matches!(self.current, Token::Separator) {
                break;
            }
        }

        match self.current {
            Token::Close if args.len() == arity => {
                self.advance();
                Ok(args)
            },
            Token::Close | Token::Separator => {
                Err(ParseError::ArgumentCountMismatch { name:     callee.to_string(),
                                                        expected: arity,
                                                        offset:   self.offset(), })
            },
            _ => Err(self.failure(|offset| ParseError::ExpectedClosingParen { offset })),
        }
    }
}
