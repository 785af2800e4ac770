use crate::{
    ast::{Expr, Operator},
    config::PowAssociativity,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<'a> Parser<'_, '_, 'a> {
    /// Parses additive expressions (`+`, `-`).
    ///
    /// Left-associative: `a - b - c` is `(a - b) - c`.
    ///
    /// Grammar: `expr := term {("+" | "-") term}`
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_term()?;

        while let Token::Infix(op @ (Operator::Add | Operator::Sub)) = self.current {
            self.advance();
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (`*`, `/`, `%`).
    ///
    /// Grammar: `term := factor {("*" | "/" | "%") factor}`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_factor()?;

        while let Token::Infix(op @ (Operator::Mul | Operator::Div | Operator::Rem)) = self.current {
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parses exponentiation in the configured associativity.
    ///
    /// Grammar: `factor := power {"^" power}`
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr<'a>> {
        match self.pow_associativity {
            PowAssociativity::LeftToRight => self.parse_factor_left(),
            PowAssociativity::RightToLeft => self.parse_factor_right(),
        }
    }

    /// `a^b^c` is `(a^b)^c` and `-a^b` is `(-a)^b`.
    fn parse_factor_left(&mut self) -> ParseResult<Expr<'a>> {
        let mut left = self.parse_power()?;

        while let Token::Infix(Operator::Pow) = self.current {
            self.advance();
            let right = self.parse_power()?;
            left = Expr::binary(Operator::Pow, left, right);
        }

        Ok(left)
    }

    /// `a^b^c` is `a^(b^c)` and `-a^b` is `-(a^b)`.
    ///
    /// A sign prefix on the first operand is lifted above the whole chain;
    /// signs on later operands stay with their operand, so `2^-1` is
    /// `2^(-1)`. A negation inside a group stays put, so `(-2)^2` is `4`.
    fn parse_factor_right(&mut self) -> ParseResult<Expr<'a>> {
        let (base, negated) = self.parse_signed_base()?;

        let mut exponents = Vec::new();
        while let Token::Infix(Operator::Pow) = self.current {
            self.advance();
            exponents.push(self.parse_power()?);
        }

        let power = match exponents.pop() {
            Some(last) => {
                let exponent = exponents.into_iter()
                                        .rev()
                                        .fold(last, |right, left| Expr::binary(Operator::Pow, left, right));
                Expr::binary(Operator::Pow, base, exponent)
            },
            None => base,
        };

        Ok(if negated { Expr::negate(power) } else { power })
    }
}
