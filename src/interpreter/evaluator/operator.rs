use crate::{ast::Operator, interpreter::evaluator::function::core::Arguments};

impl Operator {
    /// Returns the number of operands the operator takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Negate => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow | Self::Rem | Self::Comma => 2,
        }
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// All arithmetic follows IEEE 754: division by zero gives an infinity or
    /// `NaN`, and `%` has the sign of the dividend like C's `fmod`.
    ///
    /// # Parameters
    /// - `a`: Evaluated operands; only the first `arity` entries are read.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::Operator, interpreter::evaluator::function::core::MAX_ARITY};
    ///
    /// let mut args = [f64::NAN; MAX_ARITY];
    /// args[0] = -7.0;
    /// args[1] = 3.0;
    ///
    /// assert_eq!(Operator::Rem.apply(&args), -1.0);
    /// assert_eq!(Operator::Comma.apply(&args), 3.0);
    /// assert_eq!(Operator::Negate.apply(&args), 7.0);
    /// ```
    #[must_use]
    pub fn apply(self, a: &Arguments) -> f64 {
        match self {
            Self::Add => a[0] + a[1],
            Self::Sub => a[0] - a[1],
            Self::Mul => a[0] * a[1],
            Self::Div => a[0] / a[1],
            Self::Pow => a[0].powf(a[1]),
            Self::Rem => a[0] % a[1],
            Self::Negate => -a[0],
            Self::Comma => a[1],
        }
    }
}
