use crate::{
    ast::{Call, Callee, Expr},
    interpreter::evaluator::function::core::{Arguments, MAX_ARITY},
};

impl Expr<'_> {
    /// Evaluates the tree and returns its value.
    ///
    /// This is the main entry point for evaluation. Constants return their
    /// value, variables read their slot at the moment of the call, and calls
    /// evaluate their arguments left to right before invoking the callee.
    /// Evaluation never fails: domain errors surface as `NaN` or an infinity.
    ///
    /// # Example
    /// ```
    /// use exprtree::{Binding, Slot, compile};
    ///
    /// let x = Slot::new(2.0);
    /// let tree = compile("x^2 + 1", &[Binding::variable("x", &x)]).unwrap();
    /// assert_eq!(tree.eval(), 5.0);
    ///
    /// x.set(3.0);
    /// assert_eq!(tree.eval(), 10.0);
    /// ```
    #[must_use]
    pub fn eval(&self) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Variable(slot) => slot.get(),
            Self::Call(call) => call.eval(),
        }
    }
}

impl Call<'_> {
    /// Evaluates every argument in order, then invokes the callee.
    #[must_use]
    pub fn eval(&self) -> f64 {
        let mut arguments = [f64::NAN; MAX_ARITY];
        for (value, arg) in arguments.iter_mut().zip(&self.args) {
            *value = arg.eval();
        }
        self.callee.invoke(&arguments)
    }
}

impl Callee {
    /// Invokes the callee with evaluated arguments.
    ///
    /// Closures additionally receive their bound context.
    #[must_use]
    pub fn invoke(&self, arguments: &Arguments) -> f64 {
        match self {
            Self::Operator(op) => op.apply(arguments),
            Self::Builtin(builtin) => builtin.function.call(arguments),
            Self::Function(function) => function.call(arguments),
            Self::Closure { closure, context } => closure.call(context, arguments),
        }
    }
}
