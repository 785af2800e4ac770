use tracing::trace;

use crate::ast::Expr;

impl Expr<'_> {
    /// Folds constant subtrees in place.
    ///
    /// Children are optimized first. A call is then replaced by a constant
    /// holding its value when it is pure and every argument is a constant;
    /// otherwise it is left as it is. Constants and variables never change.
    ///
    /// A tree without variables or impure calls collapses to one constant.
    ///
    /// # Example
    /// ```
    /// use exprtree::{Binding, Config, Slot, compile_with};
    ///
    /// let x = Slot::new(4.0);
    /// let config = Config { optimize: false,
    ///                       ..Config::default() };
    /// let mut tree = compile_with("x * (2 + 3)", &[Binding::variable("x", &x)], &config).unwrap();
    /// assert_eq!(tree.node_count(), 5);
    ///
    /// tree.optimize();
    /// assert_eq!(tree.node_count(), 3);
    /// assert_eq!(tree.eval(), 20.0);
    /// ```
    pub fn optimize(&mut self) {
        let Self::Call(call) = self else {
            return;
        };

        call.args.iter_mut().for_each(Self::optimize);

        if call.pure && call.args.iter().all(Self::is_constant) {
            let value = call.eval();
            trace!(callee = %call.callee, value, "folded constant call");
            *self = Self::Constant(value);
        }
    }
}
