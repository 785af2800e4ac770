use std::fmt;

use crate::interpreter::{
    evaluator::function::{
        builtin::Builtin,
        core::{Closure, Context, Function},
    },
    value::slot::Slot,
};

/// A compiled expression tree.
///
/// Every node is a constant, a variable bound to caller-owned storage, or a
/// call that owns its argument subtrees. The lifetime `'a` ties the tree to
/// the [`Slot`]s its variables read, so storage always outlives the tree.
#[derive(Debug, Clone)]
pub enum Expr<'a> {
    /// An immutable floating-point value.
    Constant(f64),
    /// A read reference to caller-owned storage.
    Variable(&'a Slot),
    /// A call to an operator, builtin, host function or closure.
    Call(Call<'a>),
}

/// A call node.
///
/// Holds exactly as many argument subtrees as its callee's arity; the parser
/// is the only place that builds calls from source text.
#[derive(Debug, Clone)]
pub struct Call<'a> {
    pub(crate) callee: Callee,
    pub(crate) pure:   bool,
    pub(crate) args:   Vec<Expr<'a>>,
}

/// What a call node invokes.
#[derive(Debug, Clone)]
pub enum Callee {
    /// An infix or unary operator written in the source.
    Operator(Operator),
    /// A function from the builtin registry.
    Builtin(&'static Builtin),
    /// A host function supplied through a binding.
    Function(Function),
    /// A host closure supplied through a binding, with its context.
    Closure {
        /// The host callable.
        closure: Closure,
        /// Opaque data passed on every call.
        context: Context,
    },
}

/// Operators produced by the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Floating-point remainder (`%`)
    Rem,
    /// Unary negation (leading `-`)
    Negate,
    /// Sequencing (`,`): evaluates both sides, keeps the right one.
    Comma,
}

impl<'a> Expr<'a> {
    /// Creates a call node.
    ///
    /// Returns `None` when `args` does not match the callee's arity.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{Callee, Expr, Operator};
    ///
    /// let sum = Expr::call(Callee::Operator(Operator::Add),
    ///                      true,
    ///                      vec![Expr::Constant(1.0), Expr::Constant(2.0)]).unwrap();
    /// assert_eq!(sum.eval(), 3.0);
    ///
    /// assert!(Expr::call(Callee::Operator(Operator::Add), true, vec![]).is_none());
    /// ```
    #[must_use]
    pub fn call(callee: Callee, pure: bool, args: Vec<Self>) -> Option<Self> {
        (callee.arity() == args.len()).then_some(Self::Call(Call { callee, pure, args }))
    }

    /// Creates a pure operator node over two operands.
    pub(crate) fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Call(Call { callee: Callee::Operator(op),
                          pure:   true,
                          args:   vec![left, right], })
    }

    /// Wraps `operand` in a pure negation node.
    pub(crate) fn negate(operand: Self) -> Self {
        Self::Call(Call { callee: Callee::Operator(Operator::Negate),
                          pure:   true,
                          args:   vec![operand], })
    }

    /// Returns `true` for constant nodes.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Counts the nodes in the tree, `self` included.
    ///
    /// ## Example
    /// ```
    /// use exprtree::{Config, compile_with};
    ///
    /// let config = Config { optimize: false,
    ///                       ..Config::default() };
    ///
    /// assert_eq!(compile_with("1+2*3", &[], &config).unwrap().node_count(), 5);
    /// assert_eq!(compile_with("1+2*3", &[], &Config::default()).unwrap().node_count(), 1);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable(_) => 1,
            Self::Call(call) => 1 + call.args.iter().map(Self::node_count).sum::<usize>(),
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders the tree one
    /// node per line, indented by depth.
    ///
    /// The layout is a diagnostic aid, not a stable format.
    ///
    /// ## Example
    /// ```
    /// use exprtree::{Binding, Config, Slot, compile_with};
    ///
    /// let x = Slot::new(1.0);
    /// let tree = compile_with("x+2", &[Binding::variable("x", &x)], &Config::default()).unwrap();
    ///
    /// let dump = tree.dump().to_string();
    /// assert!(dump.starts_with("f2 +\n bound 0x"));
    /// assert!(dump.ends_with(" 2.000000\n"));
    /// ```
    #[must_use]
    pub const fn dump(&self) -> Dump<'_, 'a> {
        Dump { expr: self }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:depth$}", "")?;
        match self {
            Self::Constant(value) => writeln!(f, "{value:.6}"),
            Self::Variable(slot) => writeln!(f, "bound {:p}", *slot),
            Self::Call(call) => {
                writeln!(f, "f{} {}", call.args.len(), call.callee)?;
                for arg in &call.args {
                    arg.write_tree(f, depth + 1)?;
                }
                Ok(())
            },
        }
    }
}

impl<'a> Call<'a> {
    /// The callable this node invokes.
    #[must_use]
    pub const fn callee(&self) -> &Callee {
        &self.callee
    }

    /// Whether the node may be folded once its arguments are constant.
    #[must_use]
    pub const fn is_pure(&self) -> bool {
        self.pure
    }

    /// The argument subtrees, in evaluation order.
    #[must_use]
    pub fn args(&self) -> &[Expr<'a>] {
        &self.args
    }
}

impl Callee {
    /// Returns the number of arguments the callee takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Operator(op) => op.arity(),
            Self::Builtin(builtin) => builtin.function.arity(),
            Self::Function(function) => function.arity(),
            Self::Closure { closure, .. } => closure.arity(),
        }
    }
}

/// Renders an [`Expr`] as an indented tree. Created by [`Expr::dump`].
pub struct Dump<'e, 'a> {
    expr: &'e Expr<'a>,
}

impl fmt::Display for Dump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr.write_tree(f, 0)
    }
}

impl fmt::Display for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{op}"),
            Self::Builtin(builtin) => write!(f, "{}", builtin.name),
            Self::Function(_) => write!(f, "function"),
            Self::Closure { .. } => write!(f, "closure"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Operator::{Add, Comma, Div, Mul, Negate, Pow, Rem, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Rem => "%",
            Negate => "neg",
            Comma => ",",
        };
        write!(f, "{operator}")
    }
}
