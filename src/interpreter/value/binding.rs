use crate::{
    ast::Callee,
    interpreter::{
        evaluator::function::core::{Closure, Context, Function},
        lexer::Token,
        value::slot::Slot,
    },
};

/// Associates a name with a variable, host function or host closure.
///
/// Bindings are passed to [`crate::compile`] as a slice. They shadow builtins
/// of the same name; among themselves, the first match wins.
///
/// Functions and closures are treated as impure unless marked with
/// [`Binding::pure`], which allows the optimizer to fold calls whose
/// arguments are constant.
///
/// ## Example
/// ```
/// use std::sync::Arc;
///
/// use exprtree::{
///     Binding, Slot, compile,
///     interpreter::evaluator::function::core::{Closure, Function, Opaque},
/// };
///
/// fn offset(context: &Opaque, x: f64) -> f64 {
///     context.downcast_ref::<f64>().map_or(f64::NAN, |offset| x + offset)
/// }
///
/// let x = Slot::new(3.0);
/// let bindings = [Binding::variable("x", &x),
///                 Binding::function("hypot", Function::Arity2(f64::hypot)).pure(),
///                 Binding::closure("shift", Closure::Arity1(offset), Arc::new(0.5))];
///
/// let tree = compile("shift hypot(x, 4)", &bindings).unwrap();
/// assert_eq!(tree.eval(), 5.5);
/// ```
#[derive(Debug, Clone)]
pub struct Binding<'a> {
    name: &'a str,
    kind: BindingKind<'a>,
}

/// What a [`Binding`] refers to.
#[derive(Debug, Clone)]
pub enum BindingKind<'a> {
    /// A variable read from caller-owned storage.
    Variable(&'a Slot),
    /// A plain host function.
    Function {
        /// The host callable.
        function: Function,
        /// Whether calls may be constant-folded.
        pure:     bool,
    },
    /// A host function that receives an opaque context.
    Closure {
        /// The host callable.
        closure: Closure,
        /// Opaque data passed on every call.
        context: Context,
        /// Whether calls may be constant-folded.
        pure:    bool,
    },
}

impl<'a> Binding<'a> {
    /// Binds `name` to a variable slot.
    #[must_use]
    pub const fn variable(name: &'a str, slot: &'a Slot) -> Self {
        Self { name,
               kind: BindingKind::Variable(slot) }
    }

    /// Binds `name` to an impure host function.
    #[must_use]
    pub const fn function(name: &'a str, function: Function) -> Self {
        Self { name,
               kind: BindingKind::Function { function,
                                             pure: false } }
    }

    /// Binds `name` to an impure host closure with its context.
    #[must_use]
    pub fn closure(name: &'a str, closure: Closure, context: Context) -> Self {
        Self { name,
               kind: BindingKind::Closure { closure,
                                            context,
                                            pure: false } }
    }

    /// Marks a function or closure binding as pure. Variables are unchanged.
    #[must_use]
    pub fn pure(mut self) -> Self {
        match &mut self.kind {
            BindingKind::Variable(_) => {},
            BindingKind::Function { pure, .. } | BindingKind::Closure { pure, .. } => *pure = true,
        }
        self
    }

    /// The bound name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// What the name refers to.
    #[must_use]
    pub const fn kind(&self) -> &BindingKind<'a> {
        &self.kind
    }

    /// Converts the binding into the token the tokenizer emits for it.
    pub(crate) fn to_token(&self) -> Token<'a> {
        match &self.kind {
            BindingKind::Variable(slot) => Token::Variable(*slot),
            BindingKind::Function { function, pure } => Token::Call { callee: Callee::Function(*function),
                                                                      pure:   *pure, },
            BindingKind::Closure { closure,
                                   context,
                                   pure, } => Token::Call { callee: Callee::Closure { closure: *closure,
                                                                                      context:
                                                                                          context.clone(), },
                                                            pure:   *pure, },
        }
    }
}

/// Finds the first binding named exactly `name`.
///
/// Bindings are usually few, so this is a linear scan.
///
/// # Example
/// ```
/// use exprtree::{Binding, Slot, interpreter::value::binding::find_binding};
///
/// let (a, b) = (Slot::new(1.0), Slot::new(2.0));
/// let bindings = [Binding::variable("x", &a), Binding::variable("x", &b)];
///
/// let found = find_binding(&bindings, "x").unwrap();
/// assert!(matches!(found.kind(), exprtree::BindingKind::Variable(slot) if slot.get() == 1.0));
/// assert!(find_binding(&bindings, "y").is_none());
/// ```
#[must_use]
pub fn find_binding<'b, 'a>(bindings: &'b [Binding<'a>], name: &str) -> Option<&'b Binding<'a>> {
    bindings.iter().find(|binding| binding.name == name)
}
