use std::{any::Any, fmt, sync::Arc};

/// Largest number of arguments a call may take.
pub const MAX_ARITY: usize = 7;

/// Evaluated arguments handed to a callable.
///
/// Only the first `arity` entries are meaningful; the rest are `NaN`.
pub type Arguments = [f64; MAX_ARITY];

/// Opaque host data a closure receives on every call.
pub type Opaque = dyn Any + Send + Sync;

/// Shared handle to the opaque data bound to a closure.
pub type Context = Arc<Opaque>;

/// A plain host function taking between zero and seven arguments.
///
/// ## Example
/// ```
/// use exprtree::interpreter::evaluator::function::core::{Function, MAX_ARITY};
///
/// let hypot = Function::Arity2(f64::hypot);
/// let mut args = [f64::NAN; MAX_ARITY];
/// args[0] = 3.0;
/// args[1] = 4.0;
///
/// assert_eq!(hypot.arity(), 2);
/// assert_eq!(hypot.call(&args), 5.0);
/// ```
#[derive(Clone, Copy)]
pub enum Function {
    Arity0(fn() -> f64),
    Arity1(fn(f64) -> f64),
    Arity2(fn(f64, f64) -> f64),
    Arity3(fn(f64, f64, f64) -> f64),
    Arity4(fn(f64, f64, f64, f64) -> f64),
    Arity5(fn(f64, f64, f64, f64, f64) -> f64),
    Arity6(fn(f64, f64, f64, f64, f64, f64) -> f64),
    Arity7(fn(f64, f64, f64, f64, f64, f64, f64) -> f64),
}

impl Function {
    /// Returns the number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Arity0(_) => 0,
            Self::Arity1(_) => 1,
            Self::Arity2(_) => 2,
            Self::Arity3(_) => 3,
            Self::Arity4(_) => 4,
            Self::Arity5(_) => 5,
            Self::Arity6(_) => 6,
            Self::Arity7(_) => 7,
        }
    }

    /// Invokes the function with the leading `arity` arguments.
    #[must_use]
    pub fn call(&self, a: &Arguments) -> f64 {
        match self {
            Self::Arity0(f) => f(),
            Self::Arity1(f) => f(a[0]),
            Self::Arity2(f) => f(a[0], a[1]),
            Self::Arity3(f) => f(a[0], a[1], a[2]),
            Self::Arity4(f) => f(a[0], a[1], a[2], a[3]),
            Self::Arity5(f) => f(a[0], a[1], a[2], a[3], a[4]),
            Self::Arity6(f) => f(a[0], a[1], a[2], a[3], a[4], a[5]),
            Self::Arity7(f) => f(a[0], a[1], a[2], a[3], a[4], a[5], a[6]),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function/{}", self.arity())
    }
}

/// A host function that also receives an opaque [`Context`].
///
/// The context comes first; the remaining parameters are the evaluated
/// arguments, exactly as for [`Function`].
///
/// ## Example
/// ```
/// use std::sync::Arc;
///
/// use exprtree::interpreter::evaluator::function::core::{Closure, Context, MAX_ARITY, Opaque};
///
/// fn scale(context: &Opaque, x: f64) -> f64 {
///     context.downcast_ref::<f64>().map_or(f64::NAN, |factor| factor * x)
/// }
///
/// let context: Context = Arc::new(10.0_f64);
/// let mut args = [f64::NAN; MAX_ARITY];
/// args[0] = 4.2;
///
/// assert_eq!(Closure::Arity1(scale).call(&context, &args), 42.0);
/// ```
#[derive(Clone, Copy)]
pub enum Closure {
    Arity0(fn(&Opaque) -> f64),
    Arity1(fn(&Opaque, f64) -> f64),
    Arity2(fn(&Opaque, f64, f64) -> f64),
    Arity3(fn(&Opaque, f64, f64, f64) -> f64),
    Arity4(fn(&Opaque, f64, f64, f64, f64) -> f64),
    Arity5(fn(&Opaque, f64, f64, f64, f64, f64) -> f64),
    Arity6(fn(&Opaque, f64, f64, f64, f64, f64, f64) -> f64),
    Arity7(fn(&Opaque, f64, f64, f64, f64, f64, f64, f64) -> f64),
}

impl Closure {
    /// Returns the number of arguments the closure takes, context excluded.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Arity0(_) => 0,
            Self::Arity1(_) => 1,
            Self::Arity2(_) => 2,
            Self::Arity3(_) => 3,
            Self::Arity4(_) => 4,
            Self::Arity5(_) => 5,
            Self::Arity6(_) => 6,
            Self::Arity7(_) => 7,
        }
    }

    /// Invokes the closure with its context and the leading `arity`
    /// arguments.
    #[must_use]
    pub fn call(&self, context: &Context, a: &Arguments) -> f64 {
        let c: &Opaque = context.as_ref();
        match self {
            Self::Arity0(f) => f(c),
            Self::Arity1(f) => f(c, a[0]),
            Self::Arity2(f) => f(c, a[0], a[1]),
            Self::Arity3(f) => f(c, a[0], a[1], a[2]),
            Self::Arity4(f) => f(c, a[0], a[1], a[2], a[3]),
            Self::Arity5(f) => f(c, a[0], a[1], a[2], a[3], a[4]),
            Self::Arity6(f) => f(c, a[0], a[1], a[2], a[3], a[4], a[5]),
            Self::Arity7(f) => f(c, a[0], a[1], a[2], a[3], a[4], a[5], a[6]),
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure/{}", self.arity())
    }
}
