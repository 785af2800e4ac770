use crate::interpreter::evaluator::function::{
    choose::{fac, ncr, npr},
    core::Function,
};

/// A named function from the builtin registry.
#[derive(Debug)]
pub struct Builtin {
    /// The name the tokenizer matches.
    pub name:     &'static str,
    /// The function called at evaluation time.
    pub function: Function,
    /// Whether calls with constant arguments may be folded.
    pub pure:     bool,
}

/// Defines the builtin registry.
///
/// Each entry provides a name and a [`Function`]; every builtin is pure.
/// The macro produces `BUILTINS` and a compile-time assertion that the
/// table is sorted by name, which [`find_builtin`] relies on.
macro_rules! builtin_functions {
    ($($name:literal => $function:expr),* $(,)?) => {
        /// The builtin registry, sorted by name.
        pub const BUILTINS: &[Builtin] = &[
            $(
                Builtin { name: $name, function: $function, pure: true },
            )*
        ];

        const _: () = assert!(is_sorted(BUILTINS), "builtin table must stay sorted by name");
    };
}

builtin_functions! {
    "abs"   => Function::Arity1(f64::abs),
    "acos"  => Function::Arity1(f64::acos),
    "asin"  => Function::Arity1(f64::asin),
    "atan"  => Function::Arity1(f64::atan),
    "atan2" => Function::Arity2(f64::atan2),
    "ceil"  => Function::Arity1(f64::ceil),
    "cos"   => Function::Arity1(f64::cos),
    "cosh"  => Function::Arity1(f64::cosh),
    "e"     => Function::Arity0(e),
    "exp"   => Function::Arity1(f64::exp),
    "fac"   => Function::Arity1(fac),
    "floor" => Function::Arity1(f64::floor),
    "ln"    => Function::Arity1(f64::ln),
    "log"   => Function::Arity1(f64::log10),
    "log10" => Function::Arity1(f64::log10),
    "ncr"   => Function::Arity2(ncr),
    "npr"   => Function::Arity2(npr),
    "pi"    => Function::Arity0(pi),
    "pow"   => Function::Arity2(f64::powf),
    "sin"   => Function::Arity1(f64::sin),
    "sinh"  => Function::Arity1(f64::sinh),
    "sqrt"  => Function::Arity1(f64::sqrt),
    "tan"   => Function::Arity1(f64::tan),
    "tanh"  => Function::Arity1(f64::tanh),
}

/// Looks up a builtin by exact name.
///
/// Uses binary search, so `BUILTINS` must stay sorted.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::function::builtin::find_builtin;
///
/// assert_eq!(find_builtin("atan2").map(|b| b.function.arity()), Some(2));
/// assert!(find_builtin("atan3").is_none());
/// assert!(find_builtin("co").is_none());
/// ```
#[must_use]
pub fn find_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.binary_search_by(|builtin| builtin.name.cmp(name))
            .ok()
            .and_then(|index| BUILTINS.get(index))
}

/// Euler's number, `e`.
fn e() -> f64 {
    std::f64::consts::E
}

/// The circle constant, `pi`.
fn pi() -> f64 {
    std::f64::consts::PI
}

/// Checks that every name in `table` is strictly less than the next one,
/// comparing bytes the way `str::cmp` does.
const fn is_sorted(table: &[Builtin]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if !precedes(table[i - 1].name.as_bytes(), table[i].name.as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

const fn precedes(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}
