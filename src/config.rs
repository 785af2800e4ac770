/// Associativity of the `^` operator.
///
/// The choice also decides how a leading unary minus interacts with a power
/// chain: right-to-left parses `-a^b` as `-(a^b)`, left-to-right as `(-a)^b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowAssociativity {
    /// `a^b^c` is `(a^b)^c`.
    LeftToRight,
    /// `a^b^c` is `a^(b^c)`.
    #[default]
    RightToLeft,
}

/// Compile-time options for an expression.
///
/// `Config` is created once and passed to [`crate::compile_with`]; the
/// defaults are used by [`crate::compile`] and [`crate::interpret`].
///
/// ## Example
/// ```
/// use exprtree::{Config, PowAssociativity, compile_with};
///
/// let config = Config { pow_associativity: PowAssociativity::LeftToRight,
///                       ..Config::default() };
///
/// let tree = compile_with("2^3^2", &[], &config).unwrap();
/// assert_eq!(tree.eval(), 64.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How chains of `^` group.
    pub pow_associativity: PowAssociativity,
    /// Resolve `log` to the natural logarithm instead of base 10.
    pub natural_log:       bool,
    /// Fold constant subtrees after parsing.
    pub optimize:          bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { pow_associativity: PowAssociativity::default(),
               natural_log:       false,
               optimize:          true, }
    }
}
