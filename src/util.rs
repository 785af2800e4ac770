/// Numeric conversion helpers.
///
/// This module provides the conversions the combinatorial builtins need to
/// move between `f64` arguments and the unsigned integers they count with,
/// saturating to IEEE sentinels instead of wrapping or panicking.
pub mod num;
