use crate::util::num::{f64_to_u32_truncated, u64_to_f64_rounded};

/// Calculates the factorial of `a`.
///
/// The argument is truncated to an unsigned integer first. Negative input
/// yields `NaN`; input beyond `u32::MAX`, or a product that overflows `u64`,
/// yields positive infinity.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::function::choose::fac;
///
/// assert_eq!(fac(5.0), 120.0);
/// assert_eq!(fac(5.7), 120.0);
/// assert_eq!(fac(0.0), 1.0);
/// assert!(fac(-1.0).is_nan());
/// assert_eq!(fac(30.0), f64::INFINITY);
/// ```
#[must_use]
pub fn fac(a: f64) -> f64 {
    let n = match f64_to_u32_truncated(a) {
        Ok(n) => u64::from(n),
        Err(saturated) => return saturated,
    };

    let mut result = 1u64;
    for i in 1..=n {
        match result.checked_mul(i) {
            Some(product) => result = product,
            None => return f64::INFINITY,
        }
    }

    u64_to_f64_rounded(result)
}

/// Calculates the binomial coefficient of two values, *n* and *r*.
///
/// Both arguments are truncated to unsigned integers. Negative arguments or
/// `n < r` yield `NaN`; arguments beyond `u32::MAX` or an intermediate product
/// that overflows `u64` yield positive infinity.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::function::choose::ncr;
///
/// assert_eq!(ncr(5.0, 2.0), 10.0);
/// assert_eq!(ncr(6.0, 0.0), 1.0);
/// assert!(ncr(2.0, 5.0).is_nan());
/// ```
#[must_use]
pub fn ncr(n: f64, r: f64) -> f64 {
    if n < 0.0 || r < 0.0 || n < r {
        return f64::NAN;
    }

    let (n, r) = match (f64_to_u32_truncated(n), f64_to_u32_truncated(r)) {
        (Ok(n), Ok(r)) => (u64::from(n), u64::from(r)),
        (Err(saturated), _) | (_, Err(saturated)) => return saturated,
    };

    let r = std::cmp::min(r, n - r);

    let mut result = 1u64;
    for i in 1..=r {
        match result.checked_mul(n - r + i) {
            Some(product) => result = product / i,
            None => return f64::INFINITY,
        }
    }

    u64_to_f64_rounded(result)
}

/// Calculates the number of ordered selections of *r* items out of *n*.
///
/// Defined as `ncr(n, r) * fac(r)`, inheriting both functions' saturation.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::function::choose::npr;
///
/// assert_eq!(npr(5.0, 2.0), 20.0);
/// ```
#[must_use]
pub fn npr(n: f64, r: f64) -> f64 {
    ncr(n, r) * fac(r)
}
