/// Truncates a floating-point argument to a `u32` counter.
///
/// The fractional part is discarded, the way a C cast would. Values that
/// cannot be counted are reported through `Err`, which carries the value the
/// calling builtin should return unchanged.
///
/// ## Parameters
/// - `value`: The floating-point argument.
///
/// ## Returns
/// - `Ok(u32)`: The truncated value.
/// - `Err(f64::NAN)`: If the value is negative or not a number.
/// - `Err(f64::INFINITY)`: If the value exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use exprtree::util::num::f64_to_u32_truncated;
///
/// assert_eq!(f64_to_u32_truncated(5.9), Ok(5));
/// assert!(f64_to_u32_truncated(-1.0).unwrap_err().is_nan());
/// assert_eq!(f64_to_u32_truncated(1e12), Err(f64::INFINITY));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u32_truncated(value: f64) -> Result<u32, f64> {
    if value.is_nan() || value < 0.0 {
        return Err(f64::NAN);
    }
    if value > f64::from(u32::MAX) {
        return Err(f64::INFINITY);
    }
    Ok(value as u32)
}

/// Converts a `u64` count to `f64`.
///
/// Counts above `2^53` round to the nearest representable value.
///
/// ## Example
/// ```
/// use exprtree::util::num::u64_to_f64_rounded;
///
/// assert_eq!(u64_to_f64_rounded(120), 120.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64_rounded(value: u64) -> f64 {
    value as f64
}

/// Returns the 1-based character offset that corresponds to a byte position.
///
/// Positions are counted in characters so that offsets stay meaningful for
/// non-ASCII input. Position `0` is remapped to `1`; a position that is not a
/// character boundary falls back to the byte count.
///
/// ## Example
/// ```
/// use exprtree::util::num::char_offset;
///
/// assert_eq!(char_offset("1+2", 2), 2);
/// assert_eq!(char_offset("1+2", 0), 1);
/// assert_eq!(char_offset("π+x", 3), 2);
/// ```
#[must_use]
pub fn char_offset(source: &str, byte: usize) -> usize {
    source.get(..byte)
          .map_or(byte, |prefix| prefix.chars().count())
          .max(1)
}
