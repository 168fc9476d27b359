/// Tolerance used for zero guards, equality and truthiness.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` when `value` is close enough to zero to be treated as zero.
///
/// ## Example
/// ```
/// use exprcalc::util::num::is_zero;
///
/// assert!(is_zero(0.0));
/// assert!(is_zero(-1e-12));
/// assert!(!is_zero(1e-6));
/// ```
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns the truthiness of a number: any value with magnitude above
/// [`EPSILON`] is true.
///
/// ## Example
/// ```
/// use exprcalc::util::num::is_truthy;
///
/// assert!(is_truthy(-3.0));
/// assert!(!is_truthy(0.0));
/// assert!(!is_truthy(1e-10));
/// ```
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value.abs() > EPSILON
}

/// Compares two numbers for equality within [`EPSILON`].
///
/// ## Example
/// ```
/// use exprcalc::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

/// Converts a boolean into the numeric truth values `1.0` and `0.0`.
#[must_use]
pub const fn from_bool(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
