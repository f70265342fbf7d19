//! Decimal precision helpers shared by the closed forms and the Newton search.

/// Digits past `f64::MAX_10_EXP` cannot be told apart, and `10^precision`
/// would overflow.
fn exponent(precision: u16) -> i32 {
    i32::from(precision).min(f64::MAX_10_EXP)
}

/// The tolerance implied by a number of decimal digits, `10^-precision`.
pub(crate) fn tolerance(precision: u16) -> f64 {
    10f64.powi(-exponent(precision))
}

/// Whether two values agree to `precision` decimal digits.
pub(crate) fn close_to(a: f64, b: f64, precision: u16) -> bool {
    (a - b).abs() < tolerance(precision)
}

/// Round to `precision` decimal digits, half away from zero.
///
/// Values that have no fractional digits left at this precision are
/// returned unchanged. A result of zero is always positive zero.
pub(crate) fn round_to(x: f64, precision: u16) -> f64 {
    let scale = 10f64.powi(exponent(precision));
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return x;
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
