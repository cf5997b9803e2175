/// Largest number of fractional digits accepted for fixed-precision output.
pub const MAX_PRECISION: usize = 17;

/// Formats an evaluation result for display.
///
/// Without a precision the shortest representation that round-trips is used,
/// so integral results print without a fractional part. With a precision the
/// value is printed with exactly that many fractional digits, capped at
/// [`MAX_PRECISION`]. Negative zero prints as zero.
///
/// ## Parameters
/// - `value`: The value to format.
/// - `precision`: Optional number of fractional digits.
///
/// ## Returns
/// The formatted value.
///
/// ## Example
/// ```
/// use bodmas::util::num::format_value;
///
/// assert_eq!(format_value(14.0, None), "14");
/// assert_eq!(format_value(2.5, None), "2.5");
/// assert_eq!(format_value(1.0 / 3.0, Some(6)), "0.333333");
/// assert_eq!(format_value(-0.0, None), "0");
/// ```
#[must_use]
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    let value = normalize_zero(value);
    match precision {
        Some(digits) => format!("{value:.digits$}", digits = digits.min(MAX_PRECISION)),
        None => format!("{value}"),
    }
}

/// Replaces `-0.0` with `0.0` and leaves every other value untouched.
///
/// ## Example
/// ```
/// use bodmas::util::num::normalize_zero;
///
/// assert!(normalize_zero(-0.0).is_sign_positive());
/// assert_eq!(normalize_zero(-1.5), -1.5);
/// ```
#[must_use]
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
