/// Largest magnitude below which integral values are printed with a trailing
/// `.0` instead of in exponent form.
pub const MAX_PLAIN_INTEGRAL: f64 = 1e16;

/// Formats a floating-point value for display.
///
/// Finite integral values keep one decimal place so that every value reads as
/// a real number (`14.0`, not `14`). Everything else uses Rust's shortest
/// round-trip representation.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The textual representation of `value`.
///
/// ## Example
/// ```
/// use attrcalc::util::num::format_real;
///
/// assert_eq!(format_real(14.0), "14.0");
/// assert_eq!(format_real(-0.5), "-0.5");
/// assert_eq!(format_real(2.0 / 3.0), "0.6666666666666666");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGRAL {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Formats an optional value, printing `None` as the given placeholder.
///
/// ## Example
/// ```
/// use attrcalc::util::num::format_optional_real;
///
/// assert_eq!(format_optional_real(Some(3.0), "ERROR"), "3.0");
/// assert_eq!(format_optional_real(None, "ERROR"), "ERROR");
/// ```
#[must_use]
pub fn format_optional_real(value: Option<f64>, placeholder: &str) -> String {
    value.map_or_else(|| placeholder.to_string(), format_real)
}
