//! # Display Formatting
//!
//! Converts accumulator values into display text. The format is C's `%g`
//! with a configurable number of significant digits (6 by default):
//!
//! - fixed notation while the decimal exponent is in `-4..precision`
//! - scientific notation otherwise, exponent signed and at least two digits
//! - trailing zeros and a dangling decimal point removed
//! - `-0` shown as `0`; non-finite values shown as `inf`, `-inf`, `nan`
//!
//! ```rust
//! use calc_core::format::format_number;
//!
//! assert_eq!(format_number(14.0, 6), "14");
//! assert_eq!(format_number(1.0 / 3.0, 6), "0.333333");
//! assert_eq!(format_number(1234567.0, 6), "1.23457e+06");
//! assert_eq!(format_number(0.00001, 6), "1e-05");
//! ```
//!
//! Every string produced here parses back with `str::parse::<f64>()`.

/// Default significant digits for display
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Format a value for the display.
pub fn format_number(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = significant_digits.max(1);

    // Rounding to `precision` digits can bump the exponent (999999.7 -> 1e+06),
    // so the notation is chosen from the already-rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
