//! Value conversion utilities for CSV output
//!
//! Leaf values are written the way the reconstruction pipeline's scripting
//! layer prints a double, so files produced by this tool diff cleanly
//! against ones produced by the older tooling.

use crate::error::{ExtractError, Result};

/// Format a leaf value for CSV output
///
/// Shortest round-trip digits, `.0` appended to integral values, and
/// scientific notation with a signed two-digit exponent when the decimal
/// exponent is below -4 or at least 16.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let decimal = format!("{}", value);
    if decimal.contains('.') {
        decimal
    } else {
        format!("{}.0", decimal)
    }
}

/// Convert the raw index leaf value to a sub-value position
///
/// The stored value is a double; it is truncated toward zero. NaN,
/// infinities and negative positions cannot select a sub-value.
pub fn index_from_value(value: f64, entry: usize) -> Result<usize> {
    if !value.is_finite() {
        return Err(ExtractError::InvalidIndex { entry, value });
    }
    let truncated = value.trunc();
    if truncated < 0.0 {
        return Err(ExtractError::InvalidIndex { entry, value });
    }
    Ok(truncated as usize)
}
