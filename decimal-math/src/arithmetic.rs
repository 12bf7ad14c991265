//! # Integer-Domain Addition and Subtraction
//!
//! Exact add/sub performed entirely as integer arithmetic at a shared scale.
//! This is what makes `0.1 + 0.2` come out as exactly `0.3`.

use crate::conversions::{decimal_places, from_scaled_int, to_scaled_int};
use crate::{DecimalError, DecimalResult, Rounding, MAX_SAFE_INT, MAX_SCALE};

/// Add two decimals exactly at the given shared scale.
///
/// Both operands are quantized at `scale`, summed as integers, and
/// dequantized. The sum must remain a safe integer.
///
/// # Examples
/// ```
/// use decimal_math::{add_decimals, Rounding};
///
/// assert_eq!(add_decimals(0.1, 0.2, 1, Rounding::HalfUp).unwrap(), 0.3);
/// ```
pub fn add_decimals(a: f64, b: f64, scale: u32, mode: Rounding) -> DecimalResult<f64> {
    let a_int = to_scaled_int(a, scale, mode)?;
    let b_int = to_scaled_int(b, scale, mode)?;

    let sum = a_int.checked_add(b_int).ok_or(DecimalError::Overflow)?;
    if sum.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(DecimalError::Overflow);
    }

    from_scaled_int(sum, scale)
}

/// Subtract two decimals exactly at the given shared scale.
///
/// # Examples
/// ```
/// use decimal_math::{sub_decimals, Rounding};
///
/// assert_eq!(sub_decimals(0.3, 0.1, 1, Rounding::HalfUp).unwrap(), 0.2);
/// ```
pub fn sub_decimals(a: f64, b: f64, scale: u32, mode: Rounding) -> DecimalResult<f64> {
    let a_int = to_scaled_int(a, scale, mode)?;
    let b_int = to_scaled_int(b, scale, mode)?;

    let diff = a_int.checked_sub(b_int).ok_or(DecimalError::Overflow)?;
    if diff.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(DecimalError::Overflow);
    }

    from_scaled_int(diff, scale)
}

/// The shared scale both operands of an add/sub are quantized at when the
/// caller does not supply one: wide enough for either operand, capped at
/// `MAX_SCALE`.
pub(crate) fn auto_scale(a: f64, b: f64) -> DecimalResult<u32> {
    let a_places = decimal_places(a, MAX_SCALE)?;
    let b_places = decimal_places(b, MAX_SCALE)?;
    Ok(a_places.max(b_places).min(MAX_SCALE))
}

/// Convenience addition that selects the shared scale automatically.
///
/// # Examples
/// ```
/// use decimal_math::{decimal_add, Rounding};
///
/// assert_eq!(decimal_add(0.1, 0.2, None, Rounding::HalfUp).unwrap(), 0.3);
/// assert_eq!(decimal_add(1.005, 2.0, Some(2), Rounding::Trunc).unwrap(), 3.0);
/// ```
pub fn decimal_add(a: f64, b: f64, scale: Option<u32>, mode: Rounding) -> DecimalResult<f64> {
    let scale = match scale {
        Some(scale) => scale,
        None => auto_scale(a, b)?,
    };
    add_decimals(a, b, scale, mode)
}

/// Convenience subtraction that selects the shared scale automatically.
///
/// # Examples
/// ```
/// use decimal_math::{decimal_sub, Rounding};
///
/// assert_eq!(decimal_sub(1.0, 0.9, None, Rounding::HalfUp).unwrap(), 0.1);
/// ```
pub fn decimal_sub(a: f64, b: f64, scale: Option<u32>, mode: Rounding) -> DecimalResult<f64> {
    let scale = match scale {
        Some(scale) => scale,
        None => auto_scale(a, b)?,
    };
    sub_decimals(a, b, scale, mode)
}
