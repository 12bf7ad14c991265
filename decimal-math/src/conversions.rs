//! # Quantization and Scale Estimation
//!
//! Convert between `f64` decimals and `(integer, scale)` fixed-point pairs.
//! These are the only places where values cross the float/integer boundary,
//! and every crossing applies an explicit rounding mode.

use crate::{DecimalError, DecimalResult, Rounding, ScaledInt, MAX_SAFE_INT, MAX_SCALE};

/// A scaled value closer than this to its rounded integer is treated as
/// having reached its full decimal precision.
const SCALE_EPSILON: f64 = 1e-7;

/// Compensation for binary representation error at exact `.5` boundaries
/// (`2.345 * 100` is stored as `234.4999...`). Applied in the direction of
/// the sign so half-up ties round away from zero for both signs.
const HALF_UP_EPSILON: f64 = 1e-12;

pub(crate) fn pow10(scale: u32) -> f64 {
    10f64.powi(scale as i32)
}

/// Estimate how many decimal places a value actually carries.
///
/// This is a heuristic, not an exact decomposition: values with more than
/// ~7 significant post-scale digits are clamped to `max_scale`.
///
/// # Examples
/// ```
/// use decimal_math::{decimal_places, MAX_SCALE};
///
/// assert_eq!(decimal_places(19.99, MAX_SCALE).unwrap(), 2);
/// assert_eq!(decimal_places(3.0, MAX_SCALE).unwrap(), 0);
/// assert_eq!(decimal_places(0.0825, MAX_SCALE).unwrap(), 4);
/// ```
pub fn decimal_places(value: f64, max_scale: u32) -> DecimalResult<u32> {
    if !value.is_finite() {
        return Err(DecimalError::NotFinite);
    }

    let max_scale = max_scale.min(MAX_SCALE);
    let magnitude = value.abs();

    for scale in 0..=max_scale {
        let scaled = magnitude * pow10(scale);
        if (scaled - scaled.round()).abs() < SCALE_EPSILON {
            return Ok(scale);
        }
    }

    Ok(max_scale)
}

/// Quantize a decimal to its integer-domain form at the given scale.
///
/// Never silently truncates precision: a result beyond the safe-integer
/// bound is an error.
///
/// # Examples
/// ```
/// use decimal_math::{to_scaled_int, Rounding};
///
/// assert_eq!(to_scaled_int(19.99, 2, Rounding::HalfUp).unwrap(), 1999);
/// // the float-imprecise .5 boundary still rounds up
/// assert_eq!(to_scaled_int(2.345, 2, Rounding::HalfUp).unwrap(), 235);
/// assert_eq!(to_scaled_int(2.349, 2, Rounding::Trunc).unwrap(), 234);
/// ```
pub fn to_scaled_int(value: f64, scale: u32, mode: Rounding) -> DecimalResult<i64> {
    if !value.is_finite() {
        return Err(DecimalError::NotFinite);
    }
    if scale > MAX_SCALE {
        return Err(DecimalError::InvalidScale(scale));
    }

    let scaled = value * pow10(scale);
    let rounded = match mode {
        Rounding::HalfUp => (scaled + HALF_UP_EPSILON.copysign(scaled)).round(),
        Rounding::Floor => scaled.floor(),
        Rounding::Ceil => scaled.ceil(),
        Rounding::Trunc => scaled.trunc(),
    };

    if rounded.abs() > MAX_SAFE_INT as f64 {
        return Err(DecimalError::Overflow);
    }

    Ok(rounded as i64)
}

/// Overflow-tolerant quantization: retry at progressively smaller scales.
///
/// Attempts `to_scaled_int` at `scale, scale - 1, ..., 0` and returns the
/// first pair that fits. This is the engine's first line of defense against
/// overflow when the caller cannot control input magnitude.
///
/// # Examples
/// ```
/// use decimal_math::{safe_to_scaled_int, Rounding};
///
/// // 10^12 cannot carry 15 decimal places; the scale degrades until it fits
/// let pair = safe_to_scaled_int(1e12, 15, Rounding::HalfUp).unwrap();
/// assert_eq!(pair.scale, 3);
/// assert_eq!(pair.int, 1_000_000_000_000_000);
/// ```
pub fn safe_to_scaled_int(value: f64, scale: u32, mode: Rounding) -> DecimalResult<ScaledInt> {
    if !value.is_finite() {
        return Err(DecimalError::NotFinite);
    }

    let mut attempt = scale.min(MAX_SCALE);
    loop {
        match to_scaled_int(value, attempt, mode) {
            Ok(int) => return Ok(ScaledInt::new(int, attempt)),
            Err(DecimalError::Overflow) if attempt > 0 => attempt -= 1,
            Err(err) => return Err(err),
        }
    }
}

/// Dequantize an integer-domain value back to its decimal form.
///
/// The integer must already be a safe integer; this is the exact inverse of
/// [`to_scaled_int`] up to representable precision.
///
/// # Examples
/// ```
/// use decimal_math::from_scaled_int;
///
/// assert_eq!(from_scaled_int(1999, 2).unwrap(), 19.99);
/// assert_eq!(from_scaled_int(3, 1).unwrap(), 0.3);
/// ```
pub fn from_scaled_int(int: i64, scale: u32) -> DecimalResult<f64> {
    if scale > MAX_SCALE {
        return Err(DecimalError::InvalidScale(scale));
    }
    if int.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(DecimalError::Overflow);
    }

    Ok(int as f64 / pow10(scale))
}
