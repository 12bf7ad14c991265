//! # Mixed-Domain Bridges
//!
//! Combine an already-scaled integer value with a raw decimal without
//! introducing a third rounding step. Both sides are normalized to a shared
//! operating scale, the integer operation runs, and the result comes out at
//! the caller's output scale in one rescale.

use crate::auto_precision::mul_decimals_auto;
use crate::big_arithmetic::mul_scaled_ints;
use crate::conversions::{decimal_places, from_scaled_int, to_scaled_int};
use crate::{DecimalError, DecimalResult, Rounding, ScaledInt, MAX_SAFE_INT, MAX_SCALE};

/// Convert an `(int, scale)` pair to a new scale with exactly one rounding
/// step, by round-tripping through the decimal value it represents.
///
/// # Examples
/// ```
/// use decimal_math::{rescale_scaled_int, Rounding};
///
/// // 19.99 from scale 2 to scale 1
/// assert_eq!(rescale_scaled_int(1999, 2, 1, Rounding::HalfUp).unwrap(), 200);
/// assert_eq!(rescale_scaled_int(1999, 2, 3, Rounding::HalfUp).unwrap(), 19990);
/// ```
pub fn rescale_scaled_int(
    int: i64,
    from_scale: u32,
    to_scale: u32,
    mode: Rounding,
) -> DecimalResult<i64> {
    let value = from_scaled_int(int, from_scale)?;
    to_scaled_int(value, to_scale, mode)
}

/// Add a pre-scaled integer (e.g. an accumulator already in integer domain)
/// and a raw decimal, producing the sum at `out_scale`.
///
/// # Examples
/// ```
/// use decimal_math::{add_int_and_decimal, Rounding};
///
/// // accumulator 59.97 (scale 2) plus 19.99
/// let total = add_int_and_decimal(5997, 2, 19.99, 2, Rounding::HalfUp).unwrap();
/// assert_eq!(total, 79.96);
/// ```
pub fn add_int_and_decimal(
    int: i64,
    int_scale: u32,
    decimal: f64,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    let operating = int_scale
        .max(decimal_places(decimal, MAX_SCALE)?)
        .min(MAX_SCALE);

    let lhs = rescale_scaled_int(int, int_scale, operating, mode)?;
    let rhs = to_scaled_int(decimal, operating, mode)?;

    let sum = lhs.checked_add(rhs).ok_or(DecimalError::Overflow)?;
    if sum.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(DecimalError::Overflow);
    }

    let out = rescale_scaled_int(sum, operating, out_scale, mode)?;
    from_scaled_int(out, out_scale)
}

/// Multiply a pre-scaled integer by a raw decimal, producing the product at
/// `out_scale`.
///
/// Takes the exact BigInt path when it fits; on overflow it falls back to
/// the auto-precision guard using the decimal form of the integer operand,
/// so prior rounding is not applied twice.
///
/// # Examples
/// ```
/// use decimal_math::{mul_int_by_decimal, Rounding};
///
/// // accumulator 100.00 (scale 2) times a 0.0825 factor
/// let fee = mul_int_by_decimal(10000, 2, 0.0825, 2, Rounding::HalfUp).unwrap();
/// assert_eq!(fee, 8.25);
/// ```
pub fn mul_int_by_decimal(
    int: i64,
    int_scale: u32,
    decimal: f64,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    let dec_scale = decimal_places(decimal, MAX_SCALE)?;

    let direct = to_scaled_int(decimal, dec_scale, mode).and_then(|dec_int| {
        mul_scaled_ints(
            ScaledInt::new(int, int_scale),
            ScaledInt::new(dec_int, dec_scale),
            out_scale,
            mode,
        )
    });

    match direct {
        Ok(result) => Ok(result),
        Err(DecimalError::Overflow) => {
            let int_value = from_scaled_int(int, int_scale)?;
            mul_decimals_auto(int_value, decimal, int_scale, dec_scale, out_scale, mode)
        }
        Err(err) => Err(err),
    }
}
