//! # BigInt Multiply/Divide Engine
//!
//! Exact multiplication and division on already-quantized `(int, scale)`
//! pairs. Intermediate products use arbitrary-precision integers so overflow
//! can only happen at the rescale boundary, where it is checked explicitly.
//! Rounding is applied exactly once, inside [`round_quotient`].

use num_bigint::BigInt;
use num_traits::{Pow, Signed, ToPrimitive, Zero};

use crate::conversions::from_scaled_int;
use crate::{DecimalError, DecimalResult, Rounding, ScaledInt, MAX_SCALE};

pub(crate) fn pow10_big(exp: u32) -> BigInt {
    Pow::pow(BigInt::from(10u32), exp)
}

/// Divide two arbitrary-precision integers with sign-aware rounding.
///
/// `Trunc` is the BigInt division default; `Floor`/`Ceil` adjust by one when
/// the exact quotient is inexact and signed the relevant way; `HalfUp`
/// detects ties via `2 * |remainder| >= |denominator|` and moves away from
/// zero.
pub fn round_quotient(numer: &BigInt, denom: &BigInt, mode: Rounding) -> DecimalResult<BigInt> {
    if denom.is_zero() {
        return Err(DecimalError::DivisionByZero);
    }

    let quotient = numer / denom;
    let remainder = numer % denom;
    if remainder.is_zero() {
        return Ok(quotient);
    }

    // remainder is non-zero, so numer is non-zero and the sign is meaningful
    let negative = numer.is_negative() != denom.is_negative();

    let adjusted = match mode {
        Rounding::Trunc => quotient,
        Rounding::Floor => {
            if negative {
                quotient - 1
            } else {
                quotient
            }
        }
        Rounding::Ceil => {
            if negative {
                quotient
            } else {
                quotient + 1
            }
        }
        Rounding::HalfUp => {
            if remainder.abs() * 2 >= denom.abs() {
                if negative {
                    quotient - 1
                } else {
                    quotient + 1
                }
            } else {
                quotient
            }
        }
    };

    Ok(adjusted)
}

/// Multiply two scaled integers exactly, producing the result at `out_scale`.
///
/// The product's implicit scale is `a.scale + b.scale`; narrowing to a
/// smaller `out_scale` goes through [`round_quotient`], widening multiplies
/// by the missing power of ten. The final value must be a safe integer.
///
/// # Examples
/// ```
/// use decimal_math::{mul_scaled_ints, Rounding, ScaledInt};
///
/// // 19.99 * 3 at scale 2
/// let price = ScaledInt::new(1999, 2);
/// let count = ScaledInt::new(3, 0);
/// assert_eq!(
///     mul_scaled_ints(price, count, 2, Rounding::HalfUp).unwrap(),
///     59.97
/// );
/// ```
pub fn mul_scaled_ints(
    a: ScaledInt,
    b: ScaledInt,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    if out_scale > MAX_SCALE {
        return Err(DecimalError::InvalidScale(out_scale));
    }

    let product = BigInt::from(a.int) * BigInt::from(b.int);
    let in_scale = a.scale + b.scale;

    let rescaled = if out_scale < in_scale {
        round_quotient(&product, &pow10_big(in_scale - out_scale), mode)?
    } else {
        product * pow10_big(out_scale - in_scale)
    };

    let int = rescaled.to_i64().ok_or(DecimalError::Overflow)?;
    from_scaled_int(int, out_scale)
}

/// Divide two scaled integers exactly, producing the result at `out_scale`.
///
/// Builds a numerator/denominator pair so the quotient lands at `out_scale`
/// directly, with a single [`round_quotient`] call. A divisor whose integer
/// is zero is a fatal error regardless of rounding mode.
///
/// # Examples
/// ```
/// use decimal_math::{div_scaled_ints, Rounding, ScaledInt};
///
/// // 10 / 3 at scale 4
/// let a = ScaledInt::new(10, 0);
/// let b = ScaledInt::new(3, 0);
/// assert_eq!(div_scaled_ints(a, b, 4, Rounding::HalfUp).unwrap(), 3.3333);
/// ```
pub fn div_scaled_ints(
    a: ScaledInt,
    b: ScaledInt,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    if out_scale > MAX_SCALE {
        return Err(DecimalError::InvalidScale(out_scale));
    }
    if b.int == 0 {
        return Err(DecimalError::DivisionByZero);
    }

    // (a.int / 10^a.scale) / (b.int / 10^b.scale) at out_scale reduces to
    // a.int * 10^exp / b.int with exp = b.scale + out_scale - a.scale;
    // a negative exp moves the power of ten onto the denominator
    let exp = b.scale as i64 + out_scale as i64 - a.scale as i64;
    let (numer, denom) = if exp >= 0 {
        (BigInt::from(a.int) * pow10_big(exp as u32), BigInt::from(b.int))
    } else {
        (BigInt::from(a.int), BigInt::from(b.int) * pow10_big(exp.unsigned_abs() as u32))
    };

    let quotient = round_quotient(&numer, &denom, mode)?;
    let int = quotient.to_i64().ok_or(DecimalError::Overflow)?;
    from_scaled_int(int, out_scale)
}
