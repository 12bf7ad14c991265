//! # Auto-Precision Guard
//!
//! Overflow-safe wrappers around the BigInt multiply/divide engine. Overflow
//! is resolved by degrading precision instead of failing: input scales are
//! reduced first, the output scale only as a last resort. A degraded result
//! is successful completion at lower precision, not an error path. Only when
//! the output scale has been driven to zero and the result still exceeds the
//! safe-integer bound does the call fail.

use num_bigint::BigInt;
use num_traits::Signed;

use crate::big_arithmetic::{div_scaled_ints, mul_scaled_ints, pow10_big};
use crate::conversions::{safe_to_scaled_int, to_scaled_int};
use crate::{DecimalError, DecimalResult, Rounding, ScaledInt, MAX_SAFE_INT, MAX_SCALE};

/// How many decimal digits a magnitude carries beyond the safe-integer bound.
fn excess_digits(scaled: &BigInt) -> u32 {
    let limit = BigInt::from(MAX_SAFE_INT);
    let mut magnitude = scaled.abs();
    let mut digits = 0;
    while magnitude > limit {
        magnitude /= 10;
        digits += 1;
    }
    digits
}

fn try_mul(
    a: f64,
    b: f64,
    a_scale: u32,
    b_scale: u32,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    let a_int = to_scaled_int(a, a_scale, mode)?;
    let b_int = to_scaled_int(b, b_scale, mode)?;
    mul_scaled_ints(
        ScaledInt::new(a_int, a_scale),
        ScaledInt::new(b_int, b_scale),
        out_scale,
        mode,
    )
}

/// Multiply two decimals, degrading precision instead of overflowing.
///
/// The requested scales are attempted first. On overflow the excess digits
/// are predicted in the integer domain and shed from the operand scales,
/// split evenly with any remainder going to whichever operand still has
/// budget; the output scale is reduced only when the operands cannot absorb
/// the excess, and then decremented further while the retry still overflows.
///
/// # Examples
/// ```
/// use decimal_math::{mul_decimals_auto, Rounding};
///
/// let result = mul_decimals_auto(19.99, 3.0, 2, 0, 2, Rounding::HalfUp).unwrap();
/// assert_eq!(result, 59.97);
///
/// // an over-ambitious out_scale degrades instead of failing
/// let result = mul_decimals_auto(1e7, 2.0, 15, 15, 15, Rounding::HalfUp).unwrap();
/// assert_eq!(result, 2e7);
/// ```
pub fn mul_decimals_auto(
    a: f64,
    b: f64,
    a_scale: u32,
    b_scale: u32,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    let mut a_scale = a_scale.min(MAX_SCALE);
    let mut b_scale = b_scale.min(MAX_SCALE);
    let mut out_scale = out_scale.min(MAX_SCALE);

    // Fast path: everything fits at the requested scales.
    match try_mul(a, b, a_scale, b_scale, out_scale, mode) {
        Ok(result) => return Ok(result),
        Err(DecimalError::Overflow) => {}
        Err(err) => return Err(err),
    }

    // Degrade the input quantization so it can no longer overflow on its own.
    let qa = safe_to_scaled_int(a, a_scale, mode)?;
    let qb = safe_to_scaled_int(b, b_scale, mode)?;
    a_scale = qa.scale;
    b_scale = qb.scale;

    // Predict the excess at the requested output scale without materializing
    // an unsafe i64, then shed that many digits from the operand scales.
    let product = BigInt::from(qa.int) * BigInt::from(qb.int);
    let in_scale = a_scale + b_scale;
    let predicted = if out_scale < in_scale {
        &product / pow10_big(in_scale - out_scale)
    } else {
        &product * pow10_big(out_scale - in_scale)
    };

    let extra_exp = excess_digits(&predicted);
    if extra_exp > 0 {
        let mut shed_a = (extra_exp / 2).min(a_scale);
        let shed_b = (extra_exp - shed_a).min(b_scale);
        let mut remaining = extra_exp - shed_a - shed_b;

        // remainder goes to whichever operand still has scale budget
        let top_up = remaining.min(a_scale - shed_a);
        shed_a += top_up;
        remaining -= top_up;

        a_scale -= shed_a;
        b_scale -= shed_b;
        // last resort: give up output precision
        out_scale = out_scale.saturating_sub(remaining);
    }

    loop {
        match try_mul(a, b, a_scale, b_scale, out_scale, mode) {
            Ok(result) => return Ok(result),
            Err(DecimalError::Overflow) if out_scale > 0 => out_scale -= 1,
            Err(err) => return Err(err),
        }
    }
}

/// Divide two decimals, degrading the output scale instead of overflowing.
///
/// Structured as an explicit retry loop: attempt the requested `out_scale`
/// and decrement on overflow until the result fits. Division by zero is
/// fatal immediately and never retried.
///
/// # Examples
/// ```
/// use decimal_math::{div_decimals_auto, Rounding};
///
/// let result = div_decimals_auto(10.0, 3.0, 0, 0, 4, Rounding::HalfUp).unwrap();
/// assert_eq!(result, 3.3333);
/// ```
pub fn div_decimals_auto(
    a: f64,
    b: f64,
    a_scale: u32,
    b_scale: u32,
    out_scale: u32,
    mode: Rounding,
) -> DecimalResult<f64> {
    let qa = safe_to_scaled_int(a, a_scale.min(MAX_SCALE), mode)?;
    let qb = safe_to_scaled_int(b, b_scale.min(MAX_SCALE), mode)?;
    if qb.int == 0 {
        return Err(DecimalError::DivisionByZero);
    }

    let mut out_scale = out_scale.min(MAX_SCALE);
    loop {
        match div_scaled_ints(qa, qb, out_scale, mode) {
            Ok(result) => return Ok(result),
            Err(DecimalError::Overflow) if out_scale > 0 => out_scale -= 1,
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mul_fast_path() {
        assert_eq!(
            mul_decimals_auto(19.99, 3.0, 2, 0, 2, Rounding::HalfUp).unwrap(),
            59.97
        );
        assert_eq!(
            mul_decimals_auto(100.0, 0.0825, 2, 4, 2, Rounding::HalfUp).unwrap(),
            8.25
        );
    }

    #[test]
    fn test_mul_degrades_instead_of_failing() {
        // scale 15 on a 10^7 operand overflows quantization outright; the
        // guard sheds precision and still produces the exact product
        let result = mul_decimals_auto(1e7, 2.0, 15, 15, 15, Rounding::HalfUp).unwrap();
        assert_eq!(result, 2e7);

        let result = mul_decimals_auto(123_456_789.0, 1000.0, 15, 15, 15, Rounding::HalfUp).unwrap();
        assert_eq!(result, 123_456_789_000.0);
    }

    #[test]
    fn test_mul_large_product_exact() {
        let result = mul_decimals_auto(12_345_678.9, 1234.5, 1, 1, 2, Rounding::HalfUp).unwrap();
        assert_eq!(result, 15_240_740_602.05);
    }

    #[test]
    fn test_mul_pathological_inputs_still_fail() {
        // 10^15 * 10^15 = 10^30 cannot be represented at any scale >= 0
        assert_eq!(
            mul_decimals_auto(1e15, 1e15, 0, 0, 2, Rounding::HalfUp),
            Err(DecimalError::Overflow)
        );
    }

    #[test]
    fn test_mul_non_finite_propagates() {
        assert_eq!(
            mul_decimals_auto(f64::NAN, 2.0, 2, 2, 2, Rounding::HalfUp),
            Err(DecimalError::NotFinite)
        );
    }

    #[test]
    fn test_div_basic() {
        assert_eq!(
            div_decimals_auto(10.0, 3.0, 0, 0, 4, Rounding::HalfUp).unwrap(),
            3.3333
        );
        assert_eq!(
            div_decimals_auto(59.97, 3.0, 2, 0, 2, Rounding::HalfUp).unwrap(),
            19.99
        );
    }

    #[test]
    fn test_div_degrades_out_scale() {
        // 10^12 / 0.001 = 10^15: at out_scale 4 the quotient would need
        // 10^19, so the loop walks the scale down until it fits
        let result = div_decimals_auto(1e12, 0.001, 0, 3, 4, Rounding::HalfUp).unwrap();
        assert_eq!(result, 1e15);
    }

    #[test]
    fn test_div_by_zero_not_retried() {
        for mode in [Rounding::HalfUp, Rounding::Floor, Rounding::Ceil, Rounding::Trunc] {
            assert_eq!(
                div_decimals_auto(5.0, 0.0, 2, 2, 4, mode),
                Err(DecimalError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_div_exhausts_to_overflow() {
        // 9007199254740991 / 10^-15 exceeds the bound even at scale 0
        assert_eq!(
            div_decimals_auto(MAX_SAFE_INT as f64, 1e-15, 0, 15, 4, Rounding::HalfUp),
            Err(DecimalError::Overflow)
        );
    }

    #[test]
    fn test_excess_digits() {
        assert_eq!(excess_digits(&BigInt::from(MAX_SAFE_INT)), 0);
        assert_eq!(excess_digits(&(BigInt::from(MAX_SAFE_INT) * 10)), 1);
        assert_eq!(excess_digits(&(BigInt::from(-MAX_SAFE_INT) * 1000)), 3);
        assert_eq!(excess_digits(&BigInt::from(0)), 0);
    }

    proptest! {
        #[test]
        fn prop_mul_commutes(
            a_cents in -10_000_00i64..10_000_00,
            b_cents in -10_000_00i64..10_000_00,
        ) {
            let a = a_cents as f64 / 100.0;
            let b = b_cents as f64 / 100.0;
            let ab = mul_decimals_auto(a, b, 2, 2, 4, Rounding::HalfUp).unwrap();
            let ba = mul_decimals_auto(b, a, 2, 2, 4, Rounding::HalfUp).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn prop_auto_paths_never_fail_in_normal_range(
            a_cents in 1i64..1_000_000_00,
            b_cents in 1i64..1_000_000_00,
        ) {
            let a = a_cents as f64 / 100.0;
            let b = b_cents as f64 / 100.0;
            // ambitious out_scale: the guard degrades rather than errors
            prop_assert!(mul_decimals_auto(a, b, 2, 2, MAX_SCALE, Rounding::HalfUp).is_ok());
            prop_assert!(div_decimals_auto(a, b, 2, 2, MAX_SCALE, Rounding::HalfUp).is_ok());
        }
    }
}
