//! # Unified Dispatch Facade
//!
//! The single recommended entry point for callers that carry no
//! numeric-domain knowledge: an operator, two decimals, and an optional
//! output scale. Rounding is the half-up default throughout; callers needing
//! another mode use the underlying paths directly.

use std::fmt;
use std::str::FromStr;

use crate::arithmetic::{decimal_add, decimal_sub};
use crate::auto_precision::{div_decimals_auto, mul_decimals_auto};
use crate::conversions::{decimal_places, from_scaled_int, to_scaled_int};
use crate::{DecimalError, DecimalResult, Rounding, MAX_SCALE};

/// Scale used for monetary amounts (two decimal places)
pub const MONEY_SCALE: u32 = 2;

/// Scale used for payout/ratio factors (four decimal places)
pub const FACTOR_SCALE: u32 = 4;

/// Arithmetic operator routed by [`decimal_compute`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Op {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Op::Add),
            "sub" => Ok(Op::Sub),
            "mul" => Ok(Op::Mul),
            "div" => Ok(Op::Div),
            other => Err(DecimalError::UnsupportedOp(other.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
        };
        write!(f, "{name}")
    }
}

/// Re-quantize a result at its significant scale, dropping trailing
/// zero-precision picked up by a high-precision intermediate scale.
fn trim_precision(value: f64, scale: u32) -> DecimalResult<f64> {
    let significant = decimal_places(value, scale)?;
    if significant >= scale {
        return Ok(value);
    }
    let int = to_scaled_int(value, significant, Rounding::HalfUp)?;
    from_scaled_int(int, significant)
}

/// Route an operator to the correct integer-domain path, choosing sensible
/// default output scales when the caller does not supply one.
///
/// - `Add`/`Sub` run on the exact integer-domain path at a shared scale wide
///   enough for both operands.
/// - `Mul` runs through the auto-precision guard; without an explicit
///   `out_scale` it computes at `min(MAX_SCALE, a_scale + b_scale)` and trims
///   trailing zero-precision afterwards.
/// - `Div` always runs through the guard (a quotient has no exact
///   integer-domain form); the default output scale is `MAX_SCALE`, trimmed
///   the same way. A zero divisor is fatal regardless of rounding mode.
///
/// # Examples
/// ```
/// use decimal_math::{decimal_compute, Op};
///
/// assert_eq!(decimal_compute(Op::Add, 0.1, 0.2, None).unwrap(), 0.3);
/// assert_eq!(decimal_compute(Op::Mul, 19.99, 3.0, Some(2)).unwrap(), 59.97);
/// assert_eq!(decimal_compute(Op::Div, 10.0, 3.0, Some(4)).unwrap(), 3.3333);
/// ```
pub fn decimal_compute(op: Op, a: f64, b: f64, out_scale: Option<u32>) -> DecimalResult<f64> {
    match op {
        Op::Add => decimal_add(a, b, out_scale, Rounding::HalfUp),
        Op::Sub => decimal_sub(a, b, out_scale, Rounding::HalfUp),
        Op::Mul => {
            let a_scale = decimal_places(a, MAX_SCALE)?;
            let b_scale = decimal_places(b, MAX_SCALE)?;
            match out_scale {
                Some(scale) => mul_decimals_auto(a, b, a_scale, b_scale, scale, Rounding::HalfUp),
                None => {
                    let high = (a_scale + b_scale).min(MAX_SCALE);
                    let result =
                        mul_decimals_auto(a, b, a_scale, b_scale, high, Rounding::HalfUp)?;
                    trim_precision(result, high)
                }
            }
        }
        Op::Div => {
            let a_scale = decimal_places(a, MAX_SCALE)?;
            let b_scale = decimal_places(b, MAX_SCALE)?;
            match out_scale {
                Some(scale) => div_decimals_auto(a, b, a_scale, b_scale, scale, Rounding::HalfUp),
                None => {
                    let result =
                        div_decimals_auto(a, b, a_scale, b_scale, MAX_SCALE, Rounding::HalfUp)?;
                    trim_precision(result, MAX_SCALE)
                }
            }
        }
    }
}

/// Payout-workflow helper: multiply a monetary amount (scale 2) by a factor
/// (scale 4), producing a monetary result (scale 2, half-up).
///
/// # Examples
/// ```
/// use decimal_math::multiply_money_by_factor;
///
/// assert_eq!(multiply_money_by_factor(100.00, 0.0825).unwrap(), 8.25);
/// ```
pub fn multiply_money_by_factor(amount: f64, factor: f64) -> DecimalResult<f64> {
    mul_decimals_auto(
        amount,
        factor,
        MONEY_SCALE,
        FACTOR_SCALE,
        MONEY_SCALE,
        Rounding::HalfUp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_eliminates_float_error() {
        assert_eq!(decimal_compute(Op::Add, 0.1, 0.2, None).unwrap(), 0.3);
        assert_eq!(decimal_compute(Op::Sub, 0.3, 0.1, None).unwrap(), 0.2);
    }

    #[test]
    fn test_mul_scenarios() {
        assert_eq!(decimal_compute(Op::Mul, 19.99, 3.0, Some(2)).unwrap(), 59.97);
        assert_eq!(decimal_compute(Op::Mul, 19.99, 3.0, None).unwrap(), 59.97);
        assert_eq!(decimal_compute(Op::Mul, 2.5, 4.0, None).unwrap(), 10.0);
        assert_eq!(decimal_compute(Op::Mul, 0.1, 0.2, None).unwrap(), 0.02);
    }

    #[test]
    fn test_div_scenarios() {
        assert_eq!(decimal_compute(Op::Div, 10.0, 3.0, Some(4)).unwrap(), 3.3333);
        assert_eq!(decimal_compute(Op::Div, 10.0, 4.0, None).unwrap(), 2.5);
        assert_eq!(decimal_compute(Op::Div, 59.97, 3.0, Some(2)).unwrap(), 19.99);
    }

    #[test]
    fn test_div_by_zero_is_fatal() {
        assert_eq!(
            decimal_compute(Op::Div, 5.0, 0.0, None),
            Err(DecimalError::DivisionByZero)
        );
        assert_eq!(
            decimal_compute(Op::Div, 5.0, 0.0, Some(2)),
            Err(DecimalError::DivisionByZero)
        );
    }

    #[test]
    fn test_non_finite_operands_rejected() {
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            assert_eq!(
                decimal_compute(op, f64::NAN, 1.0, None),
                Err(DecimalError::NotFinite)
            );
            assert_eq!(
                decimal_compute(op, 1.0, f64::INFINITY, None),
                Err(DecimalError::NotFinite)
            );
        }
    }

    #[test]
    fn test_op_parsing() {
        assert_eq!("add".parse::<Op>().unwrap(), Op::Add);
        assert_eq!("sub".parse::<Op>().unwrap(), Op::Sub);
        assert_eq!("mul".parse::<Op>().unwrap(), Op::Mul);
        assert_eq!("div".parse::<Op>().unwrap(), Op::Div);
        assert_eq!(
            "mod".parse::<Op>(),
            Err(DecimalError::UnsupportedOp("mod".to_string()))
        );
        assert_eq!(Op::Mul.to_string(), "mul");
    }

    #[test]
    fn test_multiply_money_by_factor() {
        assert_eq!(multiply_money_by_factor(100.00, 0.0825).unwrap(), 8.25);
        assert_eq!(multiply_money_by_factor(19.99, 0.5).unwrap(), 10.0);
        assert_eq!(multiply_money_by_factor(0.01, 0.0001).unwrap(), 0.0);
    }

    #[test]
    fn test_mul_trims_trailing_zero_precision() {
        // 1.5 * 2.5 = 3.75 computed at scale 2, already significant
        assert_eq!(decimal_compute(Op::Mul, 1.5, 2.5, None).unwrap(), 3.75);
        // 0.25 * 4 = 1.0 computed at scale 2, trimmed back to an integer
        assert_eq!(decimal_compute(Op::Mul, 0.25, 4.0, None).unwrap(), 1.0);
    }

    #[test]
    fn test_explicit_out_scale_rounds() {
        assert_eq!(decimal_compute(Op::Mul, 1.25, 1.25, Some(2)).unwrap(), 1.56);
        assert_eq!(decimal_compute(Op::Div, 2.0, 3.0, Some(2)).unwrap(), 0.67);
    }
}
