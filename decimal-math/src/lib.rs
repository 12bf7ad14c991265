//! # Decimal Math Library
//!
//! Exact fixed-point decimal arithmetic for monetary and ratio calculations.
//! All arithmetic happens in an integer domain (`value * 10^scale` kept as an
//! `i64`, or as a `BigInt` inside the multiply/divide engine), converting in
//! and out of `f64` only at defined boundaries with an explicit rounding mode.
//!
//! ## Key Features
//!
//! - **Integer-domain arithmetic** - no silent float rounding error
//! - **Explicit rounding modes** at every boundary crossing
//! - **Safe-integer invariant** - results never exceed 2^53 - 1 in magnitude
//! - **Auto-precision degradation** - overflow resolves to a less precise
//!   result instead of a failure wherever possible
//! - **Pure and stateless** - every function is a reentrant transformation of
//!   its arguments
//!
//! ## Fixed-Point Representation
//!
//! A decimal is carried as an `(integer, scale)` pair where the represented
//! value equals `integer / 10^scale`:
//!
//! ```rust
//! use decimal_math::{to_scaled_int, from_scaled_int, Rounding};
//!
//! // 19.99 at scale 2 is the integer 1999
//! let int = to_scaled_int(19.99, 2, Rounding::HalfUp).unwrap();
//! assert_eq!(int, 1999);
//! assert_eq!(from_scaled_int(int, 2).unwrap(), 19.99);
//! ```
//!
//! The recommended entry point for callers is [`decimal_compute`]:
//!
//! ```rust
//! use decimal_math::{decimal_compute, Op};
//!
//! let sum = decimal_compute(Op::Add, 0.1, 0.2, None).unwrap();
//! assert_eq!(sum, 0.3); // not 0.30000000000000004
//! ```

pub mod conversions;
pub mod arithmetic;
pub mod big_arithmetic;
pub mod auto_precision;
pub mod bridges;
pub mod compute;

pub use conversions::*;
pub use arithmetic::*;
pub use big_arithmetic::*;
pub use auto_precision::*;
pub use bridges::*;
pub use compute::*;

use thiserror::Error;

/// Maximum supported scale. `10^15` is still exactly representable and
/// multipliable within the 53-bit double mantissa used at the boundaries.
pub const MAX_SCALE: u32 = 15;

/// Largest integer magnitude that survives a round trip through `f64`
/// (2^53 - 1). Every integer crossing back into decimal form must fit.
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Core error type for decimal operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// Operand is NaN or infinite
    #[error("operand is not a finite number")]
    NotFinite,
    /// Result exceeds the safe-integer bound after all degradation strategies
    #[error("integer conversion out of safe range")]
    Overflow,
    /// Divisor's integer representation is exactly zero
    #[error("division by zero")]
    DivisionByZero,
    /// Requested scale is outside `[0, MAX_SCALE]`
    #[error("scale {0} exceeds the supported maximum")]
    InvalidScale(u32),
    /// Operator literal is not one of `add`/`sub`/`mul`/`div`
    #[error("unsupported operator: {0}")]
    UnsupportedOp(String),
}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

/// Rounding policy applied whenever a value crosses from the integer domain
/// back into decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Rounding {
    /// Round ties away from zero (the default for monetary values)
    #[default]
    HalfUp,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceil,
    /// Round toward zero
    Trunc,
}

/// A decimal carried as an `(integer, scale)` pair: the represented value is
/// `int / 10^scale`. Constructed, used, and discarded within a single call;
/// never stored across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledInt {
    /// The integer-domain value
    pub int: i64,
    /// The number of decimal places
    pub scale: u32,
}

impl ScaledInt {
    /// Create a new scaled integer pair
    pub const fn new(int: i64, scale: u32) -> Self {
        Self { int, scale }
    }

    /// Dequantize back to the decimal value this pair represents
    ///
    /// # Examples
    /// ```
    /// use decimal_math::ScaledInt;
    ///
    /// let pair = ScaledInt::new(1999, 2);
    /// assert_eq!(pair.value().unwrap(), 19.99);
    /// ```
    pub fn value(self) -> DecimalResult<f64> {
        conversions::from_scaled_int(self.int, self.scale)
    }
}
