//! Scalar collaborator traits.
//!
//! The algebraic core is agnostic to whether its scalars are plain numbers or
//! symbolic expressions owned by an external engine. Everything it needs from
//! a scalar is captured by [`ScalarExpr`]; symbol creation, which only makes
//! sense for an actual symbolic representation, is split into the narrower
//! [`SymbolicExpr`] so scalar-ness is decided by the type system rather than
//! by runtime inspection of operands.

use crate::error::Result;
use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for scalar types usable as matrix elements.
///
/// This is the full scalar-operation surface the core consumes: ring
/// arithmetic via the standard operator traits, plus the handful of
/// non-arithmetic operations (`sqrt`, `sign`, simplification, numeric
/// evaluation) that symbolic engines expose. The core must not assume any
/// particular representation beyond these operations.
pub trait ScalarExpr:
    Clone
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Construct a scalar from an `f64` constant.
    fn from_f64(v: f64) -> Self;

    /// Square root of the scalar.
    fn sqrt(&self) -> Self;

    /// Sign of the scalar: -1, 0, or +1, with `sign(0) == 0`.
    ///
    /// The zero case matters: downstream code differentiates through
    /// expressions built from `sign`, and the convention must be stable.
    fn sign(&self) -> Self;

    /// Simplify the scalar expression.
    ///
    /// The identity function for plain numeric scalars.
    fn simplify(&self) -> Self;

    /// Numerically evaluate the scalar.
    ///
    /// # Arguments
    ///
    /// * `real` - If true, assume no complex part; evaluation outside the
    ///   real domain fails.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NonNumeric`](crate::GeoError::NonNumeric) if the
    /// expression contains free symbols or leaves the requested domain.
    fn eval_numeric(&self, real: bool) -> Result<f64>;
}

/// Trait for scalar types that support symbol creation.
///
/// Only genuinely symbolic representations implement this; the plain
/// numeric scalars (`f32`, `f64`) do not, which makes symbolic matrix
/// construction a compile-time capability rather than a runtime failure.
pub trait SymbolicExpr: ScalarExpr {
    /// Create a fresh named symbol.
    fn symbol(name: &str) -> Self;
}

impl ScalarExpr for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn sign(&self) -> Self {
        // f64::signum maps 0.0 to 1.0, which is the wrong convention here.
        if *self > 0.0 {
            1.0
        } else if *self < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn simplify(&self) -> Self {
        *self
    }

    fn eval_numeric(&self, _real: bool) -> Result<f64> {
        Ok(*self)
    }
}

impl ScalarExpr for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn sqrt(&self) -> Self {
        f32::sqrt(*self)
    }

    fn sign(&self) -> Self {
        if *self > 0.0 {
            1.0
        } else if *self < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn simplify(&self) -> Self {
        *self
    }

    fn eval_numeric(&self, _real: bool) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sign_convention() {
        assert_eq!(ScalarExpr::sign(&2.5_f64), 1.0);
        assert_eq!(ScalarExpr::sign(&-0.1_f64), -1.0);
        assert_eq!(ScalarExpr::sign(&0.0_f64), 0.0);

        assert_eq!(ScalarExpr::sign(&3.0_f32), 1.0);
        assert_eq!(ScalarExpr::sign(&0.0_f32), 0.0);
    }

    #[test]
    fn test_numeric_scalars() {
        assert_relative_eq!(ScalarExpr::sqrt(&25.0_f64), 5.0);
        assert_eq!(<f64 as ScalarExpr>::from_f64(2.5), 2.5);
        assert_eq!(ScalarExpr::simplify(&1.5_f64), 1.5);
        assert_eq!(2.0_f64.eval_numeric(true).unwrap(), 2.0);
        assert_relative_eq!(1.5_f32.eval_numeric(true).unwrap(), 1.5);
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(<f64 as Zero>::zero(), 0.0);
        assert_eq!(<f64 as One>::one(), 1.0);
        assert!(Zero::is_zero(&0.0_f32));
    }
}
