//! Minimal symbolic scalar for use in unit tests.
//!
//! The real symbolic-expression engine is an external collaborator; tests
//! only need something that satisfies [`ScalarExpr`] and [`SymbolicExpr`]
//! well enough to exercise symbol naming, simplification, and numeric
//! evaluation. This small expression tree is that stand-in, reusable across
//! test modules.

#![cfg(any(test, feature = "test-utils"))]

use crate::error::{GeoError, Result};
use crate::scalar::{ScalarExpr, SymbolicExpr};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A tiny symbolic expression tree.
///
/// Operators build structure without folding; [`ScalarExpr::simplify`]
/// performs constant folding, and [`ScalarExpr::eval_numeric`] fails with
/// [`GeoError::NonNumeric`] on free symbols.
#[derive(Debug, Clone, PartialEq)]
pub enum SymExpr {
    /// Numeric literal.
    Num(f64),
    /// Free symbol.
    Symbol(String),
    /// Sum of two expressions.
    Add(Box<SymExpr>, Box<SymExpr>),
    /// Product of two expressions.
    Mul(Box<SymExpr>, Box<SymExpr>),
    /// Quotient of two expressions.
    Div(Box<SymExpr>, Box<SymExpr>),
    /// Negation.
    Neg(Box<SymExpr>),
    /// Square root.
    Sqrt(Box<SymExpr>),
    /// Sign (-1, 0, +1).
    Sign(Box<SymExpr>),
}

impl SymExpr {
    /// Numeric literal constructor.
    pub fn num(v: f64) -> Self {
        SymExpr::Num(v)
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymExpr::Num(v) => write!(f, "{v}"),
            SymExpr::Symbol(s) => write!(f, "{s}"),
            SymExpr::Add(a, b) => write!(f, "({a} + {b})"),
            SymExpr::Mul(a, b) => write!(f, "({a} * {b})"),
            SymExpr::Div(a, b) => write!(f, "({a} / {b})"),
            SymExpr::Neg(a) => write!(f, "(-{a})"),
            SymExpr::Sqrt(a) => write!(f, "sqrt({a})"),
            SymExpr::Sign(a) => write!(f, "sign({a})"),
        }
    }
}

impl Add for SymExpr {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        SymExpr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for SymExpr {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        SymExpr::Add(Box::new(self), Box::new(SymExpr::Neg(Box::new(rhs))))
    }
}

impl Mul for SymExpr {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        SymExpr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for SymExpr {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        SymExpr::Div(Box::new(self), Box::new(rhs))
    }
}

impl Neg for SymExpr {
    type Output = Self;
    fn neg(self) -> Self {
        SymExpr::Neg(Box::new(self))
    }
}

impl Zero for SymExpr {
    fn zero() -> Self {
        SymExpr::Num(0.0)
    }

    fn is_zero(&self) -> bool {
        matches!(self, SymExpr::Num(v) if *v == 0.0)
    }
}

impl One for SymExpr {
    fn one() -> Self {
        SymExpr::Num(1.0)
    }

    fn is_one(&self) -> bool {
        matches!(self, SymExpr::Num(v) if *v == 1.0)
    }
}

impl ScalarExpr for SymExpr {
    fn from_f64(v: f64) -> Self {
        SymExpr::Num(v)
    }

    fn sqrt(&self) -> Self {
        SymExpr::Sqrt(Box::new(self.clone()))
    }

    fn sign(&self) -> Self {
        SymExpr::Sign(Box::new(self.clone()))
    }

    fn simplify(&self) -> Self {
        if let Ok(v) = self.eval_numeric(true) {
            return SymExpr::Num(v);
        }
        match self {
            SymExpr::Num(_) | SymExpr::Symbol(_) => self.clone(),
            SymExpr::Add(a, b) => SymExpr::Add(
                Box::new(ScalarExpr::simplify(a.as_ref())),
                Box::new(ScalarExpr::simplify(b.as_ref())),
            ),
            SymExpr::Mul(a, b) => SymExpr::Mul(
                Box::new(ScalarExpr::simplify(a.as_ref())),
                Box::new(ScalarExpr::simplify(b.as_ref())),
            ),
            SymExpr::Div(a, b) => SymExpr::Div(
                Box::new(ScalarExpr::simplify(a.as_ref())),
                Box::new(ScalarExpr::simplify(b.as_ref())),
            ),
            SymExpr::Neg(a) => SymExpr::Neg(Box::new(ScalarExpr::simplify(a.as_ref()))),
            SymExpr::Sqrt(a) => SymExpr::Sqrt(Box::new(ScalarExpr::simplify(a.as_ref()))),
            SymExpr::Sign(a) => SymExpr::Sign(Box::new(ScalarExpr::simplify(a.as_ref()))),
        }
    }

    fn eval_numeric(&self, real: bool) -> Result<f64> {
        match self {
            SymExpr::Num(v) => Ok(*v),
            SymExpr::Symbol(s) => Err(GeoError::non_numeric(format!("free symbol {s}"))),
            SymExpr::Add(a, b) => Ok(a.eval_numeric(real)? + b.eval_numeric(real)?),
            SymExpr::Mul(a, b) => Ok(a.eval_numeric(real)? * b.eval_numeric(real)?),
            SymExpr::Div(a, b) => Ok(a.eval_numeric(real)? / b.eval_numeric(real)?),
            SymExpr::Neg(a) => Ok(-a.eval_numeric(real)?),
            SymExpr::Sqrt(a) => {
                let v = a.eval_numeric(real)?;
                if real && v < 0.0 {
                    return Err(GeoError::non_numeric(format!(
                        "sqrt of negative value {v} in real mode"
                    )));
                }
                Ok(v.sqrt())
            }
            SymExpr::Sign(a) => {
                let v = a.eval_numeric(real)?;
                Ok(if v > 0.0 {
                    1.0
                } else if v < 0.0 {
                    -1.0
                } else {
                    0.0
                })
            }
        }
    }
}

impl SymbolicExpr for SymExpr {
    fn symbol(name: &str) -> Self {
        SymExpr::Symbol(name.to_string())
    }
}
