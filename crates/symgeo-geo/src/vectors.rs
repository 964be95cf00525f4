//! Dimension-specific vector and matrix constructors.
//!
//! The generic [`vector_constructor`] mirrors call sites that assemble
//! coordinates dynamically (code-generation utilities), with its expected
//! dimension checked at runtime. The fixed-arity `vector1`..`vector9`
//! functions cover the common case where the dimension is known at the call
//! site, so a wrong count of coordinates is a compile error rather than a
//! runtime one.

use crate::matrix::Matrix;
use symgeo_core::error::{GeoError, Result};
use symgeo_core::scalar::ScalarExpr;

/// Argument forms accepted by [`vector_constructor`].
///
/// The original interface accepted either one iterable of coordinates or the
/// coordinates as separate scalar arguments; the two forms are an explicit
/// tagged union here instead of runtime inspection of argument types.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorArgs<T> {
    /// A single sequence holding all coordinates.
    Sequence(Vec<T>),
    /// Separate scalar arguments. Empty means a zero vector.
    Scalars(Vec<T>),
}

/// Construction helper for a column vector of the given expected dimension.
///
/// Empty [`VectorArgs::Scalars`] yields the zero vector of length `dim`.
///
/// # Errors
///
/// Returns [`GeoError::Construction`] if the coordinate count does not match
/// `dim`.
pub fn vector_constructor<T: ScalarExpr>(dim: usize, args: VectorArgs<T>) -> Result<Matrix<T>> {
    match args {
        VectorArgs::Scalars(v) if v.is_empty() => Ok(Matrix::zeros(dim, 1)),
        VectorArgs::Sequence(v) | VectorArgs::Scalars(v) => {
            if v.len() == dim {
                Ok(Matrix::col_vec(v))
            } else {
                Err(GeoError::construction(format!(
                    "trying to construct a vector of length {dim} from {} coordinates",
                    v.len()
                )))
            }
        }
    }
}

macro_rules! fixed_vectors {
    ($($name:ident($($arg:ident),+) => $dim:literal;)+) => {
        $(
            #[doc = concat!("Column vector from exactly ", stringify!($dim), " scalars.")]
            pub fn $name<T: ScalarExpr>($($arg: T),+) -> Matrix<T> {
                Matrix::col_vec(vec![$($arg),+])
            }
        )+
    };
}

fixed_vectors! {
    vector1(x0) => 1;
    vector2(x0, x1) => 2;
    vector3(x0, x1, x2) => 3;
    vector4(x0, x1, x2, x3) => 4;
    vector5(x0, x1, x2, x3, x4) => 5;
    vector6(x0, x1, x2, x3, x4, x5) => 6;
    vector7(x0, x1, x2, x3, x4, x5, x6) => 7;
    vector8(x0, x1, x2, x3, x4, x5, x6, x7) => 8;
    vector9(x0, x1, x2, x3, x4, x5, x6, x7, x8) => 9;
}

macro_rules! zero_vectors {
    ($($name:ident => $dim:literal;)+) => {
        $(
            #[doc = concat!("Zero column vector of length ", stringify!($dim), ".")]
            pub fn $name<T: ScalarExpr>() -> Matrix<T> {
                Matrix::zeros($dim, 1)
            }
        )+
    };
}

zero_vectors! {
    z1 => 1;
    z2 => 2;
    z3 => 3;
    z4 => 4;
    z5 => 5;
    z6 => 6;
    z7 => 7;
    z8 => 8;
    z9 => 9;
}

macro_rules! zero_matrices {
    ($($name:ident => $dim:literal;)+) => {
        $(
            #[doc = concat!("Square zero matrix of dimension ", stringify!($dim), ".")]
            pub fn $name<T: ScalarExpr>() -> Matrix<T> {
                Matrix::zeros($dim, $dim)
            }
        )+
    };
}

zero_matrices! {
    z11 => 1;
    z22 => 2;
    z33 => 3;
    z44 => 4;
    z55 => 5;
    z66 => 6;
    z77 => 7;
    z88 => 8;
    z99 => 9;
}

macro_rules! identity_matrices {
    ($($name:ident => $dim:literal;)+) => {
        $(
            #[doc = concat!("Identity matrix of dimension ", stringify!($dim), ".")]
            pub fn $name<T: ScalarExpr>() -> Matrix<T> {
                Matrix::eye($dim)
            }
        )+
    };
}

identity_matrices! {
    i1 => 1;
    i2 => 2;
    i3 => 3;
    i4 => 4;
    i5 => 5;
    i6 => 6;
    i7 => 7;
    i8 => 8;
    i9 => 9;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_constructor_accepts_both_forms() {
        let from_sequence =
            vector_constructor(3, VectorArgs::Sequence(vec![1.0, 2.0, 3.0])).unwrap();
        let from_scalars =
            vector_constructor(3, VectorArgs::Scalars(vec![1.0, 2.0, 3.0])).unwrap();
        assert_eq!(from_sequence, from_scalars);
        assert_eq!(from_sequence.shape(), (3, 1));
    }

    #[test]
    fn test_vector_constructor_arity_mismatch() {
        let err = vector_constructor(3, VectorArgs::Scalars(vec![1.0, 2.0])).unwrap_err();
        assert!(matches!(err, GeoError::Construction { .. }));

        let err = vector_constructor(2, VectorArgs::Sequence(vec![1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, GeoError::Construction { .. }));
    }

    #[test]
    fn test_vector_constructor_empty_scalars_is_zero_vector() {
        let v = vector_constructor::<f64>(4, VectorArgs::Scalars(vec![])).unwrap();
        assert_eq!(v, Matrix::zeros(4, 1));
    }

    #[test]
    fn test_fixed_arity_constructors() {
        assert_eq!(vector1(5.0), Matrix::col_vec(vec![5.0]));
        assert_eq!(
            vector3(1.0, 2.0, 3.0),
            vector_constructor(3, VectorArgs::Scalars(vec![1.0, 2.0, 3.0])).unwrap()
        );
        assert_eq!(vector9(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0).shape(), (9, 1));
    }

    #[test]
    fn test_zero_and_identity_helpers() {
        assert_eq!(z3::<f64>(), Matrix::zeros(3, 1));
        assert_eq!(z33::<f64>(), Matrix::zeros(3, 3));
        assert_eq!(i3::<f64>(), Matrix::eye(3));
        assert_eq!(i1::<f64>()[(0, 0)], 1.0);
    }
}
