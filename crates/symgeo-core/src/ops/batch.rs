//! Batched transforms over independent values.
//!
//! Every operation in this core is a pure function of immutable value
//! objects, so batches of independent values can be processed in parallel
//! with no coordination. With the `parallel` feature enabled these helpers
//! fan out over rayon; otherwise they run serially with the same semantics.

use crate::error::Result;
use crate::ops::storage::{evalf, simplify, Storage};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Numerically evaluate a slice of independent values.
///
/// # Errors
///
/// Fails with the first
/// [`GeoError::NonNumeric`](crate::GeoError::NonNumeric) encountered.
pub fn evalf_slice<S>(values: &[S], real: bool) -> Result<Vec<S>>
where
    S: Storage + Send + Sync,
    S::Scalar: Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        values.par_iter().map(|v| evalf(v, real)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        values.iter().map(|v| evalf(v, real)).collect()
    }
}

/// Simplify a slice of independent values.
pub fn simplify_slice<S>(values: &[S]) -> Result<Vec<S>>
where
    S: Storage + Send + Sync,
    S::Scalar: Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        values.par_iter().map(simplify).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        values.iter().map(simplify).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SymExpr;

    #[derive(Debug, Clone, PartialEq)]
    struct One(SymExpr);

    impl Storage for One {
        type Scalar = SymExpr;

        fn storage_dim(&self) -> usize {
            1
        }

        fn to_storage(&self) -> Vec<SymExpr> {
            vec![self.0.clone()]
        }

        fn from_storage(&self, flat: &[SymExpr]) -> Result<Self> {
            if flat.len() != 1 {
                return Err(crate::GeoError::shape_mismatch("1 element", flat.len()));
            }
            Ok(One(flat[0].clone()))
        }
    }

    #[test]
    fn test_evalf_slice() {
        let values: Vec<One> = (0..16)
            .map(|i| One(SymExpr::num(f64::from(i)) + SymExpr::num(1.0)))
            .collect();
        let evaluated = evalf_slice(&values, true).unwrap();
        assert_eq!(evaluated.len(), 16);
        assert_eq!(evaluated[3].0, SymExpr::num(4.0));
    }

    #[test]
    fn test_simplify_slice() {
        let values = vec![One(SymExpr::num(2.0) * SymExpr::num(2.0))];
        let simplified = simplify_slice(&values).unwrap();
        assert_eq!(simplified[0].0, SymExpr::num(4.0));
    }
}
