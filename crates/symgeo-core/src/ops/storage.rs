//! Storage concept: flattening values to and from scalar sequences.

use crate::error::Result;
use crate::scalar::ScalarExpr;

/// Trait for types that flatten to a fixed-length ordered scalar sequence.
///
/// The flattening order is fixed and deterministic for each implementor, so
/// round-tripping through storage is lossless and generated code addressing
/// storage slots by index stays stable.
///
/// Methods take `&self` even where only the type is conceptually involved:
/// for dynamically-shaped types the shape is a runtime attribute, so an
/// instance is needed to carry it. Fixed-size types simply ignore the
/// receiver's value.
pub trait Storage: Sized {
    /// Scalar element type.
    type Scalar: ScalarExpr;

    /// Number of scalars in the flattened representation.
    fn storage_dim(&self) -> usize;

    /// Flatten into `storage_dim` scalars in the documented fixed order.
    fn to_storage(&self) -> Vec<Self::Scalar>;

    /// Reconstruct a value of `self`'s shape from a flat scalar sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`](crate::GeoError::ShapeMismatch)
    /// if `flat.len() != self.storage_dim()`.
    fn from_storage(&self, flat: &[Self::Scalar]) -> Result<Self>;
}

/// Apply a scalar transform through the flat storage representation.
///
/// This is the generic "reconstructible from flat storage" round-trip: the
/// result has the same concrete type as the input by construction, so
/// transforms like simplification can never downgrade a geometric type to a
/// bare container.
pub fn map_storage<S, F>(value: &S, mut f: F) -> Result<S>
where
    S: Storage,
    F: FnMut(&S::Scalar) -> Result<S::Scalar>,
{
    let flat = value.to_storage();
    let mut mapped = Vec::with_capacity(flat.len());
    for x in &flat {
        mapped.push(f(x)?);
    }
    value.from_storage(&mapped)
}

/// Simplify every scalar of a value, preserving its concrete type.
pub fn simplify<S: Storage>(value: &S) -> Result<S> {
    map_storage(value, |x| Ok(x.simplify()))
}

/// Numerically evaluate every scalar of a value, preserving its concrete type.
///
/// # Errors
///
/// Returns [`GeoError::NonNumeric`](crate::GeoError::NonNumeric) if any
/// element cannot be evaluated.
pub fn evalf<S: Storage>(value: &S, real: bool) -> Result<S> {
    map_storage(value, |x| {
        x.eval_numeric(real).map(|v| S::Scalar::from_f64(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::test_utils::SymExpr;

    /// Minimal two-scalar storage type for exercising the generic transforms.
    #[derive(Debug, Clone, PartialEq)]
    struct Pair(SymExpr, SymExpr);

    impl Storage for Pair {
        type Scalar = SymExpr;

        fn storage_dim(&self) -> usize {
            2
        }

        fn to_storage(&self) -> Vec<SymExpr> {
            vec![self.0.clone(), self.1.clone()]
        }

        fn from_storage(&self, flat: &[SymExpr]) -> Result<Self> {
            if flat.len() != 2 {
                return Err(GeoError::shape_mismatch("2 elements", flat.len()));
            }
            Ok(Pair(flat[0].clone(), flat[1].clone()))
        }
    }

    #[test]
    fn test_map_storage_preserves_type() {
        let p = Pair(SymExpr::num(1.0), SymExpr::num(2.0));
        let doubled =
            map_storage(&p, |x| Ok(ScalarExpr::simplify(&(x.clone() + x.clone())))).unwrap();
        assert_eq!(doubled, Pair(SymExpr::num(2.0), SymExpr::num(4.0)));
    }

    #[test]
    fn test_simplify_folds_constants() {
        let sum = SymExpr::num(1.0) + SymExpr::num(2.0);
        let p = Pair(sum, SymExpr::num(0.0));
        let simplified = simplify(&p).unwrap();
        assert_eq!(simplified.0, SymExpr::num(3.0));
    }

    #[test]
    fn test_evalf_fails_on_free_symbols() {
        use crate::scalar::SymbolicExpr;
        let p = Pair(SymExpr::symbol("x"), SymExpr::num(1.0));
        let err = evalf(&p, true).unwrap_err();
        assert!(matches!(err, GeoError::NonNumeric { .. }));
    }

    #[test]
    fn test_evalf_numeric() {
        let p = Pair(SymExpr::num(2.0) * SymExpr::num(3.0), SymExpr::num(1.0));
        let evaluated = evalf(&p, true).unwrap();
        assert_eq!(evaluated.0, SymExpr::num(6.0));
    }
}
