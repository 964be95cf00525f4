//! Lie group concept: tangent-space mapping.

use crate::error::Result;
use crate::ops::Group;

/// Trait for groups with a well-defined tangent space at every point.
///
/// `to_tangent` and `from_tangent` are the local linearization of the
/// manifold at a point. For flat manifolds (matrices under addition) the
/// tangent space is globally isomorphic to the space itself and the
/// exponential/logarithm maps degenerate to a flattening bijection; for
/// curved types elsewhere in the system they do real work.
///
/// Round-trip law for every value `m` and every tangent vector `v` of
/// length `tangent_dim`:
///
/// - `from_tangent(m, to_tangent(m)) == m`
/// - `to_tangent(from_tangent(m, v)) == v`
pub trait LieGroup: Group {
    /// Dimension of the tangent-space representation.
    fn tangent_dim(&self) -> usize;

    /// Flatten into a tangent-space vector of `tangent_dim` scalars.
    ///
    /// `epsilon` exists for interface uniformity with curved manifolds,
    /// whose logarithm maps need singularity guards; flat types ignore it.
    fn to_tangent(&self, epsilon: &Self::Scalar) -> Vec<Self::Scalar>;

    /// Reconstruct a value of `self`'s shape from a tangent-space vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`](crate::GeoError::ShapeMismatch)
    /// if `vec.len() != self.tangent_dim()`.
    fn from_tangent(&self, vec: &[Self::Scalar], epsilon: &Self::Scalar) -> Result<Self>;
}
