//! Group concept: identity, composition, and inversion.

use crate::error::Result;
use crate::ops::Storage;

/// Trait for types forming a group under composition.
///
/// For any same-shaped `a`, `b`, `c` the implementation must satisfy the
/// group axioms:
///
/// - `compose(a, identity(a)) == a`
/// - `compose(a, inverse(a)) == identity(a)`
/// - `compose(compose(a, b), c) == compose(a, compose(b, c))`
///
/// # Naming caveat
///
/// `identity` and `inverse` here are the *group* operations. For the matrix
/// type the group is additive, so the group identity is the zero matrix and
/// the group inverse is negation. The linear-algebra identity matrix and
/// matrix inverse are deliberately separate operations with distinct names
/// (`matrix_identity`, `matrix_inverse`) on the concrete type.
pub trait Group: Storage {
    /// Identity element with `self`'s shape.
    ///
    /// The identity is shape-parametric rather than a singleton: for
    /// dynamically-shaped types, each shape has its own identity element.
    fn identity(&self) -> Self;

    /// Compose `self` with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`](crate::GeoError::ShapeMismatch)
    /// if the operands' shapes are incompatible.
    fn compose(&self, other: &Self) -> Result<Self>;

    /// Group inverse of `self`.
    fn inverse(&self) -> Self;
}
