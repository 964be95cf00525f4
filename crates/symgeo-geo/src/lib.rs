//! Dynamically-shaped matrix type implementing the symgeo concept traits.
//!
//! [`Matrix`] is the linear space of two-dimensional matrices treated as a
//! Lie group under *addition*. The manifold is globally flat, so the tangent
//! space at every point is the matrix space itself and the tangent mapping
//! is a flattening bijection. Other geometric types (rotations, poses) built
//! on the same concept traits are genuinely curved; this type is the flat
//! base case they are composed from and compared against.
//!
//! # Modules
//!
//! - [`matrix`]: The matrix storage model, algebra utilities, and the
//!   Storage/Group/LieGroup implementations
//! - [`vectors`]: Dimension-specific vector and matrix constructors

pub mod matrix;
pub mod vectors;

pub use matrix::Matrix;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use symgeo_geo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::matrix::Matrix;
    pub use crate::vectors::{vector_constructor, VectorArgs};
    pub use symgeo_core::prelude::*;
}
