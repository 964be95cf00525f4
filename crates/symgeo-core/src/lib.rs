//! Concept traits for symbolic geometric types.
//!
//! This crate defines the uniform algebraic interface that every geometric
//! type in the symgeo family satisfies, so that generic algorithms
//! (composition, interpolation, optimization front ends, code generation)
//! can operate over heterogeneous types without type-specific branching.
//!
//! # Key Concepts
//!
//! - **Storage**: flattening a value to and from a fixed-length ordered
//!   sequence of scalars
//! - **Group**: `identity`, `compose`, `inverse` satisfying the group axioms
//! - **Lie Group**: a tangent-space mapping (`to_tangent`/`from_tangent`)
//!   on top of Group, modeling a differentiable manifold linearized at a point
//! - **Scalar facility**: the small surface through which the core talks to
//!   a symbolic-expression engine without assuming its representation
//!
//! # Modules
//!
//! - [`error`]: Error types for algebraic operations
//! - [`ops`]: Storage, Group, and Lie group traits and generic transforms
//! - [`scalar`]: Scalar collaborator traits and numeric implementations

pub mod error;
pub mod ops;
pub mod scalar;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{GeoError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use symgeo_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GeoError, Result};
    pub use crate::ops::{Group, LieGroup, Storage};
    pub use crate::scalar::{ScalarExpr, SymbolicExpr};
}
