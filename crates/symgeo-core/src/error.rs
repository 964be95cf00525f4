//! Error types for algebraic operations.
//!
//! This module defines the core error type used throughout the library
//! for shape-checked matrix and group operations. All errors are raised
//! synchronously at the point of misuse; none are transient, so nothing
//! is ever retried.

use thiserror::Error;

/// Errors that can occur during algebraic operations.
#[derive(Debug, Clone, Error)]
pub enum GeoError {
    /// Operand shapes are incompatible.
    ///
    /// This error occurs when composing, reshaping, tangent round-tripping,
    /// or column-stacking values whose shapes do not line up. Operations
    /// fail fast; nothing is silently truncated or padded.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape or length
        expected: String,
        /// Actual shape or length
        actual: String,
    },

    /// A vector-only operation was invoked on a non-vector shape.
    ///
    /// A vector is any matrix with a single row or a single column.
    #[error("Operation requires a vector, got a {rows}x{cols} matrix")]
    NotAVector {
        /// Row count of the offending operand
        rows: usize,
        /// Column count of the offending operand
        cols: usize,
    },

    /// A fixed-dimension constructor received arguments of the wrong arity.
    #[error("Construction failed: {reason}")]
    Construction {
        /// Description of the arity mismatch
        reason: String,
    },

    /// Linear-algebra inverse of a non-invertible or non-square matrix.
    #[error("Matrix is not invertible: {reason}")]
    SingularMatrix {
        /// Description of why no inverse exists
        reason: String,
    },

    /// Numeric evaluation of an expression that is not fully numeric.
    ///
    /// This error occurs when an expression still contains free symbols,
    /// or evaluates outside the requested (e.g. real) domain.
    #[error("Expression is not numeric: {reason}")]
    NonNumeric {
        /// Description of the non-numeric subexpression
        reason: String,
    },
}

impl GeoError {
    /// Create a ShapeMismatch error from expected/actual descriptions.
    pub fn shape_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a NotAVector error for the given shape.
    pub fn not_a_vector(rows: usize, cols: usize) -> Self {
        Self::NotAVector { rows, cols }
    }

    /// Create a Construction error with a custom reason.
    pub fn construction<S: Into<String>>(reason: S) -> Self {
        Self::Construction {
            reason: reason.into(),
        }
    }

    /// Create a SingularMatrix error with a custom reason.
    pub fn singular<S: Into<String>>(reason: S) -> Self {
        Self::SingularMatrix {
            reason: reason.into(),
        }
    }

    /// Create a NonNumeric error with a custom reason.
    pub fn non_numeric<S: Into<String>>(reason: S) -> Self {
        Self::NonNumeric {
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations that can produce GeoError.
pub type Result<T> = std::result::Result<T, GeoError>;
