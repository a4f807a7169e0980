//! Error types for the geometry kernel

use thiserror::Error;

/// Errors raised by the geometry kernel.
///
/// Almost every numeric operation has a documented degenerate-input
/// fallback instead of an error; the homogeneous transform is the one
/// exception because a weight other than 1 means the input is not a point.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("homogeneous weight must be 1.0, got {0}")]
    InvalidHomogeneousWeight(f64),
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
