//! GeometryError: Unified error type for globular-geometry public APIs
//!
//! Points that a rewrite does not cover are not errors; they surface as
//! [`Movement::NotCovered`](crate::scaffold::Movement) and cause the
//! enclosing cell to be dropped. Everything in this enum is a contract
//! violation by the caller or by the scaffold implementation.

use thiserror::Error;

/// Unified error type for geometry realization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A cell was constructed from an unusable vertex list.
    #[error("Malformed vertices: {reason}")]
    MalformedVertices { reason: String },
    /// `realize` was asked for more dimensions than the scaffold has.
    #[error("Dimension mismatch: requested {requested}, scaffold has {available}")]
    DimensionMismatch { requested: usize, available: usize },
    /// The scaffold did not supply an entity at a level the algorithm needs.
    #[error("Scaffold entity missing at level {level} (size {size})")]
    MissingEntity { level: usize, size: usize },
    /// The scaffold did not supply a slice at a boundary level.
    #[error("Scaffold slice missing at level {level} (size {size})")]
    MissingSlice { level: usize, size: usize },
    /// A scaffold was built with the wrong number of slices.
    #[error("Slice count mismatch: expected {expected}, found {found}")]
    SliceCountMismatch { expected: usize, found: usize },
    /// A scaffold slice does not sit exactly one dimension below its parent.
    #[error("Slice at level {level} has dimension {found}, expected {expected}")]
    SliceDimensionMismatch {
        level: usize,
        expected: usize,
        found: usize,
    },
    /// Render preparation only supports 2 or 3 visible dimensions.
    #[error("Unsupported number of visible dimensions: {0}")]
    UnsupportedVisibleDimensions(usize),
}
