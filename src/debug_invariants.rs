//! Structural invariant checks for realized geometry.
//!
//! Realization only ever produces cells with at least one vertex whose
//! vertices all share one length. Those checks run after every realization
//! step in debug builds, or in release builds with the `strict-invariants`
//! or `check-invariants` feature.

use crate::geometry_error::GeometryError;

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Types whose structure can be validated after construction.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), GeometryError>;

    /// Panic on the first violation when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "geometry");
    }
}
