//! Batch realization of independent scaffolds.
//!
//! Realization shares no state between calls, so a batch of scaffolds (one
//! per visible sub-diagram, say) can be realized concurrently. With the
//! `rayon` feature the batch runs on the global thread pool; otherwise it
//! runs sequentially. Results always come back in input order.

use crate::algs::realize::{Realization, realize};
use crate::geometry_error::GeometryError;
use crate::scaffold::Scaffold;

/// Realize every scaffold at `dimension`.
#[cfg(feature = "rayon")]
pub fn realize_each<S>(
    scaffolds: &[S],
    dimension: usize,
) -> Vec<Result<Realization<S::Meta>, GeometryError>>
where
    S: Scaffold + Sync,
    S::Meta: Send,
{
    use rayon::prelude::*;
    scaffolds
        .par_iter()
        .map(|scaffold| realize(scaffold, dimension))
        .collect()
}

/// Realize every scaffold at `dimension`.
#[cfg(not(feature = "rayon"))]
pub fn realize_each<S>(
    scaffolds: &[S],
    dimension: usize,
) -> Vec<Result<Realization<S::Meta>, GeometryError>>
where
    S: Scaffold + Sync,
    S::Meta: Send,
{
    scaffolds
        .iter()
        .map(|scaffold| realize(scaffold, dimension))
        .collect()
}
