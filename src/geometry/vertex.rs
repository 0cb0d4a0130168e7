//! Vertex positions.
//!
//! A vertex is an ordered list of real coordinates; it has no identity beyond
//! its position. During realization every lift appends exactly one trailing
//! coordinate, so a vertex of a `d`-dimensional realization has length `d`.

/// Position of a cell corner.
pub type Vertex = Vec<f64>;

/// Copy `vertex` and append `coordinate` as a new trailing axis.
#[inline]
pub fn extend(vertex: &[f64], coordinate: f64) -> Vertex {
    let mut out = Vec::with_capacity(vertex.len() + 1);
    out.extend_from_slice(vertex);
    out.push(coordinate);
    out
}

/// Copy `vertex` with coordinate `i` multiplied by `factors[i]`.
///
/// Only the first `min(factors.len(), vertex.len())` axes are touched.
#[inline]
pub fn scale(vertex: &[f64], factors: &[f64]) -> Vertex {
    let mut out = vertex.to_vec();
    for (x, f) in out.iter_mut().zip(factors) {
        *x *= *f;
    }
    out
}
