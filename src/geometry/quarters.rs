//! Quarter-grid snapping for realized geometry.
//!
//! Inner slices are lifted to `level + 0.25` / `level + 0.75` and overhang caps
//! to `level ± 0.25`, leaving visible gaps between layers. Snapping collapses
//! those gaps back onto the integer grid while keeping the `level + 0.5`
//! midlines where they are.

use crate::geometry::geometry::Geometry;

/// Which quarter of the unit interval a coordinate sits closest to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuarterBucket {
    /// Bucket 0: fractional part nearest `0`.
    Zero,
    /// Bucket 1: fractional part nearest `0.25`.
    Quarter,
    /// Bucket 2: fractional part nearest `0.5`.
    Half,
    /// Bucket 3: fractional part nearest `0.75` or `1`.
    ThreeQuarters,
}

/// Classify the fractional part of `x` by its nearest quarter.
///
/// Fractions in `[0.875, 1)` round up to the next whole number and are
/// classified with [`QuarterBucket::ThreeQuarters`] so they snap upwards.
pub fn quarter(x: f64) -> QuarterBucket {
    let fraction = x - x.floor();
    match (fraction * 4.0).round() as u8 {
        0 => QuarterBucket::Zero,
        1 => QuarterBucket::Quarter,
        2 => QuarterBucket::Half,
        _ => QuarterBucket::ThreeQuarters,
    }
}

/// Snap a single coordinate according to its [`quarter`].
pub fn snap(x: f64) -> f64 {
    match quarter(x) {
        QuarterBucket::Zero | QuarterBucket::Quarter => x.floor(),
        QuarterBucket::Half => x,
        QuarterBucket::ThreeQuarters => x.ceil(),
    }
}

/// Snap every coordinate of every vertex in `geometry` in place.
pub fn round_to_quarters<M>(geometry: &mut Geometry<M>) {
    geometry.move_vertices(|vertex| vertex.iter().copied().map(snap).collect());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_buckets() {
        assert_eq!(quarter(3.0), QuarterBucket::Zero);
        assert_eq!(quarter(3.25), QuarterBucket::Quarter);
        assert_eq!(quarter(3.5), QuarterBucket::Half);
        assert_eq!(quarter(3.75), QuarterBucket::ThreeQuarters);
        assert_eq!(quarter(-0.25), QuarterBucket::ThreeQuarters);
        assert_eq!(quarter(2.999), QuarterBucket::ThreeQuarters);
    }

    #[test]
    fn snapping_closes_slice_gaps() {
        assert_eq!(snap(1.25), 1.0);
        assert_eq!(snap(1.75), 2.0);
        assert_eq!(snap(1.5), 1.5);
        assert_eq!(snap(-0.25), 0.0);
        assert_eq!(snap(4.0), 4.0);
    }

    #[test]
    fn rounds_whole_geometry() {
        let mut geometry = Geometry::new();
        geometry.add(vec![0.25, 0.5, 0.75], 'a');
        geometry.add(vec![-0.25, 1.0], 'b');
        round_to_quarters(&mut geometry);
        let vertices: Vec<_> = geometry
            .iter()
            .map(|cell| cell.vertices()[0].clone())
            .collect();
        assert_eq!(vertices, vec![vec![0.0, 0.5, 1.0], vec![0.0, 1.0]]);
    }
}
