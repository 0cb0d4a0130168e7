//! Ordered collections of cells.
//!
//! Cell order is preserved by every operation; renderers rely on it for
//! draw order. A [`Geometry`] owns its cells outright: filtering and lifting
//! build new geometries instead of sharing cells.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::cell::Cell;
use crate::geometry::vertex::{self, Vertex};
use crate::geometry_error::GeometryError;
use crate::scaffold::Movement;

/// Ordered sequence of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry<M> {
    cells: Vec<Cell<M>>,
}

impl<M> Default for Geometry<M> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<M> Geometry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<Cell<M>>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell<M>] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell<M>> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Cell<M>> {
        self.cells
    }

    /// Multiply coordinate `i` of every vertex by `factors[i]`, in place.
    ///
    /// Axes beyond `factors.len()` are left untouched.
    pub fn scale(&mut self, factors: &[f64]) {
        self.move_vertices(|v| vertex::scale(v, factors));
    }

    /// Value-returning counterpart of [`Geometry::scale`].
    pub fn scaled(mut self, factors: &[f64]) -> Self {
        self.scale(factors);
        self
    }

    /// Append a 0-cell at `vertex`.
    pub fn add(&mut self, vertex: Vertex, meta: M) {
        self.cells.push(Cell::point(vertex, meta));
    }

    pub fn push_cell(&mut self, cell: Cell<M>) {
        self.cells.push(cell);
    }

    /// Append the cells of each geometry in iteration order.
    pub fn append<I>(&mut self, geometries: I)
    where
        I: IntoIterator<Item = Geometry<M>>,
    {
        for geometry in geometries {
            self.cells.extend(geometry.cells);
        }
    }

    /// Replace every vertex of every cell with `f(vertex)`, in place.
    pub fn move_vertices<F>(&mut self, mut f: F)
    where
        F: FnMut(&[f64]) -> Vertex,
    {
        for cell in &mut self.cells {
            cell.move_vertices(&mut f);
        }
    }

    /// Value-returning counterpart of [`Geometry::move_vertices`].
    pub fn with_vertices<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[f64]) -> Vertex,
    {
        self.move_vertices(f);
        self
    }

    /// Lift every cell one dimension up (see [`Cell::lift`]).
    ///
    /// Cells with any uncovered vertex are dropped; the survivors keep their
    /// relative order.
    pub fn lift<F>(&self, base: f64, mut f: F, flip: bool) -> Geometry<M>
    where
        M: Clone,
        F: FnMut(&[f64], &[u8]) -> Movement,
    {
        let cells: Vec<_> = self
            .cells
            .iter()
            .filter_map(|cell| cell.lift(base, &mut f, flip))
            .collect();
        let dropped = self.cells.len() - cells.len();
        if dropped > 0 {
            log::debug!("lift at {base}: dropped {dropped} of {} cells", self.cells.len());
        }
        Geometry { cells }
    }

    /// Copy of the cells satisfying `predicate`.
    pub fn filter_cells<P>(&self, mut predicate: P) -> Geometry<M>
    where
        M: Clone,
        P: FnMut(&Cell<M>) -> bool,
    {
        self.cells
            .iter()
            .filter(|cell| predicate(cell))
            .cloned()
            .collect()
    }

    /// Copy of the cells of dimension at most `dimension`.
    pub fn filter_max_dimension(&self, dimension: usize) -> Geometry<M>
    where
        M: Clone,
    {
        self.filter_cells(|cell| cell.dimension() <= dimension)
    }

    /// Swap every cell's meta payload.
    pub fn map_meta<N, F>(self, mut f: F) -> Geometry<N>
    where
        F: FnMut(M) -> N,
    {
        self.cells
            .into_iter()
            .map(|cell| cell.map_meta(&mut f))
            .collect()
    }
}

impl<M> FromIterator<Cell<M>> for Geometry<M> {
    fn from_iter<I: IntoIterator<Item = Cell<M>>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<M> Extend<Cell<M>> for Geometry<M> {
    fn extend<I: IntoIterator<Item = Cell<M>>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<M> IntoIterator for Geometry<M> {
    type Item = Cell<M>;
    type IntoIter = std::vec::IntoIter<Cell<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Geometry<M> {
    type Item = &'a Cell<M>;
    type IntoIter = std::slice::Iter<'a, Cell<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<M> DebugInvariants for Geometry<M> {
    fn validate_invariants(&self) -> Result<(), GeometryError> {
        self.cells.iter().try_for_each(|cell| cell.validate_invariants())
    }
}
