//! Read-only combinatorial view of a diagram.
//!
//! A [`Scaffold`] describes one `n`-dimensional diagram as a stack of
//! entities ("levels") separated by `(n-1)`-dimensional slices. Realization
//! only queries it; concrete diagram-backed scaffolds live with the diagram
//! model and are injected through this trait.
//!
//! - [`Entity`]: metadata and inclusion path of one level.
//! - [`Direction`]: which side of an entity a slice sits on.
//! - [`Movement`]: result of displacing a slice point across an entity.
//! - [`in_memory::InMemoryScaffold`]: explicit tree of levels and slices.

pub mod in_memory;

use serde::{Deserialize, Serialize};

use crate::geometry::vertex::Vertex;

/// One combinatorial level of a scaffold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity<M> {
    /// Opaque identification payload carried onto generated cells.
    pub meta: M,
    /// Position of this level within its ancestor scaffolds, outermost first.
    pub inclusion: Vec<usize>,
}

impl<M> Entity<M> {
    pub fn new(meta: M, inclusion: Vec<usize>) -> Self {
        Self { meta, inclusion }
    }
}

/// Side of an entity a slice is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The slice below the entity (its input boundary).
    Source,
    /// The slice above the entity (its output boundary).
    Target,
}

/// Outcome of moving a point across an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum Movement {
    /// The point is covered by the rewrite and lands at these coordinates.
    Covered(Vertex),
    /// The point lies outside the rewrite's support.
    NotCovered,
}

impl Movement {
    /// Transform the covered coordinates, leaving `NotCovered` alone.
    #[inline]
    pub fn map<F>(self, f: F) -> Movement
    where
        F: FnOnce(Vertex) -> Vertex,
    {
        match self {
            Movement::Covered(v) => Movement::Covered(f(v)),
            Movement::NotCovered => Movement::NotCovered,
        }
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        matches!(self, Movement::Covered(_))
    }

    #[inline]
    pub fn into_option(self) -> Option<Vertex> {
        match self {
            Movement::Covered(v) => Some(v),
            Movement::NotCovered => None,
        }
    }
}

impl From<Option<Vertex>> for Movement {
    fn from(value: Option<Vertex>) -> Self {
        value.map_or(Movement::NotCovered, Movement::Covered)
    }
}

/// Read-only query interface over a diagram's level structure.
///
/// A scaffold of dimension `n > 0` has `size()` entities and `size() + 1`
/// slices: slice `level` sits directly below entity `level`, slice
/// `level + 1` directly above it. A scaffold of dimension `0` still exposes
/// entity `0`, which identifies the point it describes.
///
/// Slices are returned by value as `Self` so that realization recurses over
/// one concrete type; implementations should make that clone cheap.
pub trait Scaffold: Sized {
    /// Identification payload carried by entities and realized cells.
    type Meta: Clone;

    /// Dimension of the diagram this scaffold describes.
    fn dimension(&self) -> usize;

    /// Number of entities (levels).
    fn size(&self) -> usize;

    /// Entity at `level`, or `None` when out of range.
    fn entity(&self, level: usize) -> Option<Entity<Self::Meta>>;

    /// The `(dimension - 1)`-dimensional scaffold at boundary `level`
    /// (`0..=size()`), as seen from `codimension` levels of nesting.
    /// `None` when `level` is out of range.
    fn slice(&self, level: usize, codimension: usize) -> Option<Self>;

    /// Displace `point` of this scaffold's geometry across `entity`.
    ///
    /// `self` is the slice on the `direction` side of `entity`. `path` is the
    /// binary-subdivision path of the vertex inside its cell (see
    /// [`path_of`](crate::geometry::path::path_of)).
    fn move_entity(
        &self,
        entity: &Entity<Self::Meta>,
        direction: Direction,
        point: &[f64],
        path: &[u8],
        codimension: usize,
    ) -> Movement;
}
