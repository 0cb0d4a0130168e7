//! Geometric cells.
//!
//! A [`Cell`] of dimension `d` is an ordered list of vertices plus the meta of
//! the diagram entity that produced it. Vertex order encodes the cell's
//! orientation: a cell lifted from a source slice lists its base vertices
//! before its lifted vertices, one lifted from a target slice lists them the
//! other way round, so neighbouring cells agree on a shared winding.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::path::path_of;
use crate::geometry::vertex::{self, Vertex};
use crate::geometry_error::GeometryError;
use crate::scaffold::Movement;

/// Fixed-dimension geometric primitive with mutable vertex positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell<M> {
    dimension: usize,
    vertices: Vec<Vertex>,
    meta: M,
}

impl<M> Cell<M> {
    /// Build a cell, rejecting an empty vertex list or vertices of unequal
    /// length.
    pub fn try_new(dimension: usize, vertices: Vec<Vertex>, meta: M) -> Result<Self, GeometryError> {
        validate_vertices(&vertices)?;
        Ok(Self {
            dimension,
            vertices,
            meta,
        })
    }

    /// A 0-cell at `vertex`.
    pub fn point(vertex: Vertex, meta: M) -> Self {
        Self {
            dimension: 0,
            vertices: vec![vertex],
            meta,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn meta(&self) -> &M {
        &self.meta
    }

    /// Consume the cell into `(dimension, vertices, meta)`.
    pub fn into_parts(self) -> (usize, Vec<Vertex>, M) {
        (self.dimension, self.vertices, self.meta)
    }

    /// Replace every vertex `v` with `f(v)` in place.
    pub fn move_vertices<F>(&mut self, mut f: F)
    where
        F: FnMut(&[f64]) -> Vertex,
    {
        for v in &mut self.vertices {
            *v = f(v);
        }
    }

    /// Value-returning counterpart of [`Cell::move_vertices`].
    pub fn with_vertices<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[f64]) -> Vertex,
    {
        self.move_vertices(f);
        self
    }

    /// Swap the meta payload, keeping shape and position.
    pub fn map_meta<N, F>(self, f: F) -> Cell<N>
    where
        F: FnOnce(M) -> N,
    {
        Cell {
            dimension: self.dimension,
            vertices: self.vertices,
            meta: f(self.meta),
        }
    }

    /// Lift into one dimension higher.
    ///
    /// Base vertices are the current vertices with `base` appended; lifted
    /// vertices are `f(vertex, path)` where `path` is the vertex's
    /// binary-subdivision path. The new vertex list is `base ++ lifted`, or
    /// `lifted ++ base` when `flip` is set. Returns `None` as soon as `f`
    /// reports a vertex as not covered: a cell is never partially lifted.
    pub fn lift<F>(&self, base: f64, mut f: F, flip: bool) -> Option<Cell<M>>
    where
        M: Clone,
        F: FnMut(&[f64], &[u8]) -> Movement,
    {
        let n = self.vertices.len();
        let mut lifted = Vec::with_capacity(n);
        for (i, v) in self.vertices.iter().enumerate() {
            lifted.push(f(v, &path_of(i, n)).into_option()?);
        }
        let based = self.vertices.iter().map(|v| vertex::extend(v, base));

        let mut vertices = Vec::with_capacity(2 * n);
        if flip {
            vertices.extend(lifted);
            vertices.extend(based);
        } else {
            vertices.extend(based);
            vertices.extend(lifted);
        }

        Some(Cell {
            dimension: self.dimension + 1,
            vertices,
            meta: self.meta.clone(),
        })
    }
}

fn validate_vertices(vertices: &[Vertex]) -> Result<(), GeometryError> {
    let first = vertices.first().ok_or_else(|| GeometryError::MalformedVertices {
        reason: "cell has no vertices".into(),
    })?;
    if let Some((i, v)) = vertices
        .iter()
        .enumerate()
        .find(|(_, v)| v.len() != first.len())
    {
        return Err(GeometryError::MalformedVertices {
            reason: format!(
                "vertex {i} has {} coordinates, vertex 0 has {}",
                v.len(),
                first.len()
            ),
        });
    }
    Ok(())
}

impl<M> DebugInvariants for Cell<M> {
    fn validate_invariants(&self) -> Result<(), GeometryError> {
        validate_vertices(&self.vertices)
    }
}

/// Prints `dimension:[(x, y), (x, y), ...]` without the meta payload.
impl<M> fmt::Display for Cell<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self
            .vertices
            .iter()
            .map(|v| format!("({})", v.iter().join(", ")))
            .join(", ");
        write!(f, "{}:[{}]", self.dimension, vertices)
    }
}
