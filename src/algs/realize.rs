//! Realize a scaffold as embedded geometry.
//!
//! An `n`-dimensional diagram is realized by first realizing each of its
//! `size + 1` slices as `(n-1)`-dimensional geometry, then lifting those slice
//! geometries into `n` dimensions level by level:
//!
//! - the slice below entity `level` is lifted from `bottom` to the midline
//!   `level + 0.5`, moving each point across the entity's source side;
//! - the slice above it is lifted from `top` to the same midline, moving
//!   across the target side, with flipped vertex order;
//! - a representative point for the entity is placed at [`vertex_at`].
//!
//! At the outermost dimension `bottom`/`top` are `level` and `level + 1`, so
//! consecutive levels touch. Inside slices they are pulled in to
//! `level + 0.25`/`level + 0.75`, and every slice boundary additionally gets
//! thin caps at `level ± 0.25` so layered renderings stay closed. A cell with
//! any vertex the scaffold does not cover is dropped whole.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), globular_geometry::geometry_error::GeometryError> {
//! use globular_geometry::algs::realize::realize;
//! use globular_geometry::scaffold::Entity;
//! use globular_geometry::scaffold::in_memory::InMemoryScaffold;
//!
//! // One generator between two 0-dimensional boundaries.
//! let scaffold = InMemoryScaffold::try_new(
//!     1,
//!     vec![Entity::new("f", vec![])],
//!     vec![InMemoryScaffold::point("a"), InMemoryScaffold::point("b")],
//! )?;
//!
//! let realization = realize(&scaffold, 1)?;
//! assert_eq!(realization.geometry.len(), 3);
//! assert_eq!(realization.slice_geometries.map(|s| s.len()), Some(2));
//! # Ok(())
//! # }
//! ```

use crate::debug_invariants::DebugInvariants;
use crate::geometry::geometry::Geometry;
use crate::geometry::vertex::{self, Vertex};
use crate::geometry_error::GeometryError;
use crate::scaffold::{Direction, Entity, Movement, Scaffold};

/// Output of [`realize`].
#[derive(Clone, Debug, PartialEq)]
pub struct Realization<M> {
    /// Geometry of the whole diagram.
    pub geometry: Geometry<M>,
    /// Geometry of each slice, indexed `0..=size`; `None` at dimension 0.
    pub slice_geometries: Option<Vec<Geometry<M>>>,
}

/// Realize `scaffold` as `dimension`-dimensional geometry.
pub fn realize<S>(scaffold: &S, dimension: usize) -> Result<Realization<S::Meta>, GeometryError>
where
    S: Scaffold,
{
    realize_at(scaffold, dimension, 0)
}

/// Realize `scaffold` nested `codimension` levels below the outermost
/// diagram.
pub fn realize_at<S>(
    scaffold: &S,
    dimension: usize,
    codimension: usize,
) -> Result<Realization<S::Meta>, GeometryError>
where
    S: Scaffold,
{
    if dimension > scaffold.dimension() {
        log::debug!(
            "refusing to realize a {}-dimensional scaffold at dimension {dimension}",
            scaffold.dimension()
        );
        return Err(GeometryError::DimensionMismatch {
            requested: dimension,
            available: scaffold.dimension(),
        });
    }
    log::trace!(
        "realize: dimension={dimension} codimension={codimension} size={}",
        scaffold.size()
    );

    if dimension == 0 {
        let geometry = base_geometry(scaffold, codimension)?;
        geometry.debug_assert_invariants();
        return Ok(Realization {
            geometry,
            slice_geometries: None,
        });
    }

    let slices = collect_slices(scaffold, codimension)?;
    let slice_geometries = slices
        .iter()
        .map(|slice| realize_at(slice, dimension - 1, codimension + 1).map(|r| r.geometry))
        .collect::<Result<Vec<_>, _>>()?;
    let geometry = dimension_step(scaffold, &slices, &slice_geometries, dimension, codimension)?;
    geometry.debug_assert_invariants();

    Ok(Realization {
        geometry,
        slice_geometries: Some(slice_geometries),
    })
}

/// Representative point of entity `level` in `dimension` dimensions.
///
/// The entity's inclusion path followed by `level`, truncated to its last
/// `dimension` entries, each shifted by one half to the centre of its cell.
pub fn vertex_at<S>(scaffold: &S, level: usize, dimension: usize) -> Result<Vertex, GeometryError>
where
    S: Scaffold,
{
    if dimension == 0 {
        return Ok(Vertex::new());
    }
    let mut key = entity_at(scaffold, level)?.inclusion;
    key.push(level);
    let skip = key.len().saturating_sub(dimension);
    Ok(key[skip..].iter().map(|&x| x as f64 + 0.5).collect())
}

fn entity_at<S: Scaffold>(scaffold: &S, level: usize) -> Result<Entity<S::Meta>, GeometryError> {
    scaffold.entity(level).ok_or(GeometryError::MissingEntity {
        level,
        size: scaffold.size(),
    })
}

fn base_geometry<S: Scaffold>(
    scaffold: &S,
    codimension: usize,
) -> Result<Geometry<S::Meta>, GeometryError> {
    let mut geometry = Geometry::new();
    geometry.add(Vertex::new(), base_meta(scaffold, codimension)?);
    Ok(geometry)
}

/// Meta of the first entity, or of the lowest boundary point when the
/// scaffold has no entities of its own.
fn base_meta<S: Scaffold>(scaffold: &S, codimension: usize) -> Result<S::Meta, GeometryError> {
    if let Some(entity) = scaffold.entity(0) {
        return Ok(entity.meta);
    }
    let missing = GeometryError::MissingEntity {
        level: 0,
        size: scaffold.size(),
    };
    if scaffold.dimension() == 0 {
        return Err(missing);
    }
    match scaffold.slice(0, codimension) {
        Some(slice) => base_meta(&slice, codimension + 1),
        None => Err(missing),
    }
}

fn collect_slices<S: Scaffold>(scaffold: &S, codimension: usize) -> Result<Vec<S>, GeometryError> {
    let size = scaffold.size();
    (0..=size)
        .map(|level| {
            scaffold
                .slice(level, codimension)
                .ok_or(GeometryError::MissingSlice { level, size })
        })
        .collect()
}

/// Lift the slice geometries of `scaffold` one dimension up.
fn dimension_step<S: Scaffold>(
    scaffold: &S,
    slices: &[S],
    slice_geometries: &[Geometry<S::Meta>],
    dimension: usize,
    codimension: usize,
) -> Result<Geometry<S::Meta>, GeometryError> {
    let mut geometry = Geometry::new();
    let top_dimension = codimension == 0;
    let size = scaffold.size();

    for level in 0..size {
        let entity = entity_at(scaffold, level)?;
        let offset = level as f64;
        let (bottom, top) = if top_dimension {
            (offset, offset + 1.0)
        } else {
            (offset + 0.25, offset + 0.75)
        };
        let middle = offset + 0.5;

        let source = &slices[level];
        let source_geometry = slice_geometries[level].lift(
            bottom,
            |point, path| {
                source
                    .move_entity(&entity, Direction::Source, point, path, codimension)
                    .map(|moved| vertex::extend(&moved, middle))
            },
            false,
        );

        let target = &slices[level + 1];
        let target_geometry = slice_geometries[level + 1].lift(
            top,
            |point, path| {
                target
                    .move_entity(&entity, Direction::Target, point, path, codimension)
                    .map(|moved| vertex::extend(&moved, middle))
            },
            true,
        );

        geometry.append([source_geometry, target_geometry]);
        geometry.add(vertex_at(scaffold, level, dimension)?, entity.meta);
    }

    // Quarter-slice caps
    if !top_dimension || size == 0 {
        for (level, slice_geometry) in slice_geometries.iter().enumerate() {
            let offset = level as f64;
            let cap = move |point: &[f64], _: &[u8]| Movement::Covered(vertex::extend(point, offset));
            let below = slice_geometry.lift(offset - 0.25, cap, false);
            let above = slice_geometry.lift(offset + 0.25, cap, true);
            geometry.append([below, above]);
        }
    }

    Ok(geometry)
}
