//! In-memory implementation of the [`Scaffold`] trait.
//!
//! [`InMemoryScaffold`] stores its entities and slices explicitly, with a
//! single move rule shared by every entity acting on it. Slices live behind
//! an [`Arc`], so handing one out from [`Scaffold::slice`] is a refcount bump.
//! Useful for tests, benchmarks and prototyping before a diagram model
//! provides its own scaffold.

use std::fmt;
use std::sync::Arc;

use super::{Direction, Entity, Movement, Scaffold};
use crate::geometry_error::GeometryError;

/// Transform applied when an entity moves a point of a slice.
///
/// Arguments: acting entity, side of the entity the slice is on, point,
/// binary-subdivision path, codimension.
pub type MoveRule<M> =
    Arc<dyn Fn(&Entity<M>, Direction, &[f64], &[u8], usize) -> Movement + Send + Sync>;

/// Every point stays where it is.
pub fn identity_rule<M: 'static>() -> MoveRule<M> {
    Arc::new(|_: &Entity<M>, _: Direction, point: &[f64], _: &[u8], _: usize| {
        Movement::Covered(point.to_vec())
    })
}

/// Explicit scaffold tree.
#[derive(Clone)]
pub struct InMemoryScaffold<M> {
    dimension: usize,
    entities: Arc<[Entity<M>]>,
    slices: Arc<[InMemoryScaffold<M>]>,
    rule: MoveRule<M>,
}

impl<M: 'static> InMemoryScaffold<M> {
    /// A 0-dimensional scaffold identified by `meta`.
    pub fn point(meta: M) -> Self {
        Self::point_at(meta, Vec::new())
    }

    /// A 0-dimensional scaffold whose entity carries an inclusion path.
    pub fn point_at(meta: M, inclusion: Vec<usize>) -> Self {
        Self {
            dimension: 0,
            entities: Arc::from(vec![Entity::new(meta, inclusion)]),
            slices: Arc::from(Vec::new()),
            rule: identity_rule(),
        }
    }

    /// Build a scaffold of `dimension > 0` from its entities and the
    /// `entities.len() + 1` slices separating them.
    ///
    /// Each slice must have dimension `dimension - 1`.
    pub fn try_new(
        dimension: usize,
        entities: Vec<Entity<M>>,
        slices: Vec<InMemoryScaffold<M>>,
    ) -> Result<Self, GeometryError> {
        if dimension == 0 {
            if !slices.is_empty() {
                return Err(GeometryError::SliceCountMismatch {
                    expected: 0,
                    found: slices.len(),
                });
            }
            if entities.is_empty() {
                return Err(GeometryError::MissingEntity { level: 0, size: 0 });
            }
        } else {
            if slices.len() != entities.len() + 1 {
                return Err(GeometryError::SliceCountMismatch {
                    expected: entities.len() + 1,
                    found: slices.len(),
                });
            }
            if let Some((level, slice)) = slices
                .iter()
                .enumerate()
                .find(|(_, s)| s.dimension + 1 != dimension)
            {
                return Err(GeometryError::SliceDimensionMismatch {
                    level,
                    expected: dimension - 1,
                    found: slice.dimension,
                });
            }
        }
        Ok(Self {
            dimension,
            entities: Arc::from(entities),
            slices: Arc::from(slices),
            rule: identity_rule(),
        })
    }

    /// Replace the move rule entities apply to points of this scaffold.
    pub fn with_move_rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&Entity<M>, Direction, &[f64], &[u8], usize) -> Movement + Send + Sync + 'static,
    {
        self.rule = Arc::new(rule);
        self
    }

    /// Direct access to the stored slices.
    pub fn slices(&self) -> &[InMemoryScaffold<M>] {
        &self.slices
    }
}

impl<M: Clone + 'static> InMemoryScaffold<M> {
    /// A `dimension`-dimensional scaffold with `size` entities at every
    /// nesting depth.
    ///
    /// `meta` receives the key of each entity: the slice levels leading to
    /// its scaffold followed by its own level (0-dimensional leaves get just
    /// the slice levels). Every entity is included at the origin of its
    /// source slice. All move rules are the identity.
    pub fn grid<F>(dimension: usize, size: usize, meta: F) -> Self
    where
        F: Fn(&[usize]) -> M,
    {
        build_grid(dimension, size, &mut Vec::new(), &meta)
    }
}

fn build_grid<M, F>(
    dimension: usize,
    size: usize,
    key: &mut Vec<usize>,
    meta: &F,
) -> InMemoryScaffold<M>
where
    M: Clone + 'static,
    F: Fn(&[usize]) -> M,
{
    if dimension == 0 {
        return InMemoryScaffold::point(meta(key));
    }
    let mut entities = Vec::with_capacity(size);
    for level in 0..size {
        key.push(level);
        entities.push(Entity::new(meta(key), vec![0; dimension - 1]));
        key.pop();
    }
    let mut slices = Vec::with_capacity(size + 1);
    for level in 0..=size {
        key.push(level);
        slices.push(build_grid(dimension - 1, size, key, meta));
        key.pop();
    }
    InMemoryScaffold {
        dimension,
        entities: Arc::from(entities),
        slices: Arc::from(slices),
        rule: identity_rule(),
    }
}

impl<M: Clone> Scaffold for InMemoryScaffold<M> {
    type Meta = M;

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn size(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.entities.len()
        }
    }

    fn entity(&self, level: usize) -> Option<Entity<M>> {
        self.entities.get(level).cloned()
    }

    fn slice(&self, level: usize, _codimension: usize) -> Option<Self> {
        self.slices.get(level).cloned()
    }

    fn move_entity(
        &self,
        entity: &Entity<M>,
        direction: Direction,
        point: &[f64],
        path: &[u8],
        codimension: usize,
    ) -> Movement {
        (self.rule)(entity, direction, point, path, codimension)
    }
}

impl<M> fmt::Debug for InMemoryScaffold<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryScaffold")
            .field("dimension", &self.dimension)
            .field("entities", &self.entities.len())
            .field("slices", &self.slices)
            .finish_non_exhaustive()
    }
}
