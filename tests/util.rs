#![allow(dead_code)]
use globular_geometry::geometry::{Cell, Geometry};
use globular_geometry::scaffold::Entity;
use globular_geometry::scaffold::in_memory::InMemoryScaffold;

pub type Meta = &'static str;

pub fn point(meta: Meta) -> InMemoryScaffold<Meta> {
    InMemoryScaffold::point(meta)
}

/// `source --entity--> target`, one dimension up from two points.
pub fn interval(source: Meta, entity: Meta, target: Meta) -> InMemoryScaffold<Meta> {
    InMemoryScaffold::try_new(
        1,
        vec![Entity::new(entity, vec![])],
        vec![point(source), point(target)],
    )
    .unwrap()
}

/// A single 2-cell `E` from the 1-cell `ea: a0 -> a1` to `eb: b0 -> b1`.
pub fn square() -> InMemoryScaffold<Meta> {
    square_with(interval("a0", "ea", "a1"), interval("b0", "eb", "b1"))
}

pub fn square_with(
    source: InMemoryScaffold<Meta>,
    target: InMemoryScaffold<Meta>,
) -> InMemoryScaffold<Meta> {
    InMemoryScaffold::try_new(2, vec![Entity::new("E", vec![0])], vec![source, target]).unwrap()
}

/// A 1-dimensional scaffold with no entities and a single boundary point.
pub fn bare_line(meta: Meta) -> InMemoryScaffold<Meta> {
    InMemoryScaffold::try_new(1, vec![], vec![point(meta)]).unwrap()
}

pub fn metas(geometry: &Geometry<Meta>) -> Vec<Meta> {
    geometry.iter().map(|cell| *cell.meta()).collect()
}

/// Last coordinate of every vertex of a cell.
pub fn heights(cell: &Cell<Meta>) -> Vec<f64> {
    cell.vertices()
        .iter()
        .map(|v| *v.last().expect("non-empty vertex"))
        .collect()
}
