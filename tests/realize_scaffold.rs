mod util;

use globular_geometry::algs::realize::{realize, realize_at};
use globular_geometry::geometry::quarters::round_to_quarters;
use globular_geometry::geometry_error::GeometryError;
use globular_geometry::scaffold::in_memory::InMemoryScaffold;
use globular_geometry::scaffold::{Direction, Entity, Movement, Scaffold};
use std::sync::{Arc, Mutex};
use util::*;

#[test]
fn dimension_zero_yields_one_empty_point() {
    for scaffold in [point("x"), interval("a", "f", "b"), square()] {
        let expected = scaffold.entity(0).unwrap().meta;
        let r = realize(&scaffold, 0).unwrap();
        assert!(r.slice_geometries.is_none());
        assert_eq!(r.geometry.len(), 1);
        let cell = &r.geometry.cells()[0];
        assert_eq!(cell.dimension(), 0);
        assert_eq!(cell.vertices(), &[Vec::<f64>::new()]);
        assert_eq!(*cell.meta(), expected);
    }
}

#[test]
fn square_lifts_source_then_target_then_point() {
    let r = realize(&square(), 2).unwrap();
    let cells = r.geometry.cells();
    assert_eq!(cells.len(), 15);
    assert_eq!(
        metas(&r.geometry),
        vec![
            "a0", "a1", "ea", "a0", "a0", "a1", "a1", //
            "b0", "b1", "eb", "b0", "b0", "b1", "b1", //
            "E",
        ]
    );

    // source side: base vertices first
    assert_eq!(
        cells[0].vertices(),
        &[
            vec![0.25, 0.0],
            vec![0.5, 0.0],
            vec![0.25, 0.5],
            vec![0.5, 0.5]
        ]
    );
    // target side: lifted vertices first
    assert_eq!(
        cells[7].vertices(),
        &[
            vec![0.25, 0.5],
            vec![0.5, 0.5],
            vec![0.25, 1.0],
            vec![0.5, 1.0]
        ]
    );
    assert_eq!(cells[14].dimension(), 0);
    assert_eq!(cells[14].vertices(), &[vec![0.5, 0.5]]);
}

#[test]
fn flip_reverses_boundary_order_between_sides() {
    let r = realize(&square(), 2).unwrap();
    let cells = r.geometry.cells();
    for i in 0..7 {
        let source = heights(&cells[i]);
        let target = heights(&cells[i + 7]);
        let n = source.len() / 2;
        assert!(source[..n].iter().all(|&h| h == 0.0));
        assert!(source[n..].iter().all(|&h| h == 0.5));
        assert!(target[..n].iter().all(|&h| h == 0.5));
        assert!(target[n..].iter().all(|&h| h == 1.0));
    }
}

#[test]
fn slice_geometries_are_retained() {
    let r = realize(&square(), 2).unwrap();
    let slices = r.slice_geometries.unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0], realize_at(&interval("a0", "ea", "a1"), 1, 1).unwrap().geometry);
    assert_eq!(metas(&slices[1])[2], "eb");
}

#[test]
fn vertex_count_doubles_per_lift() {
    let scaffold = InMemoryScaffold::grid(3, 2, |key| key.len());
    let r = realize(&scaffold, 3).unwrap();
    assert!(!r.geometry.is_empty());
    for cell in r.geometry.iter() {
        assert_eq!(cell.vertices().len(), 1 << cell.dimension(), "{cell}");
        assert!(cell.vertices().iter().all(|v| v.len() == 3));
    }
}

#[test]
fn empty_scaffold_only_has_caps() {
    let r = realize(&bare_line("a"), 1).unwrap();
    let cells = r.geometry.cells();
    assert_eq!(cells.len(), 2);
    assert!(cells.iter().all(|c| c.dimension() == 1 && *c.meta() == "a"));
    assert_eq!(cells[0].vertices(), &[vec![-0.25], vec![0.0]]);
    assert_eq!(cells[1].vertices(), &[vec![0.0], vec![0.25]]);
}

#[test]
fn empty_nested_slice_realizes_below_its_dimension() {
    let r = realize(&bare_line("a"), 0).unwrap();
    assert_eq!(r.geometry.len(), 1);
    assert_eq!(*r.geometry.cells()[0].meta(), "a");

    let scaffold = square_with(bare_line("a0"), interval("b0", "eb", "b1"));
    let r = realize(&scaffold, 1).unwrap();
    assert_eq!(metas(&r.geometry), vec!["a0", "eb", "E"]);
    let cells = r.geometry.cells();
    assert_eq!(cells[0].vertices(), &[vec![0.0], vec![0.5]]);
    assert_eq!(cells[1].vertices(), &[vec![0.5], vec![1.0]]);
    assert_eq!(cells[2].vertices(), &[vec![0.5]]);
    assert_eq!(realize(&scaffold, 2).unwrap().geometry.len(), 10);
}

type Calls = Arc<Mutex<Vec<(Direction, usize)>>>;

/// Record `(direction, codimension)` of every move, shifting the first axis
/// by `shift`.
fn recording(scaffold: InMemoryScaffold<Meta>, shift: f64) -> (InMemoryScaffold<Meta>, Calls) {
    let calls = Calls::default();
    let log = Arc::clone(&calls);
    let scaffold = scaffold.with_move_rule(move |_, direction, point, _, codimension| {
        log.lock().unwrap().push((direction, codimension));
        let mut moved = point.to_vec();
        if let Some(x) = moved.first_mut() {
            *x += shift;
        }
        Movement::Covered(moved)
    });
    (scaffold, calls)
}

#[test]
fn slices_are_moved_across_their_own_side() {
    let (source, source_calls) = recording(interval("a0", "ea", "a1"), 0.0);
    let (target, target_calls) = recording(interval("b0", "eb", "b1"), 0.0);
    realize(&square_with(source, target), 2).unwrap();

    let source_calls = source_calls.lock().unwrap();
    let target_calls = target_calls.lock().unwrap();
    assert!(!source_calls.is_empty());
    assert!(!target_calls.is_empty());
    assert!(source_calls.iter().all(|&call| call == (Direction::Source, 0)));
    assert!(target_calls.iter().all(|&call| call == (Direction::Target, 0)));
}

#[test]
fn moved_points_sit_on_the_midline() {
    let (source, _) = recording(interval("a0", "ea", "a1"), 10.0);
    let r = realize(&square_with(source, interval("b0", "eb", "b1")), 2).unwrap();
    assert_eq!(
        r.geometry.cells()[0].vertices(),
        &[
            vec![0.25, 0.0],
            vec![0.5, 0.0],
            vec![10.25, 0.5],
            vec![10.5, 0.5]
        ]
    );
}

#[test]
fn nested_moves_see_their_codimension() {
    let (a0, a0_calls) = recording(point("a0"), 0.0);
    let source =
        InMemoryScaffold::try_new(1, vec![Entity::new("ea", vec![])], vec![a0, point("a1")])
            .unwrap();
    realize(&square_with(source, interval("b0", "eb", "b1")), 2).unwrap();
    assert_eq!(*a0_calls.lock().unwrap(), vec![(Direction::Source, 1)]);

    let (source, source_calls) = recording(interval("a0", "ea", "a1"), 3.0);
    let r = realize_at(&square_with(source, interval("b0", "eb", "b1")), 2, 1).unwrap();
    let source_calls = source_calls.lock().unwrap();
    assert!(!source_calls.is_empty());
    assert!(source_calls.iter().all(|&call| call == (Direction::Source, 1)));
    // inner levels start at 0.25 and meet on the 0.5 midline
    assert_eq!(
        r.geometry.cells()[0].vertices(),
        &[
            vec![0.25, 0.25],
            vec![0.5, 0.25],
            vec![3.25, 0.5],
            vec![3.5, 0.5]
        ]
    );
}

#[test]
fn uncovered_points_drop_whole_cells() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = Arc::clone(&seen);
    let target = interval("b0", "eb", "b1").with_move_rule(move |_, direction, point, path, _| {
        record.lock().unwrap().push((direction, path.to_vec()));
        if path == [1] {
            Movement::NotCovered
        } else {
            Movement::Covered(point.to_vec())
        }
    });
    let r = realize(&square_with(interval("a0", "ea", "a1"), target), 2).unwrap();

    // every 2-vertex cell of the target slice loses its upper vertex
    assert_eq!(r.geometry.len(), 7 + 1 + 1);
    assert_eq!(metas(&r.geometry)[7..], ["eb", "E"]);
    assert_eq!(r.geometry.cells()[7].vertices(), &[vec![0.5, 0.5], vec![0.5, 1.0]]);

    let seen = seen.lock().unwrap();
    assert!(seen.iter().all(|(d, _)| *d == Direction::Target));
    assert!(seen.iter().any(|(_, p)| p.is_empty()));
}

#[test]
fn realization_is_idempotent() {
    let scaffold = InMemoryScaffold::grid(3, 2, |key| key.to_vec());
    let first = realize(&scaffold, 3).unwrap();
    let second = realize(&scaffold, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rounding_collapses_inner_gaps() {
    let mut geometry = realize_at(&interval("a", "f", "b"), 1, 1).unwrap().geometry;
    round_to_quarters(&mut geometry);
    let vertices: Vec<_> = geometry.iter().map(|c| c.vertices().to_vec()).collect();
    assert_eq!(
        vertices,
        vec![
            vec![vec![0.0], vec![0.5]],
            vec![vec![0.5], vec![1.0]],
            vec![vec![0.5]],
            vec![vec![0.0], vec![0.0]],
            vec![vec![0.0], vec![0.0]],
            vec![vec![1.0], vec![1.0]],
            vec![vec![1.0], vec![1.0]],
        ]
    );
}

#[test]
fn over_dimension_is_a_contract_violation() {
    assert_eq!(
        realize(&interval("a", "f", "b"), 2).unwrap_err(),
        GeometryError::DimensionMismatch {
            requested: 2,
            available: 1
        }
    );
}

/// Claims one level but never hands out its slices.
struct Hollow;

impl Scaffold for Hollow {
    type Meta = ();

    fn dimension(&self) -> usize {
        1
    }
    fn size(&self) -> usize {
        1
    }
    fn entity(&self, _level: usize) -> Option<Entity<()>> {
        Some(Entity::new((), vec![]))
    }
    fn slice(&self, _level: usize, _codimension: usize) -> Option<Self> {
        None
    }
    fn move_entity(
        &self,
        _entity: &Entity<()>,
        _direction: Direction,
        point: &[f64],
        _path: &[u8],
        _codimension: usize,
    ) -> Movement {
        Movement::Covered(point.to_vec())
    }
}

#[test]
fn missing_slices_are_reported() {
    assert_eq!(
        realize(&Hollow, 1).unwrap_err(),
        GeometryError::MissingSlice { level: 0, size: 1 }
    );
}

#[test]
fn shared_meta_is_cloned_by_handle() {
    let scaffold = InMemoryScaffold::grid(2, 1, |key| Arc::new(key.to_vec()));
    let r = realize(&scaffold, 2).unwrap();
    let top = r.geometry.cells().last().unwrap().meta();
    let entity = scaffold.entity(0).unwrap().meta;
    assert!(Arc::ptr_eq(top, &entity));
}
