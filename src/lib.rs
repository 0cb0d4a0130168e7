//! # globular-geometry
//!
//! globular-geometry turns the combinatorial description of an
//! `n`-dimensional diagram of a higher category into embedded geometric
//! cells (points, edges, faces, solids) that a renderer can draw.
//!
//! ## Features
//! - [`Scaffold`](scaffold::Scaffold): read-only query interface through which
//!   a diagram model exposes its levels, slices and coordinate transforms
//! - Recursive realization that lifts slice geometry one dimension at a time
//!   ([`algs::realize`])
//! - [`Cell`](geometry::Cell) and [`Geometry`](geometry::Geometry) values with
//!   batch transforms, lifting, filtering and quarter-grid snapping
//! - Optional render preparation (annotation, layout hook, axis scaling,
//!   slice layers) and batch realization (parallel with the `rayon` feature)
//!
//! ## Determinism
//!
//! Realization is a pure function of the scaffold: calling it twice on an
//! unchanged scaffold produces identical cell sequences.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! globular-geometry = "0.3"
//! # Optional features:
//! # features = ["rayon", "strict-invariants"]
//! ```
//!
//! ## Shared metadata
//! Cells carry their entity's meta by value. When meta is large, instantiate
//! scaffolds with `Meta = Arc<T>`; lifting then clones the handle only.

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod geometry_error;
pub mod scaffold;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::parallel::realize_each;
    pub use crate::algs::realize::{Realization, realize, realize_at, vertex_at};
    pub use crate::algs::render::{
        Annotated, IdentityLayout, Layout, RenderGeometry, RenderOptions, prepare,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{Cell, Geometry, Vertex, path_of, round_to_quarters};
    pub use crate::geometry_error::GeometryError;
    pub use crate::scaffold::in_memory::InMemoryScaffold;
    pub use crate::scaffold::{Direction, Entity, Movement, Scaffold};
}
