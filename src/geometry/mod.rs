//! Embedded geometric primitives produced by realization.
//!
//! - [`vertex`]: coordinate lists and per-vertex helpers.
//! - [`cell::Cell`]: one primitive with an orientation-carrying vertex order.
//! - [`geometry::Geometry`]: ordered cell collections with batch operations.
//! - [`path`]: binary-subdivision vertex paths.
//! - [`quarters`]: snapping of quarter offsets back onto the grid.

pub mod cell;
pub mod geometry;
pub mod path;
pub mod quarters;
pub mod vertex;

pub use cell::Cell;
pub use geometry::Geometry;
pub use path::path_of;
pub use quarters::round_to_quarters;
pub use vertex::Vertex;
