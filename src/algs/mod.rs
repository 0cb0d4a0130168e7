//! Realization algorithms.

pub mod parallel;
pub mod realize;
pub mod render;

pub use parallel::realize_each;
pub use realize::{Realization, realize, realize_at, vertex_at};
pub use render::{RenderGeometry, RenderOptions, prepare};
