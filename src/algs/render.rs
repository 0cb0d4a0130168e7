//! Turn a scaffold into render-ready geometry.
//!
//! This is the fixed pipeline a viewer runs on every frame:
//!
//! 1. realize at the highest cell dimension the view can show, capped at
//!    the scaffold's own dimension;
//! 2. tag each cell's meta with the number of visible dimensions;
//! 3. run the injected [`Layout`] and the per-axis display scale;
//! 4. stack each slice geometry along a trailing axis at its level, tagged
//!    with one visible dimension less, laid out and scaled the same way.
//!
//! [`RenderGeometry::scene`] then picks the cells a static or animated scene
//! should draw.

use serde::{Deserialize, Serialize};

use crate::algs::realize::{Realization, realize};
use crate::geometry::geometry::Geometry;
use crate::geometry::vertex;
use crate::geometry_error::GeometryError;
use crate::scaffold::Scaffold;

const SCALE_3D: [f64; 4] = [60.0, 40.0, 80.0, 1.0];
const SCALE_2D: [f64; 3] = [40.0, 40.0, 1.0];

/// View settings that influence which geometry gets produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Number of spatial dimensions the view draws at once (2 or 3).
    pub visible_dimensions: usize,
    /// Whether one dimension is played back over time.
    pub animated: bool,
    /// Draw 2-dimensional cells in static scenes.
    pub show_surfaces: bool,
    /// Overlay the slice geometries in static scenes.
    pub show_layers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            visible_dimensions: 2,
            animated: false,
            show_surfaces: true,
            show_layers: false,
        }
    }
}

impl RenderOptions {
    /// Highest cell dimension the view realizes.
    pub fn maximum_cell_dimension(&self) -> Result<usize, GeometryError> {
        match self.visible_dimensions {
            3 => Ok(2 + usize::from(self.animated)),
            2 => Ok(3),
            n => Err(GeometryError::UnsupportedVisibleDimensions(n)),
        }
    }

    /// Display scale factor per axis.
    pub fn axis_scale(&self) -> &'static [f64] {
        if self.visible_dimensions == 3 {
            &SCALE_3D
        } else {
            &SCALE_2D
        }
    }
}

/// Cell meta tagged with the view it was prepared for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotated<M> {
    pub meta: M,
    pub visible_dimensions: usize,
}

/// Positions geometry for legibility before display scaling.
pub trait Layout {
    fn layout<S: Scaffold, M>(&self, scaffold: &S, geometry: &mut Geometry<M>);
}

/// Leaves geometry where realization put it.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityLayout;

impl Layout for IdentityLayout {
    fn layout<S: Scaffold, M>(&self, _scaffold: &S, _geometry: &mut Geometry<M>) {}
}

/// Diagram geometry plus its per-level slice layers.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGeometry<M> {
    pub diagram: Geometry<Annotated<M>>,
    /// One layer per slice level; empty for 0-dimensional realizations.
    pub slices: Vec<Geometry<Annotated<M>>>,
}

impl<M: Clone> RenderGeometry<M> {
    /// Geometry to hand to a scene built with `options`.
    ///
    /// Animated scenes get the diagram as is. Static scenes drop surfaces
    /// unless `show_surfaces` and append every slice layer when
    /// `show_layers`.
    pub fn scene(&self, options: &RenderOptions) -> Geometry<Annotated<M>> {
        if options.animated {
            return self.diagram.clone();
        }
        let mut geometry = if options.show_surfaces {
            self.diagram.clone()
        } else {
            self.diagram.filter_cells(|cell| cell.dimension() != 2)
        };
        if options.show_layers {
            geometry.append(self.slices.iter().cloned());
        }
        geometry
    }
}

/// Realize, annotate, lay out and scale `scaffold` for display.
pub fn prepare<S, L>(
    scaffold: &S,
    options: &RenderOptions,
    layout: &L,
) -> Result<RenderGeometry<S::Meta>, GeometryError>
where
    S: Scaffold,
    L: Layout,
{
    let maximum = options.maximum_cell_dimension()?;
    let dimension = maximum.min(scaffold.dimension());
    if dimension < maximum {
        log::debug!(
            "view shows {maximum}-cells but scaffold is {}-dimensional",
            scaffold.dimension()
        );
    }

    let Realization {
        geometry,
        slice_geometries,
    } = realize(scaffold, dimension)?;
    let visible = options.visible_dimensions;
    let scale = options.axis_scale();

    let mut diagram = geometry.map_meta(|meta| Annotated {
        meta,
        visible_dimensions: visible,
    });
    layout.layout(scaffold, &mut diagram);
    diagram.scale(scale);

    let slices = slice_geometries
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(level, slice)| {
            let mut layer = slice
                .with_vertices(|v| vertex::extend(v, level as f64))
                .map_meta(|meta| Annotated {
                    meta,
                    visible_dimensions: visible - 1,
                });
            layout.layout(scaffold, &mut layer);
            layer.scale(scale);
            layer
        })
        .collect();

    Ok(RenderGeometry { diagram, slices })
}
