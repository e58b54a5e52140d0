//! Tacgrid is the coordinate geometry engine behind a tactical map editor. It
//! converts between screen, world and grid coordinates for either a square
//! grid or a hex grid (flat-top or pointy-top), and answers the spatial
//! questions the editor asks about cells: neighbors, distances, shapes, bounds
//! and which cells are visible in the current viewport. Rendering and
//! interaction live elsewhere; everything here is pure math.
//!
//! ```
//! use tacgrid::{
//!     CoordinateSystem, GeometryConfig, GridType, MapGeometry, WorldPoint,
//! };
//!
//! let config = GeometryConfig {
//!     grid_type: GridType::Hex,
//!     cell_size: 80.0,
//!     ..Default::default()
//! };
//! let geometry = MapGeometry::new(&config)?;
//! let cell = geometry.world_to_grid(WorldPoint::new(118.0, 70.0));
//! println!("{:?}", cell);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! See [GeometryConfig] for details on how a map's grid can be configured, and
//! the [geometry] module for a description of the coordinate spaces.

mod config;
pub mod geometry;
mod util;

pub use crate::{
    config::{
        GeometryConfig, GridType, HexOrientation, RectBounds, RenderLimits,
    },
    geometry::{
        hex::{AxialCoord, FractionalHex, HexDirection, HexGeometry, HexRange},
        map::MapGeometry,
        offset::{
            axial_to_offset, clamp_to_offset_bounds, column_to_label,
            is_within_offset_bounds, offset_to_axial, row_to_label,
            OffsetCoord,
        },
        square::{
            CellEdge, EdgeSide, GridCoord, GridDirection, GridRange,
            SquareGeometry,
        },
        CellPosition, CoordinateSystem, DiagonalRule, DistanceOptions,
        Viewport,
    },
    util::unit::{ScreenPoint, Vector2, WorldPoint},
};
