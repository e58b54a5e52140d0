//! The coordinate geometry of a map. A map uses exactly one geometry, chosen
//! when the map is loaded: either a [SquareGeometry](square::SquareGeometry) or
//! a [HexGeometry](hex::HexGeometry). Both implement [CoordinateSystem], which
//! is everything the renderer and the interaction tools need to know about the
//! grid. [MapGeometry](map::MapGeometry) wraps whichever
//! one the map config asks for, so callers don't need to care which it is.
//!
//! ## Coordinate Spaces
//!
//! - **Grid** coordinates index a single cell. For square grids that's a
//!   [GridCoord] `(x, y)`, for hex grids an [AxialCoord] `(q, r)`.
//! - **Offset** coordinates ([OffsetCoord](offset::OffsetCoord)) are a
//!   rectangular re-indexing of hex positions, used for map bounds. Square
//!   grids don't need them.
//! - **World** coordinates ([WorldPoint]) are continuous and pixel-like, and
//!   independent of where the user has scrolled or zoomed to.
//! - **Screen** coordinates ([ScreenPoint]) are world coordinates with a
//!   viewport's pan and zoom applied: `screen = pan + world * zoom`.
//!
//! All geometries are immutable after construction and every operation is a
//! pure function, so a geometry can be shared freely between threads.

pub mod hex;
pub mod map;
pub mod offset;
pub mod square;

use crate::{
    util::unit::{ScreenPoint, Vector2, WorldPoint},
    AxialCoord, GridCoord,
};
use anyhow::anyhow;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumString};

/// The operation set every grid geometry provides. Implementations are
/// stateless from the caller's perspective: the same inputs always produce the
/// same outputs.
///
/// Results that enumerate cells (rectangles, circles, lines) are clipped to
/// the geometry's bounds, if it has any.
pub trait CoordinateSystem {
    /// The type used to index a single cell
    type Coord: Copy + Debug + PartialEq;

    /// Get the cell containing a world point. This never fails; points outside
    /// the map bounds still map to _some_ cell, which can then be checked with
    /// [Self::is_within_bounds].
    fn world_to_grid(&self, world: WorldPoint) -> Self::Coord;

    /// Get the anchor point of a cell in world space. For square cells this is
    /// the top-left corner, for hexes it's the center.
    fn grid_to_world(&self, coord: Self::Coord) -> WorldPoint;

    /// Get the anchor point of a cell in screen space
    fn grid_to_screen(
        &self,
        coord: Self::Coord,
        pan: Vector2,
        zoom: f64,
    ) -> ScreenPoint {
        self.world_to_screen(self.grid_to_world(coord), pan, zoom)
    }

    /// Apply a viewport transform to a world point. This is the same for all
    /// geometries.
    fn world_to_screen(
        &self,
        world: WorldPoint,
        pan: Vector2,
        zoom: f64,
    ) -> ScreenPoint {
        world_to_screen(world, pan, zoom)
    }

    /// Undo a viewport transform. Inverse of [Self::world_to_screen] for any
    /// finite, non-zero zoom.
    fn screen_to_world(
        &self,
        screen: ScreenPoint,
        pan: Vector2,
        zoom: f64,
    ) -> WorldPoint {
        screen_to_world(screen, pan, zoom)
    }

    /// Nominal size of one cell, in world units
    fn cell_size(&self) -> f64;

    /// Size of one cell on screen at the given zoom level
    fn scaled_cell_size(&self, zoom: f64) -> f64 {
        self.cell_size() * zoom
    }

    /// Is the cell inside the playable area? Always true for unbounded maps.
    fn is_within_bounds(&self, coord: Self::Coord) -> bool;

    /// Get the nearest cell inside the playable area. Identity for unbounded
    /// maps.
    fn clamp_to_bounds(&self, coord: Self::Coord) -> Self::Coord;

    /// Get every cell that shares a side with this one
    fn neighbors(&self, coord: Self::Coord) -> Vec<Self::Coord>;

    fn manhattan_distance(&self, a: Self::Coord, b: Self::Coord) -> f64;

    fn euclidean_distance(&self, a: Self::Coord, b: Self::Coord) -> f64;

    /// Distance in cells as the game rules count it. The options control how
    /// diagonal steps are counted, on geometries that have diagonals.
    fn cell_distance(
        &self,
        a: Self::Coord,
        b: Self::Coord,
        options: DistanceOptions,
    ) -> f64;

    /// Get every cell inside the bounding box of two corner cells, inclusive
    fn cells_in_rectangle(
        &self,
        corner1: Self::Coord,
        corner2: Self::Coord,
    ) -> Vec<Self::Coord>;

    /// Get every cell within `radius` cells of `center`. A negative or
    /// non-finite radius gives nothing.
    fn cells_in_circle(
        &self,
        center: Self::Coord,
        radius: f64,
    ) -> Vec<Self::Coord>;

    /// Get a contiguous path of cells from `start` to `end`, inclusive on both
    /// ends
    fn cells_in_line(
        &self,
        start: Self::Coord,
        end: Self::Coord,
    ) -> Vec<Self::Coord>;

    /// Convert a cell into the form it's stored in on map records
    fn to_cell_position(&self, coord: Self::Coord) -> CellPosition;

    /// Read a cell from a map record. Any record shape is accepted; its two
    /// components are read as a generic pair.
    fn from_cell_position(&self, position: CellPosition) -> Self::Coord;
}

/// Shared viewport transform: `screen = pan + world * zoom`
pub fn world_to_screen(
    world: WorldPoint,
    pan: Vector2,
    zoom: f64,
) -> ScreenPoint {
    ScreenPoint::new(world.x * zoom, world.y * zoom) + pan
}

/// Inverse of [world_to_screen]
pub fn screen_to_world(
    screen: ScreenPoint,
    pan: Vector2,
    zoom: f64,
) -> WorldPoint {
    let unpanned = screen - pan;
    WorldPoint::new(unpanned.x / zoom, unpanned.y / zoom)
}

/// How diagonal steps are counted when measuring distance on a grid
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiagonalRule {
    /// Tabletop "5-10-5": every second diagonal step costs double
    Alternating,
    /// Diagonal steps cost the same as straight ones (Chebyshev distance)
    Equal,
    /// Straight-line distance between cell centers
    Euclidean,
}

/// Options for [CoordinateSystem::cell_distance]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceOptions {
    pub diagonal_rule: DiagonalRule,
}

impl DistanceOptions {
    pub const fn new(diagonal_rule: DiagonalRule) -> Self {
        Self { diagonal_rule }
    }
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self::new(DiagonalRule::Alternating)
    }
}

/// A rectangular region of the screen, along with the pan and zoom applied to
/// world space to get there.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen position of the world origin
    pub pan: Vector2,
    /// Scale factor from world to screen units. Must be positive.
    pub zoom: f64,
    /// Width of the visible area, in screen units
    pub width: f64,
    /// Height of the visible area, in screen units
    pub height: f64,
}

impl Viewport {
    pub const fn new(pan: Vector2, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            pan,
            zoom,
            width,
            height,
        }
    }

    /// Make sure this viewport describes a real area of the screen. Returns an
    /// error for NaN/infinite values, a non-positive zoom, or a negative size.
    /// A size of zero is valid; it just means nothing is visible.
    pub fn validate(&self) -> anyhow::Result<()> {
        let valid = self.pan.is_finite()
            && self.zoom.is_finite()
            && self.zoom > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0;
        if valid {
            Ok(())
        } else {
            warn!("Ignoring invalid viewport {:?}", self);
            Err(anyhow!("Invalid viewport: {:?}", self))
        }
    }

    /// Is there any visible area at all?
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The four corners of the visible area, in world space
    pub fn world_corners(&self) -> [WorldPoint; 4] {
        [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(self.width, 0.0),
            ScreenPoint::new(0.0, self.height),
            ScreenPoint::new(self.width, self.height),
        ]
        .map(|corner| screen_to_world(corner, self.pan, self.zoom))
    }
}

/// How a cell position is stored on external records (map objects, painted
/// cells, etc.). Square cells are stored as `{x, y}` and hexes as `{q, r}`.
/// The geometry is responsible for converting to/from this format, via
/// [CoordinateSystem::to_cell_position] and
/// [CoordinateSystem::from_cell_position].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellPosition {
    Square { x: i32, y: i32 },
    Hex { q: i32, r: i32 },
}

impl CellPosition {
    /// Get the two components of this position, in order
    pub fn pair(self) -> (i32, i32) {
        match self {
            Self::Square { x, y } => (x, y),
            Self::Hex { q, r } => (q, r),
        }
    }
}

impl From<GridCoord> for CellPosition {
    fn from(coord: GridCoord) -> Self {
        Self::Square {
            x: coord.x,
            y: coord.y,
        }
    }
}

impl From<AxialCoord> for CellPosition {
    fn from(coord: AxialCoord) -> Self {
        Self::Hex {
            q: coord.q,
            r: coord.r,
        }
    }
}
