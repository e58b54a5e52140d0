//! Runtime selection between square and hex geometry, driven by map config.

use crate::{
    geometry::{CellPosition, CoordinateSystem, DistanceOptions},
    util::unit::WorldPoint,
    GeometryConfig, GridType, HexGeometry, SquareGeometry,
};
use anyhow::Context;
use log::debug;
use validator::Validate;

/// The geometry of one map. This wraps either kind of geometry, so that code
/// that just needs to talk about cells doesn't have to care which kind of grid
/// the map uses. Cells are passed around as [CellPosition], the same format
/// they're stored in on map records.
///
/// If you need operations specific to one grid type (e.g. hex labels or edge
/// hit-testing), use [Self::as_square]/[Self::as_hex].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MapGeometry {
    Square(SquareGeometry),
    Hex(HexGeometry),
}

impl MapGeometry {
    /// Build the geometry described by a map config. Returns an error if the
    /// config is invalid.
    pub fn new(config: &GeometryConfig) -> anyhow::Result<Self> {
        debug!("Building map geometry with config {:?}", config);
        config.validate().context("invalid config")?;

        Ok(match config.grid_type {
            GridType::Square => {
                Self::Square(SquareGeometry::new(config.cell_size)?)
            }
            GridType::Hex => Self::Hex(
                HexGeometry::new(
                    config.cell_size,
                    config.orientation,
                    config.bounds,
                )?
                .with_limits(config.limits)?,
            ),
        })
    }

    pub fn grid_type(&self) -> GridType {
        match self {
            Self::Square(_) => GridType::Square,
            Self::Hex(_) => GridType::Hex,
        }
    }

    pub fn as_square(&self) -> Option<&SquareGeometry> {
        match self {
            Self::Square(geo) => Some(geo),
            Self::Hex(_) => None,
        }
    }

    pub fn as_hex(&self) -> Option<&HexGeometry> {
        match self {
            Self::Square(_) => None,
            Self::Hex(geo) => Some(geo),
        }
    }
}

/// Run the same expression against whichever geometry is inside, with `$geo`
/// bound to it
macro_rules! dispatch {
    ($self:ident, $geo:ident => $ex:expr) => {
        match $self {
            MapGeometry::Square($geo) => $ex,
            MapGeometry::Hex($geo) => $ex,
        }
    };
}

impl CoordinateSystem for MapGeometry {
    type Coord = CellPosition;

    fn world_to_grid(&self, world: WorldPoint) -> CellPosition {
        dispatch!(self, geo => geo.to_cell_position(geo.world_to_grid(world)))
    }

    fn grid_to_world(&self, coord: CellPosition) -> WorldPoint {
        dispatch!(self, geo => geo.grid_to_world(geo.from_cell_position(coord)))
    }

    fn cell_size(&self) -> f64 {
        dispatch!(self, geo => geo.cell_size())
    }

    fn is_within_bounds(&self, coord: CellPosition) -> bool {
        dispatch!(self, geo => {
            geo.is_within_bounds(geo.from_cell_position(coord))
        })
    }

    fn clamp_to_bounds(&self, coord: CellPosition) -> CellPosition {
        dispatch!(self, geo => {
            let clamped = geo.clamp_to_bounds(geo.from_cell_position(coord));
            geo.to_cell_position(clamped)
        })
    }

    fn neighbors(&self, coord: CellPosition) -> Vec<CellPosition> {
        dispatch!(self, geo => {
            geo.neighbors(geo.from_cell_position(coord))
                .into_iter()
                .map(|c| geo.to_cell_position(c))
                .collect()
        })
    }

    fn manhattan_distance(&self, a: CellPosition, b: CellPosition) -> f64 {
        dispatch!(self, geo => geo.manhattan_distance(
            geo.from_cell_position(a),
            geo.from_cell_position(b),
        ))
    }

    fn euclidean_distance(&self, a: CellPosition, b: CellPosition) -> f64 {
        dispatch!(self, geo => geo.euclidean_distance(
            geo.from_cell_position(a),
            geo.from_cell_position(b),
        ))
    }

    fn cell_distance(
        &self,
        a: CellPosition,
        b: CellPosition,
        options: DistanceOptions,
    ) -> f64 {
        dispatch!(self, geo => geo.cell_distance(
            geo.from_cell_position(a),
            geo.from_cell_position(b),
            options,
        ))
    }

    fn cells_in_rectangle(
        &self,
        corner1: CellPosition,
        corner2: CellPosition,
    ) -> Vec<CellPosition> {
        dispatch!(self, geo => {
            geo.cells_in_rectangle(
                geo.from_cell_position(corner1),
                geo.from_cell_position(corner2),
            )
            .into_iter()
            .map(|c| geo.to_cell_position(c))
            .collect()
        })
    }

    fn cells_in_circle(
        &self,
        center: CellPosition,
        radius: f64,
    ) -> Vec<CellPosition> {
        dispatch!(self, geo => {
            geo.cells_in_circle(geo.from_cell_position(center), radius)
                .into_iter()
                .map(|c| geo.to_cell_position(c))
                .collect()
        })
    }

    fn cells_in_line(
        &self,
        start: CellPosition,
        end: CellPosition,
    ) -> Vec<CellPosition> {
        dispatch!(self, geo => {
            geo.cells_in_line(
                geo.from_cell_position(start),
                geo.from_cell_position(end),
            )
            .into_iter()
            .map(|c| geo.to_cell_position(c))
            .collect()
        })
    }

    fn to_cell_position(&self, coord: CellPosition) -> CellPosition {
        // Normalize to the record shape this geometry writes
        dispatch!(self, geo => {
            geo.to_cell_position(geo.from_cell_position(coord))
        })
    }

    fn from_cell_position(&self, position: CellPosition) -> CellPosition {
        self.to_cell_position(position)
    }
}
