//! Square grid geometry. Square maps are always unbounded.

use crate::{
    geometry::{CellPosition, CoordinateSystem, DiagonalRule, DistanceOptions},
    util::unit::WorldPoint,
    Viewport,
};
use anyhow::anyhow;
use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Index of a single square cell. `(0, 0)` is the cell whose top-left corner
/// sits on the world origin, x grows to the right and y grows downward.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the cell one step away in the given direction. Steps off the edge
    /// of the `i32` plane wrap around to the other side.
    pub fn adjacent(self, direction: GridDirection) -> Self {
        let (dx, dy) = direction.to_vector();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

/// The 8 directions you can step from one square cell to another. The first
/// four (N/E/S/W) share a side with the origin cell, the rest only share a
/// corner.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GridDirection {
    N,
    E,
    S,
    W,
    NE,
    SE,
    SW,
    NW,
}

impl GridDirection {
    /// Get the `(dx, dy)` offset that moves one cell in this direction.
    /// Remember that y grows downward, so north is negative y.
    pub fn to_vector(self) -> (i32, i32) {
        match self {
            Self::N => (0, -1),
            Self::E => (1, 0),
            Self::S => (0, 1),
            Self::W => (-1, 0),
            Self::NE => (1, -1),
            Self::SE => (1, 1),
            Self::SW => (-1, 1),
            Self::NW => (-1, -1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Self::NE | Self::SE | Self::SW | Self::NW)
    }
}

/// One of the four sides of a square cell
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// A single side of a single cell, e.g. where a wall or door gets drawn
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct CellEdge {
    pub cell: GridCoord,
    pub side: EdgeSide,
}

/// An inclusive rectangular range of square cells. Can be empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridRange {
    pub min: GridCoord,
    pub max: GridCoord,
}

impl GridRange {
    pub fn new(corner1: GridCoord, corner2: GridCoord) -> Self {
        Self {
            min: GridCoord::new(
                corner1.x.min(corner2.x),
                corner1.y.min(corner2.y),
            ),
            max: GridCoord::new(
                corner1.x.max(corner2.x),
                corner1.y.max(corner2.y),
            ),
        }
    }

    /// A range containing nothing
    pub const fn empty() -> Self {
        Self {
            min: GridCoord::new(0, 0),
            max: GridCoord::new(-1, -1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Number of cells in the range
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            let width = i64::from(self.max.x) - i64::from(self.min.x) + 1;
            let height = i64::from(self.max.y) - i64::from(self.min.y) + 1;
            (width as u64).saturating_mul(height as u64)
        }
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x)
            && (self.min.y..=self.max.y).contains(&coord.y)
    }

    /// Iterate over every cell in the range, column by column
    pub fn cells(self) -> impl Iterator<Item = GridCoord> {
        (self.min.x..=self.max.x).flat_map(move |x| {
            (self.min.y..=self.max.y).map(move |y| GridCoord::new(x, y))
        })
    }
}

/// Geometry for an unbounded grid of square cells. Only constructed through
/// [Self::new], maps persist a [GeometryConfig](crate::GeometryConfig)
/// instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SquareGeometry {
    /// Length of one side of a cell, in world units
    cell_size: f64,
}

impl SquareGeometry {
    /// Number of cells of padding added on each side of the visible range, so
    /// partially visible cells at the screen edges are never dropped
    const VISIBLE_PADDING: i32 = 1;

    /// Create a new square geometry. Returns an error if the cell size isn't a
    /// positive finite number.
    pub fn new(cell_size: f64) -> anyhow::Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(anyhow!(
                "Cell size must be positive and finite, but was {}",
                cell_size
            ));
        }
        debug!("Creating square geometry with cell size {}", cell_size);
        Ok(Self { cell_size })
    }

    /// Get the center point of a cell in world space
    pub fn grid_to_world_center(&self, coord: GridCoord) -> WorldPoint {
        let half = self.cell_size / 2.0;
        let corner = self.grid_to_world(coord);
        WorldPoint::new(corner.x + half, corner.y + half)
    }

    /// The 4 cells that share a side with this one, clockwise from north
    pub fn neighbors_cardinal(&self, coord: GridCoord) -> [GridCoord; 4] {
        [
            coord.adjacent(GridDirection::N),
            coord.adjacent(GridDirection::E),
            coord.adjacent(GridDirection::S),
            coord.adjacent(GridDirection::W),
        ]
    }

    /// All 8 cells that share a side or a corner with this one
    pub fn neighbors_diagonal(&self, coord: GridCoord) -> Vec<GridCoord> {
        GridDirection::iter().map(|dir| coord.adjacent(dir)).collect()
    }

    /// Find the cell edge near a world point, for placing walls/doors. The
    /// threshold is the fraction of a cell (in `(0, 0.5)`) that counts as
    /// "near" a side. Returns `None` if the point isn't near any side, or if
    /// the point or threshold is invalid.
    ///
    /// Near a corner, more than one side qualifies. Top wins, then bottom,
    /// then left, then right.
    pub fn world_to_edge(
        &self,
        world: WorldPoint,
        threshold: f64,
    ) -> Option<CellEdge> {
        if !world.is_finite() || !(threshold > 0.0 && threshold < 0.5) {
            return None;
        }

        let cell = self.world_to_grid(world);
        // Position within the cell, normalized to [0, 1)
        let frac_x = world.x / self.cell_size - f64::from(cell.x);
        let frac_y = world.y / self.cell_size - f64::from(cell.y);

        let side = if frac_y < threshold {
            EdgeSide::Top
        } else if frac_y > 1.0 - threshold {
            EdgeSide::Bottom
        } else if frac_x < threshold {
            EdgeSide::Left
        } else if frac_x > 1.0 - threshold {
            EdgeSide::Right
        } else {
            return None;
        };
        Some(CellEdge { cell, side })
    }

    /// Get the range of cells that are at least partially visible in a
    /// viewport. Returns an error if the viewport is malformed, and an empty
    /// range if it has no area.
    pub fn visible_grid_range(
        &self,
        viewport: &Viewport,
    ) -> anyhow::Result<GridRange> {
        viewport.validate()?;
        if viewport.is_empty() {
            return Ok(GridRange::empty());
        }

        let [top_left, _, _, bottom_right] = viewport.world_corners();
        let min = self.world_to_grid(top_left);
        let max = self.world_to_grid(bottom_right);
        let pad = Self::VISIBLE_PADDING;
        Ok(GridRange::new(
            GridCoord::new(
                min.x.saturating_sub(pad),
                min.y.saturating_sub(pad),
            ),
            GridCoord::new(
                max.x.saturating_add(pad),
                max.y.saturating_add(pad),
            ),
        ))
    }
}

impl CoordinateSystem for SquareGeometry {
    type Coord = GridCoord;

    fn world_to_grid(&self, world: WorldPoint) -> GridCoord {
        GridCoord::new(
            (world.x / self.cell_size).floor() as i32,
            (world.y / self.cell_size).floor() as i32,
        )
    }

    fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            f64::from(coord.x) * self.cell_size,
            f64::from(coord.y) * self.cell_size,
        )
    }

    fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn is_within_bounds(&self, _: GridCoord) -> bool {
        true
    }

    fn clamp_to_bounds(&self, coord: GridCoord) -> GridCoord {
        coord
    }

    fn neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        self.neighbors_cardinal(coord).to_vec()
    }

    fn manhattan_distance(&self, a: GridCoord, b: GridCoord) -> f64 {
        let (dx, dy) = deltas(a, b);
        (dx + dy) as f64
    }

    fn euclidean_distance(&self, a: GridCoord, b: GridCoord) -> f64 {
        let (dx, dy) = deltas(a, b);
        ((dx * dx + dy * dy) as f64).sqrt()
    }

    fn cell_distance(
        &self,
        a: GridCoord,
        b: GridCoord,
        options: DistanceOptions,
    ) -> f64 {
        let (dx, dy) = deltas(a, b);
        match options.diagonal_rule {
            DiagonalRule::Equal => dx.max(dy) as f64,
            DiagonalRule::Euclidean => self.euclidean_distance(a, b),
            DiagonalRule::Alternating => {
                // Every second diagonal costs an extra step
                let diagonals = dx.min(dy);
                let straights = (dx - dy).abs();
                (straights + diagonals + diagonals / 2) as f64
            }
        }
    }

    fn cells_in_rectangle(
        &self,
        corner1: GridCoord,
        corner2: GridCoord,
    ) -> Vec<GridCoord> {
        GridRange::new(corner1, corner2).cells().collect()
    }

    fn cells_in_circle(
        &self,
        center: GridCoord,
        radius: f64,
    ) -> Vec<GridCoord> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Vec::new();
        }

        // A cell is in iff its center is in the circle. The circle is centered
        // on the center of the center cell, so the distance between centers is
        // just the whole-cell delta
        let reach = radius.ceil() as i32;
        let radius_sq = radius * radius;
        let mut cells = Vec::new();
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                if f64::from(dx).powi(2) + f64::from(dy).powi(2) > radius_sq {
                    continue;
                }
                // Cells past the edge of the i32 plane don't exist
                if let (Some(x), Some(y)) =
                    (center.x.checked_add(dx), center.y.checked_add(dy))
                {
                    cells.push(GridCoord::new(x, y));
                }
            }
        }
        cells
    }

    fn cells_in_line(
        &self,
        start: GridCoord,
        end: GridCoord,
    ) -> Vec<GridCoord> {
        // Bresenham's line algorithm
        // https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm#All_cases
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let (mut x, mut y) = (i64::from(start.x), i64::from(start.y));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let step_x = if x < x1 { 1 } else { -1 };
        let step_y = if y < y1 { 1 } else { -1 };
        let mut error = dx + dy;

        let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
        loop {
            cells.push(GridCoord::new(x as i32, y as i32));
            if x == x1 && y == y1 {
                break;
            }
            let error2 = 2 * error;
            if error2 >= dy {
                error += dy;
                x += step_x;
            }
            if error2 <= dx {
                error += dx;
                y += step_y;
            }
        }
        cells
    }

    fn to_cell_position(&self, coord: GridCoord) -> CellPosition {
        coord.into()
    }

    fn from_cell_position(&self, position: CellPosition) -> GridCoord {
        let (x, y) = position.pair();
        GridCoord::new(x, y)
    }
}

/// Absolute deltas between two cells on each axis, widened so extreme
/// coordinates can't overflow
fn deltas(a: GridCoord, b: GridCoord) -> (i64, i64) {
    (
        (i64::from(a.x) - i64::from(b.x)).abs(),
        (i64::from(a.y) - i64::from(b.y)).abs(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::unit::Vector2;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::HashSet;

    fn geometry() -> SquareGeometry {
        SquareGeometry::new(40.0).unwrap()
    }

    #[test]
    fn test_new_invalid() {
        assert!(SquareGeometry::new(0.0).is_err());
        assert!(SquareGeometry::new(-10.0).is_err());
        assert!(SquareGeometry::new(f64::NAN).is_err());
        assert!(SquareGeometry::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_world_to_grid() {
        let geo = geometry();
        let cell = |x, y| geo.world_to_grid(WorldPoint::new(x, y));
        assert_eq!(cell(0.0, 0.0), GridCoord::new(0, 0));
        assert_eq!(cell(39.9, 39.9), GridCoord::new(0, 0));
        assert_eq!(cell(40.0, 85.0), GridCoord::new(1, 2));
        assert_eq!(cell(-0.1, -40.0), GridCoord::new(-1, -1));
        assert_eq!(cell(-40.1, 0.0), GridCoord::new(-2, 0));
    }

    #[test]
    fn test_grid_to_world() {
        let geo = geometry();
        let coord = GridCoord::new(3, -2);
        assert_eq!(geo.grid_to_world(coord), WorldPoint::new(120.0, -80.0));
        assert_eq!(
            geo.grid_to_world_center(coord),
            WorldPoint::new(140.0, -60.0)
        );
        assert_eq!(geo.world_to_grid(geo.grid_to_world(coord)), coord);
        assert_eq!(geo.world_to_grid(geo.grid_to_world_center(coord)), coord);
    }

    #[test]
    fn test_grid_to_screen() {
        let geo = geometry();
        let pan = Vector2::new(10.0, 20.0);
        let screen = geo.grid_to_screen(GridCoord::new(1, 1), pan, 0.5);
        assert_approx_eq!(screen.x, 30.0);
        assert_approx_eq!(screen.y, 40.0);
        assert_approx_eq!(geo.scaled_cell_size(0.5), 20.0);
    }

    #[test]
    fn test_always_unbounded() {
        let geo = geometry();
        let far = GridCoord::new(-1_000_000, 1_000_000);
        assert!(geo.is_within_bounds(far));
        assert_eq!(geo.clamp_to_bounds(far), far);
    }

    #[test]
    fn test_neighbors() {
        let geo = geometry();
        let origin = GridCoord::ORIGIN;
        assert_eq!(
            geo.neighbors(origin),
            vec![
                GridCoord::new(0, -1),
                GridCoord::new(1, 0),
                GridCoord::new(0, 1),
                GridCoord::new(-1, 0),
            ]
        );

        let all: HashSet<_> =
            geo.neighbors_diagonal(origin).into_iter().collect();
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&origin));
        for dir in GridDirection::iter() {
            let (dx, dy) = dir.to_vector();
            assert_eq!(dir.is_diagonal(), dx != 0 && dy != 0);
        }
    }

    #[test]
    fn test_distances() {
        let geo = geometry();
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 1);
        assert_eq!(geo.manhattan_distance(a, b), 4.0);
        assert_approx_eq!(geo.euclidean_distance(a, b), 10f64.sqrt());
        let distance =
            |rule| geo.cell_distance(a, b, DistanceOptions::new(rule));
        assert_eq!(distance(DiagonalRule::Alternating), 3.0);
        assert_eq!(distance(DiagonalRule::Equal), 3.0);
        assert_approx_eq!(distance(DiagonalRule::Euclidean), 10f64.sqrt());
    }

    #[test]
    fn test_alternating_diagonals() {
        let geo = geometry();
        let alternating = DistanceOptions::new(DiagonalRule::Alternating);
        let origin = GridCoord::ORIGIN;
        // 1 diagonal costs 1, 2 cost 3, 3 cost 4, 4 cost 6...
        let expected = [0.0, 1.0, 3.0, 4.0, 6.0, 7.0];
        for (n, &cost) in expected.iter().enumerate() {
            let n = n as i32;
            assert_eq!(
                geo.cell_distance(origin, GridCoord::new(n, -n), alternating),
                cost
            );
        }
        assert_eq!(
            geo.cell_distance(origin, GridCoord::new(-5, 2), alternating),
            6.0
        );
    }

    #[test]
    fn test_distance_symmetry() {
        let geo = geometry();
        let points = [
            GridCoord::new(0, 0),
            GridCoord::new(3, 1),
            GridCoord::new(-4, 7),
            GridCoord::new(10, -10),
        ];
        let rules = [
            DiagonalRule::Alternating,
            DiagonalRule::Equal,
            DiagonalRule::Euclidean,
        ];
        for &a in &points {
            for &b in &points {
                assert_eq!(
                    geo.manhattan_distance(a, b),
                    geo.manhattan_distance(b, a)
                );
                assert_eq!(
                    geo.euclidean_distance(a, b),
                    geo.euclidean_distance(b, a)
                );
                for &rule in &rules {
                    let options = DistanceOptions::new(rule);
                    assert_eq!(
                        geo.cell_distance(a, b, options),
                        geo.cell_distance(b, a, options)
                    );
                }
            }
            assert_eq!(geo.manhattan_distance(a, a), 0.0);
            assert_eq!(
                geo.cell_distance(a, a, DistanceOptions::default()),
                0.0
            );
        }
    }

    #[test]
    fn test_cells_in_rectangle() {
        let geo = geometry();
        let cells =
            geo.cells_in_rectangle(GridCoord::new(0, 0), GridCoord::new(2, 2));
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(unique.len(), 9);

        // Corner order doesn't matter
        let flipped =
            geo.cells_in_rectangle(GridCoord::new(2, 2), GridCoord::new(0, 0));
        assert_eq!(flipped.into_iter().collect::<HashSet<_>>(), unique);

        let single = GridCoord::new(5, -3);
        assert_eq!(geo.cells_in_rectangle(single, single), vec![single]);
    }

    #[test]
    fn test_cells_in_circle() {
        let geo = geometry();
        let center = GridCoord::new(2, 2);
        assert_eq!(geo.cells_in_circle(center, 0.0), vec![center]);
        // Radius 1 is a plus sign, the corners are sqrt(2) away
        assert_eq!(geo.cells_in_circle(center, 1.0).len(), 5);
        assert_eq!(geo.cells_in_circle(center, 1.5).len(), 9);
        assert_eq!(geo.cells_in_circle(center, 2.0).len(), 13);
        assert!(geo.cells_in_circle(center, -1.0).is_empty());
        assert!(geo.cells_in_circle(center, f64::NAN).is_empty());
    }

    #[test]
    fn test_cells_in_circle_plane_edge() {
        let geo = geometry();
        let corner = GridCoord::new(i32::MAX, i32::MIN);
        let cells: HashSet<_> =
            geo.cells_in_circle(corner, 1.0).into_iter().collect();
        let expected: HashSet<_> = [
            corner,
            GridCoord::new(i32::MAX - 1, i32::MIN),
            GridCoord::new(i32::MAX, i32::MIN + 1),
        ]
        .iter()
        .copied()
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_adjacent_wraps() {
        let corner = GridCoord::new(i32::MAX, i32::MIN);
        assert_eq!(
            corner.adjacent(GridDirection::NE),
            GridCoord::new(i32::MIN, i32::MAX)
        );
        assert_eq!(
            corner.adjacent(GridDirection::SW),
            GridCoord::new(i32::MAX - 1, i32::MIN + 1)
        );
    }

    #[test]
    fn test_cells_in_line() {
        let geo = geometry();
        assert_eq!(
            geo.cells_in_line(GridCoord::new(0, 0), GridCoord::new(3, 3)),
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(1, 1),
                GridCoord::new(2, 2),
                GridCoord::new(3, 3),
            ]
        );
        assert_eq!(
            geo.cells_in_line(GridCoord::new(4, 1), GridCoord::new(4, 1)),
            vec![GridCoord::new(4, 1)]
        );
        assert_eq!(
            geo.cells_in_line(GridCoord::new(0, 0), GridCoord::new(-3, 0)),
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(-1, 0),
                GridCoord::new(-2, 0),
                GridCoord::new(-3, 0),
            ]
        );
    }

    #[test]
    fn test_cells_in_line_connected() {
        let geo = geometry();
        let cases = [
            (GridCoord::new(0, 0), GridCoord::new(7, 2)),
            (GridCoord::new(-3, 5), GridCoord::new(4, -6)),
            (GridCoord::new(2, 9), GridCoord::new(2, -1)),
        ];
        for &(start, end) in &cases {
            let line = geo.cells_in_line(start, end);
            assert_eq!(line.first(), Some(&start));
            assert_eq!(line.last(), Some(&end));
            let (dx, dy) = deltas(start, end);
            assert_eq!(line.len() as i64, dx.max(dy) + 1);
            for pair in line.windows(2) {
                let (step_x, step_y) = deltas(pair[0], pair[1]);
                assert!(step_x <= 1 && step_y <= 1, "gap in line {:?}", line);
            }
        }
    }

    #[test]
    fn test_world_to_edge() {
        let geo = geometry();
        let side = |x, y| {
            geo.world_to_edge(WorldPoint::new(x, y), 0.2).map(|edge| {
                assert_eq!(edge.cell, GridCoord::new(1, 1));
                edge.side
            })
        };
        assert_eq!(side(60.0, 42.0), Some(EdgeSide::Top));
        assert_eq!(side(60.0, 78.0), Some(EdgeSide::Bottom));
        assert_eq!(side(42.0, 60.0), Some(EdgeSide::Left));
        assert_eq!(side(78.0, 60.0), Some(EdgeSide::Right));
        assert_eq!(side(60.0, 60.0), None);
        // Corners: top beats left/right, bottom beats left/right
        assert_eq!(side(42.0, 42.0), Some(EdgeSide::Top));
        assert_eq!(side(78.0, 78.0), Some(EdgeSide::Bottom));

        // Negative cells work the same way
        assert_eq!(
            geo.world_to_edge(WorldPoint::new(-2.0, -20.0), 0.2),
            Some(CellEdge {
                cell: GridCoord::new(-1, -1),
                side: EdgeSide::Right
            })
        );

        // Bad input
        let point = WorldPoint::new(42.0, 42.0);
        assert_eq!(geo.world_to_edge(point, 0.5), None);
        assert_eq!(geo.world_to_edge(point, 0.0), None);
        let nan = WorldPoint::new(f64::NAN, 42.0);
        assert_eq!(geo.world_to_edge(nan, 0.2), None);
    }

    #[test]
    fn test_visible_grid_range() {
        let geo = geometry();
        let viewport =
            Viewport::new(Vector2::new(-40.0, 0.0), 1.0, 400.0, 200.0);
        let range = geo.visible_grid_range(&viewport).unwrap();
        assert_eq!(range.min, GridCoord::new(0, -1));
        assert_eq!(range.max, GridCoord::new(12, 6));
        assert!(range.contains(GridCoord::new(5, 3)));
        assert_eq!(range.len(), range.cells().count() as u64);

        let empty = Viewport::new(Vector2::ZERO, 1.0, 0.0, 200.0);
        assert!(geo.visible_grid_range(&empty).unwrap().is_empty());

        let invalid = Viewport::new(Vector2::ZERO, 0.0, 400.0, 200.0);
        assert!(geo.visible_grid_range(&invalid).is_err());
    }

    #[test]
    fn test_cell_position() {
        let geo = geometry();
        let coord = GridCoord::new(4, -9);
        let position = geo.to_cell_position(coord);
        assert_eq!(position, CellPosition::Square { x: 4, y: -9 });
        assert_eq!(geo.from_cell_position(position), coord);
        assert_eq!(
            geo.from_cell_position(CellPosition::Hex { q: 1, r: 2 }),
            GridCoord::new(1, 2)
        );
    }
}
