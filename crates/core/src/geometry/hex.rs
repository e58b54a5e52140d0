//! Hexagonal grid geometry, for both flat-top and pointy-top hexes.
//!
//! ## Coordinate System
//!
//! Hexes are addressed with axial coordinates `(q, r)`. This is the cube
//! coordinate system described by
//! [Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube),
//! minus the third component. Every hex has a cube form `(x, y, z)` with
//! `x = q`, `z = r` and `y = -q - r`, so that `x + y + z = 0`. We store two
//! components and derive the third whenever the math calls for it (distance,
//! rounding, interpolation).
//!
//! Axial neighbor relationships don't depend on orientation; only the mapping
//! between axial and world space does. Hex `(0, 0)` is always centered on the
//! world origin.
//!
//! Iterating axial coordinates directly gives you a parallelogram of hexes,
//! which is a bad fit for a rectangular map. So map bounds are defined in
//! offset space instead (see [offset](super::offset)), and all shape
//! enumeration builds its candidates in offset space too.

use crate::{
    geometry::{
        offset::{self, OffsetCoord},
        CellPosition, CoordinateSystem, DistanceOptions,
    },
    timed,
    util::unit::{Vector2, WorldPoint},
    HexOrientation, RectBounds, RenderLimits, Viewport,
};
use anyhow::{anyhow, Context};
use derive_more::Display;
use log::{debug, warn};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};
use strum::{EnumIter, IntoEnumIterator};
use validator::Validate;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A hex position in axial coordinates. See module-level docs.
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
#[display(fmt = "({}, {})", q, r)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The derived third cube component. `q + r + s = 0` always, modulo
    /// wraparound at the edges of the `i32` plane.
    pub const fn s(&self) -> i32 {
        self.q.wrapping_neg().wrapping_sub(self.r)
    }

    /// Get the hex one step away in the given direction. Steps off the edge of
    /// the `i32` plane wrap around to the other side.
    pub fn adjacent(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.to_vector();
        Self::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr))
    }

    /// Get all 6 adjacent hexes, in the order of [HexDirection]
    pub fn adjacents(self) -> impl Iterator<Item = AxialCoord> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// steps it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, etc.
    ///
    /// Two hexes at opposite corners of the `i32` plane are almost `2^33`
    /// steps apart, so this doesn't fit in a `u32`.
    pub fn distance_to(self, other: AxialCoord) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        // Two adjacent hex centers are separated by two cube edges
        (dq.unsigned_abs() + dr.unsigned_abs() + (dq + dr).unsigned_abs()) / 2
    }
}

/// The 6 directions from a hex to its neighbors, as axial vectors. These are
/// the same for both orientations; the orientation only changes which way each
/// one points on screen.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    PlusQ,
    PlusQMinusR,
    MinusR,
    MinusQ,
    MinusQPlusR,
    PlusR,
}

impl HexDirection {
    /// Get the `(dq, dr)` offset that moves one hex in this direction
    pub fn to_vector(self) -> (i32, i32) {
        match self {
            Self::PlusQ => (1, 0),
            Self::PlusQMinusR => (1, -1),
            Self::MinusR => (0, -1),
            Self::MinusQ => (-1, 0),
            Self::MinusQPlusR => (-1, 1),
            Self::PlusR => (0, 1),
        }
    }

    /// Get the direction pointing the opposite way
    pub fn opposite(self) -> Self {
        match self {
            Self::PlusQ => Self::MinusQ,
            Self::PlusQMinusR => Self::MinusQPlusR,
            Self::MinusR => Self::PlusR,
            Self::MinusQ => Self::PlusQ,
            Self::MinusQPlusR => Self::PlusQMinusR,
            Self::PlusR => Self::MinusR,
        }
    }
}

/// A point in axial space that doesn't necessarily fall on a hex center. This
/// is what you get when you map an arbitrary world point into hex space. Use
/// [Self::round] to find the hex that contains it.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "({}, {})", q, r)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    /// Find the hex containing this point.
    ///
    /// Rounding `q` and `r` independently is **wrong**: near hex boundaries it
    /// can land on a hex that doesn't contain the point at all. Instead, round
    /// all three cube components, then throw away whichever one moved the
    /// most and rebuild it from the other two, which restores `x + y + z = 0`.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> AxialCoord {
        let x = self.q;
        let z = self.r;
        let y = -x - z;

        let mut rx = x.round();
        let mut ry = y.round();
        let mut rz = z.round();

        let x_diff = (rx - x).abs();
        let y_diff = (ry - y).abs();
        let z_diff = (rz - z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }
        debug_assert_eq!(rx + ry + rz, 0.0, "cube rounding broke x+y+z=0");

        AxialCoord::new(rx as i32, rz as i32)
    }

    /// Linearly interpolate between two points. `t = 0` gives `self`, `t = 1`
    /// gives `other`. Interpolating q and r is equivalent to interpolating all
    /// three cube components, since the third is linear in the other two.
    pub fn lerp(self, other: FractionalHex, t: f64) -> Self {
        Self::new(
            self.q + (other.q - self.q) * t,
            self.r + (other.r - self.r) * t,
        )
    }
}

impl From<AxialCoord> for FractionalHex {
    fn from(coord: AxialCoord) -> Self {
        Self::new(f64::from(coord.q), f64::from(coord.r))
    }
}

/// An inclusive range of axial coordinates. Note that this is a
/// **parallelogram** of hexes, not a rectangle. Can be empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexRange {
    pub min_q: i32,
    pub max_q: i32,
    pub min_r: i32,
    pub max_r: i32,
}

impl HexRange {
    /// A range containing nothing
    pub const fn empty() -> Self {
        Self {
            min_q: 0,
            max_q: -1,
            min_r: 0,
            max_r: -1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_q > self.max_q || self.min_r > self.max_r
    }

    /// Number of hexes in the range
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            let q_span = i64::from(self.max_q) - i64::from(self.min_q) + 1;
            let r_span = i64::from(self.max_r) - i64::from(self.min_r) + 1;
            (q_span as u64).saturating_mul(r_span as u64)
        }
    }

    pub fn contains(&self, coord: AxialCoord) -> bool {
        (self.min_q..=self.max_q).contains(&coord.q)
            && (self.min_r..=self.max_r).contains(&coord.r)
    }

    /// The hex in the middle of the range (rounded toward negative infinity)
    pub fn center(&self) -> AxialCoord {
        let mid = |min: i32, max: i32| {
            ((i64::from(min) + i64::from(max)).div_euclid(2)) as i32
        };
        AxialCoord::new(
            mid(self.min_q, self.max_q),
            mid(self.min_r, self.max_r),
        )
    }

    /// Get the overlap between this range and another one
    pub fn intersect(&self, other: &HexRange) -> HexRange {
        HexRange {
            min_q: self.min_q.max(other.min_q),
            max_q: self.max_q.min(other.max_q),
            min_r: self.min_r.max(other.min_r),
            max_r: self.max_r.min(other.max_r),
        }
    }

    /// The four corner hexes of the parallelogram
    fn corners(&self) -> [AxialCoord; 4] {
        [
            AxialCoord::new(self.min_q, self.min_r),
            AxialCoord::new(self.max_q, self.min_r),
            AxialCoord::new(self.min_q, self.max_r),
            AxialCoord::new(self.max_q, self.max_r),
        ]
    }

    /// Iterate over every hex in the range
    pub fn cells(self) -> impl Iterator<Item = AxialCoord> {
        (self.min_q..=self.max_q).flat_map(move |q| {
            (self.min_r..=self.max_r).map(move |r| AxialCoord::new(q, r))
        })
    }
}

/// Everything about hex layout that's derived from size and orientation. This
/// is computed once when the geometry is built.
///
/// https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
#[derive(Copy, Clone, Debug, PartialEq)]
struct HexLayout {
    /// Axial to world, for a hex size of 1
    forward: na::Matrix2<f64>,
    /// World to axial, for a hex size of 1
    inverse: na::Matrix2<f64>,
    /// Angle of the first vertex, clockwise from +x (remember y is down)
    start_angle: f64,
    width: f64,
    height: f64,
    horiz_spacing: f64,
    vert_spacing: f64,
}

impl HexLayout {
    fn new(hex_size: f64, orientation: HexOrientation) -> Self {
        match orientation {
            HexOrientation::Flat => Self {
                forward: na::Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3),
                inverse: na::Matrix2::new(
                    2.0 / 3.0,
                    0.0,
                    -1.0 / 3.0,
                    SQRT_3 / 3.0,
                ),
                start_angle: 0.0,
                width: 2.0 * hex_size,
                height: SQRT_3 * hex_size,
                horiz_spacing: 1.5 * hex_size,
                vert_spacing: SQRT_3 * hex_size,
            },
            HexOrientation::Pointy => Self {
                forward: na::Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5),
                inverse: na::Matrix2::new(
                    SQRT_3 / 3.0,
                    -1.0 / 3.0,
                    0.0,
                    2.0 / 3.0,
                ),
                start_angle: FRAC_PI_6,
                width: SQRT_3 * hex_size,
                height: 2.0 * hex_size,
                horiz_spacing: SQRT_3 * hex_size,
                vert_spacing: 1.5 * hex_size,
            },
        }
    }
}

/// Geometry for a grid of hexagons, optionally bounded to a rectangular
/// playable area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGeometry {
    /// Distance from the center of a hex to any of its vertices
    hex_size: f64,
    orientation: HexOrientation,
    /// Playable area, in offset space
    bounds: Option<RectBounds>,
    limits: RenderLimits,
    layout: HexLayout,
}

impl HexGeometry {
    /// Extra hexes added around every side of the visible range. The range is
    /// a loose approximation, so this makes sure no partially visible hex gets
    /// culled.
    const VISIBLE_PADDING: i32 = 2;

    /// Create a new hex geometry, with default render limits. Returns an error
    /// if the hex size isn't a positive finite number.
    pub fn new(
        hex_size: f64,
        orientation: HexOrientation,
        bounds: Option<RectBounds>,
    ) -> anyhow::Result<Self> {
        if !(hex_size.is_finite() && hex_size > 0.0) {
            return Err(anyhow!(
                "Hex size must be positive and finite, but was {}",
                hex_size
            ));
        }
        debug!(
            "Creating {} hex geometry with size {} and bounds {:?}",
            orientation, hex_size, bounds
        );
        Ok(Self {
            hex_size,
            orientation,
            bounds,
            limits: RenderLimits::default(),
            layout: HexLayout::new(hex_size, orientation),
        })
    }

    /// Replace the render limits on this geometry. Both caps have to be at
    /// least 1.
    pub fn with_limits(self, limits: RenderLimits) -> anyhow::Result<Self> {
        limits.validate().context("invalid render limits")?;
        Ok(Self { limits, ..self })
    }

    pub fn hex_size(&self) -> f64 {
        self.hex_size
    }

    pub fn orientation(&self) -> HexOrientation {
        self.orientation
    }

    pub fn bounds(&self) -> Option<RectBounds> {
        self.bounds
    }

    pub fn limits(&self) -> RenderLimits {
        self.limits
    }

    /// Width of a single hex, vertex to vertex for flat-top, side to side for
    /// pointy-top
    pub fn hex_width(&self) -> f64 {
        self.layout.width
    }

    /// Height of a single hex, side to side for flat-top, vertex to vertex for
    /// pointy-top
    pub fn hex_height(&self) -> f64 {
        self.layout.height
    }

    /// Horizontal distance between the centers of adjacent columns
    pub fn horiz_spacing(&self) -> f64 {
        self.layout.horiz_spacing
    }

    /// Vertical distance between the centers of adjacent rows
    pub fn vert_spacing(&self) -> f64 {
        self.layout.vert_spacing
    }

    /// Map a world point into axial space, without rounding to a hex
    pub fn world_to_fractional_hex(&self, world: WorldPoint) -> FractionalHex {
        let axial = self.layout.inverse * na::Vector2::new(world.x, world.y)
            / self.hex_size;
        FractionalHex::new(axial.x, axial.y)
    }

    /// Get the world positions of a hex's 6 vertices, going clockwise (y is
    /// down) from the vertex at the start angle of the orientation: due east
    /// for flat-top, east-southeast for pointy-top.
    pub fn hex_vertices(&self, coord: AxialCoord) -> [WorldPoint; 6] {
        let center = self.grid_to_world(coord);
        let mut vertices = [center; 6];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let angle = self.layout.start_angle + FRAC_PI_3 * i as f64;
            *vertex = center
                + Vector2::new(
                    self.hex_size * angle.cos(),
                    self.hex_size * angle.sin(),
                );
        }
        vertices
    }

    /// Get the number of steps between two hexes
    pub fn hex_distance(&self, a: AxialCoord, b: AxialCoord) -> u64 {
        a.distance_to(b)
    }

    /// Get a hex's position in offset space, for this geometry's orientation
    pub fn axial_to_offset(&self, coord: AxialCoord) -> OffsetCoord {
        offset::axial_to_offset(coord, self.orientation)
    }

    /// Get the axial position of an offset coordinate, for this geometry's
    /// orientation
    pub fn offset_to_axial(&self, coord: OffsetCoord) -> AxialCoord {
        offset::offset_to_axial(coord, self.orientation)
    }

    /// Get the human-readable label for a hex, e.g. `C7` for column 2, row 6
    /// in offset space. Returns `None` for hexes left of or above the origin,
    /// since there are no labels for negative offsets.
    pub fn coord_label(&self, coord: AxialCoord) -> Option<String> {
        let (col, row) = offset::axial_to_wide_offset(coord, self.orientation);
        let col = u32::try_from(col).ok()?;
        let row = u32::try_from(row).ok()?;
        Some(format!(
            "{}{}",
            offset::column_to_label(col),
            offset::row_to_label(row)
        ))
    }

    /// Get an axial range that covers every hex at least partially visible in
    /// the viewport. This is conservative: the range is the bounding box of
    /// the viewport's corners in axial space, which is a parallelogram
    /// around a rectangle, plus some padding. So it will include plenty of
    /// hexes that aren't actually visible, but it will never miss one.
    ///
    /// Returns an error for a malformed viewport, and an empty range for a
    /// viewport with no area.
    pub fn visible_hex_range(
        &self,
        viewport: &Viewport,
    ) -> anyhow::Result<HexRange> {
        viewport.validate()?;
        if viewport.is_empty() {
            return Ok(HexRange::empty());
        }

        let corners = viewport.world_corners().map(|w| self.world_to_grid(w));
        let (min_q, max_q) = min_max(corners.map(|c| c.q));
        let (min_r, max_r) = min_max(corners.map(|c| c.r));
        let pad = Self::VISIBLE_PADDING;
        Ok(HexRange {
            min_q: min_q.saturating_sub(pad),
            max_q: max_q.saturating_add(pad),
            min_r: min_r.saturating_sub(pad),
            max_r: max_r.saturating_add(pad),
        })
    }

    /// Get every hex that should be drawn for a viewport. This is
    /// [Self::visible_hex_range], clipped to the map bounds, with the render
    /// limits applied:
    ///
    /// - Unbounded maps: if the visible range holds more than
    ///   `max_render_hexes`, only a square subset centered on the middle of
    ///   the range is returned.
    /// - Bounded maps: if the offset-space rectangle to scan is bigger than
    ///   `max_offset_area`, nothing is returned.
    ///
    /// Neither cap is an error; they just degrade the render. A malformed
    /// viewport is an error though.
    pub fn hexes_to_render(
        &self,
        viewport: &Viewport,
    ) -> anyhow::Result<Vec<AxialCoord>> {
        let range = self.visible_hex_range(viewport)?;
        if range.is_empty() {
            return Ok(Vec::new());
        }

        Ok(timed!(
            "Hex render set",
            match self.bounds {
                Some(bounds) => self.bounded_render_set(range, bounds),
                None => self.unbounded_render_set(range),
            }
        ))
    }

    fn unbounded_render_set(&self, range: HexRange) -> Vec<AxialCoord> {
        let max_hexes = self.limits.max_render_hexes;
        if range.len() <= max_hexes {
            return range.cells().collect();
        }

        // Largest odd-sided square that fits under the cap
        let side = (max_hexes as f64).sqrt().floor() as i64;
        let half = ((side - 1).max(0) / 2) as i32;
        let center = range.center();
        let subset = range.intersect(&HexRange {
            min_q: center.q.saturating_sub(half),
            max_q: center.q.saturating_add(half),
            min_r: center.r.saturating_sub(half),
            max_r: center.r.saturating_add(half),
        });
        warn!(
            "Visible range {:?} has {} hexes, over the cap of {}; \
            rendering {} hexes around {}",
            range,
            range.len(),
            max_hexes,
            subset.len(),
            center
        );
        subset.cells().collect()
    }

    fn bounded_render_set(
        &self,
        range: HexRange,
        bounds: RectBounds,
    ) -> Vec<AxialCoord> {
        // The offset transform is monotonic in both axial components, so the
        // corners of the range bound it in offset space as well
        let orientation = self.orientation;
        let corners = range
            .corners()
            .map(|c| offset::axial_to_wide_offset(c, orientation));
        let cols = min_max(corners.map(|(col, _)| col));
        let rows = min_max(corners.map(|(_, row)| row));

        let (cols, rows) = match clip_to_bounds(cols, rows, bounds) {
            Some(clipped) => clipped,
            None => return Vec::new(),
        };

        let area = span(&cols) * span(&rows);
        if area > self.limits.max_offset_area {
            warn!(
                "Offset area {} (cols {:?}, rows {:?}) is over the cap of {}; \
                skipping render",
                area, cols, rows, self.limits.max_offset_area
            );
            return Vec::new();
        }

        cols.flat_map(|col| {
            rows.clone().map(move |row| {
                offset::offset_to_axial(OffsetCoord::new(col, row), orientation)
            })
        })
        .filter(|coord| range.contains(*coord))
        .collect()
    }

    /// Convert every offset position in a rectangle to axial. The column and
    /// row spans are inclusive `(min, max)` pairs in widened offset space.
    /// Anything outside the bounds is skipped; without bounds, the rectangle
    /// is cut off at the edges of the `i32` plane.
    fn offset_rect_cells(
        &self,
        cols: (i64, i64),
        rows: (i64, i64),
    ) -> Vec<AxialCoord> {
        let (cols, rows) = match self.bounds {
            None => (saturate_span(cols), saturate_span(rows)),
            Some(bounds) => match clip_to_bounds(cols, rows, bounds) {
                Some(clipped) => clipped,
                None => return Vec::new(),
            },
        };

        let orientation = self.orientation;
        cols.flat_map(|col| {
            rows.clone().map(move |row| {
                offset::offset_to_axial(OffsetCoord::new(col, row), orientation)
            })
        })
        .collect()
    }
}

impl CoordinateSystem for HexGeometry {
    type Coord = AxialCoord;

    fn world_to_grid(&self, world: WorldPoint) -> AxialCoord {
        self.world_to_fractional_hex(world).round()
    }

    fn grid_to_world(&self, coord: AxialCoord) -> WorldPoint {
        let world = self.layout.forward
            * na::Vector2::new(f64::from(coord.q), f64::from(coord.r))
            * self.hex_size;
        WorldPoint::new(world.x, world.y)
    }

    fn cell_size(&self) -> f64 {
        self.hex_size
    }

    fn is_within_bounds(&self, coord: AxialCoord) -> bool {
        let (col, row) = offset::axial_to_wide_offset(coord, self.orientation);
        offset::is_within_wide_offset_bounds(col, row, self.bounds)
    }

    fn clamp_to_bounds(&self, coord: AxialCoord) -> AxialCoord {
        match self.bounds {
            None => coord,
            Some(bounds) => {
                let (col, row) =
                    offset::axial_to_wide_offset(coord, self.orientation);
                self.offset_to_axial(offset::clamp_wide_offset(
                    col, row, bounds,
                ))
            }
        }
    }

    fn neighbors(&self, coord: AxialCoord) -> Vec<AxialCoord> {
        coord.adjacents().collect()
    }

    // Hexes have no diagonals, so every metric is the same step count

    fn manhattan_distance(&self, a: AxialCoord, b: AxialCoord) -> f64 {
        a.distance_to(b) as f64
    }

    fn euclidean_distance(&self, a: AxialCoord, b: AxialCoord) -> f64 {
        a.distance_to(b) as f64
    }

    fn cell_distance(
        &self,
        a: AxialCoord,
        b: AxialCoord,
        _: DistanceOptions,
    ) -> f64 {
        a.distance_to(b) as f64
    }

    fn cells_in_rectangle(
        &self,
        corner1: AxialCoord,
        corner2: AxialCoord,
    ) -> Vec<AxialCoord> {
        let a = offset::axial_to_wide_offset(corner1, self.orientation);
        let b = offset::axial_to_wide_offset(corner2, self.orientation);
        self.offset_rect_cells(
            (a.0.min(b.0), a.0.max(b.0)),
            (a.1.min(b.1), a.1.max(b.1)),
        )
    }

    fn cells_in_circle(
        &self,
        center: AxialCoord,
        radius: f64,
    ) -> Vec<AxialCoord> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Vec::new();
        }

        // No two hexes in the i32 plane are further apart than this, so any
        // bigger radius covers the same cells
        const MAX_REACH: i64 = 1 << 34;

        // Each step changes an offset column/row by at most 1, so everything
        // in range is inside this box
        let reach = radius.floor().min(MAX_REACH as f64) as i64;
        let (col, row) = offset::axial_to_wide_offset(center, self.orientation);
        let mut cells = self.offset_rect_cells(
            (col - reach, col + reach),
            (row - reach, row + reach),
        );
        cells.retain(|coord| center.distance_to(*coord) <= reach as u64);
        cells
    }

    fn cells_in_line(
        &self,
        start: AxialCoord,
        end: AxialCoord,
    ) -> Vec<AxialCoord> {
        // https://www.redblobgames.com/grids/hexagons/#line-drawing
        // Nudge both endpoints the same tiny amount, so sample points that
        // land exactly on a hex edge always round the same way
        const NUDGE: FractionalHex = FractionalHex::new(1e-6, 2e-6);

        let steps = start.distance_to(end);
        let from = FractionalHex::from(start);
        let from = FractionalHex::new(from.q + NUDGE.q, from.r + NUDGE.r);
        let to = FractionalHex::from(end);
        let to = FractionalHex::new(to.q + NUDGE.q, to.r + NUDGE.r);

        (0..=steps)
            .map(|i| {
                if steps == 0 {
                    start
                } else {
                    from.lerp(to, i as f64 / steps as f64).round()
                }
            })
            .filter(|coord| self.is_within_bounds(*coord))
            .collect()
    }

    fn to_cell_position(&self, coord: AxialCoord) -> CellPosition {
        coord.into()
    }

    fn from_cell_position(&self, position: CellPosition) -> AxialCoord {
        let (q, r) = position.pair();
        AxialCoord::new(q, r)
    }
}

/// Get the smallest and largest of a set of corner values
fn min_max<T: Ord + Copy>(values: [T; 4]) -> (T, T) {
    let first = (values[0], values[0]);
    values[1..]
        .iter()
        .fold(first, |(min, max), &v| (min.min(v), max.max(v)))
}

/// Number of values in an inclusive range, which must be non-empty
fn span(range: &std::ops::RangeInclusive<i32>) -> u64 {
    (i64::from(*range.end()) - i64::from(*range.start()) + 1) as u64
}

/// Cut an inclusive widened span down to the `i32` range
fn saturate_span((min, max): (i64, i64)) -> std::ops::RangeInclusive<i32> {
    fn saturate(value: i64) -> i32 {
        value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
    saturate(min)..=saturate(max)
}

/// Clip inclusive widened offset column/row spans to a rectangular bounds.
/// Returns `None` if nothing is left.
fn clip_to_bounds(
    cols: (i64, i64),
    rows: (i64, i64),
    bounds: RectBounds,
) -> Option<(std::ops::RangeInclusive<i32>, std::ops::RangeInclusive<i32>)> {
    fn clip(
        (min, max): (i64, i64),
        bound: u32,
    ) -> Option<std::ops::RangeInclusive<i32>> {
        let upper = (i64::from(bound) - 1).min(i64::from(i32::MAX));
        let start = min.max(0);
        let end = max.min(upper);
        // Both ends are within [0, i32::MAX] when the span is non-empty
        (start <= end).then(|| start as i32..=end as i32)
    }

    Some((clip(cols, bounds.max_col)?, clip(rows, bounds.max_row)?))
}
