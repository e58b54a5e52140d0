//! Conversions between axial hex coordinates and rectangular "offset"
//! coordinates, plus the spreadsheet-style labels shown for offset positions.
//!
//! Axial coordinates are the natural way to address hexes, but iterating them
//! directly gives you a parallelogram. Offset coordinates shove every other
//! column (flat-top) or row (pointy-top) over by half a hex, so that iterating
//! them gives you a rectangle. We only use them for bounds checks and
//! rectangular iteration; all real hex math happens in axial/cube space.
//!
//! See https://www.redblobgames.com/grids/hexagons/#coordinates-offset. We use
//! "odd-q" for flat-top hexes and "odd-r" for pointy-top.

use crate::{util::half_floor, AxialCoord, HexOrientation, RectBounds};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A rectangular re-indexing of a hex position. See module-level docs.
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
#[display(fmt = "[{}, {}]", col, row)]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Convert an axial position to offset coordinates for the given orientation.
/// Positions whose offset doesn't fit in `i32` wrap around, which keeps the
/// conversion an exact inverse of [offset_to_axial] over the whole `i32` plane.
pub fn axial_to_offset(
    coord: AxialCoord,
    orientation: HexOrientation,
) -> OffsetCoord {
    let AxialCoord { q, r } = coord;
    match orientation {
        // odd-q: every odd column is shoved down half a hex
        HexOrientation::Flat => {
            OffsetCoord::new(q, r.wrapping_add(half_floor(q)))
        }
        // odd-r: every odd row is shoved right half a hex
        HexOrientation::Pointy => {
            OffsetCoord::new(q.wrapping_add(half_floor(r)), r)
        }
    }
}

/// Convert an offset position back to axial coordinates. This is the exact
/// inverse of [axial_to_offset] for the same orientation.
pub fn offset_to_axial(
    coord: OffsetCoord,
    orientation: HexOrientation,
) -> AxialCoord {
    let OffsetCoord { col, row } = coord;
    match orientation {
        HexOrientation::Flat => {
            AxialCoord::new(col, row.wrapping_sub(half_floor(col)))
        }
        HexOrientation::Pointy => {
            AxialCoord::new(col.wrapping_sub(half_floor(row)), row)
        }
    }
}

/// Same as [axial_to_offset], but widened to `(col, row)` in i64 so the
/// result is exact for every axial position. Used wherever the offset is
/// compared against bounds.
pub(crate) fn axial_to_wide_offset(
    coord: AxialCoord,
    orientation: HexOrientation,
) -> (i64, i64) {
    let (q, r) = (i64::from(coord.q), i64::from(coord.r));
    match orientation {
        HexOrientation::Flat => (q, r + q.div_euclid(2)),
        HexOrientation::Pointy => (q + r.div_euclid(2), r),
    }
}

/// Is the offset position inside the given bounds? Upper bounds are exclusive.
/// If there are no bounds, everything is in bounds.
pub fn is_within_offset_bounds(
    col: i32,
    row: i32,
    bounds: Option<RectBounds>,
) -> bool {
    is_within_wide_offset_bounds(i64::from(col), i64::from(row), bounds)
}

pub(crate) fn is_within_wide_offset_bounds(
    col: i64,
    row: i64,
    bounds: Option<RectBounds>,
) -> bool {
    match bounds {
        None => true,
        Some(RectBounds { max_col, max_row }) => {
            (0..i64::from(max_col)).contains(&col)
                && (0..i64::from(max_row)).contains(&row)
        }
    }
}

/// Force an offset position into the given bounds, clamping each axis
/// independently. With zero-sized bounds there is no valid position, so the
/// axis clamps to 0.
pub fn clamp_to_offset_bounds(
    coord: OffsetCoord,
    bounds: Option<RectBounds>,
) -> OffsetCoord {
    match bounds {
        None => coord,
        Some(bounds) => clamp_wide_offset(
            i64::from(coord.col),
            i64::from(coord.row),
            bounds,
        ),
    }
}

/// Clamp a widened offset position into bounds. The result always fits in
/// `i32`; bounds past `i32::MAX` are cut off there.
pub(crate) fn clamp_wide_offset(
    col: i64,
    row: i64,
    bounds: RectBounds,
) -> OffsetCoord {
    fn clamp_axis(value: i64, max: u32) -> i32 {
        let upper = i64::from(max.saturating_sub(1)).min(i64::from(i32::MAX));
        // Upper is within [0, i32::MAX] so this can't truncate
        value.clamp(0, upper) as i32
    }

    OffsetCoord::new(
        clamp_axis(col, bounds.max_col),
        clamp_axis(row, bounds.max_row),
    )
}

/// Get the display label for a column: spreadsheet-style letters, where `0` is
/// `A`, `25` is `Z`, `26` is `AA` and so on.
pub fn column_to_label(col: u32) -> String {
    // Bijective base-26, there's no zero digit
    let mut n = u64::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Get the display label for a row. Rows are shown 1-indexed.
pub fn row_to_label(row: u32) -> String {
    (u64::from(row) + 1).to_string()
}
