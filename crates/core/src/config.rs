use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// Configuration that defines the shape of a map's grid. A geometry is built
/// from a config via [MapGeometry::new](crate::MapGeometry::new), and the
/// config can never change for the lifetime of that geometry. If any of these
/// fields change (e.g. the user switches hex orientation in map settings),
/// build a new geometry. Geometries are very cheap to create.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GeometryConfig {
    /// Which kind of grid the map uses.
    pub grid_type: GridType,

    /// Size of a single cell, in world units (pixels at zoom 1.0). For square
    /// grids this is the length of one side of a cell. For hex grids this is
    /// the hex size, i.e. the distance from a hex's center to any of its
    /// vertices.
    #[validate(range(min = 0.001))]
    pub cell_size: f64,

    /// Hex orientation. Ignored for square grids.
    pub orientation: HexOrientation,

    /// Rectangular playable area, in **offset** coordinates. `None` means the
    /// map is unbounded. Square grids are always unbounded, so this is only
    /// respected for hex grids.
    pub bounds: Option<RectBounds>,

    /// Caps on how much work a single render pass can do
    #[validate]
    pub limits: RenderLimits,
}

impl GeometryConfig {
    /// Deserialize a config from JSON. Missing fields get their default value.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(json)
            .context("error deserializing geometry config")
    }

    /// Serialize this config to JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        use anyhow::Context;
        serde_json::to_string(self).context("error serializing geometry config")
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            grid_type: GridType::Square,
            cell_size: 40.0,
            orientation: HexOrientation::Flat,
            bounds: None,
            limits: RenderLimits::default(),
        }
    }
}

/// The different kinds of supported grids
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GridType {
    Square,
    Hex,
}

/// The two ways a hexagon can sit on the map
///
/// See this page for more info:
/// https://www.redblobgames.com/grids/hexagons/#basics
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexOrientation {
    /// Flat edges on the top and bottom. Columns are straight, rows zigzag.
    Flat,
    /// Vertices on the top and bottom. Rows are straight, columns zigzag.
    Pointy,
}

/// A rectangular playable area. Both bounds are **exclusive**, so a column is
/// valid iff `0 <= col < max_col`. A bound of 0 means the area is empty.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct RectBounds {
    pub max_col: u32,
    pub max_row: u32,
}

impl RectBounds {
    pub const fn new(max_col: u32, max_row: u32) -> Self {
        Self { max_col, max_row }
    }

    /// Number of cells in the area
    pub fn area(&self) -> u64 {
        u64::from(self.max_col) * u64::from(self.max_row)
    }
}

/// Safety caps on render-time enumeration. These exist purely to bound the
/// worst-case CPU/memory of a single call, e.g. when a user zooms way out on
/// an unbounded hex map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderLimits {
    /// Max number of hexes enumerated for an unbounded map in one render pass.
    /// Past this, only a centered subset of the visible range is rendered.
    #[validate(range(min = 1))]
    pub max_render_hexes: u64,

    /// Max area of the offset-space rectangle scanned for a bounded map in
    /// one render pass. Past this, nothing is rendered at all.
    #[validate(range(min = 1))]
    pub max_offset_area: u64,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_render_hexes: 10_000,
            max_offset_area: 50_000,
        }
    }
}
