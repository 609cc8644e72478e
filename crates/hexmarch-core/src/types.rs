//! Core type aliases and small enums used throughout the crate.

use serde::{Deserialize, Serialize};

/// Terrain type identifier stored per tile.
///
/// Ids `0..MAX_TERRAIN_IDS` can carry a configured cost. Anything else,
/// including negative "no terrain data" markers, costs the baseline 1.0.
pub type TerrainId = i32;

/// Movement cost. Always `>= 1.0` or `f64::INFINITY` once it leaves the cost model.
pub type Cost = f64;

/// Flat row-major tile index: `y * width + x`.
pub type TileIndex = usize;

/// What to do with a cost override whose terrain id has no table slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TerrainIdPolicy {
    /// Drop the override silently.
    #[default]
    Ignore,
    /// Reject the whole cost table.
    Reject,
}

impl std::fmt::Display for TerrainIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainIdPolicy::Ignore => write!(f, "ignore"),
            TerrainIdPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Which tiles around a hostile unit fall under its Zone of Control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZocShape {
    /// The six hex-adjacent tiles.
    #[default]
    Hex,
    /// Every tile with `|dx| <= 1` and `|dy| <= 1` in offset coordinates.
    ///
    /// On an odd-r grid this adds two tiles that are not hex-adjacent: the
    /// upper and lower east diagonals of an even-row unit, the west ones of
    /// an odd-row unit.
    OffsetBox,
}

impl std::fmt::Display for ZocShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZocShape::Hex => write!(f, "hex"),
            ZocShape::OffsetBox => write!(f, "offset_box"),
        }
    }
}
