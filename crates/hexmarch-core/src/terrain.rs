//! Standard terrain catalogue.
//!
//! The planner only sees terrain ids and a [`CostTable`]. This catalogue is a
//! ready-made id assignment with base movement costs for callers that do not
//! bring their own.

use crate::cost::CostTable;
use crate::types::{Cost, TerrainId};
use serde::{Deserialize, Serialize};

/// Base terrain type for a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    #[default]
    Plains,
    LightForest,
    Forest,
    DenseForest,
    Hills,
    HighHills,
    Mountains,
    Water,
    DeepWater,
    Swamp,
    Marsh,
    Desert,
    Snow,
    Road,
    Bridge,
}

impl TerrainKind {
    /// Get the base movement cost for this terrain.
    ///
    /// Road is cheaper than the baseline here; the cost model floors it back
    /// to 1.0 when a search looks it up.
    pub const fn movement_cost(&self) -> Cost {
        match self {
            TerrainKind::Plains | TerrainKind::Bridge => 1.0,
            TerrainKind::LightForest | TerrainKind::Desert => 1.5,
            TerrainKind::Forest | TerrainKind::Hills | TerrainKind::Snow => 2.0,
            TerrainKind::Marsh => 2.5,
            TerrainKind::DenseForest | TerrainKind::HighHills | TerrainKind::Swamp => 3.0,
            TerrainKind::Road => 0.5,
            TerrainKind::Mountains | TerrainKind::Water | TerrainKind::DeepWater => Cost::INFINITY,
        }
    }

    /// Check if this terrain can be entered at all.
    pub const fn is_passable(&self) -> bool {
        !matches!(
            self,
            TerrainKind::Mountains | TerrainKind::Water | TerrainKind::DeepWater
        )
    }

    /// Terrain id used in terrain grids.
    pub const fn id(&self) -> TerrainId {
        *self as TerrainId
    }

    /// Look up a kind by terrain id.
    pub fn from_id(id: TerrainId) -> Option<TerrainKind> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    /// Get all terrain variants, in id order.
    pub const fn all() -> &'static [TerrainKind] {
        &[
            TerrainKind::Plains,
            TerrainKind::LightForest,
            TerrainKind::Forest,
            TerrainKind::DenseForest,
            TerrainKind::Hills,
            TerrainKind::HighHills,
            TerrainKind::Mountains,
            TerrainKind::Water,
            TerrainKind::DeepWater,
            TerrainKind::Swamp,
            TerrainKind::Marsh,
            TerrainKind::Desert,
            TerrainKind::Snow,
            TerrainKind::Road,
            TerrainKind::Bridge,
        ]
    }

    /// Cost overrides for every kind, keyed by id.
    pub fn cost_overrides() -> impl Iterator<Item = (TerrainId, Cost)> {
        Self::all().iter().map(|kind| (kind.id(), kind.movement_cost()))
    }
}

impl std::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TerrainKind::Plains => "Plains",
            TerrainKind::LightForest => "Light Forest",
            TerrainKind::Forest => "Forest",
            TerrainKind::DenseForest => "Dense Forest",
            TerrainKind::Hills => "Hills",
            TerrainKind::HighHills => "High Hills",
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Water => "Water",
            TerrainKind::DeepWater => "Deep Water",
            TerrainKind::Swamp => "Swamp",
            TerrainKind::Marsh => "Marsh",
            TerrainKind::Desert => "Desert",
            TerrainKind::Snow => "Snow",
            TerrainKind::Road => "Road",
            TerrainKind::Bridge => "Bridge",
        };
        write!(f, "{}", name)
    }
}

impl CostTable {
    /// Cost table for the standard terrain catalogue.
    pub fn from_kinds() -> Self {
        CostTable::build(TerrainKind::cost_overrides())
    }
}
