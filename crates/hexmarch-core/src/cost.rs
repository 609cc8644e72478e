//! Per-terrain movement cost table.
//!
//! Costs are looked up by terrain id. Finite costs are floored to 1.0 so that
//! hex distance stays an admissible A* heuristic; a configured cost of
//! `f64::INFINITY` marks the terrain impassable.

use crate::error::{PlannerError, Result};
use crate::types::{Cost, TerrainId, TerrainIdPolicy};

/// Number of terrain ids that can carry a configured cost (`0..MAX_TERRAIN_IDS`).
pub const MAX_TERRAIN_IDS: usize = 100;

/// Cost of entering a tile whose terrain has no configured cost.
pub const BASE_COST: Cost = 1.0;

/// Lookup table from terrain id to movement cost.
#[derive(Clone, Debug, PartialEq)]
pub struct CostTable {
    costs: [Cost; MAX_TERRAIN_IDS],
}

impl CostTable {
    /// Build a table from overrides. Ids outside `0..MAX_TERRAIN_IDS` are ignored.
    pub fn build(overrides: impl IntoIterator<Item = (TerrainId, Cost)>) -> Self {
        let mut table = Self::default();
        for (id, cost) in overrides {
            match slot(id) {
                Some(i) => table.costs[i] = cost,
                None => tracing::trace!(terrain_id = id, "ignoring cost override for unsupported terrain id"),
            }
        }
        table
    }

    /// Build a table from overrides, failing on the first unsupported id.
    pub fn build_strict(overrides: impl IntoIterator<Item = (TerrainId, Cost)>) -> Result<Self> {
        let mut table = Self::default();
        for (id, cost) in overrides {
            let i = slot(id).ok_or(PlannerError::TerrainIdOutOfRange(id))?;
            table.costs[i] = cost;
        }
        Ok(table)
    }

    /// Build a table with the given out-of-range policy.
    pub fn build_with_policy(
        overrides: impl IntoIterator<Item = (TerrainId, Cost)>,
        policy: TerrainIdPolicy,
    ) -> Result<Self> {
        match policy {
            TerrainIdPolicy::Ignore => Ok(Self::build(overrides)),
            TerrainIdPolicy::Reject => Self::build_strict(overrides),
        }
    }

    /// Raw configured value for a terrain id, before flooring.
    pub fn configured(&self, terrain: TerrainId) -> Cost {
        slot(terrain).map_or(BASE_COST, |i| self.costs[i])
    }

    /// Cost of entering a tile with this terrain.
    ///
    /// Always `>= 1.0` or `f64::INFINITY`. NaN is treated as impassable.
    pub fn effective_cost(&self, terrain: TerrainId) -> Cost {
        let cost = self.configured(terrain);
        if cost.is_nan() || cost == Cost::INFINITY {
            return Cost::INFINITY;
        }
        cost.max(BASE_COST)
    }

    /// Check if a terrain can be entered at all.
    pub fn is_passable(&self, terrain: TerrainId) -> bool {
        self.effective_cost(terrain).is_finite()
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            costs: [BASE_COST; MAX_TERRAIN_IDS],
        }
    }
}

fn slot(id: TerrainId) -> Option<usize> {
    usize::try_from(id).ok().filter(|&i| i < MAX_TERRAIN_IDS)
}
