//! Edge validity for the searches.
//!
//! Whether a step `current -> neighbor` is allowed, and what it costs, is
//! decided here and nowhere else. Blockers, impassable terrain, and the Zone
//! of Control rule all compose into [`Traversal::step_cost`].

use crate::cost::CostTable;
use crate::map::{BlockerSet, TerrainGrid, ZocMap};
use crate::types::{Cost, TileIndex};

/// Zone of Control rule for a single edge.
///
/// Once a unit stands in a controlled tile it may only move on into other
/// controlled tiles. Leaving control for free terrain is never allowed in the
/// same move.
#[inline]
pub const fn zoc_permits(current_controlled: bool, neighbor_controlled: bool) -> bool {
    !current_controlled || neighbor_controlled
}

/// Per-call view of the map used to answer "can I step here, and at what cost?".
///
/// Owns the blocked-tile mask for one search; borrows everything else.
pub struct Traversal<'a> {
    terrain: &'a TerrainGrid,
    costs: &'a CostTable,
    blocked: Vec<bool>,
    zoc: Option<&'a ZocMap>,
}

impl<'a> Traversal<'a> {
    pub fn new(terrain: &'a TerrainGrid, costs: &'a CostTable, blockers: &BlockerSet) -> Self {
        Self {
            terrain,
            costs,
            blocked: blockers.mask(terrain.grid()),
            zoc: None,
        }
    }

    /// Apply the Zone of Control rule to every step.
    ///
    /// The map must cover the same grid as the terrain.
    pub fn with_zoc(mut self, zoc: Option<&'a ZocMap>) -> Self {
        debug_assert!(zoc.map_or(true, |z| z.grid() == self.terrain.grid()));
        self.zoc = zoc;
        self
    }

    /// Can a unit step from `current` into the adjacent `neighbor`?
    #[inline]
    pub fn can_traverse(&self, current: TileIndex, neighbor: TileIndex) -> bool {
        self.step_cost(current, neighbor).is_some()
    }

    /// Cost of stepping from `current` into the adjacent `neighbor`, or `None`
    /// if the step is not allowed.
    #[inline]
    pub fn step_cost(&self, current: TileIndex, neighbor: TileIndex) -> Option<Cost> {
        if self.blocked[neighbor] {
            return None;
        }
        if let Some(zoc) = self.zoc {
            if !zoc_permits(zoc.is_controlled(current), zoc.is_controlled(neighbor)) {
                return None;
            }
        }
        let cost = self.costs.effective_cost(self.terrain.terrain_at(neighbor));
        cost.is_finite().then_some(cost)
    }
}
