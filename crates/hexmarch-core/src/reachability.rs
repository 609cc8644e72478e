//! Budgeted reachability (uniform-cost search) with Zone of Control.
//!
//! Computes every tile a unit can enter with its movement budget, together
//! with the cheapest cost of getting there.

use crate::cost::CostTable;
use crate::error::{PlannerError, Result};
use crate::heap::MinPriorityQueue;
use crate::hex::HexCoord;
use crate::map::{BlockerSet, TerrainGrid, ZocMap};
use crate::traversal::Traversal;
use crate::types::Cost;
use std::collections::BTreeMap;

/// Tiles reachable within a budget, with their minimal costs.
///
/// Iterates in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReachableSet {
    costs: BTreeMap<HexCoord, Cost>,
}

impl ReachableSet {
    /// Minimal cost to reach a tile, if it is reachable.
    pub fn get(&self, coord: &HexCoord) -> Option<Cost> {
        self.costs.get(coord).copied()
    }

    pub fn contains(&self, coord: &HexCoord) -> bool {
        self.costs.contains_key(coord)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, Cost)> + '_ {
        self.costs.iter().map(|(c, cost)| (*c, *cost))
    }

    /// Reachable tiles without their costs.
    pub fn tiles(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.costs.keys().copied()
    }
}

impl IntoIterator for ReachableSet {
    type Item = (HexCoord, Cost);
    type IntoIter = std::collections::btree_map::IntoIter<HexCoord, Cost>;

    fn into_iter(self) -> Self::IntoIter {
        self.costs.into_iter()
    }
}

/// Find all tiles reachable from `start` within `budget`.
///
/// Blocked and impassable tiles are never entered. With a ZOC map, a step
/// from a controlled tile into a free one is never taken, including the
/// first step out of `start`.
///
/// An off-grid start reaches nothing. A negative or NaN budget, or a ZOC map
/// sized for a different grid, is rejected.
pub fn find_reachable(
    terrain: &TerrainGrid,
    costs: &CostTable,
    blockers: &BlockerSet,
    start: HexCoord,
    budget: Cost,
    zoc: Option<&ZocMap>,
) -> Result<ReachableSet> {
    if budget.is_nan() || budget < 0.0 {
        return Err(PlannerError::InvalidBudget(budget));
    }

    let grid = terrain.grid();
    if let Some(zoc) = zoc {
        if zoc.grid() != grid {
            return Err(PlannerError::ZocLengthMismatch {
                expected: grid.map_size(),
                actual: zoc.grid().map_size(),
            });
        }
    }

    let Some(start_idx) = grid.index(start) else {
        tracing::debug!(%start, "reachability start off grid");
        return Ok(ReachableSet::default());
    };

    let traversal = Traversal::new(terrain, costs, blockers).with_zoc(zoc);

    let size = grid.map_size();
    let mut min_cost = vec![Cost::INFINITY; size];
    let mut closed = vec![false; size];
    let mut frontier = MinPriorityQueue::new();

    min_cost[start_idx] = 0.0;
    frontier.push(start_idx, 0.0);

    let mut expanded = 0usize;
    while let Some((current, cost)) = frontier.pop() {
        // Stale entry: a cheaper route was recorded after this one was queued
        if cost > min_cost[current] || closed[current] {
            continue;
        }
        closed[current] = true;
        expanded += 1;

        for neighbor in grid.neighbors(grid.coord(current)) {
            let Some(n) = grid.index(neighbor) else {
                continue;
            };
            if closed[n] {
                continue;
            }
            let Some(step) = traversal.step_cost(current, n) else {
                continue;
            };

            let new_cost = cost + step;
            if new_cost > budget {
                continue;
            }
            if new_cost < min_cost[n] {
                min_cost[n] = new_cost;
                frontier.push(n, new_cost);
            }
        }
    }

    let costs: BTreeMap<HexCoord, Cost> = min_cost
        .iter()
        .enumerate()
        .filter(|(_, cost)| cost.is_finite())
        .map(|(i, cost)| (grid.coord(i), *cost))
        .collect();

    tracing::debug!(%start, budget, expanded, reachable = costs.len(), "reachability done");
    Ok(ReachableSet { costs })
}
