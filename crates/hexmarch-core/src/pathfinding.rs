//! A* pathfinding on hex grids.
//!
//! Finds the cheapest route between two tiles, taking into account terrain
//! costs, impassable terrain, and blocked tiles. Hex distance is the
//! heuristic; it is admissible because every step costs at least 1.0.

use crate::cost::CostTable;
use crate::heap::MinPriorityQueue;
use crate::hex::{hex_distance, Axial, HexCoord};
use crate::map::{BlockerSet, Grid, TerrainGrid};
use crate::traversal::Traversal;
use crate::types::{Cost, TileIndex};
use serde::{Deserialize, Serialize};

/// Result of a pathfinding operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Tiles from the one after the start up to and including the goal.
    pub path: Vec<HexCoord>,
    /// Total movement cost of the path.
    pub total_cost: Cost,
}

impl PathResult {
    /// Number of steps in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Find the cheapest path between two tiles using A*.
///
/// `max_cost` caps the accumulated cost of any explored route; `None`, a
/// negative value, or infinity means no cap. Returns `None` when the goal
/// cannot be reached, or when either end lies off the grid. A query from a
/// tile to itself succeeds with an empty path, even if that tile is blocked.
pub fn find_path(
    terrain: &TerrainGrid,
    costs: &CostTable,
    blockers: &BlockerSet,
    start: HexCoord,
    goal: HexCoord,
    max_cost: Option<Cost>,
) -> Option<PathResult> {
    let grid = terrain.grid();
    let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
        tracing::debug!(%start, %goal, "path endpoint off grid");
        return None;
    };

    if start_idx == goal_idx {
        return Some(PathResult {
            path: Vec::new(),
            total_cost: 0.0,
        });
    }

    let limit = max_cost.filter(|c| *c >= 0.0 && c.is_finite());
    let traversal = Traversal::new(terrain, costs, blockers);
    let goal_axial = goal.to_axial();

    let size = grid.map_size();
    let mut g_scores = vec![Cost::INFINITY; size];
    let mut came_from: Vec<Option<TileIndex>> = vec![None; size];
    let mut closed = vec![false; size];
    let mut open_set = MinPriorityQueue::new();

    g_scores[start_idx] = 0.0;
    open_set.push(start_idx, heuristic(start.to_axial(), goal_axial));

    let mut expanded = 0usize;
    while let Some((current, _)) = open_set.pop() {
        if current == goal_idx {
            let path = reconstruct_path(grid, &came_from, start_idx, goal_idx);
            tracing::debug!(
                %start,
                %goal,
                expanded,
                steps = path.len(),
                cost = g_scores[goal_idx],
                "path found"
            );
            return Some(PathResult {
                path,
                total_cost: g_scores[goal_idx],
            });
        }

        // Stale duplicate of a tile already expanded
        if closed[current] {
            continue;
        }
        closed[current] = true;
        expanded += 1;

        let current_g = g_scores[current];
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

            let tentative_g = current_g + step;
            if limit.is_some_and(|max| tentative_g > max) {
                continue;
            }

            if tentative_g < g_scores[n] {
                came_from[n] = Some(current);
                g_scores[n] = tentative_g;
                open_set.push(n, tentative_g + heuristic(neighbor.to_axial(), goal_axial));
            }
        }
    }

    tracing::debug!(%start, %goal, expanded, "no path");
    None
}

/// Heuristic for A* (hex distance times the minimum step cost of 1.0).
#[inline]
fn heuristic(from: Axial, goal: Axial) -> Cost {
    hex_distance(from, goal) as Cost
}

/// Walk parent links back from the goal, then reverse. Excludes the start.
fn reconstruct_path(
    grid: Grid,
    came_from: &[Option<TileIndex>],
    start: TileIndex,
    goal: TileIndex,
) -> Vec<HexCoord> {
    let mut path = Vec::new();
    let mut current = goal;

    while current != start {
        path.push(grid.coord(current));
        match came_from[current] {
            Some(prev) => current = prev,
            None => break,
        }
    }

    path.reverse();
    path
}

/// Calculate total movement cost along a path (start excluded).
///
/// Returns `None` if any tile is off the grid or impassable.
pub fn path_cost(terrain: &TerrainGrid, costs: &CostTable, path: &[HexCoord]) -> Option<Cost> {
    path.iter().try_fold(0.0, |total, coord| {
        let cost = costs.effective_cost(terrain.get(*coord)?);
        cost.is_finite().then_some(total + cost)
    })
}

/// Check that a path is walkable from `start`: every step moves to an
/// adjacent tile on the grid that is neither blocked nor impassable.
pub fn is_valid_path(
    terrain: &TerrainGrid,
    costs: &CostTable,
    blockers: &BlockerSet,
    start: HexCoord,
    path: &[HexCoord],
) -> bool {
    let grid = terrain.grid();
    if !grid.contains(start) {
        return false;
    }
    let traversal = Traversal::new(terrain, costs, blockers);

    let mut previous = start;
    for &next in path {
        if previous.distance(&next) != 1 {
            return false;
        }
        let (Some(from), Some(to)) = (grid.index(previous), grid.index(next)) else {
            return false;
        };
        if !traversal.can_traverse(from, to) {
            return false;
        }
        previous = next;
    }

    true
}
