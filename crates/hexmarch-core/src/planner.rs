//! Entry point for movement queries.
//!
//! A [`Snapshot`] bundles the read-only map state for one query; a
//! [`Planner`] applies [`PlannerSettings`] and dispatches to the searches.
//! The planner holds no per-query state, so one instance can serve any
//! number of snapshots and threads.

use crate::cost::CostTable;
use crate::error::{PlannerError, Result};
use crate::hex::HexCoord;
use crate::map::{BlockerSet, Grid, TerrainGrid, ZocMap};
use crate::pathfinding::{self, PathResult};
use crate::reachability::{self, ReachableSet};
use crate::settings::PlannerSettings;
use crate::types::{Cost, TerrainId};

/// Map state for one query: terrain, costs, blockers, and optional ZOC.
#[derive(Clone, Debug)]
pub struct Snapshot {
    terrain: TerrainGrid,
    costs: CostTable,
    blockers: BlockerSet,
    zoc: Option<ZocMap>,
}

impl Snapshot {
    pub fn new(terrain: TerrainGrid, costs: CostTable) -> Self {
        Self {
            terrain,
            costs,
            blockers: BlockerSet::new(),
            zoc: None,
        }
    }

    pub fn with_blockers(mut self, blockers: BlockerSet) -> Self {
        self.blockers = blockers;
        self
    }

    /// Attach a ZOC map. It must cover the same grid as the terrain.
    pub fn with_zoc(mut self, zoc: ZocMap) -> Result<Self> {
        if zoc.grid() != self.terrain.grid() {
            return Err(PlannerError::ZocLengthMismatch {
                expected: self.terrain.grid().map_size(),
                actual: zoc.grid().map_size(),
            });
        }
        self.zoc = Some(zoc);
        Ok(self)
    }

    pub fn grid(&self) -> Grid {
        self.terrain.grid()
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn blockers(&self) -> &BlockerSet {
        &self.blockers
    }

    pub fn zoc(&self) -> Option<&ZocMap> {
        self.zoc.as_ref()
    }
}

/// Stateless query engine configured by [`PlannerSettings`].
#[derive(Clone, Debug, Default)]
pub struct Planner {
    settings: PlannerSettings,
}

impl Planner {
    /// Create a planner, validating its settings.
    pub fn new(settings: PlannerSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Build a cost table under this planner's terrain id policy.
    pub fn cost_table(
        &self,
        overrides: impl IntoIterator<Item = (TerrainId, Cost)>,
    ) -> Result<CostTable> {
        CostTable::build_with_policy(overrides, self.settings.terrain_id_policy)
    }

    /// Cheapest path from `start` to `goal`, or `None` if there is none.
    pub fn find_path(
        &self,
        snapshot: &Snapshot,
        start: HexCoord,
        goal: HexCoord,
        max_cost: Option<Cost>,
    ) -> Option<PathResult> {
        let _span = tracing::debug_span!("find_path", %start, %goal).entered();
        pathfinding::find_path(
            &snapshot.terrain,
            &snapshot.costs,
            &snapshot.blockers,
            start,
            goal,
            max_cost,
        )
    }

    /// Every tile reachable from `start` within `budget`, or within the
    /// configured default budget when `budget` is `None`.
    pub fn find_reachable(
        &self,
        snapshot: &Snapshot,
        start: HexCoord,
        budget: Option<Cost>,
    ) -> Result<ReachableSet> {
        let budget = budget.unwrap_or(self.settings.default_budget);
        let _span = tracing::debug_span!("find_reachable", %start, budget).entered();
        let zoc = snapshot.zoc.as_ref().filter(|_| self.settings.zone_of_control);
        reachability::find_reachable(
            &snapshot.terrain,
            &snapshot.costs,
            &snapshot.blockers,
            start,
            budget,
            zoc,
        )
    }

    /// Total cost of walking `path` from `start`, or `None` if any step is illegal.
    pub fn path_cost(&self, snapshot: &Snapshot, start: HexCoord, path: &[HexCoord]) -> Option<Cost> {
        if !pathfinding::is_valid_path(&snapshot.terrain, &snapshot.costs, &snapshot.blockers, start, path) {
            return None;
        }
        pathfinding::path_cost(&snapshot.terrain, &snapshot.costs, path)
    }
}
