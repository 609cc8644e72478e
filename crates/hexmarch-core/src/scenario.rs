//! Serializable query input.
//!
//! A [`Scenario`] is the raw form callers hand over: dimensions, a flat
//! terrain sequence, cost overrides, blocker coordinates, and optional ZOC
//! data. [`Scenario::into_snapshot`] validates it into a [`Snapshot`].
//!
//! JSON has no infinity, so impassable costs are written as the string
//! `"impassable"`:
//!
//! ```
//! use hexmarch_core::scenario::Scenario;
//!
//! let scenario = Scenario::from_json_str(r#"{
//!     "width": 3,
//!     "height": 2,
//!     "terrain": [0, 0, 1, 0, 2, 0],
//!     "cost_overrides": { "1": 2.5, "2": "impassable" },
//!     "blockers": [[1, 1]]
//! }"#).unwrap();
//! let snapshot = scenario.into_snapshot(Default::default()).unwrap();
//! assert_eq!(snapshot.costs().effective_cost(2), f64::INFINITY);
//! ```

use crate::cost::CostTable;
use crate::error::Result;
use crate::hex::HexCoord;
use crate::map::{BlockerSet, Grid, TerrainGrid, ZocMap};
use crate::planner::Snapshot;
use crate::types::{Cost, TerrainId, TerrainIdPolicy, ZocShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A cost override value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostValue {
    Finite(Cost),
    Keyword(CostKeyword),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKeyword {
    #[serde(alias = "inf", alias = "infinity")]
    Impassable,
}

impl CostValue {
    pub fn cost(&self) -> Cost {
        match self {
            CostValue::Finite(cost) => *cost,
            CostValue::Keyword(CostKeyword::Impassable) => Cost::INFINITY,
        }
    }
}

impl From<Cost> for CostValue {
    fn from(cost: Cost) -> Self {
        if cost == Cost::INFINITY {
            CostValue::Keyword(CostKeyword::Impassable)
        } else {
            CostValue::Finite(cost)
        }
    }
}

/// Raw map state for a movement query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: i64,
    pub height: i64,
    /// Row-major terrain ids, `width * height` entries.
    pub terrain: Vec<TerrainId>,
    #[serde(default)]
    pub cost_overrides: BTreeMap<TerrainId, CostValue>,
    /// Always-impassable `[x, y]` tiles. Off-grid entries are ignored.
    #[serde(default)]
    pub blockers: Vec<(i32, i32)>,
    /// Row-major ZOC flags, `width * height` entries.
    #[serde(default)]
    pub zoc: Option<Vec<bool>>,
    /// Positions of hostile units projecting ZOC onto their neighbors.
    #[serde(default)]
    pub zoc_sources: Vec<(i32, i32)>,
    /// Footprint each ZOC source projects. Defaults to the six hex neighbors.
    #[serde(default)]
    pub zoc_shape: ZocShape,
}

impl Scenario {
    /// Parse a scenario from JSON. Validation happens in [`Scenario::into_snapshot`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate the raw input and build a snapshot.
    ///
    /// Explicit ZOC flags and ZOC sources are combined: a tile is controlled
    /// if either marks it.
    pub fn into_snapshot(self, policy: TerrainIdPolicy) -> Result<Snapshot> {
        let grid = Grid::new(self.width, self.height)?;
        let terrain = TerrainGrid::new(grid, self.terrain)?;
        let costs = CostTable::build_with_policy(
            self.cost_overrides.iter().map(|(id, value)| (*id, value.cost())),
            policy,
        )?;
        let blockers: BlockerSet = self.blockers.into_iter().map(HexCoord::from).collect();

        let mut zoc = match self.zoc {
            Some(flags) => Some(ZocMap::new(grid, flags)?),
            None => None,
        };
        if !self.zoc_sources.is_empty() {
            let projected = ZocMap::from_sources_shaped(
                grid,
                self.zoc_sources.into_iter().map(HexCoord::from),
                self.zoc_shape,
            );
            zoc = Some(match zoc {
                Some(mut explicit) => {
                    for coord in grid.coords().filter(|c| projected.get(*c)) {
                        explicit.set(coord, true);
                    }
                    explicit
                }
                None => projected,
            });
        }

        let snapshot = Snapshot::new(terrain, costs).with_blockers(blockers);
        match zoc {
            Some(zoc) => snapshot.with_zoc(zoc),
            None => Ok(snapshot),
        }
    }
}
