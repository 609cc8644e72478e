//! Hexmarch Core Library
//!
//! Movement planning for turn-based tactical games on hex grids. Given a
//! terrain map, per-terrain movement costs, blocked tiles, and a movement
//! budget, it answers two questions:
//!
//! - What is the cheapest path between two tiles? ([`find_path`], A*)
//! - Which tiles can a unit reach, and at what cost? ([`find_reachable`],
//!   uniform-cost search with Zone of Control)
//!
//! # Design Principles
//!
//! - **Stateless**: every query allocates its own scratch buffers and keeps
//!   nothing once it returns
//! - **Read-only inputs**: terrain, blockers, and ZOC are snapshots the caller
//!   must not mutate while a query runs
//! - **Explicit outcomes**: unreachable goals and empty reachable sets are
//!   return values, only malformed input is an error

// Geometry and map snapshots
pub mod hex;
pub mod map;
pub mod terrain;
pub mod types;

// Cost model
pub mod cost;

// Search
pub mod heap;
pub mod pathfinding;
pub mod reachability;
pub mod traversal;

// Configuration and entry points
pub mod error;
pub mod planner;
pub mod scenario;
pub mod settings;

// Re-exports for convenience
pub use cost::{CostTable, BASE_COST, MAX_TERRAIN_IDS};
pub use error::{PlannerError, Result};
pub use heap::MinPriorityQueue;
pub use hex::{hex_distance, neighbor_offsets, offset_to_axial, Axial, HexCoord};
pub use map::{BlockerSet, Grid, TerrainGrid, ZocMap};
pub use pathfinding::{find_path, is_valid_path, path_cost, PathResult};
pub use planner::{Planner, Snapshot};
pub use reachability::{find_reachable, ReachableSet};
pub use scenario::{CostValue, Scenario};
pub use settings::PlannerSettings;
pub use terrain::TerrainKind;
pub use traversal::{zoc_permits, Traversal};
pub use types::*;
