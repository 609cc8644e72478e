//! Error type for planner input validation and file loading.
//!
//! Unreachable goals and exhausted budgets are ordinary results, never errors.
//! Only caller contract violations end up here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Terrain grid has {actual} entries, expected {expected}")]
    TerrainLengthMismatch { expected: usize, actual: usize },

    #[error("ZOC map has {actual} entries, expected {expected}")]
    ZocLengthMismatch { expected: usize, actual: usize },

    #[error("Terrain id {0} is outside the supported range (expected < {})", crate::cost::MAX_TERRAIN_IDS)]
    TerrainIdOutOfRange(i32),

    #[error("Invalid movement budget: {0}")]
    InvalidBudget(f64),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
