//! Planner settings and configuration.

use crate::error::{PlannerError, Result};
use crate::types::{Cost, TerrainIdPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Budget used for reachability queries that do not name one.
pub const DEFAULT_BUDGET: Cost = 999.0;

/// Configuration for a [`Planner`](crate::planner::Planner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Budget for reachability queries made without one.
    pub default_budget: Cost,
    /// How cost overrides for unsupported terrain ids are handled.
    pub terrain_id_policy: TerrainIdPolicy,
    /// Honour Zone of Control maps in reachability queries.
    pub zone_of_control: bool,
}

impl PlannerSettings {
    /// Strict settings: unsupported terrain ids in cost overrides are errors.
    pub fn strict() -> Self {
        Self {
            terrain_id_policy: TerrainIdPolicy::Reject,
            ..Self::default()
        }
    }

    /// Validate settings and return any errors.
    pub fn validate(&self) -> Result<()> {
        if self.default_budget.is_nan() || self.default_budget < 0.0 {
            return Err(PlannerError::InvalidSettings(format!(
                "default_budget must be non-negative, got {}",
                self.default_budget
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_BUDGET,
            terrain_id_policy: TerrainIdPolicy::Ignore,
            zone_of_control: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PlannerSettings::default();
        assert_eq!(settings.default_budget, 999.0);
        assert_eq!(settings.terrain_id_policy, TerrainIdPolicy::Ignore);
        assert!(settings.zone_of_control);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_strict_settings() {
        let settings = PlannerSettings::strict();
        assert_eq!(settings.terrain_id_policy, TerrainIdPolicy::Reject);
        assert_eq!(settings.default_budget, DEFAULT_BUDGET);
    }

    #[test]
    fn test_validate_budget() {
        let mut settings = PlannerSettings::default();
        settings.default_budget = -2.0;
        assert!(matches!(
            settings.validate(),
            Err(PlannerError::InvalidSettings(_))
        ));
        settings.default_budget = f64::NAN;
        assert!(settings.validate().is_err());
        settings.default_budget = 0.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = PlannerSettings::from_json_str(r#"{"default_budget": 12.5}"#).unwrap();
        assert_eq!(settings.default_budget, 12.5);
        assert_eq!(settings.terrain_id_policy, TerrainIdPolicy::Ignore);
        assert!(settings.zone_of_control);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = PlannerSettings {
            default_budget: 6.0,
            terrain_id_policy: TerrainIdPolicy::Reject,
            zone_of_control: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(PlannerSettings::from_json_str(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PlannerSettings::from_json_str("{not json"),
            Err(PlannerError::Json(_))
        ));
        assert!(PlannerSettings::from_json_str(r#"{"default_budget": -1}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlannerSettings::load("/nonexistent/hexmarch-settings.json").unwrap_err();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
