//! Engine configuration.
//!
//! Settings that change how consumables are ranked and how an implicit
//! item level sync is chosen. Everything has a default, so an empty JSON
//! object is a valid configuration.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Item level sync used when a level sync at or above the level cap is
/// requested without an explicit item level.
pub const DEFAULT_MAX_LEVEL_ITEM_LEVEL_SYNC: u32 = 795;

/// Tunable engine settings.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "food_hq_only": true }"#).unwrap();
/// assert!(config.food_hq_only);
/// assert_eq!(config.food_min_item_level, 0);
/// assert_eq!(config.max_level_item_level_sync, 795);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum item level of consumables ranked for combat jobs.
    pub food_min_item_level: u32,

    /// Minimum item level of consumables ranked for crafters and gatherers.
    pub food_min_item_level_crafting: u32,

    /// Only rank high-quality consumables.
    pub food_hq_only: bool,

    /// See [`DEFAULT_MAX_LEVEL_ITEM_LEVEL_SYNC`].
    pub max_level_item_level_sync: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            food_min_item_level: 0,
            food_min_item_level_crafting: 0,
            food_hq_only: false,
            max_level_item_level_sync: DEFAULT_MAX_LEVEL_ITEM_LEVEL_SYNC,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CalcError> {
        serde_json::from_str(json).map_err(|err| CalcError::InvalidConfig(err.to_string()))
    }

    /// Serialize this configuration to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, CalcError> {
        serde_json::to_string_pretty(self).map_err(|err| CalcError::InvalidConfig(err.to_string()))
    }

    /// Minimum consumable item level for a job role.
    pub fn food_min_item_level_for(&self, crafting_or_gathering: bool) -> u32 {
        if crafting_or_gathering {
            self.food_min_item_level_crafting
        } else {
            self.food_min_item_level
        }
    }
}
