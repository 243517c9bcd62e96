//! Problem files. A board is described in TOML:
//!
//! ```toml
//! grid_size = 8
//! pump = [5, 3]
//! heuristic = "admissible"
//!
//! [[vases]]
//! position = [1, 3]
//! capacity = 4
//! goal = 2
//! ```

use crate::water_pump::{Position, ProblemError, Vase, WaterHeuristicName, WaterPump};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaterPumpConfig {
    pub grid_size: usize,
    pub pump: Position,
    #[serde(default)]
    pub heuristic: WaterHeuristicName,
    #[serde(default)]
    pub vases: Vec<VaseConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaseConfig {
    pub position: Position,
    pub capacity: u32,
    pub goal: u32,
    /// Water in the vase at the start, empty if omitted
    #[serde(default)]
    pub value: u32,
}

impl From<&VaseConfig> for Vase {
    fn from(config: &VaseConfig) -> Self {
        Vase::new(config.position, config.capacity, config.goal).with_value(config.value)
    }
}

impl WaterPumpConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ProblemError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded problem file");
        Self::from_toml_str(&text)
    }
}

impl WaterPump {
    /// Build a problem from a parsed configuration, using the heuristic it
    /// names.
    pub fn from_config(config: &WaterPumpConfig) -> Result<Self, ProblemError> {
        let vases = config.vases.iter().map(Vase::from).collect();
        Ok(WaterPump::new(config.grid_size, config.pump, vases)?
            .with_heuristic_name(config.heuristic))
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        Self::from_config(&WaterPumpConfig::from_path(path)?)
    }
}
