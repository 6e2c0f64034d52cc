//! CLI configuration: search settings plus maze movement rules.
//!
//! ```yaml
//! search:
//!   timeout_ms: 250
//!   tie_break: fifo
//! maze:
//!   allow_diagonal: true
//! ```

use std::path::Path;

use marga::{ConfigLoadError, SearchSettings};
use serde::{Deserialize, Serialize};

/// Maze movement settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeSettings {
    /// Enable 8-directional movement
    #[serde(default)]
    pub allow_diagonal: bool,

    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "default_diagonal_cost")]
    pub diagonal_cost: f64,
}

fn default_diagonal_cost() -> f64 {
    std::f64::consts::SQRT_2
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            allow_diagonal: false,
            diagonal_cost: default_diagonal_cost(),
        }
    }
}

/// Full CLI configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSettings,

    /// Maze settings
    #[serde(default)]
    pub maze: MazeSettings,
}

impl CliConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
