//! Search settings section and the top-level config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use crate::error::Result;
use crate::frontier::TieBreak;
use crate::search::SearchOptions;

/// Search settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Wall-clock budget per search in milliseconds (absent = unbounded)
    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: Option<f64>,

    /// Ordering among open nodes with equal f
    #[serde(default = "defaults::tie_break")]
    pub tie_break: TieBreak,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::timeout_ms(),
            tie_break: defaults::tie_break(),
        }
    }
}

impl SearchSettings {
    /// Validate and convert to runtime options.
    pub fn to_options(&self) -> Result<SearchOptions> {
        SearchOptions::new(self.timeout_ms, self.tie_break)
    }
}

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSettings,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
