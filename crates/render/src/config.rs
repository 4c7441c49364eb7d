//! Rendering configuration.
//!
//! Loaded from YAML; every field has a default so partial files are valid:
//!
//! ```yaml
//! viewing_distance: 12
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewing distance used when none is configured, in chunks.
pub const DEFAULT_VIEWING_DISTANCE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Active viewing distance in chunks.
    pub viewing_distance: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            viewing_distance: DEFAULT_VIEWING_DISTANCE,
        }
    }
}

impl RenderingConfig {
    pub fn with_viewing_distance(viewing_distance: u32) -> Self {
        Self { viewing_distance }
    }

    pub fn active_viewing_distance(&self) -> u32 {
        self.viewing_distance
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded rendering config");
        Ok(config)
    }
}
