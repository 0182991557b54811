//! Board configuration.
//!
//! Plain data handed to the generator per invocation. Display state such as
//! zoom or panel visibility stays with the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{clamp_grid_size, DEFAULT_GRID_SIZE};
use crate::error::ConfigError;

/// Default edge length of one cell in exported images.
pub const DEFAULT_CELL_PX: u32 = 16;
/// Largest accepted `cell_px`.
pub const MAX_CELL_PX: u32 = 64;

/// Which pattern to build, how large, and how to export it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Pattern id; any integer, resolved cyclically.
    pub pattern_id: i64,
    /// Requested board side; clamped to `[5, 30]` by [`resolved`](Self::resolved).
    /// Out-of-range values, negative ones included, are clamped rather than rejected.
    pub grid_size: i64,
    /// Pixels per cell when rendering to PNG.
    pub cell_px: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pattern_id: 1,
            grid_size: DEFAULT_GRID_SIZE as i64,
            cell_px: DEFAULT_CELL_PX,
        }
    }
}

impl BoardConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with the grid size clamped into range.
    pub fn resolved(&self) -> Self {
        Self {
            grid_size: clamp_grid_size(self.grid_size) as i64,
            ..self.clone()
        }
    }

    /// Checks parameters that cannot be clamped silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_px == 0 || self.cell_px > MAX_CELL_PX {
            return Err(ConfigError::InvalidParameter {
                name: "cell_px".to_string(),
                message: format!("must be in 1..={}, got {}", MAX_CELL_PX, self.cell_px),
            });
        }
        Ok(())
    }
}
