//! Board configuration loading.
//!
//! Commands accept an optional JSON config file plus individual flags; flags
//! win over file values, and file values win over built-in defaults.

use std::path::Path;

use woodwave_pattern::{BoardConfig, ConfigError};

/// Flag values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardOverrides {
    /// `--pattern`
    pub pattern_id: Option<i64>,
    /// `--size`
    pub grid_size: Option<i64>,
    /// `--cell-px`
    pub cell_px: Option<u32>,
}

/// Where the final configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults plus flags.
    Defaults,
    /// A config file plus flags.
    File,
}

impl ConfigSource {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Defaults => "defaults",
            ConfigSource::File => "file",
        }
    }
}

/// Result of resolving a board configuration.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Validated configuration with the grid size clamped.
    pub config: BoardConfig,
    /// Grid size as requested, before clamping.
    pub requested_grid_size: i64,
    /// Origin of the base values.
    pub source: ConfigSource,
}

impl LoadResult {
    /// Whether the requested grid size had to be clamped.
    pub fn grid_size_clamped(&self) -> bool {
        self.requested_grid_size != self.config.grid_size
    }
}

/// Loads the optional config file, applies flag overrides, clamps and validates.
pub fn load_board_config(
    config_path: Option<&Path>,
    overrides: &BoardOverrides,
) -> Result<LoadResult, ConfigError> {
    let (mut config, source) = match config_path {
        Some(path) => (BoardConfig::from_file(path)?, ConfigSource::File),
        None => (BoardConfig::default(), ConfigSource::Defaults),
    };

    if let Some(pattern_id) = overrides.pattern_id {
        config.pattern_id = pattern_id;
    }
    if let Some(grid_size) = overrides.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(cell_px) = overrides.cell_px {
        config.cell_px = cell_px;
    }

    config.validate()?;
    let requested_grid_size = config.grid_size;

    Ok(LoadResult {
        config: config.resolved(),
        requested_grid_size,
        source,
    })
}
