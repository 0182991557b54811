//! Woodwave Pattern Engine
//!
//! Deterministic height fields for a wood-block relief board. A small integer
//! pattern id selects a wave preset; the preset is evaluated on a 10×10 base
//! field and snapped to four block heights (0, 2, 4, 6 mm); the base field is
//! then tiled, mirrored where needed, across a board of up to 30×30 blocks.
//!
//! # Example
//!
//! ```
//! use woodwave_pattern::{generate_base_field, get_pattern_params, height_at};
//!
//! let params = get_pattern_params(1);
//! let field = generate_base_field(params);
//!
//! // Tile (1, 0) is the mirror image of tile (0, 0).
//! assert_eq!(height_at(10, 0, &field, 1), field.get(9, 0));
//! ```
//!
//! # Determinism
//!
//! - Every function is pure; the same inputs always give the same heights.
//! - Pattern ids wrap cyclically, so no id is ever rejected.
//! - Discretization rounds ties up and clamps to `[0, 6]`.
//! - PNG export uses fixed encoder settings for byte-identical files.

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod palette;
pub mod png;
pub mod tiling;

// Re-export main types for convenience
pub use board::{clamp_grid_size, Board, DEFAULT_GRID_SIZE, GRID_SIZE_MAX, GRID_SIZE_MIN};
pub use catalog::{
    canonical_pattern_id, get_pattern_params, normalize_pattern_id, PatternParams, TilingMode,
    WaveKind, CATALOG, CATALOG_SIZE, NO_MIRROR_IDS,
};
pub use config::BoardConfig;
pub use error::{ConfigError, FieldError};
pub use field::{discretize, generate_base_field, BaseField, BASE_SIZE};
pub use palette::{legend, HeightLevel, LegendEntry};
pub use crate::png::{PngConfig, PngError};
pub use tiling::{height_at, height_at_with_mode, locate, TileCoord};
