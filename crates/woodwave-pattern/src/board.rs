//! Expanded N×N board.
//!
//! This is the grid a renderer consumes: one height per block, produced by
//! running every cell through [`height_at`].

use serde::Serialize;

use crate::catalog::{canonical_pattern_id, get_pattern_params, TilingMode};
use crate::field::{generate_base_field, BaseField};
use crate::palette::HeightLevel;
use crate::tiling::height_at;

/// Smallest board side accepted by [`clamp_grid_size`].
pub const GRID_SIZE_MIN: u32 = 5;
/// Largest board side accepted by [`clamp_grid_size`].
pub const GRID_SIZE_MAX: u32 = 30;
/// Board side used when none is given.
pub const DEFAULT_GRID_SIZE: u32 = 30;

/// Clamps a requested board side into `[GRID_SIZE_MIN, GRID_SIZE_MAX]`.
///
/// Any integer is accepted, including zero and negative requests.
pub fn clamp_grid_size(size: i64) -> u32 {
    size.clamp(GRID_SIZE_MIN as i64, GRID_SIZE_MAX as i64) as u32
}

/// A fully expanded board of discrete heights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pattern_id: i64,
    tiling: TilingMode,
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Expands `field` to a `grid_size`×`grid_size` board for `pattern_id`.
    ///
    /// `grid_size` is used as given; callers clamp it first.
    pub fn expand(field: &BaseField, pattern_id: i64, grid_size: usize) -> Self {
        let mut cells = Vec::with_capacity(grid_size * grid_size);
        for i in 0..grid_size {
            for j in 0..grid_size {
                cells.push(height_at(i, j, field, pattern_id));
            }
        }
        Self {
            pattern_id: canonical_pattern_id(pattern_id),
            tiling: get_pattern_params(pattern_id).tiling,
            size: grid_size,
            cells,
        }
    }

    /// Catalog lookup, generation and expansion in one step.
    pub fn for_pattern(pattern_id: i64, grid_size: usize) -> Self {
        let field = generate_base_field(get_pattern_params(pattern_id));
        Self::expand(&field, pattern_id, grid_size)
    }

    /// Canonical pattern id (`1..=10`) the board was built from.
    pub fn pattern_id(&self) -> i64 {
        self.pattern_id
    }

    /// Tiling rule used during expansion.
    pub fn tiling(&self) -> TilingMode {
        self.tiling
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Height at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        assert!(
            i < self.size && j < self.size,
            "cell ({i}, {j}) outside {0}x{0} board",
            self.size
        );
        self.cells[i * self.size + j]
    }

    /// Iterates rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics; an empty board simply has no rows.
        self.cells.chunks(self.size.max(1))
    }

    /// Row-major cell data.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells at each level, lowest first.
    pub fn level_histogram(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for &mm in &self.cells {
            if let Some(level) = HeightLevel::from_millimeters(mm) {
                counts[level.index()] += 1;
            }
        }
        counts
    }

    /// BLAKE3 hex digest of the side length and cell bytes.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.size as u64).to_le_bytes());
        hasher.update(&self.cells);
        hasher.finalize().to_hex().to_string()
    }
}
