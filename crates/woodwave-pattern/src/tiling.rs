//! Tile expansion.
//!
//! A grid larger than the base field is covered by copies of it. Cell
//! `(i, j)` falls into tile `(i / side, j / side)`; for mirrored patterns the
//! local coordinates are reflected inside odd tiles so neighbouring copies
//! meet edge to edge.

use serde::Serialize;

use crate::catalog::{get_pattern_params, TilingMode};
use crate::field::BaseField;

/// Position of a grid cell relative to the tile that covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileCoord {
    /// Tile column along `i`.
    pub tile_x: usize,
    /// Tile row along `j`.
    pub tile_y: usize,
    /// Offset inside the tile along `i`, before any mirroring.
    pub local_i: usize,
    /// Offset inside the tile along `j`, before any mirroring.
    pub local_j: usize,
}

impl TileCoord {
    /// Source cell in the base field after applying `tiling`.
    pub fn source_cell(&self, base_size: usize, tiling: TilingMode) -> (usize, usize) {
        match tiling {
            TilingMode::Periodic => (self.local_i, self.local_j),
            TilingMode::Mirrored => (
                reflect_if_odd(self.local_i, self.tile_x, base_size),
                reflect_if_odd(self.local_j, self.tile_y, base_size),
            ),
        }
    }
}

#[inline]
fn reflect_if_odd(local: usize, tile: usize, base_size: usize) -> usize {
    if tile % 2 == 1 {
        base_size - 1 - local
    } else {
        local
    }
}

/// Splits grid cell `(i, j)` into tile and in-tile coordinates.
pub fn locate(i: usize, j: usize, base_size: usize) -> TileCoord {
    TileCoord {
        tile_x: i / base_size,
        tile_y: j / base_size,
        local_i: i % base_size,
        local_j: j % base_size,
    }
}

/// Height at grid cell `(i, j)` with an explicit tiling rule.
pub fn height_at_with_mode(i: usize, j: usize, field: &BaseField, tiling: TilingMode) -> u8 {
    let base_size = field.side();
    let (si, sj) = locate(i, j, base_size).source_cell(base_size, tiling);
    field.get(si, sj)
}

/// Height at grid cell `(i, j)` for the pattern `pattern_id`.
///
/// The id goes through the catalog's cyclic lookup, so `12` tiles exactly
/// like `2` (periodic). A check against the literal id set `{2, 3, 7, 9}`
/// would instead mirror `12` while still drawing pattern 2's field; use
/// [`height_at_with_mode`] with [`TilingMode::Mirrored`] to get that layout.
pub fn height_at(i: usize, j: usize, field: &BaseField, pattern_id: i64) -> u8 {
    height_at_with_mode(i, j, field, get_pattern_params(pattern_id).tiling)
}
