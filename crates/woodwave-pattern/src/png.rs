//! Deterministic PNG export of boards and base fields.
//!
//! Every cell becomes a `cell_px`×`cell_px` square in its level color, seen
//! from above with row `i` running down the image. Compression and filter
//! settings are fixed so identical input gives byte-identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::board::Board;
use crate::field::BaseField;
use crate::palette::color_for_height;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a board to a PNG file.
pub fn write_board(
    board: &Board,
    path: &Path,
    cell_px: u32,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_board_to_writer(board, writer, cell_px, config)
}

/// Write a board to any writer.
pub fn write_board_to_writer<W: Write>(
    board: &Board,
    writer: W,
    cell_px: u32,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_cells(board.as_slice(), board.size(), writer, cell_px, config)
}

/// Write a base field to any writer.
pub fn write_field_to_writer<W: Write>(
    field: &BaseField,
    writer: W,
    cell_px: u32,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_cells(field.as_slice(), field.side(), writer, cell_px, config)
}

/// Encode a board in memory and return the bytes with their BLAKE3 hash.
pub fn write_board_to_vec_with_hash(
    board: &Board,
    cell_px: u32,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_board_to_writer(board, &mut data, cell_px, config)?;
    let hash = blake3::hash(&data).to_hex().to_string();
    Ok((data, hash))
}

fn write_cells<W: Write>(
    cells: &[u8],
    side: usize,
    writer: W,
    cell_px: u32,
    config: &PngConfig,
) -> Result<(), PngError> {
    if side == 0 || cell_px == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "cannot encode {}x{} cells at {} px per cell",
            side, side, cell_px
        )));
    }
    let extent = u32::try_from(side)
        .ok()
        .and_then(|s| s.checked_mul(cell_px))
        .ok_or_else(|| {
            PngError::InvalidDimensions(format!("{} cells at {} px overflows", side, cell_px))
        })?;

    let mut encoder = Encoder::new(writer, extent, extent);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&rasterize(cells, side, cell_px as usize))?;

    Ok(())
}

/// Expands cells into RGB8 rows, `cell_px` pixels per cell.
fn rasterize(cells: &[u8], side: usize, cell_px: usize) -> Vec<u8> {
    let extent = side * cell_px;
    let mut data = Vec::with_capacity(extent * extent * 3);
    for row in cells.chunks(side) {
        let mut line = Vec::with_capacity(extent * 3);
        for &mm in row {
            let rgb = color_for_height(mm);
            for _ in 0..cell_px {
                line.extend_from_slice(&rgb);
            }
        }
        for _ in 0..cell_px {
            data.extend_from_slice(&line);
        }
    }
    data
}
