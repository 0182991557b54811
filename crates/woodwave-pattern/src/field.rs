//! Base field generator.
//!
//! Evaluates a catalog entry's closed-form signal over a 10×10 domain centred
//! on the tile and snaps every sample to one of four height levels.

use std::f64::consts::{PI, SQRT_2};

use serde::Serialize;

use crate::catalog::{PatternParams, WaveKind};
use crate::error::FieldError;
use crate::palette::MAX_HEIGHT_MM;

/// Side length of the base field every pattern is generated on.
pub const BASE_SIZE: usize = 10;

/// Square matrix of discrete heights in millimetres (`0`, `2`, `4` or `6`).
///
/// Produced fresh per pattern and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BaseField {
    side: usize,
    cells: Vec<u8>,
}

impl BaseField {
    /// Builds a field from row-major cells, checking shape and levels.
    pub fn from_cells(side: usize, cells: Vec<u8>) -> Result<Self, FieldError> {
        if side == 0 {
            return Err(FieldError::EmptyField);
        }
        let expected = side * side;
        if cells.len() != expected {
            return Err(FieldError::CellCountMismatch {
                side,
                expected,
                actual: cells.len(),
            });
        }
        for (index, &value) in cells.iter().enumerate() {
            if value > MAX_HEIGHT_MM || value % 2 != 0 {
                return Err(FieldError::InvalidLevel {
                    i: index / side,
                    j: index % side,
                    value,
                });
            }
        }
        Ok(Self { side, cells })
    }

    /// Builds a field from a nested row matrix.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, FieldError> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != side {
                return Err(FieldError::RaggedRow {
                    row,
                    len: values.len(),
                    side,
                });
            }
            cells.extend_from_slice(values);
        }
        Self::from_cells(side, cells)
    }

    /// Side length of the square.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Height at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is `>= side()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        assert!(i < self.side && j < self.side, "cell ({i}, {j}) outside {0}x{0} field", self.side);
        self.cells[i * self.side + j]
    }

    /// Iterates rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.side)
    }

    /// Row-major cell data.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

/// Generates the base field for a catalog entry.
pub fn generate_base_field(params: &PatternParams) -> BaseField {
    let mut cells = Vec::with_capacity(BASE_SIZE * BASE_SIZE);
    for i in 0..BASE_SIZE {
        for j in 0..BASE_SIZE {
            let h = sample_signal(params, i, j);
            cells.push(discretize(h, params.amplitude));
        }
    }
    BaseField {
        side: BASE_SIZE,
        cells,
    }
}

/// Evaluates the continuous signal at base cell `(i, j)`.
///
/// The result lies in `[-amplitude, amplitude]`.
pub fn sample_signal(params: &PatternParams, i: usize, j: usize) -> f64 {
    let half = (BASE_SIZE / 2) as f64;
    let mut x = i as f64 - half;
    let mut z = j as f64 - half;

    // Rotating the domain by 45° turns axis-aligned stripes diagonal.
    if params.mirror_domain {
        let (rx, rz) = ((x + z) / SQRT_2, (z - x) / SQRT_2);
        x = rx;
        z = rz;
    }

    let amplitude = params.amplitude;
    let frequency = params.frequency as f64;
    let size = BASE_SIZE as f64;

    // Operand order is kept fixed so boundary cells land on the same level
    // on every platform.
    match params.kind {
        WaveKind::Sine => {
            let angle = params.direction_degrees * PI / 180.0;
            let rotated_x = x * angle.cos() + z * angle.sin();
            let phase = params.phase_degrees * PI / 180.0;
            amplitude * (rotated_x * PI * frequency / size + phase).sin()
        }
        WaveKind::DoubleSine => {
            amplitude
                * ((x * PI * frequency / size).sin() * 0.5
                    + (z * PI * frequency / size).sin() * 0.5)
        }
        WaveKind::Circular => {
            let dist = (x * x + z * z).sqrt();
            amplitude * (dist * PI * frequency / size).sin()
        }
        WaveKind::Checkerboard => {
            if (i + j).is_multiple_of(2) {
                amplitude
            } else {
                -amplitude
            }
        }
    }
}

/// Snaps a continuous sample onto the `{0, 2, 4, 6}` lattice.
///
/// `(h + amplitude) / 2` is rounded to the nearest integer with ties going
/// up, doubled, then clamped to `[0, 6]`.
pub fn discretize(h: f64, amplitude: f64) -> u8 {
    let step = round_half_up((h + amplitude) / 2.0) * 2.0;
    step.clamp(0.0, MAX_HEIGHT_MM as f64) as u8
}

#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_pattern_params, CATALOG};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_level_in_range() {
        for params in &CATALOG {
            let field = generate_base_field(params);
            assert_eq!(field.side(), BASE_SIZE);
            for &h in field.as_slice() {
                assert!(matches!(h, 0 | 2 | 4 | 6), "{} produced {}", params.label, h);
            }
        }
    }

    #[test]
    fn test_checkerboard_exact() {
        let field = generate_base_field(get_pattern_params(10));
        for i in 0..BASE_SIZE {
            for j in 0..BASE_SIZE {
                let expected = if (i + j) % 2 == 0 { 6 } else { 0 };
                assert_eq!(field.get(i, j), expected, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_horizontal_wave_profile() {
        let field = generate_base_field(get_pattern_params(1));
        let column: Vec<u8> = (0..BASE_SIZE).map(|i| field.get(i, 0)).collect();
        assert_eq!(column, vec![2, 2, 0, 0, 2, 4, 4, 6, 6, 4]);

        // Direction 0 only varies along i.
        for row in field.rows() {
            assert!(row.iter().all(|&h| h == row[0]));
        }
    }

    #[test]
    fn test_discretize_ties_round_up() {
        // h = 0 sits exactly between levels 2 and 4.
        assert_eq!(discretize(0.0, 3.0), 4);
        assert_eq!(discretize(-2.0, 3.0), 2);
    }

    #[test]
    fn test_discretize_clamps() {
        assert_eq!(discretize(100.0, 3.0), 6);
        assert_eq!(discretize(-100.0, 3.0), 0);
        // Large amplitudes overshoot before the clamp.
        assert_eq!(discretize(5.0, 5.0), 6);
        assert_eq!(discretize(-5.0, 5.0), 0);
    }

    #[test]
    fn test_signal_within_amplitude() {
        for params in &CATALOG {
            for i in 0..BASE_SIZE {
                for j in 0..BASE_SIZE {
                    let h = sample_signal(params, i, j);
                    assert!(h.abs() <= params.amplitude + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for params in &CATALOG {
            assert_eq!(generate_base_field(params), generate_base_field(params));
        }
    }

    #[test]
    fn test_from_cells_rejects_bad_level() {
        let err = BaseField::from_cells(2, vec![0, 2, 3, 6]).unwrap_err();
        assert_eq!(err, FieldError::InvalidLevel { i: 1, j: 0, value: 3 });
    }

    #[test]
    fn test_from_cells_rejects_wrong_count() {
        let err = BaseField::from_cells(3, vec![0; 8]).unwrap_err();
        assert_eq!(
            err,
            FieldError::CellCountMismatch {
                side: 3,
                expected: 9,
                actual: 8
            }
        );
        assert_eq!(BaseField::from_cells(0, vec![]).unwrap_err(), FieldError::EmptyField);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![0, 2], vec![4]];
        assert_eq!(
            BaseField::from_rows(&rows).unwrap_err(),
            FieldError::RaggedRow { row: 1, len: 1, side: 2 }
        );
    }
}
