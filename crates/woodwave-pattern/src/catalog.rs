//! Pattern catalog.
//!
//! A fixed, ordered list of wave presets addressed by a 1-based pattern id.
//! Ids are interpreted cyclically, so every integer resolves to exactly one
//! entry and lookups never fail.

use serde::Serialize;

/// Number of entries in [`CATALOG`].
pub const CATALOG_SIZE: usize = 10;

/// Canonical ids whose patterns tile seamlessly without reflection.
///
/// These are the diagonal stripe families (the entries that rotate their
/// domain by 45°). The `tiling` column of [`CATALOG`] agrees with this list.
pub const NO_MIRROR_IDS: [i64; 4] = [2, 3, 7, 9];

/// Closed set of continuous signal kinds a pattern can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveKind {
    /// Single sine wave along a rotated axis.
    Sine,
    /// Superposition of two axis-aligned sines (lattice look).
    DoubleSine,
    /// Sine of the distance from the tile center (concentric rings).
    Circular,
    /// Two-level alternation by cell parity.
    Checkerboard,
}

impl WaveKind {
    /// Returns the snake_case name used in JSON and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveKind::Sine => "sine",
            WaveKind::DoubleSine => "double_sine",
            WaveKind::Circular => "circular",
            WaveKind::Checkerboard => "checkerboard",
        }
    }
}

impl std::fmt::Display for WaveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the base field repeats across tiles of a larger grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TilingMode {
    /// Odd tiles are reflected so edges meet without a seam.
    Mirrored,
    /// Plain repetition; the pattern is already periodic across tile edges.
    Periodic,
}

impl TilingMode {
    /// Returns the snake_case name used in JSON and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TilingMode::Mirrored => "mirrored",
            TilingMode::Periodic => "periodic",
        }
    }

    /// One-line human description of the tiling rule.
    pub fn description(&self) -> &'static str {
        match self {
            TilingMode::Mirrored => "odd tiles are placed mirrored",
            TilingMode::Periodic => "tiles repeat without mirroring",
        }
    }
}

impl std::fmt::Display for TilingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter record for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternParams {
    /// Signal kind.
    pub kind: WaveKind,
    /// Cycles across the base domain.
    pub frequency: u32,
    /// Peak amplitude of the continuous signal.
    pub amplitude: f64,
    /// Rotation of the sine axis in degrees (`Sine` only).
    pub direction_degrees: f64,
    /// Phase offset in degrees (`Sine` only).
    pub phase_degrees: f64,
    /// Rotate the (x, z) domain by 45° before evaluation.
    pub mirror_domain: bool,
    /// Tiling rule applied when the field is expanded.
    pub tiling: TilingMode,
    /// Display name, opaque to generation.
    pub label: &'static str,
}

impl PatternParams {
    const fn new(
        kind: WaveKind,
        frequency: u32,
        direction_degrees: f64,
        phase_degrees: f64,
        mirror_domain: bool,
        label: &'static str,
    ) -> Self {
        Self {
            kind,
            frequency,
            amplitude: 3.0,
            direction_degrees,
            phase_degrees,
            mirror_domain,
            tiling: if mirror_domain {
                TilingMode::Periodic
            } else {
                TilingMode::Mirrored
            },
            label,
        }
    }
}

/// The shipped presets, in id order (index 0 is pattern id 1).
pub const CATALOG: [PatternParams; CATALOG_SIZE] = [
    PatternParams::new(WaveKind::Sine, 2, 0.0, 0.0, false, "Horizontal wave (basic)"),
    PatternParams::new(WaveKind::Sine, 3, 0.0, 0.0, true, "Diagonal stripes (dense)"),
    PatternParams::new(WaveKind::Sine, 2, 90.0, 0.0, true, "Diagonal stripes (standard)"),
    PatternParams::new(WaveKind::Sine, 2, 45.0, 0.0, false, "Diagonal wave 45°"),
    PatternParams::new(WaveKind::DoubleSine, 2, 0.0, 0.0, false, "Lattice"),
    PatternParams::new(WaveKind::Circular, 2, 0.0, 0.0, false, "Concentric rings"),
    PatternParams::new(WaveKind::Sine, 1, 0.0, 0.0, true, "Gentle diagonal stripes"),
    PatternParams::new(WaveKind::DoubleSine, 3, 0.0, 0.0, false, "Fine lattice"),
    PatternParams::new(WaveKind::Sine, 2, 0.0, 90.0, true, "Phase-shifted diagonal stripes"),
    PatternParams::new(WaveKind::Checkerboard, 2, 0.0, 0.0, false, "Checkerboard"),
];

/// Maps any pattern id to a catalog index using `((id-1) mod n + n) mod n`.
///
/// Works for the full `i64` range, including zero and negative ids.
pub fn normalize_pattern_id(pattern_id: i64) -> usize {
    let n = CATALOG_SIZE as i64;
    // Reduce first so `- 1` cannot overflow at i64::MIN.
    ((pattern_id % n) - 1).rem_euclid(n) as usize
}

/// Returns the id in `1..=CATALOG_SIZE` that `pattern_id` resolves to.
pub fn canonical_pattern_id(pattern_id: i64) -> i64 {
    normalize_pattern_id(pattern_id) as i64 + 1
}

/// Looks up the parameters for a pattern id. Never fails.
pub fn get_pattern_params(pattern_id: i64) -> &'static PatternParams {
    &CATALOG[normalize_pattern_id(pattern_id)]
}

/// Iterates `(id, params)` pairs in catalog order.
pub fn entries() -> impl Iterator<Item = (i64, &'static PatternParams)> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, params)| (index as i64 + 1, params))
}
