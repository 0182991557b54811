//! Height levels and the four-step wood color ramp.

use serde::Serialize;

/// Tallest block protrusion in millimetres.
pub const MAX_HEIGHT_MM: u8 = 6;

/// Millimetres between adjacent levels.
pub const LEVEL_STEP_MM: u8 = 2;

/// One of the four discrete block heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeightLevel {
    /// 0 mm.
    L0,
    /// 2 mm.
    L1,
    /// 4 mm.
    L2,
    /// 6 mm.
    L3,
}

impl HeightLevel {
    /// All levels, lowest first.
    pub const ALL: [HeightLevel; 4] = [
        HeightLevel::L0,
        HeightLevel::L1,
        HeightLevel::L2,
        HeightLevel::L3,
    ];

    /// Converts a millimetre height; `None` for anything outside `{0, 2, 4, 6}`.
    pub fn from_millimeters(mm: u8) -> Option<Self> {
        match mm {
            0 => Some(HeightLevel::L0),
            2 => Some(HeightLevel::L1),
            4 => Some(HeightLevel::L2),
            6 => Some(HeightLevel::L3),
            _ => None,
        }
    }

    /// Level index 0..=3.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Height in millimetres.
    pub fn millimeters(&self) -> u8 {
        self.index() as u8 * LEVEL_STEP_MM
    }

    /// Block color as 8-bit RGB.
    pub fn color(&self) -> [u8; 3] {
        match self {
            HeightLevel::L0 => [0x8B, 0x45, 0x13],
            HeightLevel::L1 => [0xA0, 0x52, 0x2D],
            HeightLevel::L2 => [0xCD, 0x85, 0x3F],
            HeightLevel::L3 => [0xDA, 0xA5, 0x20],
        }
    }

    /// Readable label color on top of [`color`](Self::color).
    pub fn text_color(&self) -> [u8; 3] {
        if self.index() >= 2 {
            [0x00, 0x00, 0x00]
        } else {
            [0xFF, 0xFF, 0xFF]
        }
    }

    /// `#RRGGBB` form of the block color.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.color();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Color for a millimetre height, clamping unexpected values to the top level.
pub fn color_for_height(mm: u8) -> [u8; 3] {
    HeightLevel::from_millimeters(mm)
        .unwrap_or(HeightLevel::L3)
        .color()
}

/// Legend entry for display alongside a field or board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegendEntry {
    /// Level index 0..=3.
    pub level: usize,
    /// Height in millimetres.
    pub millimeters: u8,
    /// `#RRGGBB` color.
    pub color: String,
}

/// The four legend entries, lowest level first.
pub fn legend() -> Vec<LegendEntry> {
    HeightLevel::ALL
        .iter()
        .map(|level| LegendEntry {
            level: level.index(),
            millimeters: level.millimeters(),
            color: level.hex(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeter_round_trip() {
        for level in HeightLevel::ALL {
            assert_eq!(HeightLevel::from_millimeters(level.millimeters()), Some(level));
        }
        assert_eq!(HeightLevel::from_millimeters(3), None);
        assert_eq!(HeightLevel::from_millimeters(8), None);
    }

    #[test]
    fn test_ramp_gets_lighter() {
        let sums: Vec<u32> = HeightLevel::ALL
            .iter()
            .map(|l| l.color().iter().map(|&c| c as u32).sum())
            .collect();
        assert!(sums.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_text_contrast() {
        assert_eq!(HeightLevel::L0.text_color(), [0xFF, 0xFF, 0xFF]);
        assert_eq!(HeightLevel::L2.text_color(), [0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_legend_hex() {
        let entries = legend();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].color, "#8B4513");
        assert_eq!(entries[3].color, "#DAA520");
        assert_eq!(entries[3].millimeters, 6);
    }
}
