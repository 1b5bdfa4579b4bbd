use serde::{Deserialize, Serialize};

use crate::{EngineError, HiResColor, Result, MODE_BIT};

/// Bytes in a color pattern: 2 row parities x 4 byte columns.
pub const PATTERN_LEN: usize = 8;

/// An 8 byte tile painted across every drawing operation.
///
/// The byte used for a screen byte is picked by its row parity and its byte
/// column modulo 4. The two transparent patterns leave the pixel bits alone
/// and only clear or set the mode bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorPattern {
    Opaque([u8; PATTERN_LEN]),
    TransparentLow,
    TransparentHigh,
}

impl Default for ColorPattern {
    fn default() -> Self {
        ColorPattern::solid(HiResColor::White0)
    }
}

impl ColorPattern {
    /// Builds an opaque pattern; the slice must hold exactly 8 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PATTERN_LEN] = bytes.try_into().map_err(|_| EngineError::InvalidPatternLength {
            expected: PATTERN_LEN,
            actual: bytes.len(),
        })?;
        Ok(ColorPattern::Opaque(bytes))
    }

    /// The pattern filling an area with one solid color.
    pub fn solid(color: HiResColor) -> Self {
        let hi = if color.index() >= 4 { MODE_BIT } else { 0 };
        // Lit columns for the even (0x55) and odd (0x2A) pixels of an even
        // byte column; odd byte columns start on an odd pixel.
        let (even_col, odd_col) = match color.normalized() {
            HiResColor::Black0 => (0x00, 0x00),
            HiResColor::White0 => (0x7F, 0x7F),
            HiResColor::Green | HiResColor::Orange => (0x2A, 0x55),
            _ => (0x55, 0x2A),
        };
        let even_col = even_col | hi;
        let odd_col = odd_col | hi;
        ColorPattern::Opaque([even_col, odd_col, even_col, odd_col, even_col, odd_col, even_col, odd_col])
    }

    pub fn is_transparent(&self) -> bool {
        !matches!(self, ColorPattern::Opaque(_))
    }

    /// The pattern byte covering byte column `col` of `row`.
    pub fn byte_for(&self, col: i32, row: i32) -> u8 {
        match self {
            ColorPattern::Opaque(bytes) => bytes[(((row & 1) << 2) | (col & 3)) as usize],
            ColorPattern::TransparentLow => 0,
            ColorPattern::TransparentHigh => MODE_BIT,
        }
    }

    /// Restricts a mask of pixel bits to what this pattern may change.
    pub fn write_mask(&self, pixel_bits: u8) -> u8 {
        if self.is_transparent() {
            MODE_BIT
        } else {
            pixel_bits | MODE_BIT
        }
    }

    /// The patterns offered by index: the eight solid colors followed by the
    /// two transparent ones.
    pub fn standard_patterns() -> [ColorPattern; 10] {
        [
            ColorPattern::solid(HiResColor::Black0),
            ColorPattern::solid(HiResColor::Green),
            ColorPattern::solid(HiResColor::Purple),
            ColorPattern::solid(HiResColor::White0),
            ColorPattern::solid(HiResColor::Black1),
            ColorPattern::solid(HiResColor::Orange),
            ColorPattern::solid(HiResColor::Blue),
            ColorPattern::solid(HiResColor::White1),
            ColorPattern::TransparentLow,
            ColorPattern::TransparentHigh,
        ]
    }
}

/// Masked overwrite: bits under `mask` come from `src`, all others stay.
#[inline]
pub(crate) fn overlay(cur: u8, src: u8, mask: u8) -> u8 {
    ((src ^ cur) & mask) ^ cur
}
