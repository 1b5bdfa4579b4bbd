//! Color model of the hi-res screen.
//!
//! A lit pixel next to another lit pixel shows white, an isolated lit pixel
//! shows a color that depends on the parity of its column, and a dark pixel
//! framed by two lit ones takes the color of its neighbours. The mode bit of
//! the byte picks between the green/purple and the orange/blue set.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HiResColor {
    #[default]
    Black0 = 0,
    Green = 1,
    Purple = 2,
    White0 = 3,
    Black1 = 4,
    Orange = 5,
    Blue = 6,
    White1 = 7,
}

/// Display colors, indexed by [`HiResColor`].
pub const HIRES_PALETTE: [[u8; 4]; 8] = [
    [0x00, 0x00, 0x00, 0xFF],
    [0x14, 0xF5, 0x3C, 0xFF],
    [0xFF, 0x44, 0xFD, 0xFF],
    [0xFF, 0xFF, 0xFF, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0xFF, 0x6A, 0x3C, 0xFF],
    [0x14, 0xCF, 0xFD, 0xFF],
    [0xFF, 0xFF, 0xFF, 0xFF],
];

/// Color of a pixel in the first color set, indexed by
/// `[column parity][left << 2 | pixel << 1 | right]`.
const COLOR_TABLE: [[u8; 8]; 2] = [
    // even column
    [0, 0, 2, 3, 0, 1, 3, 3],
    // odd column
    [0, 0, 1, 3, 0, 2, 3, 3],
];

impl HiResColor {
    const ALL: [HiResColor; 8] = [
        HiResColor::Black0,
        HiResColor::Green,
        HiResColor::Purple,
        HiResColor::White0,
        HiResColor::Black1,
        HiResColor::Orange,
        HiResColor::Blue,
        HiResColor::White1,
    ];

    /// Returns the color for an index; only the low three bits are used.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index & 7) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn rgba(self) -> [u8; 4] {
        HIRES_PALETTE[self as usize]
    }

    /// Folds the two blacks and the two whites onto the first color set.
    ///
    /// They look identical on screen, so region matching ignores the mode bit
    /// that tells them apart.
    pub fn normalized(self) -> Self {
        match self {
            HiResColor::Black1 => HiResColor::Black0,
            HiResColor::White1 => HiResColor::White0,
            c => c,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HiResColor::Black0 => "black0",
            HiResColor::Green => "green",
            HiResColor::Purple => "purple",
            HiResColor::White0 => "white0",
            HiResColor::Black1 => "black1",
            HiResColor::Orange => "orange",
            HiResColor::Blue => "blue",
            HiResColor::White1 => "white1",
        }
    }
}

/// Resolves the displayed color of one pixel from its bit neighbourhood.
///
/// `left` and `right` are the neighbouring pixel bits; callers pass `false`
/// past the screen edges.
pub fn resolve_color(left: bool, pixel: bool, right: bool, odd_column: bool, mode_bit: bool) -> HiResColor {
    let key = (usize::from(left) << 2) | (usize::from(pixel) << 1) | usize::from(right);
    let base = COLOR_TABLE[usize::from(odd_column)][key];
    HiResColor::from_index(base + if mode_bit { 4 } else { 0 })
}

/// Monochrome rendering only looks at the pixel itself.
pub fn resolve_mono(pixel: bool, mode_bit: bool) -> HiResColor {
    let base = if pixel { 3 } else { 0 };
    HiResColor::from_index(base + if mode_bit { 4 } else { 0 })
}
