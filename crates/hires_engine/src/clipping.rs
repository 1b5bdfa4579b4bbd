//! Clippings: portable copies of a screen area.
//!
//! A clipping keeps the raw bytes covering a rectangle together with a mask
//! of the bits that belong to it. The left edge rarely falls on a byte
//! boundary, so `left_off` records the pixel position of the first column
//! inside its byte. Pasting realigns the bytes to the target column.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    pattern::overlay, screen::check_screen_area, ColorPattern, EngineError, HiResScreen, Rectangle, Result, BYTES_PER_ROW, MODE_BIT, PIXELS_PER_BYTE,
    PIXEL_BITS, SCREEN_HEIGHT,
};

/// How clipping bytes are combined with the screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferMode {
    /// Masked bits replace the screen bits.
    #[default]
    Copy,
    /// Masked bits are OR'ed in; nothing is turned off.
    Merge,
    /// Masked bits are XOR'ed in; pasting twice restores the screen.
    Xor,
}

impl TransferMode {
    fn apply(self, cur: u8, src: u8, mask: u8) -> u8 {
        match self {
            TransferMode::Copy => overlay(cur, src, mask),
            TransferMode::Merge => cur | (src & mask),
            TransferMode::Xor => cur ^ (src & mask),
        }
    }
}

impl FromStr for TransferMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "copy" => Ok(TransferMode::Copy),
            "merge" => Ok(TransferMode::Merge),
            "xor" => Ok(TransferMode::Xor),
            _ => Err(EngineError::UnknownTransferMode { mode: s.to_string() }),
        }
    }
}

impl TryFrom<u8> for TransferMode {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(TransferMode::Copy),
            1 => Ok(TransferMode::Merge),
            2 => Ok(TransferMode::Xor),
            _ => Err(EngineError::UnknownTransferMode { mode: value.to_string() }),
        }
    }
}

/// A rectangular, optionally masked, block of screen bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipping {
    width: i32,
    height: i32,
    byte_stride: usize,
    left_off: u8,
    pix: Vec<u8>,
    mask: Vec<u8>,
}

impl Clipping {
    /// Assembles a clipping from its parts, checking that they agree.
    pub fn new(width: i32, height: i32, left_off: u8, pix: Vec<u8>, mask: Vec<u8>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::malformed_clipping(format!("empty size {width}x{height}")));
        }
        if i32::from(left_off) >= PIXELS_PER_BYTE {
            return Err(EngineError::malformed_clipping(format!("left offset {left_off} out of range")));
        }
        let byte_stride = stride_for(i32::from(left_off), width);
        let expected = byte_stride * height as usize;
        if pix.len() != expected || mask.len() != expected {
            return Err(EngineError::malformed_clipping(format!(
                "expected {expected} bytes, got {} pixel and {} mask bytes",
                pix.len(),
                mask.len()
            )));
        }
        Ok(Self {
            width,
            height,
            byte_stride,
            left_off,
            pix,
            mask,
        })
    }

    /// Converts a 1 bit per pixel bitmap (MSB first, `stride` bytes per row)
    /// into a clipping painted with `pattern`.
    ///
    /// Set bits become paintable pixels; clear bits are masked out. Every
    /// byte of an opaque pattern also carries the pattern's mode bit.
    pub fn from_bitmap(bitmap: &[u8], stride: usize, width: i32, pattern: &ColorPattern) -> Result<Self> {
        if width <= 0 || stride == 0 || bitmap.is_empty() {
            return Err(EngineError::malformed_bitmap("bitmap is empty"));
        }
        if bitmap.len() % stride != 0 {
            return Err(EngineError::malformed_bitmap(format!("length {} is not a multiple of stride {stride}", bitmap.len())));
        }
        if (width as usize).div_ceil(8) > stride {
            return Err(EngineError::malformed_bitmap(format!("width {width} does not fit in stride {stride}")));
        }
        let height = bitmap.len() / stride;
        let byte_stride = stride_for(0, width);
        let mut pix = Vec::with_capacity(byte_stride * height);
        let mut mask = Vec::with_capacity(byte_stride * height);

        for (row, src) in bitmap.chunks_exact(stride).enumerate() {
            let mut group = 0u8;
            let mut bit = 0;
            let mut col = 0;
            for x in 0..width as usize {
                if src[x / 8] & (0x80 >> (x % 8)) != 0 {
                    group |= 1 << bit;
                }
                bit += 1;
                if bit == PIXELS_PER_BYTE || x + 1 == width as usize {
                    let m = if pattern.is_transparent() {
                        if group == 0 {
                            0
                        } else {
                            MODE_BIT
                        }
                    } else {
                        group | MODE_BIT
                    };
                    mask.push(m);
                    pix.push(m & pattern.byte_for(col, row as i32));
                    group = 0;
                    bit = 0;
                    col += 1;
                }
            }
        }

        Self::new(width, height as i32, 0, pix, mask)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn byte_stride(&self) -> usize {
        self.byte_stride
    }

    pub fn left_off(&self) -> u8 {
        self.left_off
    }

    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    fn row(&self, row: usize) -> (&[u8], &[u8]) {
        let range = row * self.byte_stride..(row + 1) * self.byte_stride;
        (&self.pix[range.clone()], &self.mask[range])
    }
}

fn stride_for(left_off: i32, width: i32) -> usize {
    ((left_off + width - 1) / PIXELS_PER_BYTE + 1) as usize
}

/// Moves the pixel bits of one clipping row `shift` (0..7) positions to the
/// right, carrying overflow into the next byte. The output holds one byte
/// more than the input.
///
/// A destination byte takes its mode bit from the source byte that supplies
/// its low pixels, or from the carried byte when that one is the only source.
/// A source byte whose mask is the bare mode bit (an empty or transparent
/// bitmap group) passes it to both bytes it overlaps unless one of them
/// already gets pixels, so shifting never drops it.
fn shift_row(pix: &[u8], mask: &[u8], shift: u32, out_pix: &mut [u8], out_mask: &mut [u8]) {
    debug_assert!(shift < PIXELS_PER_BYTE as u32 && out_pix.len() == pix.len() + 1);
    if shift == 0 {
        out_pix[..pix.len()].copy_from_slice(pix);
        out_mask[..mask.len()].copy_from_slice(mask);
        out_pix[pix.len()] = 0;
        out_mask[mask.len()] = 0;
        return;
    }

    let carry = PIXELS_PER_BYTE as u32 - shift;
    for j in 0..out_pix.len() {
        let (cur_pix, cur_mask) = if j < pix.len() { (pix[j], mask[j]) } else { (0, 0) };
        let (prev_pix, prev_mask) = if j > 0 { (pix[j - 1], mask[j - 1]) } else { (0, 0) };

        let cur_bits = ((cur_mask & PIXEL_BITS) << shift) & PIXEL_BITS;
        let prev_bits = (prev_mask & PIXEL_BITS) >> carry;
        let data_mask = cur_bits | prev_bits;
        let data_pix = (((cur_pix & PIXEL_BITS) << shift) & PIXEL_BITS) | ((prev_pix & PIXEL_BITS) >> carry);

        let (hi_pix, hi_mask) = if cur_bits != 0 {
            (cur_pix & MODE_BIT, cur_mask & MODE_BIT)
        } else if prev_bits != 0 {
            (prev_pix & MODE_BIT, prev_mask & MODE_BIT)
        } else if cur_mask == MODE_BIT {
            (cur_pix & MODE_BIT, MODE_BIT)
        } else if prev_mask == MODE_BIT {
            (prev_pix & MODE_BIT, MODE_BIT)
        } else {
            (0, 0)
        };

        out_mask[j] = data_mask | hi_mask;
        out_pix[j] = (data_pix & data_mask) | hi_pix;
    }
}

impl HiResScreen {
    /// Copies the bytes under `rect` into a clipping.
    ///
    /// Edge columns are masked down to the pixels inside `rect`; the mode bit
    /// is part of every mask byte.
    pub fn create_clipping(&self, rect: Rectangle) -> Result<Clipping> {
        check_screen_area(rect.left(), rect.top(), rect.width(), rect.height())?;
        let first_col = rect.left() / PIXELS_PER_BYTE;
        let last_col = (rect.right() - 1) / PIXELS_PER_BYTE;
        let left_mask = (PIXEL_BITS << (rect.left() % PIXELS_PER_BYTE)) & PIXEL_BITS;
        let right_mask = PIXEL_BITS >> (PIXELS_PER_BYTE - 1 - (rect.right() - 1) % PIXELS_PER_BYTE);

        let stride = (last_col - first_col + 1) as usize;
        let mut pix = Vec::with_capacity(stride * rect.height() as usize);
        let mut mask = Vec::with_capacity(stride * rect.height() as usize);
        for y in rect.y_range() {
            for col in first_col..=last_col {
                let mut bits = PIXEL_BITS;
                if col == first_col {
                    bits &= left_mask;
                }
                if col == last_col {
                    bits &= right_mask;
                }
                pix.push(self.byte(col, y));
                mask.push(bits | MODE_BIT);
            }
        }

        Clipping::new(rect.width(), rect.height(), (rect.left() % PIXELS_PER_BYTE) as u8, pix, mask)
    }

    /// Transfers a clipping so its top left pixel lands on (x, y).
    ///
    /// The clipping may hang over any screen edge; only the part on screen is
    /// written. Bytes are always shifted towards the right: when the target
    /// column lies left of the clipping's own alignment the shift wraps
    /// around by 7 and the paste starts one byte column earlier.
    ///
    /// Returns the written area, empty when nothing was on screen.
    pub fn put_clipping(&mut self, clipping: &Clipping, x: i32, y: i32, mode: TransferMode) -> Rectangle {
        let mut start_col = x.div_euclid(PIXELS_PER_BYTE);
        let mut shift = x.rem_euclid(PIXELS_PER_BYTE) - i32::from(clipping.left_off);
        if shift < 0 {
            shift += PIXELS_PER_BYTE;
            start_col -= 1;
        }

        let stride = clipping.byte_stride;
        let mut row_pix = vec![0u8; stride + 1];
        let mut row_mask = vec![0u8; stride + 1];

        for row in 0..clipping.height {
            let dst_y = y + row;
            if !(0..SCREEN_HEIGHT).contains(&dst_y) {
                continue;
            }
            let (pix, mask) = clipping.row(row as usize);
            shift_row(pix, mask, shift as u32, &mut row_pix, &mut row_mask);

            for (i, (&p, &m)) in row_pix.iter().zip(row_mask.iter()).enumerate() {
                let col = start_col + i as i32;
                if m == 0 || !(0..BYTES_PER_ROW).contains(&col) {
                    continue;
                }
                let cur = self.byte(col, dst_y);
                self.put_byte(col, dst_y, mode.apply(cur, p, m));
            }
        }

        Rectangle::from(x, y, clipping.width, clipping.height).intersect(&Rectangle::screen())
    }
}
