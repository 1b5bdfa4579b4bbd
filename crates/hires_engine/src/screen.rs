use crate::{pixel::check_pixel, EngineError, Result, BYTES_PER_ROW, MAX_BUFFER_LEN, MIN_BUFFER_LEN, MODE_BIT, PIXELS_PER_BYTE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Maps a screen row (0..192) to the offset of its first byte.
///
/// The hi-res memory interleaves rows: bits 0-2 of the row select a 1 KiB
/// page, bits 3-5 a 128 byte block inside it and bits 6-7 one of the three
/// 40 byte thirds of that block. The last 8 bytes of every block are unused
/// "screen holes".
pub const fn row_to_offset(row: usize) -> usize {
    let low = ((row & 0xC0) >> 1) | ((row & 0xC0) >> 3) | ((row & 0x08) << 4);
    let high = ((row & 0x07) << 2) | ((row & 0x30) >> 4);
    (high << 8) | low
}

/// True if the rectangle is non-empty and lies completely on the screen.
pub fn is_valid_screen_area(left: i32, top: i32, width: i32, height: i32) -> bool {
    width > 0 && height > 0 && left >= 0 && top >= 0 && left + width <= SCREEN_WIDTH && top + height <= SCREEN_HEIGHT
}

pub(crate) fn check_screen_area(left: i32, top: i32, width: i32, height: i32) -> Result<()> {
    if is_valid_screen_area(left, top, width, height) {
        Ok(())
    } else {
        Err(EngineError::invalid_area(left, top, width, height))
    }
}

/// The raw hi-res buffer.
///
/// The length is fixed at construction; all edits happen in place and undo
/// replaces the whole buffer through [`HiResScreen::replace_data`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiResScreen {
    data: Vec<u8>,
}

impl Default for HiResScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HiResScreen {
    /// Creates an all black 8192 byte screen.
    pub fn new() -> Self {
        Self { data: vec![0; MAX_BUFFER_LEN] }
    }

    /// Takes ownership of a raw buffer of 8184 to 8192 bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        check_buffer_len(data.len())?;
        Ok(Self { data })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Swaps in a complete replacement buffer and hands back the old one.
    pub fn replace_data(&mut self, data: Vec<u8>) -> Result<Vec<u8>> {
        if data.len() != self.data.len() {
            return Err(EngineError::UndoLengthMismatch {
                expected: self.data.len(),
                found: data.len(),
            });
        }
        Ok(std::mem::replace(&mut self.data, data))
    }

    /// Offset of byte column `col` (0..40) in `row` (0..192). Callers check
    /// the coordinates.
    pub(crate) fn byte_offset(col: i32, row: i32) -> usize {
        debug_assert!((0..BYTES_PER_ROW).contains(&col) && (0..SCREEN_HEIGHT).contains(&row));
        row_to_offset(row as usize) + col as usize
    }

    pub(crate) fn byte(&self, col: i32, row: i32) -> u8 {
        self.data[Self::byte_offset(col, row)]
    }

    pub(crate) fn put_byte(&mut self, col: i32, row: i32, value: u8) {
        let offset = Self::byte_offset(col, row);
        self.data[offset] = value;
    }

    /// The screen byte at byte column `col` (0..40) of `row` (0..192).
    pub fn byte_at(&self, col: i32, row: i32) -> Result<u8> {
        check_byte_column(col, row)?;
        Ok(self.byte(col, row))
    }

    pub fn set_byte(&mut self, col: i32, row: i32, value: u8) -> Result<()> {
        check_byte_column(col, row)?;
        self.put_byte(col, row, value);
        Ok(())
    }

    /// True if the byte holding pixel (x, y) selects the second color set.
    pub fn mode_bit(&self, x: i32, y: i32) -> Result<bool> {
        check_pixel(x, y)?;
        Ok(self.byte(x / PIXELS_PER_BYTE, y) & MODE_BIT != 0)
    }
}

fn check_byte_column(col: i32, row: i32) -> Result<()> {
    if (0..BYTES_PER_ROW).contains(&col) && (0..SCREEN_HEIGHT).contains(&row) {
        Ok(())
    } else {
        Err(EngineError::InvalidCoordinate { x: col, y: row })
    }
}

pub(crate) fn check_buffer_len(len: usize) -> Result<()> {
    if (MIN_BUFFER_LEN..=MAX_BUFFER_LEN).contains(&len) {
        Ok(())
    } else {
        Err(EngineError::InvalidBufferLength {
            len,
            min: MIN_BUFFER_LEN,
            max: MAX_BUFFER_LEN,
        })
    }
}
