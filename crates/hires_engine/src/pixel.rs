use crate::{
    pattern::overlay, screen::check_screen_area, ColorPattern, EngineError, HiResScreen, Position, Rectangle, Result, MODE_BIT, PIXELS_PER_BYTE, PIXEL_BITS,
};

impl HiResScreen {
    /// Returns the pixel bit at (x, y).
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<bool> {
        check_pixel(x, y)?;
        Ok(self.byte(x / PIXELS_PER_BYTE, y) & (1 << (x % PIXELS_PER_BYTE)) != 0)
    }

    /// Paints a single pixel with the pattern.
    ///
    /// Only the pixel bit and the mode bit of the byte are written, so
    /// painting the same pixel twice gives the same result as painting it once.
    pub fn set_pixel(&mut self, x: i32, y: i32, pattern: &ColorPattern) -> Result<()> {
        check_pixel(x, y)?;
        let col = x / PIXELS_PER_BYTE;
        let mask = pattern.write_mask(1 << (x % PIXELS_PER_BYTE));
        let src = pattern.byte_for(col, y);
        let offset = Self::byte_offset(col, y);
        let data = self.data_mut();
        data[offset] = overlay(data[offset], src, mask);
        Ok(())
    }

    /// Paints `width` pixels of row `y` starting at `x`.
    ///
    /// Partially covered bytes at both ends keep the bits outside the run;
    /// bytes in between are overwritten completely. Transparent patterns
    /// only OR their mode bit into the bytes in between, so
    /// [`ColorPattern::TransparentLow`] leaves those bytes alone.
    pub fn plot_horiz_segment(&mut self, x: i32, y: i32, width: i32, pattern: &ColorPattern) -> Result<()> {
        check_screen_area(x, y, width, 1)?;
        let last = x + width - 1;
        let first_col = x / PIXELS_PER_BYTE;
        let last_col = last / PIXELS_PER_BYTE;
        let left_mask = (PIXEL_BITS << (x % PIXELS_PER_BYTE)) & PIXEL_BITS;
        let right_mask = PIXEL_BITS >> (PIXELS_PER_BYTE - 1 - last % PIXELS_PER_BYTE);
        let row_offset = Self::byte_offset(0, y);

        let data = self.data_mut();
        for col in first_col..=last_col {
            let mut bits = PIXEL_BITS;
            if col == first_col {
                bits &= left_mask;
            }
            if col == last_col {
                bits &= right_mask;
            }
            let offset = row_offset + col as usize;
            data[offset] = paint_byte(data[offset], pattern.byte_for(col, y), pattern, bits);
        }
        Ok(())
    }

    /// Paints every pixel of `rect`.
    pub fn fill_rect(&mut self, rect: Rectangle, pattern: &ColorPattern) -> Result<()> {
        check_screen_area(rect.left(), rect.top(), rect.width(), rect.height())?;
        for y in rect.y_range() {
            self.plot_horiz_segment(rect.left(), y, rect.width(), pattern)?;
        }
        Ok(())
    }

    /// Paints the whole screen, one full segment per row.
    pub fn clear(&mut self, pattern: &ColorPattern) {
        for y in Rectangle::screen().y_range() {
            let row_offset = Self::byte_offset(0, y);
            let data = self.data_mut();
            for col in 0..crate::BYTES_PER_ROW {
                let offset = row_offset + col as usize;
                data[offset] = paint_byte(data[offset], pattern.byte_for(col, y), pattern, PIXEL_BITS);
            }
        }
    }
}

/// Writes `src` into the `bits` of `cur` that a segment covers.
fn paint_byte(cur: u8, src: u8, pattern: &ColorPattern, bits: u8) -> u8 {
    if pattern.is_transparent() && bits == PIXEL_BITS {
        cur | (src & MODE_BIT)
    } else {
        overlay(cur, src, pattern.write_mask(bits))
    }
}

pub(crate) fn check_pixel(x: i32, y: i32) -> Result<()> {
    if Position::new(x, y).is_on_screen() {
        Ok(())
    } else {
        Err(EngineError::InvalidCoordinate { x, y })
    }
}
