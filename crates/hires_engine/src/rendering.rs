use crate::{
    pixel::check_pixel, resolve_color, resolve_mono, screen::check_screen_area, HiResColor, HiResScreen, Rectangle, Result, BYTES_PER_ROW, MODE_BIT,
    PIXELS_PER_BYTE, SCREEN_WIDTH,
};

/// Colors of one screen row.
pub type LineColors = [HiResColor; SCREEN_WIDTH as usize];

impl HiResScreen {
    /// Resolves the color of every pixel in `row`.
    pub fn render_line(&self, row: i32, mono: bool) -> Result<LineColors> {
        check_pixel(0, row)?;
        let mut bits = [false; SCREEN_WIDTH as usize + 2];
        let mut modes = [false; SCREEN_WIDTH as usize];
        for col in 0..BYTES_PER_ROW {
            let b = self.byte(col, row);
            for bit in 0..PIXELS_PER_BYTE {
                let x = (col * PIXELS_PER_BYTE + bit) as usize;
                // bits[] is shifted by one so both screen edges read as black
                bits[x + 1] = b & (1 << bit) != 0;
                modes[x] = b & MODE_BIT != 0;
            }
        }

        let mut line = [HiResColor::Black0; SCREEN_WIDTH as usize];
        for (x, color) in line.iter_mut().enumerate() {
            *color = if mono {
                resolve_mono(bits[x + 1], modes[x])
            } else {
                resolve_color(bits[x], bits[x + 1], bits[x + 2], x & 1 == 1, modes[x])
            };
        }
        Ok(line)
    }

    /// Resolves the color of a single pixel.
    pub fn get_color(&self, x: i32, y: i32, mono: bool) -> Result<HiResColor> {
        check_pixel(x, y)?;
        let pixel = self.get_pixel(x, y)?;
        let mode = self.mode_bit(x, y)?;
        if mono {
            return Ok(resolve_mono(pixel, mode));
        }
        let left = x > 0 && self.get_pixel(x - 1, y)?;
        let right = x + 1 < SCREEN_WIDTH && self.get_pixel(x + 1, y)?;
        Ok(resolve_color(left, pixel, right, x & 1 == 1, mode))
    }

    /// Renders `rect` into RGBA bytes, row by row.
    pub fn render_region_to_rgba(&self, rect: Rectangle, mono: bool) -> Result<Vec<u8>> {
        check_screen_area(rect.left(), rect.top(), rect.width(), rect.height())?;
        let mut pixels = Vec::with_capacity((rect.width() * rect.height() * 4) as usize);
        for y in rect.y_range() {
            let line = self.render_line(y, mono)?;
            for color in &line[rect.left() as usize..rect.right() as usize] {
                pixels.extend_from_slice(&color.rgba());
            }
        }
        Ok(pixels)
    }

    /// Renders the whole 280x192 screen into RGBA bytes.
    pub fn render_to_rgba(&self, mono: bool) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((SCREEN_WIDTH * crate::SCREEN_HEIGHT * 4) as usize);
        for y in Rectangle::screen().y_range() {
            // row is always on screen
            if let Ok(line) = self.render_line(y, mono) {
                for color in line {
                    pixels.extend_from_slice(&color.rgba());
                }
            }
        }
        pixels
    }
}
