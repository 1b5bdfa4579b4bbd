//! Flat color map of the screen and the flood fill working on it.

use crate::{pixel::check_pixel, ColorPattern, HiResScreen, Position, Rectangle, Result, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Value written into filled cells. Color indices never reach it.
pub const FILL_MARKER: u8 = 0xFF;

/// One byte per pixel, row major, holding a normalized color index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMap {
    cells: Vec<u8>,
}

impl ColorMap {
    pub fn width(&self) -> i32 {
        SCREEN_WIDTH
    }

    pub fn height(&self) -> i32 {
        SCREEN_HEIGHT
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The normalized color index (or marker) of pixel (x, y).
    pub fn get(&self, x: i32, y: i32) -> Result<u8> {
        check_pixel(x, y)?;
        Ok(self.cells[index(x, y)])
    }

    /// Flood fills the 4-connected area of equal color around (x, y) with
    /// [`FILL_MARKER`] and returns the number of cells marked.
    ///
    /// Works off an explicit stack so deep regions can't exhaust the call
    /// stack.
    pub fn flood_fill(&mut self, x: i32, y: i32) -> Result<usize> {
        check_pixel(x, y)?;
        let start_color = self.cells[index(x, y)];
        if start_color == FILL_MARKER {
            return Ok(0);
        }

        let mut filled = 0;
        let mut stack: Vec<(i32, i32)> = Vec::with_capacity(SCREEN_WIDTH as usize * 4);
        stack.push((x, y));
        while let Some((cx, cy)) = stack.pop() {
            let idx = index(cx, cy);
            if self.cells[idx] != start_color {
                continue;
            }
            self.cells[idx] = FILL_MARKER;
            filled += 1;

            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (nx, ny) = (cx + dx, cy + dy);
                if Position::new(nx, ny).is_on_screen() && self.cells[index(nx, ny)] == start_color {
                    stack.push((nx, ny));
                }
            }
        }
        log::debug!("flood fill at ({x}, {y}) marked {filled} pixels");
        Ok(filled)
    }

    /// Bounding box of all cells holding `marker`; empty if there are none.
    pub fn marked_bounds(&self, marker: u8) -> Rectangle {
        let mut bounds = Rectangle::default();
        for (i, _) in self.cells.iter().enumerate().filter(|&(_, &c)| c == marker) {
            let pt = Position::new(i as i32 % SCREEN_WIDTH, i as i32 / SCREEN_WIDTH);
            bounds = bounds.include_pt(pt);
        }
        bounds
    }
}

fn index(x: i32, y: i32) -> usize {
    (y * SCREEN_WIDTH + x) as usize
}

impl HiResScreen {
    /// Resolves every pixel into a [`ColorMap`].
    ///
    /// The black and white pairs of the two color sets are folded together,
    /// so areas match by what is visible and not by their mode bits.
    pub fn generate_color_map(&self, mono: bool) -> ColorMap {
        let mut cells = Vec::with_capacity((SCREEN_WIDTH * SCREEN_HEIGHT) as usize);
        for y in Rectangle::screen().y_range() {
            if let Ok(line) = self.render_line(y, mono) {
                cells.extend(line.iter().map(|c| c.normalized().index()));
            }
        }
        ColorMap { cells }
    }

    /// Paints every pixel whose map cell holds `marker` and returns the
    /// bounding box of the painted pixels.
    pub fn replace_color(&mut self, map: &ColorMap, marker: u8, pattern: &ColorPattern) -> Result<Rectangle> {
        let mut bounds = Rectangle::default();
        for (i, _) in map.cells.iter().enumerate().filter(|&(_, &c)| c == marker) {
            let pt = Position::new(i as i32 % SCREEN_WIDTH, i as i32 / SCREEN_WIDTH);
            self.set_pixel(pt.x, pt.y, pattern)?;
            bounds = bounds.include_pt(pt);
        }
        Ok(bounds)
    }
}
