//! Shape drawing operations
//!
//! Each operation is recorded as a single undo item and returns the
//! rectangle of pixels it wrote.

use hires_engine::{ColorPattern, HiResScreen, Position, Rectangle, Result, FILL_MARKER};

use super::HiResEditState;
use crate::brushes::{self, LineStyle};

fn plot_points(screen: &mut HiResScreen, points: &[Position], pattern: &ColorPattern) -> Result<Rectangle> {
    let mut dirty = Rectangle::default();
    for pt in points {
        screen.set_pixel(pt.x, pt.y, pattern)?;
        dirty = dirty.include_pt(*pt);
    }
    Ok(dirty)
}

impl HiResEditState {
    pub fn set_pixel(&mut self, pos: Position, pattern: &ColorPattern) -> Result<Rectangle> {
        self.with_edit("Plot", |screen| {
            screen.set_pixel(pos.x, pos.y, pattern)?;
            Ok(Rectangle::from(pos.x, pos.y, 1, 1))
        })
    }

    pub fn draw_line(&mut self, p0: Position, p1: Position, pattern: &ColorPattern, style: LineStyle) -> Result<Rectangle> {
        let points = style.points(p0, p1);
        self.with_edit("Line", |screen| plot_points(screen, &points, pattern))
    }

    /// Draws the rectangle with corners p0 and p1, both inclusive.
    pub fn draw_rectangle(&mut self, p0: Position, p1: Position, pattern: &ColorPattern, filled: bool) -> Result<Rectangle> {
        let rect = Rectangle::from_corners(p0, p1);
        let label = if filled { "Filled rectangle" } else { "Rectangle" };
        self.with_edit(label, |screen| {
            if filled {
                screen.fill_rect(rect, pattern)?;
                return Ok(rect);
            }
            screen.plot_horiz_segment(rect.left(), rect.top(), rect.width(), pattern)?;
            screen.plot_horiz_segment(rect.left(), rect.bottom() - 1, rect.width(), pattern)?;
            for y in rect.y_range() {
                screen.set_pixel(rect.left(), y, pattern)?;
                screen.set_pixel(rect.right() - 1, y, pattern)?;
            }
            Ok(rect)
        })
    }

    /// Draws the ellipse inscribed in the box with corners p0 and p1.
    pub fn draw_ellipse(&mut self, p0: Position, p1: Position, pattern: &ColorPattern, filled: bool) -> Result<Rectangle> {
        if filled {
            let spans = brushes::filled_ellipse_spans(p0, p1);
            return self.with_edit("Filled ellipse", |screen| {
                let mut dirty = Rectangle::default();
                for &(y, left, width) in &spans {
                    screen.plot_horiz_segment(left, y, width, pattern)?;
                    dirty = dirty.union(&Rectangle::from(left, y, width, 1));
                }
                Ok(dirty)
            });
        }
        let points = brushes::ellipse_points(p0, p1);
        self.with_edit("Ellipse", |screen| plot_points(screen, &points, pattern))
    }

    /// Flood fills the area of equal displayed color around `pos`.
    ///
    /// Colors are compared as rendered in the current mode. Filling an area
    /// with a pattern that leaves it unchanged records nothing.
    pub fn flood_fill(&mut self, pos: Position, pattern: &ColorPattern) -> Result<Rectangle> {
        let mut map = self.screen.generate_color_map(self.mono);
        if map.flood_fill(pos.x, pos.y)? == 0 {
            return Ok(Rectangle::default());
        }
        self.with_edit("Fill", |screen| screen.replace_color(&map, FILL_MARKER, pattern))
    }

    pub fn fill_rect(&mut self, rect: Rectangle, pattern: &ColorPattern) -> Result<Rectangle> {
        self.with_edit("Fill rectangle", |screen| {
            screen.fill_rect(rect, pattern)?;
            Ok(rect)
        })
    }

    /// Paints the whole screen with `pattern`.
    pub fn clear(&mut self, pattern: &ColorPattern) -> Result<Rectangle> {
        self.with_edit("Clear", |screen| {
            screen.clear(pattern);
            Ok(Rectangle::screen())
        })
    }
}
