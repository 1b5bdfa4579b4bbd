//! Live clipping operations
//!
//! The session holds at most one clipping. Copy replaces it, paste stamps
//! it onto the screen as an undoable edit and leaves it in place so it can
//! be stamped again.

use hires_engine::{Clipping, ColorPattern, Position, Rectangle, Result, TransferMode};

use super::HiResEditState;

impl HiResEditState {
    pub fn clipping(&self) -> Option<&Clipping> {
        self.clipping.as_ref()
    }

    pub fn set_clipping(&mut self, clipping: Clipping) {
        self.clipping = Some(clipping);
    }

    pub fn take_clipping(&mut self) -> Option<Clipping> {
        self.clipping.take()
    }

    /// Copies `rect` into the live clipping.
    pub fn copy_selection(&mut self, rect: Rectangle) -> Result<()> {
        let clipping = self.screen.create_clipping(rect)?;
        log::debug!("copied {}x{} clipping", clipping.width(), clipping.height());
        self.clipping = Some(clipping);
        Ok(())
    }

    /// Copies `rect` and then paints it with `pattern`.
    pub fn cut_selection(&mut self, rect: Rectangle, pattern: &ColorPattern) -> Result<Rectangle> {
        self.copy_selection(rect)?;
        self.with_edit("Cut", |screen| {
            screen.fill_rect(rect, pattern)?;
            Ok(rect)
        })
    }

    /// Stamps the live clipping with its top left pixel at `pos`.
    ///
    /// Returns the written area; empty when there is no clipping or it lies
    /// completely off screen.
    pub fn paste_clipping(&mut self, pos: Position, mode: TransferMode) -> Result<Rectangle> {
        let Some(clipping) = self.clipping.take() else {
            return Ok(Rectangle::default());
        };
        let result = self.with_edit("Paste", |screen| Ok(screen.put_clipping(&clipping, pos.x, pos.y, mode)));
        self.clipping = Some(clipping);
        result
    }

    /// Stamps a 1 bit per pixel bitmap painted with `pattern` at `pos`.
    ///
    /// The converted bitmap becomes the live clipping.
    pub fn stamp_bitmap(&mut self, bitmap: &[u8], stride: usize, width: i32, pos: Position, pattern: &ColorPattern, mode: TransferMode) -> Result<Rectangle> {
        self.clipping = Some(Clipping::from_bitmap(bitmap, stride, width, pattern)?);
        self.paste_clipping(pos, mode)
    }
}
