//! Edit context and undo/redo
//!
//! Every mutation runs inside an open edit:
//! - `open_edit()` snapshots the screen
//! - `close_edit(true)` finalizes the snapshot into an undo item
//! - `close_edit(false)` puts the snapshot back
//!
//! `with_edit()` wraps a closure in that protocol and discards on error.

use hires_engine::{EngineError, HiResScreen, Result};

use super::{EditContext, HiResEditState};
use crate::UndoItem;

impl HiResEditState {
    /// Starts recording a mutation.
    pub fn open_edit(&mut self, label: impl Into<String>) -> Result<()> {
        if let EditContext::Editing(item) = &self.context {
            return Err(EngineError::EditAlreadyOpen { label: item.label().to_string() });
        }
        let item = UndoItem::open(self.screen.data(), label);
        log::debug!("opened edit '{}'", item.label());
        self.context = EditContext::Editing(item);
        Ok(())
    }

    /// Ends the open edit.
    ///
    /// With `keep` the change goes onto the undo stack, otherwise the screen
    /// is restored to the state at `open_edit()`. Returns whether an undo
    /// item was pushed.
    ///
    /// A kept edit that changed no byte is not pushed, even with `keep`.
    /// It returns `Ok(false)` and leaves redo history and the dirty flag
    /// alone.
    pub fn close_edit(&mut self, keep: bool) -> Result<bool> {
        let EditContext::Editing(mut item) = std::mem::take(&mut self.context) else {
            return Err(EngineError::NoEditOpen);
        };

        if !keep {
            log::debug!("discarding edit '{}'", item.label());
            self.screen.replace_data(item.into_before()?)?;
            return Ok(false);
        }

        item.finalize(self.screen.data())?;
        if item.is_empty() {
            log::warn!("edit '{}' changed nothing, not recorded", item.label());
            return Ok(false);
        }
        self.undo_stack.push(item);
        Ok(true)
    }

    /// Runs `f` as one undoable edit.
    ///
    /// An error from `f` discards everything it changed.
    pub fn with_edit<R>(&mut self, label: impl Into<String>, f: impl FnOnce(&mut HiResScreen) -> Result<R>) -> Result<R> {
        self.open_edit(label)?;
        match f(&mut self.screen) {
            Ok(result) => {
                self.close_edit(true)?;
                Ok(result)
            }
            Err(err) => {
                self.close_edit(false)?;
                Err(err)
            }
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        match &self.context {
            EditContext::Idle => Ok(()),
            EditContext::Editing(item) => Err(EngineError::EditAlreadyOpen { label: item.label().to_string() }),
        }
    }

    /// Reverts the most recent edit. Returns `false` if there is none.
    pub fn undo(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(item) = self.undo_stack.peek_undo() else {
            return Ok(false);
        };
        let restored = item.generate_undo(self.screen.data())?;
        self.screen.replace_data(restored)?;
        self.undo_stack.step_back();
        Ok(true)
    }

    /// Reapplies the most recently undone edit. Returns `false` if there is none.
    pub fn redo(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(item) = self.undo_stack.peek_redo() else {
            return Ok(false);
        };
        let restored = item.generate_redo(self.screen.data())?;
        self.screen.replace_data(restored)?;
        self.undo_stack.step_forward();
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    pub fn is_dirty(&self) -> bool {
        self.undo_stack.is_dirty()
    }

    pub fn mark_saved(&mut self) {
        self.undo_stack.mark_saved();
    }
}
