//! Linear undo history with a save point.

use crate::UndoItem;

#[derive(Clone, Debug, Default)]
pub struct HiResUndoStack {
    items: Vec<UndoItem>,
    /// Number of items currently applied; items past it can be redone.
    undo_index: usize,
    /// Value of `undo_index` when the document was last saved. `None` once
    /// that state was dropped from the history.
    save_index: Option<usize>,
}

impl HiResUndoStack {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            undo_index: 0,
            save_index: Some(0),
        }
    }

    /// Appends a finalized item, dropping everything that could be redone.
    pub fn push(&mut self, item: UndoItem) {
        if self.save_index.is_some_and(|idx| idx > self.undo_index) {
            self.save_index = None;
        }
        self.items.truncate(self.undo_index);
        self.items.push(item);
        self.undo_index = self.items.len();
    }

    pub fn undo_len(&self) -> usize {
        self.undo_index
    }

    pub fn redo_len(&self) -> usize {
        self.items.len() - self.undo_index
    }

    pub fn can_undo(&self) -> bool {
        self.undo_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.undo_index < self.items.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.peek_undo().map(|item| item.label().to_string())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.peek_redo().map(|item| item.label().to_string())
    }

    /// The item the next undo reverts.
    pub fn peek_undo(&self) -> Option<&UndoItem> {
        self.undo_index.checked_sub(1).map(|idx| &self.items[idx])
    }

    /// The item the next redo reapplies.
    pub fn peek_redo(&self) -> Option<&UndoItem> {
        self.items.get(self.undo_index)
    }

    pub(crate) fn step_back(&mut self) {
        self.undo_index = self.undo_index.saturating_sub(1);
    }

    pub(crate) fn step_forward(&mut self) {
        self.undo_index = (self.undo_index + 1).min(self.items.len());
    }

    pub fn mark_saved(&mut self) {
        self.save_index = Some(self.undo_index);
    }

    pub fn is_dirty(&self) -> bool {
        self.save_index != Some(self.undo_index)
    }
}
