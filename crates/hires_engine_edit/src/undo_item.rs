//! A single undoable change of the screen buffer.
//!
//! An item is opened with a snapshot of the buffer and finalized with the
//! buffer after the edit. Small edits keep a list of changed bytes, large
//! ones keep both buffers.

use hires_engine::{EngineError, Result};

/// One changed byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteChange {
    pub offset: usize,
    pub before: u8,
    pub after: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum UndoContent {
    /// Edit in progress, holding the snapshot taken when it was opened.
    Open(Vec<u8>),
    Diff(Vec<ByteChange>),
    Full { before: Vec<u8>, after: Vec<u8> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoItem {
    label: String,
    len: usize,
    content: UndoContent,
}

impl UndoItem {
    /// Opens an item by copying the current buffer.
    pub fn open(buffer: &[u8], label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            len: buffer.len(),
            content: UndoContent::Open(buffer.to_vec()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_finalized(&self) -> bool {
        !matches!(self.content, UndoContent::Open(_))
    }

    /// Buffer contents from when the item was opened; `None` for diff items.
    pub fn before(&self) -> Option<&[u8]> {
        match &self.content {
            UndoContent::Open(before) | UndoContent::Full { before, .. } => Some(before.as_slice()),
            UndoContent::Diff(_) => None,
        }
    }

    /// Changed bytes of a finalized diff item.
    pub fn changes(&self) -> Option<&[ByteChange]> {
        match &self.content {
            UndoContent::Diff(changes) => Some(changes.as_slice()),
            _ => None,
        }
    }

    pub fn is_full_copy(&self) -> bool {
        matches!(self.content, UndoContent::Full { .. })
    }

    /// True for finalized items that record no change.
    pub fn is_empty(&self) -> bool {
        matches!(&self.content, UndoContent::Diff(changes) if changes.is_empty())
    }

    /// Gives back the opening snapshot of an unfinalized item.
    pub(crate) fn into_before(self) -> Result<Vec<u8>> {
        match self.content {
            UndoContent::Open(before) => Ok(before),
            _ => Err(EngineError::AlreadyFinalized { label: self.label }),
        }
    }

    /// Records the buffer after the edit.
    ///
    /// Keeps the changed bytes, or both full buffers once more than half
    /// of the buffer differs.
    pub fn finalize(&mut self, after: &[u8]) -> Result<()> {
        let UndoContent::Open(before) = &mut self.content else {
            return Err(EngineError::AlreadyFinalized { label: self.label.clone() });
        };
        if after.len() != before.len() {
            return Err(EngineError::UndoLengthMismatch {
                expected: before.len(),
                found: after.len(),
            });
        }

        let changes: Vec<ByteChange> = before
            .iter()
            .zip(after)
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(offset, (&before, &after))| ByteChange { offset, before, after })
            .collect();

        let full_copy = changes.len() > self.len / 2;
        log::debug!(
            "finalized '{}': {} bytes changed{}",
            self.label,
            changes.len(),
            if full_copy { ", keeping full copies" } else { "" }
        );
        self.content = if full_copy {
            UndoContent::Full {
                before: std::mem::take(before),
                after: after.to_vec(),
            }
        } else {
            UndoContent::Diff(changes)
        };
        Ok(())
    }

    /// Computes the buffer as it was before the edit, starting from the
    /// buffer as it is after it.
    pub fn generate_undo(&self, current: &[u8]) -> Result<Vec<u8>> {
        self.apply(current, true)
    }

    /// Computes the buffer after the edit from the buffer before it.
    pub fn generate_redo(&self, current: &[u8]) -> Result<Vec<u8>> {
        self.apply(current, false)
    }

    fn apply(&self, current: &[u8], undo: bool) -> Result<Vec<u8>> {
        if current.len() != self.len {
            log::error!("undo '{}': buffer length {} does not match {}", self.label, current.len(), self.len);
            return Err(EngineError::UndoLengthMismatch {
                expected: self.len,
                found: current.len(),
            });
        }

        match &self.content {
            UndoContent::Open(_) => Err(EngineError::NotFinalized { label: self.label.clone() }),
            UndoContent::Full { before, after } => {
                let (expected, result) = if undo { (after, before) } else { (before, after) };
                if let Some(offset) = first_difference(expected, current) {
                    return Err(self.mismatch(offset, expected[offset], current[offset]));
                }
                Ok(result.clone())
            }
            UndoContent::Diff(changes) => {
                let mut result = current.to_vec();
                for change in changes {
                    let (expected, value) = if undo { (change.after, change.before) } else { (change.before, change.after) };
                    if result[change.offset] != expected {
                        return Err(self.mismatch(change.offset, expected, result[change.offset]));
                    }
                    result[change.offset] = value;
                }
                Ok(result)
            }
        }
    }

    fn mismatch(&self, offset: usize, expected: u8, found: u8) -> EngineError {
        log::error!("undo '{}': byte {offset} is {found:#04x}, expected {expected:#04x}", self.label);
        EngineError::UndoMismatch { offset, expected, found }
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}
