//! Hi-res edit session
//!
//! Split into multiple files:
//! - `state.rs` - Struct definition, constructors, getters
//! - `undo.rs` - Edit context (open/close), undo/redo
//! - `shape_operations.rs` - Pixels, lines, rectangles, ellipses, flood fill
//! - `clipboard.rs` - Live clipping: copy, cut, paste, bitmap stamps

mod state;

mod clipboard;
mod shape_operations;
mod undo;

pub use state::{EditContext, HiResEditState};
