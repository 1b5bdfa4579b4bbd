#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::must_use_candidate, clippy::missing_errors_doc)]
//! Undoable editing on top of `hires_engine`.

pub mod brushes;
pub use brushes::LineStyle;

mod undo_item;
pub use undo_item::*;

mod undo_stack;
pub use undo_stack::*;

mod edit_state;
pub use edit_state::*;

pub use hires_engine::{EngineError, Result};
