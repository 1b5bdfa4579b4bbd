#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]
//! Codec and mutation engine for the 8 KiB hi-res screen layout.
//!
//! The screen is 280x192 pixels stored 7 pixels per byte; the high bit of
//! every byte selects one of two color sets and the displayed color of a
//! pixel depends on its horizontal neighbours.

mod error;
pub use error::*;

mod position;
pub use position::*;

mod screen;
pub use screen::*;

mod color;
pub use color::*;

mod pattern;
pub use pattern::*;

mod pixel;

mod rendering;
pub use rendering::*;

mod clipping;
pub use clipping::*;

mod color_map;
pub use color_map::*;

pub mod format;

/// Visible pixels per row.
pub const SCREEN_WIDTH: i32 = 280;

/// Visible rows.
pub const SCREEN_HEIGHT: i32 = 192;

/// Bytes holding one row of pixels.
pub const BYTES_PER_ROW: i32 = 40;

/// Pixels stored in the low seven bits of each byte.
pub const PIXELS_PER_BYTE: i32 = 7;

/// The color set selector ("mode bit") of every screen byte.
pub const MODE_BIT: u8 = 0x80;

/// Mask of the seven pixel bits of a screen byte.
pub const PIXEL_BITS: u8 = 0x7F;

/// Shortest accepted buffer; the last screen hole may be missing.
pub const MIN_BUFFER_LEN: usize = 8184;

/// Full screen memory size.
pub const MAX_BUFFER_LEN: usize = 8192;
