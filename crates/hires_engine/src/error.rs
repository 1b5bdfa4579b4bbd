//! Unified error types for hires_engine

use thiserror::Error;

/// Main error type for hires_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Loading Errors ===
    #[error("Invalid buffer length {len}, expected {min}..={max} bytes")]
    InvalidBufferLength { len: usize, min: usize, max: usize },

    // === Precondition Violations ===
    #[error("Invalid screen area: (x:{left}, y:{top}, width: {width}, height: {height})")]
    InvalidScreenArea { left: i32, top: i32, width: i32, height: i32 },

    #[error("Coordinate out of range: (x: {x}, y: {y})")]
    InvalidCoordinate { x: i32, y: i32 },

    #[error("Color pattern must be {expected} bytes, got {actual}")]
    InvalidPatternLength { expected: usize, actual: usize },

    #[error("Malformed clipping: {message}")]
    MalformedClipping { message: String },

    #[error("Malformed bitmap: {message}")]
    MalformedBitmap { message: String },

    #[error("Unknown transfer mode: {mode}")]
    UnknownTransferMode { mode: String },

    // === Edit Protocol ===
    #[error("An edit is already open ('{label}')")]
    EditAlreadyOpen { label: String },

    #[error("No edit is open")]
    NoEditOpen,

    #[error("Undo item '{label}' was already finalized")]
    AlreadyFinalized { label: String },

    #[error("Undo item '{label}' has not been finalized")]
    NotFinalized { label: String },

    // === Consistency Violations ===
    #[error("Undo history mismatch at offset {offset}: expected {expected:#04x}, found {found:#04x}")]
    UndoMismatch { offset: usize, expected: u8, found: u8 },

    #[error("Undo history mismatch: buffer length {found}, expected {expected}")]
    UndoLengthMismatch { expected: usize, found: usize },
}

/// Result type alias for hires_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn malformed_clipping(msg: impl Into<String>) -> Self {
        Self::MalformedClipping { message: msg.into() }
    }

    pub fn malformed_bitmap(msg: impl Into<String>) -> Self {
        Self::MalformedBitmap { message: msg.into() }
    }

    pub(crate) fn invalid_area(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::InvalidScreenArea { left, top, width, height }
    }
}
