//! Persisted layout of a hi-res image.
//!
//! Files are a plain dump of screen memory, 8184 to 8192 bytes long. The
//! editor stores its own metadata in the first screen hole: a mode byte at
//! offset 120 and a 7 byte signature at 121..128. Without the signature the
//! mode byte is just whatever happened to be in memory and is ignored.

use crate::{screen::check_buffer_len, HiResScreen, Result};

/// Offset of the render mode preference byte.
pub const MODE_BYTE_OFFSET: usize = 120;

/// Offset of the signature marking files written by this editor.
pub const SIGNATURE_OFFSET: usize = 121;

pub const SIGNATURE: &[u8; 7] = b"HRPAINT";

/// A loaded image together with its stored render mode preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiResFile {
    pub screen: HiResScreen,
    /// `Some(true)` for monochrome, `Some(false)` for color, `None` when the
    /// file carries no signature.
    pub mono_preference: Option<bool>,
}

impl HiResFile {
    pub fn new(screen: HiResScreen) -> Self {
        Self { screen, mono_preference: None }
    }

    /// Parses a raw buffer; wrong sized data is rejected.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        check_buffer_len(data.len())?;
        let mono_preference = if has_signature(&data) { Some(data[MODE_BYTE_OFFSET] == 0) } else { None };
        Ok(Self {
            screen: HiResScreen::from_bytes(data)?,
            mono_preference,
        })
    }

    /// Produces the bytes to store, keeping the loaded length.
    ///
    /// With `write_signature` the mode byte and the signature are written
    /// into the screen hole; otherwise the hole keeps its current contents.
    pub fn to_bytes(&self, mono: bool, write_signature: bool) -> Vec<u8> {
        let mut data = self.screen.data().to_vec();
        if write_signature {
            data[MODE_BYTE_OFFSET] = u8::from(!mono);
            data[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE.len()].copy_from_slice(SIGNATURE);
        }
        data
    }
}

pub fn has_signature(data: &[u8]) -> bool {
    data.get(SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE.len()) == Some(SIGNATURE.as_slice())
}
