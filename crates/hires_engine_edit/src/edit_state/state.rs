use hires_engine::{format::HiResFile, Clipping, HiResScreen, Rectangle};

use crate::{HiResUndoStack, UndoItem};

/// Whether a mutation is currently being recorded.
#[derive(Clone, Debug, Default)]
pub enum EditContext {
    #[default]
    Idle,
    /// An edit is open; the item holds the snapshot taken when it started.
    Editing(UndoItem),
}

impl EditContext {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditContext::Editing(_))
    }
}

/// A screen being edited, with its undo history and live clipping.
pub struct HiResEditState {
    pub(super) screen: HiResScreen,
    pub(super) undo_stack: HiResUndoStack,
    pub(super) context: EditContext,
    pub(super) clipping: Option<Clipping>,
    pub(super) mono: bool,
}

impl Default for HiResEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl HiResEditState {
    pub fn new() -> Self {
        Self::from_screen(HiResScreen::new())
    }

    pub fn from_screen(screen: HiResScreen) -> Self {
        Self {
            screen,
            undo_stack: HiResUndoStack::new(),
            context: EditContext::Idle,
            clipping: None,
            mono: false,
        }
    }

    /// Starts a session on a loaded file, taking over its render mode.
    pub fn from_file(file: HiResFile) -> Self {
        let mono = file.mono_preference.unwrap_or(false);
        let mut state = Self::from_screen(file.screen);
        state.mono = mono;
        state
    }

    /// Wraps the current screen for saving.
    pub fn to_file(&self) -> HiResFile {
        HiResFile {
            screen: self.screen.clone(),
            mono_preference: Some(self.mono),
        }
    }

    pub fn screen(&self) -> &HiResScreen {
        &self.screen
    }

    pub fn into_screen(self) -> HiResScreen {
        self.screen
    }

    pub fn context(&self) -> &EditContext {
        &self.context
    }

    pub fn is_editing(&self) -> bool {
        self.context.is_editing()
    }

    pub fn undo_stack(&self) -> &HiResUndoStack {
        &self.undo_stack
    }

    pub fn is_mono(&self) -> bool {
        self.mono
    }

    pub fn set_mono(&mut self, mono: bool) {
        self.mono = mono;
    }

    /// Renders the area affected by a change, widened for color fringes.
    pub fn render_dirty(&self, dirty: Rectangle) -> hires_engine::Result<(Rectangle, Vec<u8>)> {
        let area = dirty.expand_for_render();
        if area.is_empty() {
            return Ok((area, Vec::new()));
        }
        let rgba = self.screen.render_region_to_rgba(area, self.mono)?;
        Ok((area, rgba))
    }
}
