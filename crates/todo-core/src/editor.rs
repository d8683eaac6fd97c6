//! Inline Item Editor
//!
//! Transient per-row state: either showing the item or editing a local
//! buffer. Holds no business logic; a confirmed edit is handed back to the
//! caller as trimmed text to forward to the controller.

use crate::item::normalize_text;

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Confirm,
    Cancel,
}

impl EditKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(EditKey::Confirm),
            "Escape" | "Esc" => Some(EditKey::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { buffer: String },
}

/// Row edit state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemEditor {
    state: EditState,
}

impl ItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Toggling rebuilds the row, so it is only offered while viewing
    pub fn can_toggle(&self) -> bool {
        !self.is_editing()
    }

    /// Current buffer contents, empty while viewing
    pub fn buffer(&self) -> &str {
        match &self.state {
            EditState::Editing { buffer } => buffer,
            EditState::Viewing => "",
        }
    }

    /// Enter edit mode with the buffer seeded from the item's current text
    pub fn begin(&mut self, current_text: &str) {
        self.state = EditState::Editing {
            buffer: current_text.to_string(),
        };
    }

    /// Replace the buffer; ignored while viewing
    pub fn set_buffer(&mut self, value: String) {
        if let EditState::Editing { buffer } = &mut self.state {
            *buffer = value;
        }
    }

    /// Leave edit mode with the trimmed buffer, or stay put if it is blank
    pub fn confirm(&mut self) -> Option<String> {
        let text = match &self.state {
            EditState::Editing { buffer } => normalize_text(buffer)?,
            EditState::Viewing => return None,
        };
        self.state = EditState::Viewing;
        Some(text)
    }

    /// Drop the buffer and return to viewing
    pub fn cancel(&mut self) {
        self.state = EditState::Viewing;
    }

    /// Keyboard shortcut dispatch; returns the text to commit, if any
    pub fn handle_key(&mut self, key: EditKey) -> Option<String> {
        match key {
            EditKey::Confirm => self.confirm(),
            EditKey::Cancel => {
                self.cancel();
                None
            }
        }
    }
}
