//! Keyboard shortcuts for the editor.
//!
//! The host shell forwards key events only while the canvas has focus;
//! keys typed into text fields never reach these handlers.

use super::{Editor, EditorSignal, Tool};

/// A decoded key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A printable character, lowercased.
    Char(char),
    Delete,
    Backspace,
    Escape,
}

/// A key press with its modifier state. `ctrl` covers Ctrl and Cmd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self { code, ctrl: true }
    }
}

impl Editor {
    /// Handles a key press, returning a signal when the host needs to
    /// act (Escape requests the cancel/close flow).
    pub fn key_down(&mut self, key: KeyPress) -> Option<EditorSignal> {
        match key.code {
            KeyCode::Escape => return Some(EditorSignal::CancelRequested),
            KeyCode::Delete | KeyCode::Backspace => {
                self.delete_selection();
            }
            KeyCode::Char('d') if key.ctrl => {
                self.duplicate_selection();
            }
            KeyCode::Char(c) if !key.ctrl => {
                if let Some(tool) = self.tool_for_key(c) {
                    self.set_tool(tool);
                }
            }
            KeyCode::Char(_) => {}
        }
        None
    }

    /// Maps a tool shortcut letter to its tool. Disabled tools are
    /// skipped: paint-category is unavailable while no category is
    /// active.
    fn tool_for_key(&self, c: char) -> Option<Tool> {
        let tool = match c.to_ascii_lowercase() {
            'v' => Tool::Select,
            'h' => Tool::Pan,
            's' => Tool::Seat,
            'e' => Tool::Section,
            'p' => Tool::Polygon,
            't' => Tool::Stage,
            'c' => Tool::PaintCategory,
            _ => return None,
        };
        if tool == Tool::PaintCategory && self.canvas().categories().active_id().is_none() {
            return None;
        }
        Some(tool)
    }
}
