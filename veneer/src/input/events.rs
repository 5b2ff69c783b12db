//! Events emitted by the Input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Input;

/// Notification the surrounding form logic receives from an input.
///
/// These are plain value notifications, not platform events: a cleared
/// input reports [`InputEvent::Cleared`] (the value is now empty) instead
/// of synthesizing a host change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The value changed. Carries the full new value.
    ///
    /// For a controlled input this is the value the owner should adopt;
    /// the widget itself has not mutated.
    Changed(String),
    /// The value was cleared and is now empty.
    Cleared,
}

impl Input {
    /// Handle a keyboard event, returning the resulting notification.
    ///
    /// Keys with ctrl/alt modifiers are ignored so surrounding keybinds
    /// keep working. Movement keys are handled without emitting anything.
    pub fn handle_key(&self, key: &KeyEvent) -> Option<InputEvent> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Left => {
                self.cursor_left();
                None
            }
            KeyCode::Right => {
                self.cursor_right();
                None
            }
            KeyCode::Home => {
                self.cursor_home();
                None
            }
            KeyCode::End => {
                self.cursor_end();
                None
            }
            _ => None,
        }
    }
}
