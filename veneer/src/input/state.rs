//! Input widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::events::InputEvent;

/// Unique identifier for an Input widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Internal state for an Input widget
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value (the mirrored value when controlled)
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Whether an external owner supplies the value
    controlled: bool,
}

/// A text input with a controlled/uncontrolled value.
///
/// An uncontrolled input owns its value: edits mutate local state and the
/// resulting [`InputEvent::Changed`] is informational. A controlled input
/// mirrors an external value: edits emit the candidate new value without
/// mutating, and the owner writes the adopted value back with
/// [`set_value`](Input::set_value).
///
/// # Example
///
/// ```ignore
/// let name = Input::with_placeholder("Enter name");
/// if let Some(InputEvent::Changed(value)) = name.handle_key(&key) {
///     form.name = value;
/// }
/// if clear_clicked {
///     // Plain "value is now empty" notification, no synthesized event.
///     assert_eq!(name.clear(), Some(InputEvent::Cleared));
/// }
/// ```
#[derive(Debug)]
pub struct Input {
    /// Unique identifier for this input instance
    id: InputId,
    /// Internal state
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Input {
    /// Create a new empty uncontrolled input
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an uncontrolled input with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner {
                value,
                cursor,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner {
                placeholder: placeholder.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a controlled input mirroring an externally owned value
    pub fn controlled(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner {
                value,
                cursor,
                controlled: true,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this input
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    /// Whether this input mirrors an external value
    pub fn is_controlled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.controlled)
            .unwrap_or(false)
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.len())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value.
    ///
    /// For a controlled input this is the mirror path: the owner calls it
    /// with the adopted value after every `Changed` notification.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value, notifying the owner that it is now empty.
    ///
    /// Returns `None` when the value was already empty. A controlled input
    /// does not mutate here; the owner reacts to the notification and
    /// mirrors the empty value back.
    pub fn clear(&self) -> Option<InputEvent> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        if guard.value.is_empty() {
            return None;
        }
        if !guard.controlled {
            guard.value.clear();
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
        Some(InputEvent::Cleared)
    }

    /// Set the placeholder text
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the cursor position, clamped to the value length
    pub fn set_cursor(&self, position: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = position.min(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Text manipulation (called by key handling)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position
    pub fn insert_char(&self, c: char) -> Option<InputEvent> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        let cursor = guard.cursor;
        let mut next = guard.value.clone();
        next.insert(cursor, c);

        if guard.controlled {
            return Some(InputEvent::Changed(next));
        }
        guard.value = next;
        guard.cursor += c.len_utf8();
        self.dirty.store(true, Ordering::SeqCst);
        Some(InputEvent::Changed(guard.value.clone()))
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before(&self) -> Option<InputEvent> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        if guard.cursor == 0 {
            return None;
        }
        // Find the previous character boundary
        let prev_cursor = guard.value[..guard.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)?;
        let mut next = guard.value.clone();
        next.remove(prev_cursor);

        if guard.controlled {
            return Some(InputEvent::Changed(next));
        }
        guard.value = next;
        guard.cursor = prev_cursor;
        self.dirty.store(true, Ordering::SeqCst);
        Some(InputEvent::Changed(guard.value.clone()))
    }

    /// Delete the character at the cursor
    pub fn delete_char_at(&self) -> Option<InputEvent> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        if guard.cursor >= guard.value.len() {
            return None;
        }
        let cursor = guard.cursor;
        let mut next = guard.value.clone();
        next.remove(cursor);

        if guard.controlled {
            return Some(InputEvent::Changed(next));
        }
        guard.value = next;
        self.dirty.store(true, Ordering::SeqCst);
        Some(InputEvent::Changed(guard.value.clone()))
    }

    /// Move the cursor one character left
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(prev) = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
            {
                guard.cursor = prev;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move the cursor one character right
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(c) = guard.value[guard.cursor..].chars().next() {
                guard.cursor += c.len_utf8();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move the cursor to the start of the value
    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the cursor to the end of the value
    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = guard.value.len();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input state changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after rendering
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
