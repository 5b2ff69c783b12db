use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use veneer::input::{Input, InputEvent};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// =============================================================================
// Uncontrolled mode
// =============================================================================

#[test]
fn test_uncontrolled_owns_its_value() {
    let input = Input::new();
    assert!(input.is_empty());
    assert!(!input.is_controlled());

    assert_eq!(
        input.insert_char('h'),
        Some(InputEvent::Changed("h".to_string()))
    );
    assert_eq!(
        input.insert_char('i'),
        Some(InputEvent::Changed("hi".to_string()))
    );
    assert_eq!(input.value(), "hi");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_key_handling_edits_value() {
    let input = Input::with_value("abc");

    assert_eq!(
        input.handle_key(&key(KeyCode::Backspace)),
        Some(InputEvent::Changed("ab".to_string()))
    );
    input.handle_key(&key(KeyCode::Home));
    assert_eq!(
        input.handle_key(&key(KeyCode::Delete)),
        Some(InputEvent::Changed("b".to_string()))
    );
    assert_eq!(input.value(), "b");
}

#[test]
fn test_modified_keys_are_ignored() {
    let input = Input::with_value("abc");
    let combo = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(input.handle_key(&combo), None);
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_cursor_respects_char_boundaries() {
    let input = Input::with_value("héllo");
    input.cursor_home();
    input.cursor_right();
    input.cursor_right();
    // 'h' is 1 byte, 'é' is 2.
    assert_eq!(input.cursor(), 3);

    input.cursor_left();
    assert_eq!(input.cursor(), 1);
}

#[test]
fn test_backspace_removes_multibyte_char() {
    let input = Input::with_value("né");
    assert_eq!(
        input.delete_char_before(),
        Some(InputEvent::Changed("n".to_string()))
    );
    assert_eq!(input.cursor(), 1);
}

#[test]
fn test_backspace_at_start_is_noop() {
    let input = Input::with_value("x");
    input.cursor_home();
    assert_eq!(input.delete_char_before(), None);
    assert_eq!(input.value(), "x");
}

#[test]
fn test_clear_notifies_new_empty_value() {
    let input = Input::with_value("draft");
    assert_eq!(input.clear(), Some(InputEvent::Cleared));
    assert!(input.is_empty());

    // Already empty: nothing to report.
    assert_eq!(input.clear(), None);
}

// =============================================================================
// Controlled mode
// =============================================================================

#[test]
fn test_controlled_mirrors_external_value() {
    let input = Input::controlled("initial");
    assert!(input.is_controlled());
    assert_eq!(input.value(), "initial");

    input.set_value("updated");
    assert_eq!(input.value(), "updated");
}

#[test]
fn test_controlled_edit_emits_without_mutating() {
    let input = Input::controlled("ab");

    let event = input.insert_char('c');
    assert_eq!(event, Some(InputEvent::Changed("abc".to_string())));
    // The widget itself did not change; the owner adopts and mirrors back.
    assert_eq!(input.value(), "ab");

    input.set_value("abc");
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_controlled_clear_leaves_mirror_untouched() {
    let input = Input::controlled("draft");
    assert_eq!(input.clear(), Some(InputEvent::Cleared));
    assert_eq!(input.value(), "draft");

    input.set_value("");
    assert!(input.is_empty());
}

#[test]
fn test_dirty_flag_tracks_writes() {
    let input = Input::new();
    assert!(!input.is_dirty());

    input.insert_char('a');
    assert!(input.is_dirty());

    input.clear_dirty();
    assert!(!input.is_dirty());
}
