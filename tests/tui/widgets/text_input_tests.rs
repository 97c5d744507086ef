//! TextInput widget tests

use ugpt_cli::tui::TextInput;

#[test]
fn test_handle_char_and_backspace() {
    let mut input = TextInput::new("Email address");
    for c in "ab@c".chars() {
        input.handle_char(c);
    }
    assert_eq!(input.value, "ab@c");
    assert_eq!(input.cursor_pos, 4);

    input.handle_backspace();
    assert_eq!(input.value, "ab@");
    assert_eq!(input.cursor_pos, 3);
}

#[test]
fn test_with_value_places_cursor_at_end() {
    let input = TextInput::new("Email").with_value("me@x.io");
    assert_eq!(input.cursor_pos, 7);
}

#[test]
fn test_cursor_movement_and_delete() {
    let mut input = TextInput::new("Email").with_value("añb");
    input.move_home();
    input.move_right();
    input.handle_delete();
    assert_eq!(input.value, "ab");

    input.move_end();
    input.move_left();
    assert_eq!(input.cursor_pos, 1);
}

#[test]
fn test_clear() {
    let mut input = TextInput::new("Email").with_value("x@y");
    input.clear();
    assert!(input.value.is_empty());
    assert_eq!(input.cursor_pos, 0);
}
