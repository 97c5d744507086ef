//! Slash command tests

use super::super::{chat_state, key, type_text};
use crossterm::event::KeyCode;
use ugpt_cli::tui::screens::chat::{CommandResult, InputAction, handle_input, parse_command};

#[test]
fn test_is_command_with_slash() {
    let mut state = chat_state();
    state.input = "/help".to_string();
    assert!(state.is_command());
}

#[test]
fn test_is_not_command() {
    let mut state = chat_state();
    state.input = "Hello there".to_string();
    assert!(!state.is_command());
}

#[test]
fn test_unknown_slash_word_is_not_command() {
    let mut state = chat_state();
    state.input = "/etc/hosts".to_string();
    assert!(!state.is_command());
    assert_eq!(state.get_command(), None);
}

#[test]
fn test_get_command() {
    let mut state = chat_state();
    state.input = "/new please".to_string();
    assert_eq!(state.get_command(), Some("new"));
}

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/new"), CommandResult::NewChat);
    assert_eq!(parse_command("/RESET"), CommandResult::NewChat);
    assert_eq!(parse_command("/logout"), CommandResult::Logout);
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(parse_command("/"), CommandResult::None);
    assert_eq!(
        parse_command("/dance"),
        CommandResult::Unknown("dance".to_string())
    );
}

#[test]
fn test_enter_on_command_takes_input() {
    let mut state = chat_state();
    type_text(&mut state, "/new");

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Command("/new".to_string()));
    assert!(state.input.is_empty());
}

#[test]
fn test_command_allowed_while_reply_pending() {
    let mut state = chat_state();
    type_text(&mut state, "hello");
    state.submit().expect("submit");
    type_text(&mut state, "/new");

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::Command("/new".to_string()));
}
