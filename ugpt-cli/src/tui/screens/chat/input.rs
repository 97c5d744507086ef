//! Conversation view key handling

use super::state::ChatState;
use crate::tui::terminal::is_force_quit;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Send the current input
    Submit,
    NewChat,
    Logout,
    Exit,
    /// Slash command taken from the input buffer
    Command(String),
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event and update state.
///
/// Typing stays possible while a reply is pending; only sending is blocked.
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Paste(text) => {
            for c in text.chars() {
                state.insert_char(c);
            }
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if is_force_quit(&key) {
        return InputAction::Exit;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => return InputAction::NewChat,
            KeyCode::Char('l') => return InputAction::Logout,
            KeyCode::Char('c') => {
                state.clear_input();
                return InputAction::None;
            }
            KeyCode::Char('u') => return InputAction::ScrollTop,
            KeyCode::Char('d') => return InputAction::ScrollBottom,
            KeyCode::Char(_) => return InputAction::None,
            _ => {}
        }
    }

    match key.code {
        // Alt+Enter for terminals that do not report Shift with Enter
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            state.insert_newline();
            InputAction::None
        }
        KeyCode::Enter => {
            if state.is_command() {
                return InputAction::Command(state.take_input());
            }
            if state.can_send() {
                InputAction::Submit
            } else {
                InputAction::None
            }
        }
        KeyCode::Esc => {
            state.clear_input();
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        // Up/Down move between input lines; they scroll only a single-line draft
        KeyCode::Up if state.is_multiline() => {
            state.move_cursor_up();
            InputAction::None
        }
        KeyCode::Down if state.is_multiline() => {
            state.move_cursor_down();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Tab => {
            state.insert_char(' ');
            state.insert_char(' ');
            InputAction::None
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    NewChat,
    Logout,
    Exit,
    Unknown(String),
}

pub const COMMAND_HELP: &str = "Commands: /new  /logout  /help  /exit";

/// Parse a slash command
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim().trim_start_matches('/');
    let name = cmd
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "new" | "reset" | "clear" => CommandResult::NewChat,
        "logout" | "signout" => CommandResult::Logout,
        "exit" | "quit" | "bye" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}
