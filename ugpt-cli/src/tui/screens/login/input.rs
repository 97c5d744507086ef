//! Entry view key handling

use super::state::{Focus, LoginOption, LoginState};
use crate::tui::terminal::{NavAction, is_force_quit};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ugpt_core::login::LoginMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    /// Start signing in with this method
    Submit(LoginMethod),
    Quit,
}

/// Handle a terminal event and update state
pub fn handle_input(state: &mut LoginState, event: Event) -> LoginAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => LoginAction::None,
    }
}

fn handle_key(state: &mut LoginState, key: KeyEvent) -> LoginAction {
    if is_force_quit(&key) {
        return LoginAction::Quit;
    }
    if state.alert.is_some() {
        state.dismiss_alert();
        return LoginAction::None;
    }
    // Form is locked while the simulated sign-in runs
    if state.is_signing_in() {
        return LoginAction::None;
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        state.toggle_focus();
        return LoginAction::None;
    }

    match state.focus {
        Focus::Email => handle_email_key(state, key),
        Focus::Options => handle_options_key(state, key),
    }
}

fn handle_email_key(state: &mut LoginState, key: KeyEvent) -> LoginAction {
    match key.code {
        KeyCode::Enter => LoginAction::Submit(LoginMethod::Email(state.email.value.clone())),
        KeyCode::Down => {
            state.focus = Focus::Options;
            LoginAction::None
        }
        KeyCode::Esc => {
            state.email.clear();
            LoginAction::None
        }
        KeyCode::Backspace => {
            state.email.handle_backspace();
            LoginAction::None
        }
        KeyCode::Delete => {
            state.email.handle_delete();
            LoginAction::None
        }
        KeyCode::Left => {
            state.email.move_left();
            LoginAction::None
        }
        KeyCode::Right => {
            state.email.move_right();
            LoginAction::None
        }
        KeyCode::Home => {
            state.email.move_home();
            LoginAction::None
        }
        KeyCode::End => {
            state.email.move_end();
            LoginAction::None
        }
        KeyCode::Char(c) => {
            state.email.handle_char(c);
            LoginAction::None
        }
        _ => LoginAction::None,
    }
}

fn handle_options_key(state: &mut LoginState, key: KeyEvent) -> LoginAction {
    match NavAction::from(key) {
        NavAction::Up => {
            if state.options.selected_index() == Some(0) {
                state.focus = Focus::Email;
            } else {
                state.options.previous();
            }
            LoginAction::None
        }
        NavAction::Down => {
            state.options.next();
            LoginAction::None
        }
        NavAction::Select => match state.selected_option() {
            Some(LoginOption::SignUp) => {
                state.show_sign_up_notice();
                LoginAction::None
            }
            Some(LoginOption::Provider(provider)) => {
                LoginAction::Submit(LoginMethod::Provider(provider))
            }
            None => LoginAction::None,
        },
        NavAction::Back => {
            state.focus = Focus::Email;
            LoginAction::None
        }
        NavAction::ForceQuit => LoginAction::Quit,
        NavAction::None => LoginAction::None,
    }
}
