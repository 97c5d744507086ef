//! TUI unit tests module
//!
//! Organized by domain:
//! - widgets/: Menu, TextInput
//! - chat/: ChatState, input, command, scroll tests
//! - login/: LoginState and key handling
//! - terminal/: NavAction key mapping
//! - route_tests: view navigation

pub mod route_tests;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ugpt_cli::tui::screens::chat::ChatState;
use ugpt_core::{ChatSession, DelayRange};

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

pub fn chat_state() -> ChatState {
    let session = ChatSession::with_rng(DelayRange::default(), StdRng::seed_from_u64(1));
    ChatState::new(session, "user@example.com")
}

pub fn type_text(state: &mut ChatState, text: &str) {
    for c in text.chars() {
        state.insert_char(c);
    }
}
