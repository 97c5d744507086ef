//! Entry view event loop

use super::input::{LoginAction, handle_input};
use super::state::LoginState;
use super::ui::LoginUI;
use crate::tui::terminal::Tui;
use crossterm::event;
use std::io;
use std::time::Duration;
use tracing::{info, warn};
use ugpt_core::{AppConfig, Delayed};

/// How the entry view was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    /// Sign-in finished; carries the identity label
    SignedIn(String),
    Quit,
}

pub async fn run_login(terminal: &mut Tui, config: &AppConfig) -> io::Result<LoginResult> {
    let mut state = LoginState::new(config.login_delay);
    let mut sign_in_timer: Delayed<()> = Delayed::new();

    loop {
        terminal.draw(|frame| LoginUI::render(frame, &mut state))?;

        if sign_in_timer.try_recv().is_some() {
            if let Some(identity) = state.flow.complete() {
                info!(identity = %identity, "Opening chat view");
                return Ok(LoginResult::SignedIn(identity));
            }
        }

        let timeout = if state.is_signing_in() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            match handle_input(&mut state, event::read()?) {
                LoginAction::Submit(method) => match state.flow.begin(method) {
                    Ok(delay) => sign_in_timer.schedule((), delay),
                    Err(err) => {
                        warn!(error = %err, "Sign-in rejected");
                        state.show_alert(err.user_message());
                    }
                },
                LoginAction::Quit => {
                    sign_in_timer.cancel();
                    state.flow.cancel();
                    return Ok(LoginResult::Quit);
                }
                LoginAction::None => {}
            }
        } else {
            state.tick_loading();
        }
    }
}
