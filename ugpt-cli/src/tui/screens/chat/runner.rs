//! Conversation view event loop

use super::input::{COMMAND_HELP, CommandResult, InputAction, handle_input, parse_command};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::tui::terminal::Tui;
use crossterm::event;
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};
use ugpt_core::{AppConfig, ChatSession, Delayed, ScheduledReply};

/// How the conversation view was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatResult {
    Logout,
    Exit,
}

pub async fn run_chat(terminal: &mut Tui, config: &AppConfig, user: &str) -> io::Result<ChatResult> {
    let mut state = ChatState::new(ChatSession::from_config(config), user);
    let mut replies: Delayed<ScheduledReply> = Delayed::new();
    info!(user = %user, "Chat view opened");

    let result = run_chat_loop(terminal, &mut state, &mut replies).await;
    replies.cancel();
    result
}

async fn run_chat_loop(
    terminal: &mut Tui,
    state: &mut ChatState,
    replies: &mut Delayed<ScheduledReply>,
) -> io::Result<ChatResult> {
    loop {
        terminal.draw(|frame| ChatUI::render(frame, state))?;

        while let Some(reply) = replies.try_recv() {
            if !state.deliver(reply) {
                debug!("Stale reply discarded");
            }
        }

        let timeout = if state.is_responding() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if !event::poll(timeout)? {
            state.tick_loading();
            continue;
        }

        let action = handle_input(state, event::read()?);
        let action = match action {
            InputAction::Command(cmd) => command_action(state, &cmd),
            other => other,
        };

        match action {
            InputAction::Submit => match state.submit() {
                Ok(reply) => {
                    let delay = reply.delay;
                    replies.schedule(reply, delay);
                }
                Err(err) => {
                    warn!(error = %err, "Message not sent");
                    state.status_message = Some(err.user_message());
                }
            },
            InputAction::NewChat => {
                replies.cancel();
                state.new_conversation();
            }
            InputAction::Logout => {
                info!("Logging out");
                return Ok(ChatResult::Logout);
            }
            InputAction::Exit => return Ok(ChatResult::Exit),
            InputAction::ScrollUp => state.scroll_up(),
            InputAction::ScrollDown => state.scroll_down(),
            InputAction::ScrollTop => state.scroll_to_top(),
            InputAction::ScrollBottom => state.scroll_to_bottom(),
            InputAction::Command(_) | InputAction::None => {}
        }
    }
}

/// Turn a slash command into the action it stands for
fn command_action(state: &mut ChatState, input: &str) -> InputAction {
    match parse_command(input) {
        CommandResult::None | CommandResult::Unknown(_) => InputAction::None,
        CommandResult::ShowHelp => {
            state.status_message = Some(COMMAND_HELP.to_string());
            InputAction::None
        }
        CommandResult::NewChat => InputAction::NewChat,
        CommandResult::Logout => InputAction::Logout,
        CommandResult::Exit => InputAction::Exit,
    }
}
