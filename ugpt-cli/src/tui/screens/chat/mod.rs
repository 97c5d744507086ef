//! Conversation view
//!
//! - state.rs: input buffer, scrolling and the wrapped chat session
//! - input.rs: key handling and slash commands
//! - ui.rs: rendering
//! - runner.rs: event loop and the simulated reply timer

mod input;
mod runner;
mod state;
mod ui;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::{ChatResult, run_chat};
pub use state::{ChatState, MAX_INPUT_LINES};
