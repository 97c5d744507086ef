//! Entry view: email form, sign-up notice and provider buttons
//!
//! - state.rs: form and sign-in state
//! - input.rs: key handling
//! - ui.rs: rendering
//! - runner.rs: event loop and the simulated sign-in timer

mod input;
mod runner;
mod state;
mod ui;

pub use input::{LoginAction, handle_input};
pub use runner::{LoginResult, run_login};
pub use state::{Focus, LoginOption, LoginState};
