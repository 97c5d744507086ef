//! Client-side routing between the entry and conversation views

use super::screens::chat::{ChatResult, run_chat};
use super::screens::login::{LoginResult, run_login};
use super::terminal::{Tui, init_terminal, restore_terminal};
use std::io;
use tracing::info;
use ugpt_core::AppConfig;

/// Currently shown view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Chat { user: String },
}

/// How a view was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOutcome {
    SignedIn(String),
    LoggedOut,
    Quit,
}

impl From<LoginResult> for ScreenOutcome {
    fn from(result: LoginResult) -> Self {
        match result {
            LoginResult::SignedIn(user) => ScreenOutcome::SignedIn(user),
            LoginResult::Quit => ScreenOutcome::Quit,
        }
    }
}

impl From<ChatResult> for ScreenOutcome {
    fn from(result: ChatResult) -> Self {
        match result {
            ChatResult::Logout => ScreenOutcome::LoggedOut,
            ChatResult::Exit => ScreenOutcome::Quit,
        }
    }
}

impl Route {
    /// Next view after `outcome`; `None` ends the app.
    ///
    /// Outcomes that do not belong to the current view leave it unchanged.
    pub fn next(self, outcome: ScreenOutcome) -> Option<Route> {
        match (self, outcome) {
            (_, ScreenOutcome::Quit) => None,
            (Route::Login, ScreenOutcome::SignedIn(user)) => Some(Route::Chat { user }),
            (Route::Chat { .. }, ScreenOutcome::LoggedOut) => Some(Route::Login),
            (route, _) => Some(route),
        }
    }
}

/// Run the app until the user quits
pub async fn run_app(config: &AppConfig) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = route_loop(&mut terminal, config).await;
    restore_terminal()?;
    result
}

async fn route_loop(terminal: &mut Tui, config: &AppConfig) -> io::Result<()> {
    let mut route = Route::Login;
    loop {
        info!(route = ?route, "Showing view");
        let outcome: ScreenOutcome = match &route {
            Route::Login => run_login(terminal, config).await?.into(),
            Route::Chat { user } => run_chat(terminal, config, user).await?.into(),
        };
        match route.next(outcome) {
            Some(next) => route = next,
            None => return Ok(()),
        }
    }
}
