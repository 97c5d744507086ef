//! Entry view state

use crate::tui::widgets::{Menu, MenuItem, TextInput};
use std::time::Duration;
use ugpt_core::login::{AuthProvider, LoginFlow, SIGN_UP_NOTICE};

/// Which part of the entry view receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Email,
    Options,
}

/// Entries of the options list under the email form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOption {
    SignUp,
    Provider(AuthProvider),
}

pub struct LoginState {
    pub email: TextInput,
    pub options: Menu,
    pub focus: Focus,
    pub flow: LoginFlow,
    /// Modal message; any key dismisses it
    pub alert: Option<String>,
    pub loading_frame: usize,
}

impl LoginState {
    pub fn new(login_delay: Duration) -> Self {
        let mut items = vec![MenuItem::new("Don't have an account? Sign up")];
        items.extend(
            AuthProvider::ALL
                .iter()
                .map(|provider| MenuItem::new(provider.label()).with_detail(provider.icon_url())),
        );

        Self {
            email: TextInput::new("Email address").with_placeholder("you@example.com"),
            options: Menu::new("Other ways to continue", items),
            focus: Focus::Email,
            flow: LoginFlow::new(login_delay),
            alert: None,
            loading_frame: 0,
        }
    }

    /// Option at a list index: the sign-up link first, then each provider
    pub fn option_at(index: usize) -> Option<LoginOption> {
        match index {
            0 => Some(LoginOption::SignUp),
            i => AuthProvider::ALL.get(i - 1).copied().map(LoginOption::Provider),
        }
    }

    pub fn selected_option(&self) -> Option<LoginOption> {
        self.options.selected_index().and_then(Self::option_at)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Email => Focus::Options,
            Focus::Options => Focus::Email,
        };
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn show_sign_up_notice(&mut self) {
        self.show_alert(SIGN_UP_NOTICE);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn is_signing_in(&self) -> bool {
        self.flow.is_signing_in()
    }

    pub fn tick_loading(&mut self) {
        if self.is_signing_in() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }
}
