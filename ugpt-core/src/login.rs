//! Simulated sign-in for the entry view
//!
//! Nothing is authenticated. A valid email (or any provider button) starts a
//! fixed delay after which the caller routes to the chat view.

use crate::error::LoginError;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

pub const SIGN_UP_NOTICE: &str = "In a full app, this would go to the signup page";

/// Third-party sign-in options offered under the email form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthProvider {
    Google,
    Microsoft,
    Apple,
    Phone,
}

static PROVIDER_ICONS: Lazy<BTreeMap<AuthProvider, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (
            AuthProvider::Google,
            "https://ext.same-assets.com/3406794717/3822748384.svg",
        ),
        (
            AuthProvider::Microsoft,
            "https://ext.same-assets.com/3406794717/233473847.svg",
        ),
        (
            AuthProvider::Apple,
            "https://ext.same-assets.com/3406794717/2952312236.svg",
        ),
        (
            AuthProvider::Phone,
            "https://www.svgrepo.com/show/533014/phone.svg",
        ),
    ])
});

impl AuthProvider {
    pub const ALL: [AuthProvider; 4] = [
        AuthProvider::Google,
        AuthProvider::Microsoft,
        AuthProvider::Apple,
        AuthProvider::Phone,
    ];

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            AuthProvider::Google => "Continue with Google",
            AuthProvider::Microsoft => "Continue with Microsoft Account",
            AuthProvider::Apple => "Continue with Apple",
            AuthProvider::Phone => "Continue with phone",
        }
    }

    pub fn icon_url(&self) -> &'static str {
        PROVIDER_ICONS.get(self).copied().unwrap_or_default()
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthProvider::Google => "Google",
            AuthProvider::Microsoft => "Microsoft",
            AuthProvider::Apple => "Apple",
            AuthProvider::Phone => "Phone",
        };
        f.write_str(name)
    }
}

/// Read-only view of the provider icon table
pub fn provider_icons() -> &'static BTreeMap<AuthProvider, &'static str> {
    &PROVIDER_ICONS
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMethod {
    Email(String),
    Provider(AuthProvider),
}

impl LoginMethod {
    fn identity(&self) -> String {
        match self {
            LoginMethod::Email(email) => email.trim().to_string(),
            LoginMethod::Provider(provider) => format!("{provider} account"),
        }
    }
}

/// The trimmed email must be non-empty and contain '@'.
pub fn validate_email(email: &str) -> Result<(), LoginError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(LoginError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Sign-in state of the entry view
#[derive(Debug, Clone)]
pub struct LoginFlow {
    delay: Duration,
    pending: Option<LoginMethod>,
}

impl LoginFlow {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Start signing in. Returns how long to wait before opening the chat view.
    pub fn begin(&mut self, method: LoginMethod) -> Result<Duration, LoginError> {
        if self.pending.is_some() {
            return Err(LoginError::InProgress);
        }
        if let LoginMethod::Email(email) = &method {
            validate_email(email)?;
        }
        info!(method = ?method, delay_ms = self.delay.as_millis() as u64, "Signing in");
        self.pending = Some(method);
        Ok(self.delay)
    }

    /// Finish the sign-in started by [`LoginFlow::begin`] and return the
    /// signed-in identity label.
    pub fn complete(&mut self) -> Option<String> {
        let method = self.pending.take()?;
        let identity = method.identity();
        debug!(identity = %identity, "Sign-in complete");
        Some(identity)
    }

    /// Abandon a sign-in in progress
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_signing_in(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new(crate::config::defaults::login_delay())
    }
}
