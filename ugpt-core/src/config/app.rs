use super::defaults;
use super::error::ConfigError;
use crate::delivery::DelayRange;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from ugpt.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Range the simulated reply latency is drawn from
    pub reply_delay: DelayRange,
    /// Simulated sign-in latency before the chat view opens
    pub login_delay: Duration,
    /// Seed for the reply random source; entropy when absent
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: DelayRange::default(),
            login_delay: defaults::login_delay(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
