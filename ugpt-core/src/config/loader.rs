use super::defaults::{CONFIG_PATH, ENV_PATH, LOGIN_DELAY_MS, REPLY_MAX_DELAY_MS, REPLY_MIN_DELAY_MS};
use super::error::ConfigError;
use crate::delivery::DelayRange;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub seed: Option<u64>,
    #[serde(default)]
    pub reply: RawReply,
    #[serde(default)]
    pub login: RawLogin,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawReply {
    pub min_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawLogin {
    pub delay_ms: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, `config/ugpt.toml` is read when
/// present and the built-in defaults are used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                Ok(super::AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<super::AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let min = parsed.reply.min_delay_ms.unwrap_or(REPLY_MIN_DELAY_MS);
    let max = parsed.reply.max_delay_ms.unwrap_or(REPLY_MAX_DELAY_MS);
    let reply_delay = DelayRange::new(min, max).ok_or(ConfigError::InvalidDelayRange { min, max })?;
    let login_delay = Duration::from_millis(parsed.login.delay_ms.unwrap_or(LOGIN_DELAY_MS));

    Ok(super::AppConfig {
        reply_delay,
        login_delay,
        seed: parsed.seed,
    })
}
