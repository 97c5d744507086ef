use std::time::Duration;

pub const CONFIG_PATH: &str = "config/ugpt.toml";
pub const ENV_PATH: &str = "config/.env";
pub const REPLY_MIN_DELAY_MS: u64 = 1000;
pub const REPLY_MAX_DELAY_MS: u64 = 3000;
pub const LOGIN_DELAY_MS: u64 = 1500;

pub const fn login_delay() -> Duration {
    Duration::from_millis(LOGIN_DELAY_MS)
}
