// Config loading tests - AppConfig::load file handling and validation

use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;
use ugpt_core::{AppConfig, ConfigError};

#[test]
fn returns_error_when_explicit_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/ugpt.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_full_configuration() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ugpt.toml");
    fs::write(
        &path,
        r#"
seed = 42

[reply]
min_delay_ms = 200
max_delay_ms = 400

[login]
delay_ms = 50
"#,
    )
    .expect("write config");

    let config = AppConfig::load(Some(&path)).expect("load");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.reply_delay.min(), Duration::from_millis(200));
    assert_eq!(config.reply_delay.max(), Duration::from_millis(400));
    assert_eq!(config.login_delay, Duration::from_millis(50));
}

#[test]
fn defaults_use_documented_timings() {
    let config = AppConfig::default();
    assert_eq!(config.reply_delay.min(), Duration::from_millis(1000));
    assert_eq!(config.reply_delay.max(), Duration::from_millis(3000));
    assert_eq!(config.login_delay, Duration::from_millis(1500));
    assert_eq!(config.seed, None);
}

#[test]
fn returns_parse_error_for_invalid_toml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ugpt.toml");
    fs::write(&path, "[reply\nmin_delay_ms = 1").expect("write config");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn returns_error_for_inverted_delay_range() {
    let result = AppConfig::from_toml_str("[reply]\nmin_delay_ms = 5000\n");
    assert!(matches!(
        result,
        Err(ConfigError::InvalidDelayRange { min: 5000, max: 3000 })
    ));
}

#[test]
fn cli_seed_overrides_file_seed() {
    let config = AppConfig::from_toml_str("seed = 1\n").expect("parse");
    assert_eq!(config.clone().with_seed(Some(9)).seed, Some(9));
    assert_eq!(config.with_seed(None).seed, Some(1));
}
