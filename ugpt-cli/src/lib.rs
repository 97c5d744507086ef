pub mod cli;
pub mod tui;

pub use cli::Cli;

use std::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use ugpt_core::AppConfig;

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.log_file.as_deref())?;
    info!("Starting ugpt");
    debug!(config = ?cli.config, seed = ?cli.seed, "CLI arguments parsed");

    let config = AppConfig::load(cli.config.as_deref())?.with_seed(cli.seed);
    match &cli.config {
        Some(path) => info!(path = %path.display(), "Loaded configuration from file"),
        None => info!("Loaded configuration from default path or defaults"),
    }
    debug!(
        reply_min_ms = config.reply_delay.min().as_millis() as u64,
        reply_max_ms = config.reply_delay.max().as_millis() as u64,
        login_delay_ms = config.login_delay.as_millis() as u64,
        seeded = config.seed.is_some(),
        "Effective configuration"
    );

    tui::run_app(&config).await?;
    info!("ugpt finished");
    Ok(())
}

/// The TUI owns stdout, so logs only go to a file when one is given.
fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    static INIT: Once = Once::new();
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };
    INIT.call_once(|| match file {
        Some(file) => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_level(true)
                .init();
        }
        None => {
            fmt().with_env_filter(EnvFilter::new("off")).init();
        }
    });
    Ok(())
}
