use clap::Parser;
use std::error::Error;
use ugpt_cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // config/.env may supply UGPT_SEED / UGPT_LOG_FILE
    ugpt_core::config::ensure_env_loaded();
    let cli = Cli::parse();
    ugpt_cli::run(cli).await
}
