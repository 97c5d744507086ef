use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ugpt",
    version,
    about = "Terminal chat demo with simulated assistant replies"
)]
pub struct Cli {
    /// Configuration file (defaults to config/ugpt.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed for reply selection and latency
    #[arg(long, env = "UGPT_SEED")]
    pub seed: Option<u64>,
    /// Write logs to this file; logging is off otherwise
    #[arg(long, env = "UGPT_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
