use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sklad")]
#[command(about = "Terminal CRM for managing a small product inventory")]
#[command(version)]
pub struct Cli {
    /// Start with a few sample products instead of an empty inventory
    #[arg(long)]
    pub demo: bool,

    /// Log file path (overrides SKLAD_LOG_FILE)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
