use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod config;
mod models;
mod store;
mod tui;
mod validate;

use cli::Cli;
use config::Config;
use store::ProductStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "sklad=info");
    }

    let mut config = Config::from_env()?;
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }
    config.validate()?;

    // Log to a file only: stderr output would draw over the alternate
    // screen while the TUI is running.
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("sklad.log"));
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(file_appender)
        .with_ansi(false)
        .init();

    info!("starting sklad");

    let mut store = ProductStore::new();
    if cli.demo {
        seed_demo(&mut store);
    }

    tui::run_tui(store)?;

    info!("sklad exited successfully");
    Ok(())
}

/// Sample inventory for `--demo`.
fn seed_demo(store: &mut ProductStore) {
    store.add("Ноутбук", 74990.0);
    store.add("Мышь беспроводная", 1490.0);
    store.add("Клавиатура", 3290.0);
}
