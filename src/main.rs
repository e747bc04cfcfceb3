mod catalog;
mod chat;
mod config;
mod error;
mod forms;
mod logging;
mod models;
mod routes;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = config::default_config_path();
    let config = config::Config::load(config_path.as_deref()).context("Failed to load configuration")?;

    let interactive = args.len() == 1;
    if interactive {
        logging::init_file(&log_path(&config)?, &config.log.filter)?;
    } else {
        logging::init_stderr(&config.log.filter)?;
    }
    tracing::debug!(config = ?config_path, "configuration loaded");

    let stores = store::Stores::new(&config.ledger);
    if interactive {
        run::as_tui(stores, &config)
    } else {
        run::as_cli(&args, &stores)
    }
}

fn log_path(config: &config::Config) -> Result<PathBuf> {
    if let Some(path) = &config.log.file {
        return Ok(path.clone());
    }
    let dirs = config::project_dirs()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("lagom.log"))
}
