//! File logging setup
//!
//! Wires the `log` facade to a file under the XDG data directory when
//! logging is enabled in the configuration. The TUI owns the terminal, so
//! nothing is ever logged to stdout/stderr while the app is running.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initialize file logging according to the configuration.
///
/// A no-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_path = log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?)
        .apply()
        .context("Failed to initialize logging")?;

    log::info!("logging initialized at {}", log_path.display());
    Ok(())
}

/// Path of the log file under the XDG data directory.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("piles").join("piles.log"))
}
