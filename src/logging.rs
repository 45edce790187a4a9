//! Logging setup.
//!
//! The interactive game owns the terminal, so logs only ever go to a file.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::AppConfig;

/// Install a file logger when `log_path` is configured.
///
/// Returns `false` (and installs nothing) when no path is set.
pub fn init_logging(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let log_config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    WriteLogger::init(config.log_level, log_config, file)
        .context("a logger is already installed")?;
    Ok(true)
}
