//! Logging for the admin client.
//!
//! Two sinks are used. The `log` facade is routed through `fern` to a log file
//! when `[logging] enabled = true`. Independently, [`Logger`] keeps an
//! in-memory history of UI events that the logs dialog displays.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME, MAX_LOG_ENTRIES};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build the UI logger and, if enabled, install the file logger.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if config.enabled {
            let path = Self::get_log_file_path()?;
            init_file_logging(&path, config.level_filter())?;
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: config.enabled,
        })
    }

    /// Whether file logging was requested
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry, dropping the oldest once the history is full
    pub fn log(&self, message: String) {
        log::debug!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                let excess = logs.len() + 1 - MAX_LOG_ENTRIES;
                logs.drain(..excess);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Location of the log file under the platform data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route the `log` facade to `path` at `level`.
///
/// Can only succeed once per process since it installs the global logger.
pub fn init_file_logging(path: &Path, level: log::LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // Keep HTTP internals out of the log unless explicitly debugging them
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("A global logger is already installed")?;

    Ok(())
}
