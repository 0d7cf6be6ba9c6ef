//! Configuration management for satdb
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_API_URL, TICK_RATE_DEFAULT_MS, TICK_RATE_MAX_MS,
    TICK_RATE_MIN_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Inventory service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse capture
    pub mouse_enabled: bool,
    /// Event loop tick in milliseconds; background results are applied once per tick
    pub tick_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// Minimum level written to the log file: error, warn, info, debug or trace
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: false,
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level. Call [`Config::validate`] first for a useful error.
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from `explicit_path`, the usual locations, or defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_file(path);
        }

        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.api.base_url = normalize_base_url(&config.api.base_url)?;
        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Replace the backend URL, e.g. from a command-line override
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.api.base_url = normalize_base_url(&base_url.into())?;
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        normalize_base_url(&self.api.base_url)?;

        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging.level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# satdb Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// Parse a backend URL and return it without surrounding whitespace or a trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed).with_context(|| format!("Invalid api.base_url '{}'", trimmed))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("api.base_url must use http or https, got '{}'", trimmed);
    }
    if url.host_str().map_or(true, str::is_empty) {
        anyhow::bail!("api.base_url has no host: '{}'", trimmed);
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
