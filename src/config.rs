//! Configuration management for `hfprop`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::HfPropError;
use crate::geo::GridPrecision;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HfPropConfig {
    /// Space-weather feed settings
    #[serde(default)]
    pub solar: SolarConfig,
    /// Snapshot cache settings
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default presentation settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Space-weather feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarConfig {
    /// URL of the solar XML feed
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_feed_timeout")]
    pub timeout_seconds: u32,
    /// Allow prompting for solar values when the feed is unavailable
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

/// Snapshot cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Snapshot file location; a leading `~/` is expanded
    #[serde(default = "default_cache_location")]
    pub location: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Characters in derived grid descriptions (4 or 6)
    #[serde(default = "default_grid_precision")]
    pub grid_precision: usize,
}

// Default value functions
fn default_feed_url() -> String {
    "https://www.hamqsl.com/solarxml.php".to_string()
}

fn default_feed_timeout() -> u32 {
    5
}

fn default_interactive() -> bool {
    true
}

fn default_cache_location() -> String {
    dirs::cache_dir()
        .map(|dir| dir.join("hfprop").join("solar.json").display().to_string())
        .unwrap_or_else(|| "~/.cache/hfprop/solar.json".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_grid_precision() -> usize {
    6
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            timeout_seconds: default_feed_timeout(),
            interactive: default_interactive(),
        }
    }
}

impl SolarConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            location: default_cache_location(),
        }
    }
}

impl CacheConfig {
    /// Snapshot file path with `~/` expanded to the home directory
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        match (self.location.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.location),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            grid_precision: default_grid_precision(),
        }
    }
}

impl DefaultsConfig {
    pub fn precision(&self) -> crate::Result<GridPrecision> {
        GridPrecision::from_len(self.grid_precision)
    }
}

impl HfPropConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // HFPROP__SOLAR__TIMEOUT_SECONDS=10 style overrides
        builder = builder.add_source(
            Environment::with_prefix("HFPROP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: HfPropConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hfprop").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.solar.feed_url.is_empty() {
            self.solar.feed_url = default_feed_url();
        }
        if self.solar.timeout_seconds == 0 {
            self.solar.timeout_seconds = default_feed_timeout();
        }
        if self.cache.location.is_empty() {
            self.cache.location = default_cache_location();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.grid_precision == 0 {
            self.defaults.grid_precision = default_grid_precision();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=60).contains(&self.solar.timeout_seconds) {
            return Err(HfPropError::config(format!(
                "Solar feed timeout must be between 1 and 60 seconds, got: {}",
                self.solar.timeout_seconds
            ))
            .into());
        }

        if self.defaults.precision().is_err() {
            return Err(HfPropError::config(format!(
                "Grid precision must be 4 or 6, got: {}",
                self.defaults.grid_precision
            ))
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(HfPropError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(HfPropError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.solar.feed_url.starts_with("http://")
            && !self.solar.feed_url.starts_with("https://")
        {
            return Err(
                HfPropError::config("Solar feed URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }
}
