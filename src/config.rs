//! Configuration file support for Iron Instruction.
//!
//! Settings are stored as JSON. Every preference has a default, so a config
//! file only needs the fields it changes.

use std::path::Path;
use std::time::Duration;

use iron_ui::constants::DEFAULT_ANIMATION_TIME_MS;
use iron_ui::WidthPolicy;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEWPORT_WIDTH, MAX_ANIMATION_TIME_MS};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Length of a section's open/close transition
    #[serde(default = "default_animation_time_ms")]
    pub animation_time_ms: u64,

    /// How the stabilized list width is applied
    #[serde(default)]
    pub width_policy: WidthPolicy,

    /// Width offered to the view when rendering
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
}

fn default_animation_time_ms() -> u64 {
    DEFAULT_ANIMATION_TIME_MS
}

fn default_viewport_width() -> f32 {
    DEFAULT_VIEWPORT_WIDTH
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            animation_time_ms: default_animation_time_ms(),
            width_policy: WidthPolicy::default(),
            viewport_width: default_viewport_width(),
        }
    }
}

impl UserPreferences {
    pub fn animation_time(&self) -> Duration {
        Duration::from_millis(self.animation_time_ms)
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Check values that serde alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                file_version: self.version,
                supported_version: CONFIG_VERSION,
            });
        }

        let prefs = &self.preferences;
        if prefs.animation_time_ms > MAX_ANIMATION_TIME_MS {
            return Err(ConfigError::InvalidAnimationTime {
                millis: prefs.animation_time_ms,
                max: MAX_ANIMATION_TIME_MS,
            });
        }
        if !prefs.viewport_width.is_finite() || prefs.viewport_width <= 0.0 {
            return Err(ConfigError::InvalidViewportWidth(prefs.viewport_width));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// IO error
    #[error("Failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// Config file is from a newer version
    #[error(
        "Configuration version {file_version} is not supported (max supported: {supported_version})"
    )]
    UnsupportedVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("Animation time {millis}ms exceeds the maximum of {max}ms")]
    InvalidAnimationTime { millis: u64, max: u64 },

    #[error("Viewport width must be a positive number, got {0}")]
    InvalidViewportWidth(f32),
}
