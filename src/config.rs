//! Application configuration file support.
//!
//! This module provides utilities for reading server and schedule display
//! settings from TOML configuration files.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::ScheduleView;

/// Errors from loading or interpreting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(String),

    /// The file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A setting has an unusable value.
    #[error("Invalid setting {setting}: {message}")]
    Invalid {
        setting: &'static str,
        message: String,
    },

    /// No configuration file in any standard location.
    #[error("No timetable.toml found in standard locations")]
    NotFound,
}

/// Application configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub schedule: ScheduleSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Schedule display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// First day of the displayed week ("monday", "sunday", ...).
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// View a new session opens in ("week" or "month").
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_week_start() -> String {
    "monday".to_string()
}

fn default_view() -> String {
    "week".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Apply `HOST` and `PORT` environment overrides on top of these
    /// settings. Unset or unparsable variables leave the file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.port = port;
        }
        self
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            default_view: default_view(),
        }
    }
}

impl AppConfig {
    /// Load application configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// Load application configuration from the default location.
    ///
    /// Searches for `timetable.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if found and parsed successfully
    /// * `Err(ConfigError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("timetable.toml"),
            PathBuf::from("config/timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// First day of the displayed week as a typed weekday.
    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        self.schedule
            .week_start
            .parse()
            .map_err(|_| ConfigError::Invalid {
                setting: "schedule.week_start",
                message: format!("unrecognized weekday '{}'", self.schedule.week_start),
            })
    }

    /// View a new session opens in, as a typed view mode.
    pub fn default_view(&self) -> Result<ScheduleView, ConfigError> {
        self.schedule
            .default_view
            .parse()
            .map_err(|message: String| ConfigError::Invalid {
                setting: "schedule.default_view",
                message,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9090

[schedule]
week_start = "sunday"
default_view = "month"
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.week_start().unwrap(), Weekday::Sun);
        assert_eq!(config.default_view().unwrap(), ScheduleView::Month);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.week_start().unwrap(), Weekday::Mon);
        assert_eq!(config.default_view().unwrap(), ScheduleView::Week);
    }

    #[test]
    fn test_partial_section_fills_in_defaults() {
        let toml = r#"
[schedule]
week_start = "Sunday"
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.week_start().unwrap(), Weekday::Sun);
        assert_eq!(config.default_view().unwrap(), ScheduleView::Week);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_week_start() {
        let toml = r#"
[schedule]
week_start = "caturday"
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        let err = config.week_start().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                setting: "schedule.week_start",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = AppConfig::from_file("/nonexistent/timetable.toml");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
