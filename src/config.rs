//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the klokk.toml file.
//! It owns the grid dimensions every generator is built against and the
//! per-movement animation durations handed to the external animator.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "klokk.toml";

/// Application configuration loaded from klokk.toml
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Frame and digit glyph dimensions
    pub grid: GridConfig,
    /// Animation durations
    pub timing: TimingConfig,
}

/// Dimensions of a full frame and of a single digit glyph.
///
/// The time generator's digit anchors assume the defaults; changing these
/// values requires re-deriving the anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    /// Clock rows in a full frame
    pub rows: usize,
    /// Clock columns in a full frame
    pub columns: usize,
    /// Rows of a digit glyph
    pub digit_rows: usize,
    /// Columns of a digit glyph
    pub digit_columns: usize,
}

/// Durations in milliseconds, consumed by the animator and never by geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    pub standby_millis: u64,
    pub trance_millis: u64,
    pub ripple_millis: u64,
    pub time_millis: u64,
    /// Pause the animator holds a finished frame before the next movement
    pub enjoy_millis: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: 8,
            columns: 15,
            digit_rows: 6,
            digit_columns: 3,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            standby_millis: 1000,
            trance_millis: 3000,
            ripple_millis: 2500,
            time_millis: 2000,
            enjoy_millis: 500,
        }
    }
}

impl Config {
    /// Load configuration from klokk.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    log::info!(
                        "Loaded configuration from {}: {}x{} clocks",
                        path.display(),
                        config.grid.rows,
                        config.grid.columns
                    );
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config file format: {}", e);
                    log::warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!(
                    "No config file at {}, using default configuration",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        log::info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.grid.rows, 8);
        assert_eq!(config.grid.columns, 15);
        assert_eq!(config.grid.digit_rows, 6);
        assert_eq!(config.grid.digit_columns, 3);
        assert_eq!(config.timing.enjoy_millis, 500);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.grid.columns = 16;
        config.timing.ripple_millis = 4000;

        config.save_to_path(temp_file.path()).unwrap();
        let parsed = Config::load_from_path(temp_file.path());
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[grid]\nrows = 10\n").unwrap();
        assert_eq!(parsed.grid.rows, 10);
        assert_eq!(parsed.grid.columns, 15);
        assert_eq!(parsed.timing, TimingConfig::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "grid = 'not a table'").unwrap();
        assert_eq!(Config::load_from_path(temp_file.path()), Config::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config, Config::default());
    }
}
