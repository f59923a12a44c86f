//! Configuration loaded from TOML.
//!
//! Lookup order: an explicit `--config` path (which must exist), then
//! `./selection-studio.toml`, then `<config dir>/selection-studio/config.toml`.
//! When no file is found the defaults are used. Command-line flags override
//! whatever the file says.

use crate::input::{Bounds, MAX_LENGTH};
use crate::playback::Speed;
use crate::trace::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_LOG_FILE: &str = "selection-studio.log";
const LOCAL_CONFIG_FILE: &str = "selection-studio.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("configuration file does not exist: {0}")]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Log level filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ConfigError::Invalid(format!(
                "invalid log level: {}. Valid options: error, warn, info, debug, trace",
                s
            ))),
        }
    }
}

impl LogLevel {
    pub fn to_level_filter(self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Overridden by --log-file
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_enable_logging")]
    pub enable_logging: bool,
    /// Overridden by --log-level
    #[serde(default)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// 20..=980; overridden by --speed
    #[serde(default = "default_speed")]
    pub speed: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default = "default_min_value")]
    pub min_value: i64,
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    #[serde(default = "default_length")]
    pub length: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    /// Overridden by --locale
    #[serde(default)]
    pub locale: Locale,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_enable_logging() -> bool {
    true
}

fn default_speed() -> u16 {
    Speed::DEFAULT
}

fn default_min_value() -> i64 {
    Bounds::default().min
}

fn default_max_value() -> i64 {
    Bounds::default().max
}

fn default_length() -> usize {
    Bounds::default().len
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            log_file: default_log_file(),
            enable_logging: default_enable_logging(),
            log_level: LogLevel::default(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            speed: default_speed(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            min_value: default_min_value(),
            max_value: default_max_value(),
            length: default_length(),
        }
    }
}

impl Config {
    /// Load from the first configuration file found, or use defaults
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::search_paths() {
            if path.exists() {
                info!("Loading configuration from: {}", path.display());
                return Self::load_from_file(&path);
            }
            debug!("Configuration file not found: {}", path.display());
        }

        info!("No configuration file found, using default settings");
        Ok(Self::default())
    }

    /// Load from a path the user named; it has to exist
    pub fn load_with_explicit_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::load_from_file(path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.playback.speed;
        if !(Speed::MIN..=Speed::MAX).contains(&speed) {
            return Err(ConfigError::Invalid(format!(
                "playback.speed must be between {} and {}, got {}",
                Speed::MIN,
                Speed::MAX,
                speed
            )));
        }
        if self.data.min_value > self.data.max_value {
            return Err(ConfigError::Invalid(format!(
                "data.min_value ({}) is greater than data.max_value ({})",
                self.data.min_value, self.data.max_value
            )));
        }
        if !(1..=MAX_LENGTH).contains(&self.data.length) {
            return Err(ConfigError::Invalid(format!(
                "data.length must be between 1 and {}, got {}",
                MAX_LENGTH, self.data.length
            )));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.data.min_value,
            max: self.data.max_value,
            len: self.data.length,
        }
    }

    pub fn speed(&self) -> Speed {
        Speed::new(self.playback.speed)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("selection-studio").join("config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bounds(), Bounds::default());
        assert_eq!(config.speed(), Speed::default());
        assert_eq!(config.ui.locale, Locale::En);
        assert!(config.general.enable_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [playback]
            speed = 900

            [ui]
            locale = "ja"
            "#,
        )
        .unwrap();
        assert_eq!(config.playback.speed, 900);
        assert_eq!(config.ui.locale, Locale::Ja);
        assert_eq!(config.data.length, 10);
        assert_eq!(config.general.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        config.playback.speed = 1000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.data.min_value = 50;
        config.data.max_value = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.data.length = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        // Trace memory grows with the cube of the length
        let config: Config = toml::from_str("[data]\nlength = 1000000").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.data.length = MAX_LENGTH;
        assert!(config.validate().is_ok());
        config.data.length = MAX_LENGTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nlog_level = \"debug\"\n[data]\nlength = 5").unwrap();
        let config = Config::load_with_explicit_path(file.path()).unwrap();
        assert_eq!(config.general.log_level, LogLevel::Debug);
        assert_eq!(config.bounds().len, 5);
    }

    #[test]
    fn test_load_errors() {
        let missing = Path::new("/nonexistent/selection-studio.toml");
        assert!(matches!(
            Config::load_with_explicit_path(missing),
            Err(ConfigError::NotFound(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[playback\nspeed = ").unwrap();
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}
