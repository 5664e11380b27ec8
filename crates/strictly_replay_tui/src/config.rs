//! Terminal UI configuration.
//!
//! Settings come from an optional TOML file; command-line flags override
//! whatever the file says.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_replay::HistoryOrder;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_replay.toml";

/// Initial order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderSetting {
    /// Oldest move first.
    #[default]
    Asc,
    /// Newest move first.
    Desc,
}

impl From<OrderSetting> for HistoryOrder {
    fn from(setting: OrderSetting) -> Self {
        match setting {
            OrderSetting::Asc => HistoryOrder::Ascending,
            OrderSetting::Desc => HistoryOrder::Descending,
        }
    }
}

/// Configuration for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Order the move list starts in.
    #[serde(default)]
    initial_order: OrderSetting,

    /// Where logs are written; the terminal itself is owned by the UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_replay.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            initial_order: OrderSetting::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = ?config.initial_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the default file if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(order) = cli.order {
            self.initial_order = order;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_reads_all_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "initial_order = \"desc\"\nlog_file = \"game.log\"\nlog_filter = \"debug\""
        )
        .expect("write config");

        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.initial_order(), &OrderSetting::Desc);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_filter = \"warn\"").expect("write config");

        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.initial_order(), &OrderSetting::Asc);
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = TuiConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "initial_order = \"sideways\"").expect("write config");

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli {
            config: None,
            log_file: Some(PathBuf::from("cli.log")),
            order: Some(OrderSetting::Desc),
        };
        let config = TuiConfig::default().with_overrides(&cli);
        assert_eq!(config.initial_order(), &OrderSetting::Desc);
        assert_eq!(config.log_file(), &PathBuf::from("cli.log"));
        assert_eq!(config.log_filter(), "info");
        assert_eq!(HistoryOrder::from(*config.initial_order()), HistoryOrder::Descending);
    }
}
