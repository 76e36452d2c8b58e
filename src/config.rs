//! Runtime settings: CLI flags layered over an optional YAML file.

use crate::storage::DEFAULT_SLOT_KEY;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_STORE_PATH: &str = "ticket-form.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "conference-ticket", about = "Fill in the form, get a conference ticket")]
pub struct Cli {
    /// YAML file with default settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON file holding the persisted form
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Slot name inside the store
    #[arg(long, value_name = "NAME")]
    pub key: Option<String>,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// tracing filter directive, e.g. `debug` or `conference_ticket=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub store: Option<PathBuf>,
    pub key: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub slot_key: String,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }

    /// CLI wins over file, file wins over defaults.
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            store_path: cli.store.or(file.store).unwrap_or(defaults.store_path),
            slot_key: cli.key.or(file.key).unwrap_or(defaults.slot_key),
            log_file: cli.log_file.or(file.log_file),
            log_level: cli.log_level.or(file.log_level).unwrap_or(defaults.log_level),
        };

        EnvFilter::try_new(&config.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(config.log_level.clone()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Config, ConfigError, FileConfig};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::parse_from(["conference-ticket"]);
        let config = Config::from_cli(cli).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.slot_key, "ticketFormData");
    }

    #[test]
    fn cli_overrides_file() {
        let cli = Cli::parse_from(["conference-ticket", "--key", "fromCli"]);
        let file = FileConfig {
            key: Some("fromFile".to_string()),
            store: Some(PathBuf::from("/tmp/file.json")),
            ..FileConfig::default()
        };
        let config = Config::resolve(cli, file).expect("config");
        assert_eq!(config.slot_key, "fromCli");
        assert_eq!(config.store_path, PathBuf::from("/tmp/file.json"));
    }

    #[test]
    fn yaml_file_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ticket.yaml");
        std::fs::write(&path, "store: forms.json\nlog_level: debug\n").expect("write");

        let cli = Cli::parse_from(["conference-ticket", "--config", path.to_str().expect("utf8")]);
        let config = Config::from_cli(cli).expect("config");
        assert_eq!(config.store_path, PathBuf::from("forms.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unknown_yaml_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ticket.yaml");
        std::fs::write(&path, "colour: blue\n").expect("write");

        assert!(matches!(FileConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["conference-ticket", "--config", "/nonexistent/ticket.yaml"]);
        assert!(matches!(Config::from_cli(cli), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let cli = Cli::parse_from(["conference-ticket", "--log-level", "app=loud"]);
        assert!(matches!(
            Config::resolve(cli, FileConfig::default()),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
