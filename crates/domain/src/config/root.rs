use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::retention::RetentionConfig;

/// Main configuration structure for notifyd
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Capacity-based purge of all notifications
    #[serde(default)]
    pub retention: RetentionConfig,

    /// Optional second policy applied to processed notifications only
    #[serde(default)]
    pub processed_retention: Option<RetentionConfig>,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. notifyd.toml in current directory
    /// 3. /etc/notifyd/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("notifyd.toml").exists() {
            Self::from_file("notifyd.toml")?
        } else if std::path::Path::new("/etc/notifyd/config.toml").exists() {
            Self::from_file("/etc/notifyd/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Both retention sections are turned into policies here so a bad
    /// capacity pair or interval stops the service before anything starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retention
            .to_policy()
            .map_err(|e| ConfigError::Validation(format!("[retention] {}", e)))?;

        if let Some(processed) = &self.processed_retention {
            processed
                .to_policy()
                .map_err(|e| ConfigError::Validation(format!("[processed_retention] {}", e)))?;
        }

        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database max_connections cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
