//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for the database credentials, so nothing sensitive has to
//! live on disk:
//!
//! - `SIMREPORT_DSN` overrides `database.dsn`
//! - `SIMREPORT_USERNAME` overrides `database.username`
//! - `SIMREPORT_PASSWORD` overrides `database.password`

use serde::Deserialize;
use std::fs;
use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database session settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database session settings.
///
/// The DSN is a Diesel SQLite database URL or filesystem path. Username
/// and password are recognized for DSNs that carry credentials; the
/// SQLite backend ignores them.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Data source name locating the database.
    #[serde(default)]
    pub dsn: String,

    /// Account name for backends that authenticate.
    #[serde(default)]
    pub username: Option<String>,

    /// Account password for backends that authenticate.
    #[serde(default)]
    pub password: Option<String>,

    /// Upper bound on statement lock waits, applied as a pragma at
    /// connect time. Unset means no bound.
    #[serde(default)]
    pub statement_timeout_ms: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, apply environment overrides,
    /// and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string without validating.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Initialize logging per the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(dsn) = std::env::var("SIMREPORT_DSN") {
            self.database.dsn = dsn;
        }
        if let Ok(username) = std::env::var("SIMREPORT_USERNAME") {
            self.database.username = Some(username);
        }
        if let Ok(password) = std::env::var("SIMREPORT_PASSWORD") {
            self.database.password = Some(password);
        }
    }

    /// Validate field-level constraints.
    pub fn validate(&self) -> Result<()> {
        if self.database.dsn.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.dsn",
            }
            .into());
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const VALID_TOML: &str = r#"
        [database]
        dsn = "sqlite://training.db"
        statement_timeout_ms = 5000

        [logging]
        level = "info"
        format = "pretty"
    "#;

    #[test]
    fn parse_valid_config() {
        let config = Config::parse_toml(VALID_TOML).unwrap();
        assert_eq!(config.database.dsn, "sqlite://training.db");
        assert_eq!(config.database.statement_timeout_ms, Some(5000));
        assert_eq!(config.logging.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert!(config.database.dsn.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn empty_dsn_fails_validation() {
        let config = Config::parse_toml("[database]\ndsn = \"\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "database.dsn"
            })
        ));
    }

    #[test]
    fn unknown_logging_format_fails_validation() {
        let toml = r#"
            [database]
            dsn = "sqlite://training.db"

            [logging]
            level = "info"
            format = "xml"
        "#;
        let config = Config::parse_toml(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml("[database").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn credentials_are_optional() {
        let config = Config::parse_toml(VALID_TOML).unwrap();
        assert!(config.database.username.is_none());
        assert!(config.database.password.is_none());
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let _guard = crate::testutil::ENV_LOCK.lock().unwrap();
        std::env::set_var("SIMREPORT_DSN", "sqlite://override.db");
        std::env::set_var("SIMREPORT_USERNAME", "operator");

        let mut config = Config::parse_toml(VALID_TOML).unwrap();
        config.apply_env_overrides();

        std::env::remove_var("SIMREPORT_DSN");
        std::env::remove_var("SIMREPORT_USERNAME");

        assert_eq!(config.database.dsn, "sqlite://override.db");
        assert_eq!(config.database.username.as_deref(), Some("operator"));
    }
}
