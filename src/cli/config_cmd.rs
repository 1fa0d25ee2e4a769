//! Handlers for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Starter config written by `config init`.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init [PATH] [--force]`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    output::success(&format!("Wrote {}", path.display()));
    output::hint(&format!(
        "set {} to your training database before running",
        output::highlight("database.dsn")
    ));
    Ok(())
}

/// Execute `config show [--config PATH]`.
pub fn show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let database = &config.database;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "database": {
                "dsn": database.dsn,
                "username": database.username,
                "password": database.password.as_ref().map(|_| "********"),
                "statement_timeout_ms": database.statement_timeout_ms,
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Database");
    output::field("DSN", &database.dsn);
    output::field("Username", database.username.as_deref().unwrap_or("-"));
    output::field(
        "Password",
        if database.password.is_some() {
            "********"
        } else {
            "-"
        },
    );
    output::field(
        "Timeout",
        database
            .statement_timeout_ms
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "-".to_string()),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate [--config PATH]`.
pub fn validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success("Configuration is valid");
    Ok(())
}
