//! Path utilities for simreport.
//!
//! All data lives under `~/.simreport/`:
//! - `~/.simreport/config.toml` - main configuration
//! - `~/.simreport/training.db` - training database (when local)

use std::path::PathBuf;

/// Returns the simreport home directory (`~/.simreport/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".simreport")
}

/// Returns the default config file path (`~/.simreport/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.simreport/training.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("training.db")
}
