//! Command-line interface definitions.
//!
//! The default invocation (no subcommand) starts the interactive report
//! menu; the remaining subcommands form the scripted surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Interactive reporting CLI for a simulation-training database
#[derive(Parser, Debug)]
#[command(name = "simreport")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the simreport CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive report menu (the default)
    Run(RunArgs),

    /// Run a single report without prompts
    Report(ReportArgs),

    /// Explore the report catalog
    #[command(subcommand)]
    Reports(ReportsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `simreport reports`.
#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// List all reports with their filter dimensions.
    List,
}

/// Subcommands for `simreport config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with secrets redacted.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the configured database DSN.
    #[arg(long)]
    pub dsn: Option<String>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config: paths::default_config(),
            dsn: None,
        }
    }
}

/// Arguments for the `report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Report to run (see `simreport reports list`).
    pub name: String,

    /// Narrow to one user name.
    #[arg(long)]
    pub user: Option<String>,

    /// Narrow to one device name.
    #[arg(long)]
    pub device: Option<String>,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the configured database DSN.
    #[arg(long)]
    pub dsn: Option<String>,
}
