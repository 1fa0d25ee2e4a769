//! CLI module graph and command dispatch.

pub mod command;
pub mod config_cmd;
pub mod menu;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod report_cmd;
pub mod run;

use std::path::Path;

use command::{Cli, Commands, ConfigCommand, ReportsCommand, RunArgs};

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Dispatch a parsed command line. No subcommand means `run`.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        None => run::execute(&RunArgs::default()),
        Some(Commands::Run(args)) => run::execute(&args),
        Some(Commands::Report(args)) => report_cmd::execute(&args),
        Some(Commands::Reports(ReportsCommand::List)) => report_cmd::list(),
        Some(Commands::Config(ConfigCommand::Init(args))) => {
            config_cmd::init(&args.path, args.force)
        }
        Some(Commands::Config(ConfigCommand::Show(args))) => config_cmd::show(&args.config),
        Some(Commands::Config(ConfigCommand::Validate(args))) => {
            config_cmd::validate(&args.config)
        }
    }
}

/// Load configuration for a command, honoring a `--dsn` override.
///
/// A missing config file is fine when the DSN comes from the flag or the
/// environment; validation still runs on the final result.
pub(crate) fn load_with_overrides(path: &Path, dsn: Option<&str>) -> Result<Config> {
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Config::parse_toml(&content)?
    } else {
        Config::default()
    };

    config.apply_env_overrides();
    if let Some(dsn) = dsn {
        config.database.dsn = dsn.to_string();
    }
    config.validate()?;
    Ok(config)
}
