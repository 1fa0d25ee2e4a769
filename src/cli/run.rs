//! Handler for the interactive `run` command.

use crate::cli::command::RunArgs;
use crate::cli::prompt::TerminalPrompter;
use crate::cli::{menu, output};
use crate::db::Database;
use crate::error::{ConfigError, Result};

/// Start the interactive report menu.
pub fn execute(args: &RunArgs) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`simreport run` is interactive; use `simreport report <name>` for scripted output"
                .to_string(),
        }
        .into());
    }

    let config = super::load_with_overrides(&args.config, args.dsn.as_deref())?;
    config.init_logging();

    output::header(env!("CARGO_PKG_VERSION"));

    let spinner = output::spinner("Connecting to database...");
    let mut db = match Database::connect(&config.database) {
        Ok(db) => {
            output::spinner_success(&spinner, "Connected");
            db
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Connection failed");
            return Err(err);
        }
    };

    let prompter = TerminalPrompter::new();
    let result = menu::run(&mut db, &prompter);
    db.close();
    result
}
