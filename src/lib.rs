//! Simreport - interactive reporting over a simulation-training database.
//!
//! The tool connects to the training platform's relational schema and
//! renders a fixed catalog of reports (sessions, feedback, maintenance,
//! achievements, preferences, metrics) as tables, either from an
//! interactive menu or from scripted subcommands.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with environment
//!   overrides for credentials
//! - [`db`] - Database session handle and schema definitions
//! - [`report`] - The report catalog: descriptors, execution, filter
//!   value discovery, and table rendering
//! - [`cli`] - Command definitions, dispatch, prompts, and terminal
//!   output
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use simreport::config::DatabaseConfig;
//! use simreport::db::Database;
//! use simreport::report::{catalog, Filters, ReportKind};
//!
//! # fn main() -> simreport::error::Result<()> {
//! let config = DatabaseConfig {
//!     dsn: "training.db".into(),
//!     ..Default::default()
//! };
//! let mut db = Database::connect(&config)?;
//! let table = catalog::run(db.conn()?, ReportKind::Sessions, &Filters::none())?;
//! println!("{} rows", table.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod report;

#[cfg(test)]
pub(crate) mod testutil;
