//! The interactive report menu.
//!
//! One pass through the loop: pick a report, run it unfiltered, render;
//! for reports that offer filtering, optionally pick a dimension value
//! and render the narrowed result. "Exit" leaves the loop and the caller
//! tears the session down.

use tracing::warn;

use crate::cli::output;
use crate::cli::prompt::Prompter;
use crate::db::Database;
use crate::error::Result;
use crate::report::{catalog, filter, render, Filters, ReportKind, ReportTable};

const EXIT_LABEL: &str = "Exit";

/// Run the menu loop until the operator exits.
///
/// Query failures are reported and the menu continues; connection
/// failures propagate to the caller.
pub fn run(db: &mut Database, prompter: &dyn Prompter) -> Result<()> {
    let menu: Vec<String> = ReportKind::ALL
        .iter()
        .map(|kind| kind.title().to_string())
        .chain(std::iter::once(EXIT_LABEL.to_string()))
        .collect();

    loop {
        let choice = prompter.select("Choose a report to run", &menu)?;
        let Some(kind) = ReportKind::ALL.get(choice).copied() else {
            output::note("Closing session.");
            return Ok(());
        };

        if let Err(err) = run_report(db, prompter, kind) {
            if err.is_recoverable() {
                warn!(report = kind.slug(), error = %err, "report failed");
                output::error(&err.to_string());
                continue;
            }
            return Err(err);
        }
    }
}

fn run_report(db: &mut Database, prompter: &dyn Prompter, kind: ReportKind) -> Result<()> {
    let table = catalog::run(db.conn()?, kind, &Filters::none())?;
    present(&table, "full");

    let Some(dimension) = kind.menu_filter() else {
        return Ok(());
    };
    if !prompter.confirm("Apply filters?", false)? {
        return Ok(());
    }

    let values = filter::distinct_values(db.conn()?, dimension)?;
    if values.is_empty() {
        output::warning("No values available to filter by.");
        return Ok(());
    }

    let index = prompter.select(dimension.prompt(), &values)?;
    let filters = Filters::by_dimension(dimension, values[index].clone());

    let filtered = catalog::run(db.conn()?, kind, &filters)?;
    present(&filtered, "filtered");
    Ok(())
}

fn present(table: &ReportTable, qualifier: &str) {
    output::section(&format!("{} ({qualifier})", table.title));
    output::lines(&render::to_table_string(table));
}
