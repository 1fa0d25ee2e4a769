//! Handlers for the scripted `report` and `reports` commands.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::command::ReportArgs;
use crate::cli::output;
use crate::db::Database;
use crate::error::{ConfigError, Result};
use crate::report::{catalog, render, Filters, ReportKind};

/// Execute one report without prompts.
pub fn execute(args: &ReportArgs) -> Result<()> {
    let kind = ReportKind::from_slug(&args.name).ok_or_else(|| ConfigError::InvalidValue {
        field: "report",
        reason: format!(
            "unknown report '{}'; see `simreport reports list`",
            args.name
        ),
    })?;

    let config = super::load_with_overrides(&args.config, args.dsn.as_deref())?;
    config.init_logging();

    let mut db = Database::connect(&config.database)?;
    let filters = Filters {
        user: args.user.clone(),
        device: args.device.clone(),
    };
    let result = catalog::run(db.conn()?, kind, &filters);
    db.close();
    let table = result?;

    if output::is_json() {
        output::json_output(json!({
            "command": "report",
            "report": kind.slug(),
            "columns": table.columns,
            "rows": table.rows,
        }));
        return Ok(());
    }

    output::section(table.title);
    output::lines(&render::to_table_string(&table));
    Ok(())
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Report")]
    slug: &'static str,
    #[tabled(rename = "Title")]
    title: &'static str,
    #[tabled(rename = "Filters")]
    filters: String,
}

fn filter_labels(kind: ReportKind) -> String {
    let labels: Vec<&str> = kind
        .supported_filters()
        .iter()
        .map(|dimension| dimension.label())
        .collect();
    if labels.is_empty() {
        "-".to_string()
    } else {
        labels.join(", ")
    }
}

/// List the report catalog.
pub fn list() -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    if output::is_json() {
        let reports: Vec<_> = ReportKind::ALL
            .iter()
            .map(|kind| {
                json!({
                    "slug": kind.slug(),
                    "title": kind.title(),
                    "filters": kind
                        .supported_filters()
                        .iter()
                        .map(|dimension| dimension.label())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "reports.list",
            "reports": reports,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Available reports");

    let rows: Vec<CatalogRow> = ReportKind::ALL
        .iter()
        .map(|&kind| CatalogRow {
            slug: kind.slug(),
            title: kind.title(),
            filters: filter_labels(kind),
        })
        .collect();

    let table = Table::new(rows).to_string();
    output::lines(&table);

    output::hint(&format!(
        "run {} to execute one",
        output::highlight("simreport report <name>")
    ));

    Ok(())
}
