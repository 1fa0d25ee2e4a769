//! Table formatting for report results.

use tabled::builder::Builder;

use crate::report::ReportTable;

/// Format a report as a bordered text table, headers first.
///
/// An empty result still renders the header row.
#[must_use]
pub fn to_table_string(report: &ReportTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(report.columns.iter().copied());
    for row in &report.rows {
        builder.push_record(row.iter().map(String::as_str));
    }
    builder.build().to_string()
}
