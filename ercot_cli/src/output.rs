//! CSV output for fetched tables.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use ercot_api::ResultTable;
use serde_json::Value;

/// Writes the table to `path` as CSV: a header row of column names, then
/// one record per row. Only called after a fetch fully succeeds, so a
/// failed fetch never leaves a partial file behind.
pub fn write_csv(table: &ResultTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(table, &mut writer)
}

fn write_records<W: Write>(table: &ResultTable, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(render_cell))?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders one JSON value as a CSV cell: strings bare (no JSON quoting),
/// nulls as empty cells, everything else in its JSON form.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
