//! Turns reports into terminal tables or JSON.

use analytics::{AnalyticsError, ChartHint, ResultTable, Value};
use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use configuration::OutputFormat;
use navigator::{Report, Section};
use serde::Serialize;
use std::io::Write;

/// Envelope for the JSON format.
#[derive(Serialize)]
struct JsonOutput<'a> {
    generated_at: String,
    reports: &'a [Report],
}

pub fn write_reports(out: &mut impl Write, reports: &[Report], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = JsonOutput {
                generated_at: chrono::Utc::now().to_rfc3339(),
                reports,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            for report in reports {
                write_report_table(out, report)?;
            }
        }
    }
    Ok(())
}

fn write_report_table(out: &mut impl Write, report: &Report) -> Result<()> {
    writeln!(out, "== {} ==", report.title)?;
    for table in &report.tables {
        writeln!(out)?;
        writeln!(out, "{}", table.title())?;
        if table.is_empty() {
            writeln!(out, "No data")?;
            continue;
        }

        match table.chart() {
            ChartHint::Pie { values, .. } => {
                writeln!(out, "{}", with_share_column(table, values)?)?;
            }
            ChartHint::Treemap { path, values } | ChartHint::Sunburst { path, values } => {
                writeln!(out, "{}", to_comfy(table))?;
                if let Some(parent) = path.first() {
                    writeln!(out, "Totals by {parent}")?;
                    writeln!(out, "{}", rollup_table(parent, values, &rollup(table, parent, values)?))?;
                }
            }
            _ => writeln!(out, "{}", to_comfy(table))?,
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Lists the navigation keys in menu order.
pub fn write_sections(out: &mut impl Write, sections: &[Section], format: OutputFormat) -> Result<()> {
    #[derive(Serialize)]
    struct Entry {
        number: usize,
        key: &'static str,
        slug: String,
    }

    let entries: Vec<Entry> = sections
        .iter()
        .map(|s| Entry {
            number: s.number(),
            key: s.key(),
            slug: s.slug(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(vec!["#", "section", "slug"]);
            for e in &entries {
                table.add_row(vec![e.number.to_string(), e.key.to_string(), e.slug.clone()]);
            }
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

/// Sums `values` per distinct `parent` value, in the order parents first appear.
pub fn rollup(
    table: &ResultTable,
    parent: &str,
    values: &str,
) -> Result<Vec<(String, f64)>, AnalyticsError> {
    let key_idx = table.column_index(parent)?;
    let value_idx = table.numeric_column_index(values)?;

    let mut totals: Vec<(String, f64)> = Vec::new();
    for row in table.rows() {
        let key = row[key_idx].to_string();
        let amount = row[value_idx].as_f64().unwrap_or_default();
        match totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += amount,
            None => totals.push((key, amount)),
        }
    }
    Ok(totals)
}

/// Percentage of the column total held by each row. All zeros when the total is zero.
pub fn shares(table: &ResultTable, values: &str) -> Result<Vec<f64>, AnalyticsError> {
    let idx = table.numeric_column_index(values)?;
    let amounts: Vec<f64> = table
        .rows()
        .iter()
        .map(|row| row[idx].as_f64().unwrap_or_default())
        .collect();
    let total: f64 = amounts.iter().sum();
    if total == 0.0 {
        return Ok(vec![0.0; amounts.len()]);
    }
    Ok(amounts.iter().map(|a| a / total * 100.0).collect())
}

fn with_share_column(table: &ResultTable, values: &str) -> Result<Table, AnalyticsError> {
    let shares = shares(table, values)?;
    let mut rendered = new_table();

    let mut header: Vec<&str> = table.columns().iter().map(|c| c.name).collect();
    header.push("share");
    rendered.set_header(header);

    for (row, share) in table.rows().iter().zip(shares) {
        let mut cells: Vec<Cell> = row.iter().map(cell).collect();
        cells.push(Cell::new(format!("{share:.1}%")).set_alignment(CellAlignment::Right));
        rendered.add_row(cells);
    }
    Ok(rendered)
}

fn rollup_table(parent: &str, values: &str, totals: &[(String, f64)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![parent, values]);
    for (key, total) in totals {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(format!("{total:.2}")).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn to_comfy(table: &ResultTable) -> Table {
    let mut rendered = new_table();
    rendered.set_header(table.columns().iter().map(|c| c.name).collect::<Vec<_>>());
    for row in table.rows() {
        rendered.add_row(row.iter().map(cell).collect::<Vec<_>>());
    }
    rendered
}

fn cell(value: &Value) -> Cell {
    let c = Cell::new(value.to_string());
    match value {
        Value::Text(_) => c,
        _ => c.set_alignment(CellAlignment::Right),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
