//! Tabular exports of a comparison: CSV analysis tables and LaTeX.
//!
//! Two tables exist:
//! - the layer table (L1 / L2 / total latency per configuration)
//! - the step table (zero-filled per-step means and their stacked total)
//!
//! Undefined averages are written as empty CSV cells and `--` in LaTeX.

use super::json::prepare_output_path;
use crate::aggregator::ConfigurationSummary;
use crate::parser::schema::WorkflowStep;
use crate::utils::error::OutputError;
use csv::Writer;
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Decimals kept in CSV tables
const CSV_DECIMALS: usize = 2;

/// Decimals kept in LaTeX tables
const LATEX_DECIMALS: usize = 1;

/// One table cell, formatted differently per output format
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Number(Option<f64>),
}

impl Cell {
    fn render(&self, decimals: usize, undefined: &str) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Integer(value) => value.to_string(),
            Cell::Number(Some(value)) => format!("{:.*}", decimals, value),
            Cell::Number(None) => undefined.to_string(),
        }
    }
}

/// Header row plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

fn configuration_cells(entry: &ConfigurationSummary) -> Vec<Cell> {
    vec![
        Cell::Text(entry.label.clone()),
        Cell::Integer(i64::from(entry.l1_node_count)),
        Cell::Integer(i64::from(entry.l2_node_count)),
        Cell::Integer(entry.fault_tolerance),
    ]
}

fn configuration_headers() -> Vec<String> {
    ["Configuration", "L1 Nodes", "L2 Nodes", "Fault Tolerance (f)"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

/// Layer latency table, one row per configuration
pub fn layer_table(entries: &[ConfigurationSummary]) -> Table {
    let mut headers = configuration_headers();
    headers.extend(
        [
            "L2 Latency (ms)",
            "L1 Latency (ms)",
            "Total Latency (ms)",
            "L1 Percentage (%)",
        ]
        .iter()
        .map(|h| h.to_string()),
    );

    let rows = entries
        .iter()
        .map(|entry| {
            let mut row = configuration_cells(entry);
            row.extend([
                Cell::Number(entry.l2_latency_ms),
                Cell::Number(entry.l1_latency_ms),
                Cell::Number(entry.total_latency_ms),
                Cell::Number(entry.l1_percentage),
            ]);
            row
        })
        .collect();

    Table { headers, rows }
}

/// Per-step table in workflow order, with stacked total and commit share
pub fn step_table(entries: &[ConfigurationSummary]) -> Table {
    let mut headers = configuration_headers();
    headers.extend(WorkflowStep::ALL.iter().map(|step| format!("{} (ms)", step)));
    headers.push("Total Latency (ms)".to_string());
    headers.push("L1 Commit (%)".to_string());

    let rows = entries
        .iter()
        .map(|entry| {
            let mut row = configuration_cells(entry);
            row.extend(
                WorkflowStep::ALL
                    .iter()
                    .map(|step| Cell::Number(entry.per_step_latency_ms.get(*step))),
            );
            row.push(Cell::Number(Some(entry.stacked_total_ms)));
            row.push(Cell::Number(entry.commit_share));
            row
        })
        .collect();

    Table { headers, rows }
}

/// Write a table as CSV
///
/// **Public** - used for both the layer and the step table
///
/// # Errors
/// * `OutputError::CsvFailed` - CSV encoding or write error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_csv_table(table: &Table, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(BufWriter::new(file));

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.render(CSV_DECIMALS, "")))?;
    }
    writer.flush()?;

    info!(
        "CSV table written to: {} ({} rows)",
        output_path.display(),
        table.rows.len()
    );
    Ok(())
}

/// Render a table as a LaTeX `tabular` (booktabs rules)
pub fn render_latex_table(table: &Table) -> String {
    let alignment: String = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, _)| if i == 0 { 'l' } else { 'r' })
        .collect();

    let mut lines = Vec::with_capacity(table.rows.len() + 6);
    lines.push(format!("\\begin{{tabular}}{{{}}}", alignment));
    lines.push("\\toprule".to_string());
    lines.push(format!("{} \\\\", latex_row(table.headers.iter().map(|h| escape_latex(h)))));
    lines.push("\\midrule".to_string());

    for row in &table.rows {
        let cells = row
            .iter()
            .map(|cell| escape_latex(&cell.render(LATEX_DECIMALS, "--")));
        lines.push(format!("{} \\\\", latex_row(cells)));
    }

    lines.push("\\bottomrule".to_string());
    lines.push("\\end{tabular}".to_string());

    let mut latex = lines.join("\n");
    latex.push('\n');
    latex
}

fn latex_row(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(" & ")
}

/// Escape LaTeX special characters
fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write a table as a LaTeX `tabular` file
pub fn write_latex_table(table: &Table, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    prepare_output_path(output_path)?;

    fs::write(output_path, render_latex_table(table))?;

    info!("LaTeX table written to: {}", output_path.display());
    Ok(())
}
