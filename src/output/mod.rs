//! Output writers for comparison reports and analysis tables.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports (comparison and single result-set inspection)
//! - CSV analysis tables
//! - LaTeX tables
//! - Text summaries

pub mod json;
pub mod report;
pub mod table;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_output_path, write_inspection, write_report};
pub use report::{ComparisonReport, InspectionReport};
pub use table::{
    layer_table, render_latex_table, step_table, write_csv_table, write_latex_table, Cell, Table,
};
pub use text::{render_comparison_summary, render_inspection_summary};
