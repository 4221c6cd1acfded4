//! Benchmark result parsing and schema definitions.
//!
//! This module handles:
//! - Loading result-set CSV files written by the benchmark harness
//! - Dropping the aggregate "Complete Workflow" rows
//! - Validating step names and latency values
//! - Defining the record / configuration / result-set model

pub mod benchmark_csv;
pub mod schema;

// Re-export main types
pub use benchmark_csv::{load, load_result_set, parse_result_set, result_set_path};
pub use schema::{BenchmarkRecord, Configuration, Layer, ResultSet, WorkflowStep};
