//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a benchmark result set
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Benchmark result set not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed benchmark input in {}: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Failed to read benchmark file: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Whether this error only means the configuration was never benchmarked
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

/// Errors that can occur during aggregation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("No valid benchmark result sets found. Please run benchmarks first.")]
    EmptyComparison,

    #[error("Average is undefined: no samples matched")]
    UndefinedAverage,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
