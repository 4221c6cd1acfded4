//! Loader for benchmark result CSV files.
//!
//! The benchmark harness writes one file per node configuration with the
//! columns `Iteration, Step, Method, Endpoint, Layer, Latency_ms, BlockHeight`.
//! Only `Step` and `Latency_ms` are required here; the rest are ignored.

use super::schema::{BenchmarkRecord, Configuration, ResultSet, WorkflowStep};
use crate::aggregator::layers::is_complete_workflow;
use crate::utils::config::{LATENCY_COLUMN, STEP_COLUMN};
use crate::utils::error::LoadError;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Raw CSV row, before step resolution and validation.
///
/// The latency stays textual: aggregate rows are dropped before it is parsed.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Step")]
    step: String,

    #[serde(rename = "Latency_ms")]
    latency_ms: String,
}

/// Path of the result set for `configuration` inside `data_dir`
pub fn result_set_path(data_dir: impl AsRef<Path>, configuration: &Configuration) -> PathBuf {
    data_dir.as_ref().join(configuration.file_name())
}

/// Load the result set for a configuration from a data directory
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::NotFound` - no file for this configuration (non-fatal for comparisons)
/// * `LoadError::MalformedInput` - missing columns, bad values or unknown steps
/// * `LoadError::Io` - the file exists but could not be read
pub fn load(
    data_dir: impl AsRef<Path>,
    configuration: Configuration,
) -> Result<ResultSet, LoadError> {
    let path = result_set_path(data_dir, &configuration);
    load_result_set(&path, configuration)
}

/// Load a result set from an explicit path
pub fn load_result_set(path: &Path, configuration: Configuration) -> Result<ResultSet, LoadError> {
    debug!("Loading result set {} from {}", configuration, path.display());

    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    parse_result_set(BufReader::new(file), path, configuration)
}

/// Parse result-set CSV from any reader.
///
/// `source` is only used in error messages. The whole set is rejected on
/// the first bad row; nothing is partially repaired.
pub fn parse_result_set<R: Read>(
    reader: R,
    source: &Path,
    configuration: Configuration,
) -> Result<ResultSet, LoadError> {
    let malformed = |reason: String| LoadError::MalformedInput {
        path: source.to_path_buf(),
        reason,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| malformed(format!("cannot read header row: {}", e)))?
        .clone();

    let missing: Vec<&str> = [STEP_COLUMN, LATENCY_COLUMN]
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if !missing.is_empty() {
        return Err(malformed(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    let mut aggregate_rows = 0usize;

    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let row_number = index + 1;
        let raw = row.map_err(|e| malformed(format!("row {}: {}", row_number, e)))?;

        if is_complete_workflow(&raw.step) {
            aggregate_rows += 1;
            continue;
        }

        let latency_ms = parse_latency(&raw.latency_ms)
            .map_err(|reason| malformed(format!("row {}: {}", row_number, reason)))?;

        let step = WorkflowStep::from_name(&raw.step).ok_or_else(|| {
            malformed(format!(
                "row {}: unrecognized step name '{}'",
                row_number, raw.step
            ))
        })?;

        records.push(BenchmarkRecord::new(step, latency_ms));
    }

    debug!(
        "Loaded {} records ({} aggregate rows dropped) for {}",
        records.len(),
        aggregate_rows,
        configuration
    );

    Ok(ResultSet::new(configuration, records))
}

/// Parse a latency cell into a finite, non-negative number of milliseconds
fn parse_latency(value: &str) -> Result<f64, String> {
    let latency: f64 = value
        .parse()
        .map_err(|_| format!("latency must be a number, got '{}'", value))?;

    if !latency.is_finite() || latency < 0.0 {
        return Err(format!(
            "latency must be a non-negative number, got {}",
            latency
        ));
    }

    Ok(latency)
}
