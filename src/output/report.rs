//! Report schema definitions.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    fault_tolerance, layer_latencies, step_distributions, Comparison, ConfigurationSummary,
    LayerLatencies, SkippedConfiguration, StepDistribution,
};
use crate::parser::schema::{Configuration, ResultSet};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level comparison report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Requests per benchmark run, shared by every entry
    pub request_count: u32,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// One entry per usable configuration, ascending by L1 node count
    pub entries: Vec<ConfigurationSummary>,

    /// Requested configurations that could not be loaded
    #[serde(default)]
    pub skipped: Vec<SkippedConfiguration>,
}

impl ComparisonReport {
    pub fn new(request_count: u32, comparison: Comparison) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            request_count,
            generated_at: Utc::now().to_rfc3339(),
            entries: comparison.entries,
            skipped: comparison.skipped,
        }
    }
}

/// Single result-set inspection written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    pub version: String,
    pub generated_at: String,
    pub configuration: Configuration,

    /// Records left after dropping the aggregate rows
    pub record_count: usize,

    pub fault_tolerance: i64,
    pub layers: LayerLatencies,

    /// Box-plot statistics per step, in workflow order
    pub steps: Vec<StepDistribution>,
}

impl InspectionReport {
    pub fn from_result_set(result_set: &ResultSet) -> Self {
        let configuration = *result_set.configuration();

        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            configuration,
            record_count: result_set.len(),
            fault_tolerance: fault_tolerance(configuration.l1_node_count),
            layers: layer_latencies(result_set),
            steps: step_distributions(result_set),
        }
    }
}
