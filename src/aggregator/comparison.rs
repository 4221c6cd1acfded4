//! Side-by-side comparison of node configurations.
//!
//! Each configuration is loaded independently. Configurations that cannot
//! be loaded are skipped with a warning; the comparison only fails when
//! nothing usable is left.

use super::metrics::{fault_tolerance, layer_latencies, per_step_latencies, LayerLatencies, StepLatencies};
use crate::parser::benchmark_csv::load;
use crate::parser::schema::{Configuration, ResultSet, WorkflowStep};
use crate::utils::error::{AggregateError, LoadError};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Aggregated view of one configuration, ready for charts and tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationSummary {
    /// "L1-L2" label, e.g. "4-1"
    pub label: String,

    pub request_count: u32,
    pub l1_node_count: u32,
    pub l2_node_count: u32,

    /// Byzantine faults tolerated by the L1 nodes
    pub fault_tolerance: i64,

    pub l1_latency_ms: Option<f64>,
    pub l2_latency_ms: Option<f64>,
    pub total_latency_ms: Option<f64>,
    pub l1_percentage: Option<f64>,

    /// Zero-filled per-step means in workflow order
    pub per_step_latency_ms: StepLatencies,

    /// Sum of the per-step means (height of a stacked bar)
    pub stacked_total_ms: f64,

    /// Commit share of the stacked total, as a percentage
    pub commit_share: Option<f64>,
}

impl ConfigurationSummary {
    /// Summarize a loaded result set
    pub fn from_result_set(result_set: &ResultSet) -> Self {
        let config = result_set.configuration();
        let layers = layer_latencies(result_set);
        let per_step = per_step_latencies(result_set, &WorkflowStep::ALL);

        Self {
            label: config.label(),
            request_count: config.request_count,
            l1_node_count: config.l1_node_count,
            l2_node_count: config.l2_node_count,
            fault_tolerance: fault_tolerance(config.l1_node_count),
            l1_latency_ms: layers.l1_ms,
            l2_latency_ms: layers.l2_ms,
            total_latency_ms: layers.total(),
            l1_percentage: layers.l1_percentage(),
            stacked_total_ms: per_step.stacked_total(),
            commit_share: per_step.commit_share(),
            per_step_latency_ms: per_step,
        }
    }

    pub fn layer_latencies(&self) -> LayerLatencies {
        LayerLatencies {
            l1_ms: self.l1_latency_ms,
            l2_ms: self.l2_latency_ms,
        }
    }
}

/// A requested configuration that could not be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedConfiguration {
    pub l1_node_count: u32,
    pub l2_node_count: u32,

    /// True when the result file simply does not exist
    pub not_found: bool,

    pub reason: String,
}

/// Outcome of a comparison: usable entries plus what was skipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Sorted ascending by L1 node count, then L2 node count
    pub entries: Vec<ConfigurationSummary>,

    pub skipped: Vec<SkippedConfiguration>,
}

/// Compare configurations whose result files live in `data_dir`
///
/// **Public** - main entry point for multi-configuration analysis
///
/// # Errors
/// * `AggregateError::EmptyComparison` - no configuration could be loaded
pub fn compare_configurations(
    data_dir: &Path,
    configs: &[Configuration],
) -> Result<Comparison, AggregateError> {
    info!(
        "Comparing {} configurations from {}",
        configs.len(),
        data_dir.display()
    );
    compare_configurations_with(configs, |config| load(data_dir, config))
}

/// Compare configurations using a custom result-set loader
///
/// Duplicate `(l1, l2)` keys are only loaded once; the first one wins.
pub fn compare_configurations_with<F>(
    configs: &[Configuration],
    mut loader: F,
) -> Result<Comparison, AggregateError>
where
    F: FnMut(Configuration) -> Result<ResultSet, LoadError>,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for config in configs {
        if !seen.insert(config.key()) {
            warn!("Ignoring duplicate configuration {}", config.label());
            continue;
        }

        match loader(*config) {
            Ok(result_set) => {
                let summary = ConfigurationSummary::from_result_set(&result_set);
                let layers = summary.layer_latencies();

                if layers.l1_ms.is_none() || layers.l2_ms.is_none() {
                    warn!(
                        "Configuration {} has an undefined layer average ({})",
                        summary.label,
                        layers.summary()
                    );
                }

                debug!("Configuration {}: {}", summary.label, layers.summary());
                entries.push(summary);
            }
            Err(err) => {
                warn!("Skipping configuration {}: {}", config.label(), err);
                skipped.push(SkippedConfiguration {
                    l1_node_count: config.l1_node_count,
                    l2_node_count: config.l2_node_count,
                    not_found: err.is_not_found(),
                    reason: err.to_string(),
                });
            }
        }
    }

    if entries.is_empty() {
        return Err(AggregateError::EmptyComparison);
    }

    entries.sort_by_key(|e| (e.l1_node_count, e.l2_node_count));

    info!(
        "Compared {} configurations ({} skipped)",
        entries.len(),
        skipped.len()
    );

    Ok(Comparison { entries, skipped })
}
