//! Aggregation of benchmark result sets into layer and step statistics.
//!
//! This module transforms loaded result sets into:
//! - Layer attribution (L1 commit vs. L2 everything else)
//! - Per-step means, pivots and box-plot distributions
//! - Multi-configuration comparisons with fault-tolerance metadata

pub mod comparison;
pub mod layers;
pub mod metrics;

// Re-export main types and functions
pub use comparison::{
    compare_configurations, compare_configurations_with, Comparison, ConfigurationSummary,
    SkippedConfiguration,
};
pub use layers::{classify_layer, is_complete_workflow};
pub use metrics::{
    average_latency, fault_tolerance, layer_latencies, per_step_latencies, step_distributions,
    step_means, LayerLatencies, StepDistribution, StepLatencies, StepLatency,
};
