//! Latency statistics over a benchmark result set.
//!
//! Two policies apply to steps that have no samples:
//! - statistics (means, layer latencies) exclude them, and an empty
//!   selection is reported as an undefined average rather than zero
//! - the per-step pivot used for stacked totals fills them with `0`

use crate::parser::schema::{BenchmarkRecord, Layer, ResultSet, WorkflowStep};
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean latency of the records matching `predicate`
///
/// **Public** - building block for every other statistic
///
/// # Errors
/// * `AggregateError::UndefinedAverage` - no record matched
pub fn average_latency<P>(records: &[BenchmarkRecord], predicate: P) -> Result<f64, AggregateError>
where
    P: Fn(&BenchmarkRecord) -> bool,
{
    let (sum, count) = records
        .iter()
        .filter(|record| predicate(*record))
        .fold((0.0, 0usize), |(sum, count), record| {
            (sum + record.latency_ms, count + 1)
        });

    if count == 0 {
        return Err(AggregateError::UndefinedAverage);
    }

    Ok(sum / count as f64)
}

/// Mean latency per step, for the steps present in the result set only.
///
/// Ordered by workflow order.
pub fn step_means(result_set: &ResultSet) -> BTreeMap<WorkflowStep, f64> {
    let mut totals: BTreeMap<WorkflowStep, (f64, usize)> = BTreeMap::new();

    for record in result_set.records() {
        let entry = totals.entry(record.step).or_insert((0.0, 0));
        entry.0 += record.latency_ms;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(step, (sum, count))| (step, sum / count as f64))
        .collect()
}

/// Average latency attributed to each layer.
///
/// `None` means the average is undefined (no contributing samples).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerLatencies {
    /// Mean commit latency
    pub l1_ms: Option<f64>,

    /// Mean of the per-step means of every L2 step
    pub l2_ms: Option<f64>,
}

impl LayerLatencies {
    pub fn get(&self, layer: Layer) -> Option<f64> {
        match layer {
            Layer::L1 => self.l1_ms,
            Layer::L2 => self.l2_ms,
        }
    }

    /// L1 + L2, defined only when both layers are
    pub fn total(&self) -> Option<f64> {
        Some(self.l1_ms? + self.l2_ms?)
    }

    /// Share of the total spent in L1, as a percentage
    pub fn l1_percentage(&self) -> Option<f64> {
        let total = self.total()?;
        if total > 0.0 {
            Some(self.l1_ms? / total * 100.0)
        } else {
            None
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "L1: {} | L2: {} | Total: {}",
            format_ms(self.l1_ms),
            format_ms(self.l2_ms),
            format_ms(self.total())
        )
    }
}

fn format_ms(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1} ms", v),
        None => "n/a".to_string(),
    }
}

/// Compute L1 and L2 latencies for a result set
///
/// **Public** - main entry point for layer attribution
///
/// L1 is the plain mean over all commit records. L2 gives every L2 step
/// equal weight: each step's mean is computed first and those means are
/// averaged, so a step sampled more often does not dominate.
pub fn layer_latencies(result_set: &ResultSet) -> LayerLatencies {
    let l1_ms = average_latency(result_set.records(), |r| r.step.layer() == Layer::L1).ok();

    let l2_means: Vec<f64> = step_means(result_set)
        .into_iter()
        .filter(|(step, _)| step.layer() == Layer::L2)
        .map(|(_, mean)| mean)
        .collect();

    let l2_ms = if l2_means.is_empty() {
        None
    } else {
        Some(l2_means.iter().sum::<f64>() / l2_means.len() as f64)
    };

    debug!(
        "Layer latencies for {}: {} L2 steps contribute",
        result_set.configuration(),
        l2_means.len()
    );

    LayerLatencies { l1_ms, l2_ms }
}

/// One cell of the per-step pivot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepLatency {
    pub step: WorkflowStep,
    pub latency_ms: f64,
}

/// Per-step mean latencies in a caller-chosen step order.
///
/// Steps without samples hold `0`, so the values can be stacked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLatencies(Vec<StepLatency>);

impl StepLatencies {
    pub fn iter(&self) -> impl Iterator<Item = &StepLatency> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pivot value for a step, `None` if the step is not part of the order
    pub fn get(&self, step: WorkflowStep) -> Option<f64> {
        self.0
            .iter()
            .find(|cell| cell.step == step)
            .map(|cell| cell.latency_ms)
    }

    /// Height of the stacked bar: sum of all pivot values
    pub fn stacked_total(&self) -> f64 {
        self.0.iter().map(|cell| cell.latency_ms).sum()
    }

    /// Commit latency as a percentage of the stacked total
    pub fn commit_share(&self) -> Option<f64> {
        let total = self.stacked_total();
        if total > 0.0 {
            Some(self.get(WorkflowStep::CommitSession)? / total * 100.0)
        } else {
            None
        }
    }
}

/// Build the zero-filled per-step pivot in the given order
///
/// **Public** - feeds stacked totals and per-step tables
///
/// # Arguments
/// * `result_set` - Result set to summarize
/// * `order` - Step order of the pivot, usually `WorkflowStep::ALL`
pub fn per_step_latencies(result_set: &ResultSet, order: &[WorkflowStep]) -> StepLatencies {
    let means = step_means(result_set);

    StepLatencies(
        order
            .iter()
            .map(|step| StepLatency {
                step: *step,
                latency_ms: means.get(step).copied().unwrap_or(0.0),
            })
            .collect(),
    )
}

/// Box-plot statistics of one step's latency samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepDistribution {
    pub step: WorkflowStep,
    pub count: usize,
    pub min_ms: f64,
    pub q1_ms: f64,
    pub median_ms: f64,
    pub q3_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
}

/// Latency distribution of every step present, in workflow order
pub fn step_distributions(result_set: &ResultSet) -> Vec<StepDistribution> {
    let mut samples: BTreeMap<WorkflowStep, Vec<f64>> = BTreeMap::new();
    for record in result_set.records() {
        samples.entry(record.step).or_default().push(record.latency_ms);
    }

    samples
        .into_iter()
        .map(|(step, mut values)| {
            values.sort_by(|a, b| a.total_cmp(b));
            let count = values.len();

            StepDistribution {
                step,
                count,
                min_ms: values[0],
                q1_ms: percentile(&values, 0.25),
                median_ms: percentile(&values, 0.5),
                q3_ms: percentile(&values, 0.75),
                max_ms: values[count - 1],
                mean_ms: values.iter().sum::<f64>() / count as f64,
            }
        })
        .collect()
}

/// Linear-interpolation percentile of sorted, non-empty samples
///
/// **Private** - `fraction` is in `[0, 1]`
fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * fraction;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

/// Number of Byzantine faults tolerated by `l1_node_count` nodes.
///
/// `floor((n - 1) / 3)`, computed without checking the 3f+1 pattern;
/// `0` nodes yields `-1`.
pub fn fault_tolerance(l1_node_count: u32) -> i64 {
    (i64::from(l1_node_count) - 1).div_euclid(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Configuration;

    fn result_set(records: &[(WorkflowStep, f64)]) -> ResultSet {
        ResultSet::new(
            Configuration::new(100, 4, 1),
            records
                .iter()
                .map(|(step, latency)| BenchmarkRecord::new(*step, *latency))
                .collect(),
        )
    }

    #[test]
    fn test_average_latency() {
        let set = result_set(&[
            (WorkflowStep::ScanPackage, 50.0),
            (WorkflowStep::ScanPackage, 150.0),
            (WorkflowStep::LabelPackage, 10.0),
        ]);

        let avg = average_latency(set.records(), |r| r.step == WorkflowStep::ScanPackage);
        assert_eq!(avg, Ok(100.0));
    }

    #[test]
    fn test_average_latency_no_match_is_undefined() {
        let set = result_set(&[(WorkflowStep::ScanPackage, 50.0)]);

        let avg = average_latency(set.records(), |r| r.step == WorkflowStep::CommitSession);
        assert_eq!(avg, Err(AggregateError::UndefinedAverage));
        assert_eq!(average_latency(&[], |_| true), Err(AggregateError::UndefinedAverage));
    }

    #[test]
    fn test_layer_latencies_weights_steps_equally() {
        let set = result_set(&[
            (WorkflowStep::CommitSession, 100.0),
            (WorkflowStep::ScanPackage, 50.0),
            (WorkflowStep::ScanPackage, 150.0),
            (WorkflowStep::ValidatePackage, 200.0),
        ]);

        let layers = layer_latencies(&set);
        assert_eq!(layers.l1_ms, Some(100.0));
        assert_eq!(layers.l2_ms, Some(150.0));
        assert_eq!(layers.total(), Some(250.0));
        assert_eq!(layers.l1_percentage(), Some(40.0));
    }

    #[test]
    fn test_layer_latencies_missing_layer_is_undefined() {
        let set = result_set(&[(WorkflowStep::ScanPackage, 20.0)]);
        let layers = layer_latencies(&set);

        assert_eq!(layers.l1_ms, None);
        assert_eq!(layers.l2_ms, Some(20.0));
        assert_eq!(layers.total(), None);
        assert_eq!(layers.l1_percentage(), None);
        assert!(layers.summary().contains("L1: n/a"));
    }

    #[test]
    fn test_per_step_latencies_zero_fills() {
        let set = result_set(&[
            (WorkflowStep::CommitSession, 300.0),
            (WorkflowStep::ScanPackage, 100.0),
        ]);

        let pivot = per_step_latencies(&set, &WorkflowStep::ALL);
        assert_eq!(pivot.len(), WorkflowStep::ALL.len());
        assert_eq!(pivot.get(WorkflowStep::CreatePackage), Some(0.0));
        assert_eq!(pivot.get(WorkflowStep::ScanPackage), Some(100.0));
        assert_eq!(pivot.stacked_total(), 400.0);
        assert_eq!(pivot.commit_share(), Some(75.0));

        let steps: Vec<WorkflowStep> = pivot.iter().map(|c| c.step).collect();
        assert_eq!(steps, WorkflowStep::ALL.to_vec());
    }

    #[test]
    fn test_per_step_latencies_custom_order() {
        let set = result_set(&[(WorkflowStep::ScanPackage, 100.0)]);
        let order = [WorkflowStep::CommitSession, WorkflowStep::ScanPackage];

        let pivot = per_step_latencies(&set, &order);
        let steps: Vec<WorkflowStep> = pivot.iter().map(|c| c.step).collect();
        assert_eq!(steps, order.to_vec());
        assert_eq!(pivot.get(WorkflowStep::LabelPackage), None);
        assert_eq!(pivot.commit_share(), Some(0.0));
    }

    #[test]
    fn test_commit_share_of_empty_pivot_is_undefined() {
        let pivot = per_step_latencies(&result_set(&[]), &WorkflowStep::ALL);
        assert_eq!(pivot.stacked_total(), 0.0);
        assert_eq!(pivot.commit_share(), None);
    }

    #[test]
    fn test_step_distributions() {
        let set = result_set(&[
            (WorkflowStep::CommitSession, 40.0),
            (WorkflowStep::ScanPackage, 10.0),
            (WorkflowStep::ScanPackage, 20.0),
            (WorkflowStep::ScanPackage, 30.0),
            (WorkflowStep::ScanPackage, 40.0),
            (WorkflowStep::ScanPackage, 50.0),
        ]);

        let dists = step_distributions(&set);
        assert_eq!(dists.len(), 2);

        let scan = &dists[0];
        assert_eq!(scan.step, WorkflowStep::ScanPackage);
        assert_eq!(scan.count, 5);
        assert_eq!(scan.min_ms, 10.0);
        assert_eq!(scan.q1_ms, 20.0);
        assert_eq!(scan.median_ms, 30.0);
        assert_eq!(scan.q3_ms, 40.0);
        assert_eq!(scan.max_ms, 50.0);
        assert_eq!(scan.mean_ms, 30.0);

        let commit = &dists[1];
        assert_eq!(commit.count, 1);
        assert_eq!(commit.median_ms, 40.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 0.25), 1.75);
        assert_eq!(percentile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn test_fault_tolerance() {
        assert_eq!(fault_tolerance(4), 1);
        assert_eq!(fault_tolerance(7), 2);
        assert_eq!(fault_tolerance(10), 3);
        assert_eq!(fault_tolerance(13), 4);
        assert_eq!(fault_tolerance(16), 5);
        assert_eq!(fault_tolerance(5), 1);
        assert_eq!(fault_tolerance(1), 0);
        assert_eq!(fault_tolerance(0), -1);
    }
}
