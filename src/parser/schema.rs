//! Data model for benchmark result sets.
//!
//! A result set is the ordered list of latency records produced by one
//! benchmark run under a fixed node configuration. Result sets are
//! immutable once loaded; aggregation only derives new values from them.

use crate::utils::config::{RESULT_FILE_EXTENSION, RESULT_FILE_PREFIX};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Layer a workflow step is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Consensus / commit layer
    L1,
    /// Everything before the commit
    L2,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::L1 => write!(f, "L1"),
            Layer::L2 => write!(f, "L2"),
        }
    }
}

/// A leaf step of the benchmarked workflow.
///
/// Variants are declared in workflow order, so the derived `Ord` sorts
/// steps the way the workflow executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkflowStep {
    #[serde(rename = "Create Package")]
    CreatePackage,
    #[serde(rename = "Start Session")]
    StartSession,
    #[serde(rename = "Scan Package", alias = "Scan")]
    ScanPackage,
    #[serde(rename = "Validate Package", alias = "Validate")]
    ValidatePackage,
    #[serde(rename = "Quality Check", alias = "QC")]
    QualityCheck,
    #[serde(rename = "Label Package", alias = "Label")]
    LabelPackage,
    #[serde(rename = "Commit Session", alias = "Commit L1")]
    CommitSession,
}

impl WorkflowStep {
    /// Every step in workflow order
    pub const ALL: [WorkflowStep; 7] = [
        WorkflowStep::CreatePackage,
        WorkflowStep::StartSession,
        WorkflowStep::ScanPackage,
        WorkflowStep::ValidatePackage,
        WorkflowStep::QualityCheck,
        WorkflowStep::LabelPackage,
        WorkflowStep::CommitSession,
    ];

    /// Canonical name as written by the benchmark harness
    pub fn name(self) -> &'static str {
        match self {
            WorkflowStep::CreatePackage => "Create Package",
            WorkflowStep::StartSession => "Start Session",
            WorkflowStep::ScanPackage => "Scan Package",
            WorkflowStep::ValidatePackage => "Validate Package",
            WorkflowStep::QualityCheck => "Quality Check",
            WorkflowStep::LabelPackage => "Label Package",
            WorkflowStep::CommitSession => "Commit Session",
        }
    }

    /// Short labels used by older result files and chart legends
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            WorkflowStep::CreatePackage | WorkflowStep::StartSession => &[],
            WorkflowStep::ScanPackage => &["Scan"],
            WorkflowStep::ValidatePackage => &["Validate"],
            WorkflowStep::QualityCheck => &["QC"],
            WorkflowStep::LabelPackage => &["Label"],
            WorkflowStep::CommitSession => &["Commit L1"],
        }
    }

    /// Resolve a step by canonical name or alias.
    ///
    /// Returns `None` for unknown names and for the aggregate
    /// "Complete Workflow" row, which is not a leaf step.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|step| step.name() == name || step.aliases().contains(&name))
    }

    /// Layer this step is attributed to. Only the commit is L1.
    pub fn layer(self) -> Layer {
        match self {
            WorkflowStep::CommitSession => Layer::L1,
            _ => Layer::L2,
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One measured operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Workflow stage that was measured
    pub step: WorkflowStep,

    /// Measured duration in milliseconds (non-negative)
    pub latency_ms: f64,
}

impl BenchmarkRecord {
    pub fn new(step: WorkflowStep, latency_ms: f64) -> Self {
        Self { step, latency_ms }
    }
}

/// Identity of a benchmark result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    /// Number of workflow iterations (N)
    pub request_count: u32,

    /// Number of Layer 1 (consensus) nodes
    pub l1_node_count: u32,

    /// Number of Layer 2 nodes
    pub l2_node_count: u32,
}

impl Configuration {
    pub fn new(request_count: u32, l1_node_count: u32, l2_node_count: u32) -> Self {
        Self {
            request_count,
            l1_node_count,
            l2_node_count,
        }
    }

    /// Comparison key. `request_count` is fixed across a comparison.
    pub fn key(&self) -> (u32, u32) {
        (self.l1_node_count, self.l2_node_count)
    }

    /// Short "L1-L2" label, e.g. "4-1"
    pub fn label(&self) -> String {
        format!("{}-{}", self.l1_node_count, self.l2_node_count)
    }

    /// File name the benchmark harness writes for this configuration
    pub fn file_name(&self) -> String {
        format!(
            "{}_n_{}_l1_{}_l2_{}.{}",
            RESULT_FILE_PREFIX,
            self.request_count,
            self.l1_node_count,
            self.l2_node_count,
            RESULT_FILE_EXTENSION
        )
    }

    /// Parse a configuration back out of a harness file name
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(&format!(".{}", RESULT_FILE_EXTENSION))?;
        let parts: Vec<&str> = stem.split('_').collect();

        match parts.as_slice() {
            [prefix, "n", n, "l1", l1, "l2", l2] if *prefix == RESULT_FILE_PREFIX => Some(Self {
                request_count: n.parse().ok()?,
                l1_node_count: l1.parse().ok()?,
                l2_node_count: l2.parse().ok()?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} l1={} l2={}",
            self.request_count, self.l1_node_count, self.l2_node_count
        )
    }
}

/// Immutable benchmark result set with the aggregate rows already removed
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    configuration: Configuration,
    records: Vec<BenchmarkRecord>,
}

impl ResultSet {
    pub fn new(configuration: Configuration, records: Vec<BenchmarkRecord>) -> Self {
        Self {
            configuration,
            records,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct steps present, in workflow order
    pub fn steps(&self) -> BTreeSet<WorkflowStep> {
        self.records.iter().map(|r| r.step).collect()
    }
}
