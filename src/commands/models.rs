use crate::parser::schema::Configuration;
use crate::utils::config::{DEFAULT_BFT_CONFIGURATIONS, DEFAULT_REQUEST_COUNT};
use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Directory holding the benchmark result files
    pub data_dir: PathBuf,

    /// Request count shared by every compared configuration
    pub request_count: u32,

    /// L1 node counts to compare
    pub l1_node_counts: Vec<u32>,

    /// L2 node count shared by every compared configuration
    pub l2_node_count: u32,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the layer latency CSV (optional)
    pub layer_csv: Option<PathBuf>,

    /// Output path for the per-step CSV (optional)
    pub steps_csv: Option<PathBuf>,

    /// Output path for the per-step LaTeX table (optional)
    pub latex: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl CompareArgs {
    /// Configurations to load, in the requested order
    pub fn configurations(&self) -> Vec<Configuration> {
        self.l1_node_counts
            .iter()
            .map(|l1| Configuration::new(self.request_count, *l1, self.l2_node_count))
            .collect()
    }
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            request_count: DEFAULT_REQUEST_COUNT,
            l1_node_counts: DEFAULT_BFT_CONFIGURATIONS.to_vec(),
            l2_node_count: 1,
            output_json: PathBuf::from("comparison.json"),
            layer_csv: None,
            steps_csv: None,
            latex: None,
            print_summary: false,
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Directory holding the benchmark result files
    pub data_dir: PathBuf,

    /// Result set to inspect
    pub configuration: Configuration,

    /// Output path for the JSON inspection report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            configuration: Configuration::new(DEFAULT_REQUEST_COUNT, 4, 1),
            output_json: None,
        }
    }
}
