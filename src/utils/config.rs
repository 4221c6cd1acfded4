//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Request count used by the standard benchmark sweep
pub const DEFAULT_REQUEST_COUNT: u32 = 100;

/// L1 node counts compared by default. Follows the BFT 3f+1 pattern.
pub const DEFAULT_BFT_CONFIGURATIONS: &[u32] = &[4, 7, 10, 13, 16];

// Column names written by the benchmark harness. Only these two are required.
pub const STEP_COLUMN: &str = "Step";
pub const LATENCY_COLUMN: &str = "Latency_ms";

/// Step names of the aggregate end-to-end row (dropped before aggregation)
pub const COMPLETE_WORKFLOW_STEPS: &[&str] = &["Complete Workflow", "Whole Workflow"];

// Result-set file name convention: benchmark_n_{requests}_l1_{l1}_l2_{l2}.csv
pub const RESULT_FILE_PREFIX: &str = "benchmark";
pub const RESULT_FILE_EXTENSION: &str = "csv";

/// Environment variable for the default data directory
pub const DATA_DIR_ENV: &str = "LAYER_BENCH_DATA_DIR";
