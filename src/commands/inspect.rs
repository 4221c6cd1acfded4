//! Inspect command implementation.
//!
//! Loads a single result set and reports its per-step distribution,
//! layer latencies and fault tolerance.

use super::models::InspectArgs;
use crate::output::{render_inspection_summary, write_inspection, InspectionReport};
use crate::parser::load;
use anyhow::{Context, Result};
use log::info;

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: InspectArgs) -> Result<InspectionReport> {
    info!("Inspecting result set {}", args.configuration);

    let result_set = load(&args.data_dir, args.configuration).with_context(|| {
        format!(
            "Failed to load result set {}",
            args.configuration.file_name()
        )
    })?;

    let report = InspectionReport::from_result_set(&result_set);

    println!("\n{}\n", render_inspection_summary(&report));

    if let Some(path) = &args.output_json {
        write_inspection(&report, path).context("Failed to write inspection report")?;
        info!("✓ Inspection written to: {}", path.display());
    }

    Ok(report)
}

/// Validate inspect arguments
pub fn validate_inspect_args(args: &InspectArgs) -> Result<()> {
    let config = &args.configuration;

    if config.request_count == 0 {
        anyhow::bail!("Request count must be greater than 0");
    }

    if config.l1_node_count == 0 || config.l2_node_count == 0 {
        anyhow::bail!("Node counts must be greater than 0");
    }

    Ok(())
}
