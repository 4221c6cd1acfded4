//! Compare command implementation.
//!
//! The compare command:
//! 1. Checks every output path
//! 2. Loads the result set of every requested configuration
//! 3. Computes layer latencies, per-step pivots and fault tolerance
//! 4. Writes the JSON report and any requested tables

use super::models::CompareArgs;
use crate::aggregator::compare_configurations;
use crate::output::{
    layer_table, render_comparison_summary, step_table, validate_output_path, write_csv_table,
    write_latex_table, write_report, ComparisonReport,
};
use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * An output path is invalid or repeated (nothing is written)
/// * No configuration could be loaded (nothing is written)
/// * File write errors
pub fn execute_compare(args: CompareArgs) -> Result<ComparisonReport> {
    let start_time = Instant::now();

    // Step 1: Check every destination before loading or writing anything
    check_output_paths(&args)?;

    info!(
        "Comparing L1 configurations {:?} with {} L2 node(s), n={}",
        args.l1_node_counts, args.l2_node_count, args.request_count
    );

    // Step 2: Load and aggregate
    let comparison = compare_configurations(&args.data_dir, &args.configurations())
        .context("Failed to compare benchmark configurations")?;

    let summary = render_comparison_summary(&comparison);
    let report = ComparisonReport::new(args.request_count, comparison);

    // Step 3: Write outputs
    write_report(&report, &args.output_json).context("Failed to write comparison report")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if let Some(path) = &args.layer_csv {
        write_csv_table(&layer_table(&report.entries), path)
            .context("Failed to write layer latency CSV")?;
        info!("✓ Layer table written to: {}", path.display());
    }

    if let Some(path) = &args.steps_csv {
        write_csv_table(&step_table(&report.entries), path)
            .context("Failed to write per-step CSV")?;
        info!("✓ Step table written to: {}", path.display());
    }

    if let Some(path) = &args.latex {
        write_latex_table(&step_table(&report.entries), path)
            .context("Failed to write LaTeX table")?;
        info!("✓ LaTeX table written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}\n", summary);
    }

    info!(
        "Comparison completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Every output path of a compare run, JSON report first
fn output_paths(args: &CompareArgs) -> Vec<&Path> {
    let mut paths = vec![args.output_json.as_path()];
    paths.extend(
        [&args.layer_csv, &args.steps_csv, &args.latex]
            .into_iter()
            .flatten()
            .map(|p| p.as_path()),
    );
    paths
}

/// Reject invalid or repeated output paths
///
/// **Private** - runs before any file is written
fn check_output_paths(args: &CompareArgs) -> Result<()> {
    let mut seen = HashSet::new();

    for path in output_paths(args) {
        validate_output_path(path)
            .with_context(|| format!("Invalid output path {}", path.display()))?;

        if !seen.insert(path) {
            anyhow::bail!("Output path used more than once: {}", path.display());
        }
    }

    Ok(())
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.request_count == 0 {
        anyhow::bail!("Request count must be greater than 0");
    }

    if args.l2_node_count == 0 {
        anyhow::bail!("L2 node count must be greater than 0");
    }

    if args.l1_node_counts.is_empty() {
        anyhow::bail!("At least one L1 node count is required");
    }

    if args.l1_node_counts.contains(&0) {
        anyhow::bail!("L1 node counts must be greater than 0");
    }

    for l1 in &args.l1_node_counts {
        if (l1 - 1) % 3 != 0 {
            warn!("L1 node count {} does not follow the 3f+1 pattern", l1);
        }
    }

    Ok(())
}
