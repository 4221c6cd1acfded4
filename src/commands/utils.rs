use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a comparison report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid comparison report");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Requests per run: {}", report.request_count);
    println!("  Configurations: {}", report.entries.len());
    println!("  Skipped: {}", report.skipped.len());

    if report.version != SCHEMA_VERSION {
        println!(
            "  Warning: schema version {} differs from current {}",
            report.version, SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Layer Bench Comparison Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  request_count: number        - Requests per benchmark run, shared by all entries");
        println!("  generated_at: string         - RFC 3339 timestamp");
        println!("  entries: array               - One per configuration, ascending by L1 nodes");
        println!("    label: string              - \"L1-L2\" configuration label");
        println!("    request_count: number      - Requests per benchmark run");
        println!("    l1_node_count: number      - Layer 1 nodes");
        println!("    l2_node_count: number      - Layer 2 nodes");
        println!("    fault_tolerance: number    - floor((l1 - 1) / 3)");
        println!("    l1_latency_ms: number?     - Mean commit latency (null if undefined)");
        println!("    l2_latency_ms: number?     - Mean of L2 per-step means (null if undefined)");
        println!("    total_latency_ms: number?  - L1 + L2");
        println!("    l1_percentage: number?     - L1 share of the total");
        println!("    per_step_latency_ms: array - {{step, latency_ms}}, missing steps are 0");
        println!("    stacked_total_ms: number   - Sum of per-step latencies");
        println!("    commit_share: number?      - Commit share of the stacked total");
        println!("  skipped: array               - Configurations that could not be loaded");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Layer Bench v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Latency aggregation and L1/L2 layer attribution for BFT workflow benchmarks.");
}
