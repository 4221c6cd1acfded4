//! Human-readable terminal summaries.

use super::report::InspectionReport;
use crate::aggregator::Comparison;

fn opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "n/a".to_string(),
    }
}

/// Render a comparison as a fixed-width table
pub fn render_comparison_summary(comparison: &Comparison) -> String {
    let mut lines = Vec::new();

    lines.push("  BFT LATENCY ANALYSIS".to_string());
    lines.push(format!("  ┏{}┓", "━".repeat(79)));
    lines.push(format!(
        "  ┃ {:<8} {:>4} {:>10} {:>10} {:>10} {:>10} {:>8} {:>10} ┃",
        "Config", "f", "L2 (ms)", "L1 (ms)", "Total", "Stacked", "L1 %", "Commit %"
    ));
    lines.push(format!("  ┣{}┫", "━".repeat(79)));

    for entry in &comparison.entries {
        lines.push(format!(
            "  ┃ {:<8} {:>4} {:>10} {:>10} {:>10} {:>10.1} {:>8} {:>10} ┃",
            entry.label,
            entry.fault_tolerance,
            opt(entry.l2_latency_ms),
            opt(entry.l1_latency_ms),
            opt(entry.total_latency_ms),
            entry.stacked_total_ms,
            opt(entry.l1_percentage),
            opt(entry.commit_share),
        ));
    }

    lines.push(format!("  ┗{}┛", "━".repeat(79)));

    if !comparison.skipped.is_empty() {
        lines.push(String::new());
        lines.push("  Skipped configurations:".to_string());
        for skipped in &comparison.skipped {
            lines.push(format!(
                "    {}-{}: {}",
                skipped.l1_node_count, skipped.l2_node_count, skipped.reason
            ));
        }
    }

    lines.join("\n")
}

/// Render per-step box-plot statistics of a single result set
pub fn render_inspection_summary(report: &InspectionReport) -> String {
    let config = &report.configuration;
    let mut lines = Vec::new();

    lines.push(format!(
        "  RESULT SET n={} l1={} l2={} ({} records, f={})",
        config.request_count,
        config.l1_node_count,
        config.l2_node_count,
        report.record_count,
        report.fault_tolerance
    ));
    lines.push(format!("  {}", report.layers.summary()));
    lines.push(String::new());
    lines.push(format!(
        "  {:<18} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "Step", "Count", "Min", "Q1", "Median", "Q3", "Max", "Mean"
    ));
    lines.push(format!("  {}", "-".repeat(86)));

    for step in &report.steps {
        lines.push(format!(
            "  {:<18} {:>6} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1}",
            step.step.name(),
            step.count,
            step.min_ms,
            step.q1_ms,
            step.median_ms,
            step.q3_ms,
            step.max_ms,
            step.mean_ms
        ));
    }

    if report.steps.is_empty() {
        lines.push("  (no step records)".to_string());
    }

    lines.join("\n")
}
