use layer_bench::aggregator::compare_configurations_with;
use layer_bench::output::{
    layer_table, read_report, render_latex_table, step_table, write_csv_table,
    write_latex_table, write_report, ComparisonReport,
};
use layer_bench::parser::{BenchmarkRecord, Configuration, ResultSet, WorkflowStep};
use layer_bench::utils::config::SCHEMA_VERSION;
use pretty_assertions::assert_eq;
use std::fs;

fn sample_report() -> ComparisonReport {
    let configs = [Configuration::new(100, 7, 1), Configuration::new(100, 4, 1)];
    let comparison = compare_configurations_with(&configs, |c| {
        let mut records = vec![
            BenchmarkRecord::new(WorkflowStep::CommitSession, 200.0),
            BenchmarkRecord::new(WorkflowStep::ScanPackage, 40.0),
            BenchmarkRecord::new(WorkflowStep::LabelPackage, 60.0),
        ];
        if c.l1_node_count == 7 {
            records.retain(|r| r.step != WorkflowStep::CommitSession);
        }
        Ok(ResultSet::new(c, records))
    })
    .unwrap();

    ComparisonReport::new(100, comparison)
}

#[test]
fn test_report_round_trip() {
    let report = sample_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/comparison.json");

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.entries.len(), 2);
    assert_eq!(loaded.entries[0].label, "4-1");
    assert_eq!(loaded.entries[0].l1_latency_ms, Some(200.0));
    assert_eq!(loaded.entries[1].l1_latency_ms, None);
    assert_eq!(loaded.skipped, report.skipped);
}

#[test]
fn test_report_json_shape() {
    let report = sample_report();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["version"], SCHEMA_VERSION);
    assert_eq!(value["request_count"], 100);
    assert!(value["generated_at"].is_string());

    let first = &value["entries"][0];
    assert_eq!(first["l1_node_count"], 4);
    assert_eq!(first["fault_tolerance"], 1);
    assert_eq!(first["l1_latency_ms"], 200.0);
    assert_eq!(first["l2_latency_ms"], 50.0);
    assert_eq!(first["per_step_latency_ms"][0]["step"], "Create Package");
    assert_eq!(first["per_step_latency_ms"][0]["latency_ms"], 0.0);

    // Undefined averages are explicit nulls, never zero
    let second = &value["entries"][1];
    assert!(second["l1_latency_ms"].is_null());
    assert!(second["total_latency_ms"].is_null());
}

#[test]
fn test_layer_csv() {
    let report = sample_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layers.csv");

    write_csv_table(&layer_table(&report.entries), &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "Configuration,L1 Nodes,L2 Nodes,Fault Tolerance (f),L2 Latency (ms),L1 Latency (ms),Total Latency (ms),L1 Percentage (%)"
    );
    assert_eq!(lines[1], "4-1,4,1,1,50.00,200.00,250.00,80.00");
    assert_eq!(lines[2], "7-1,7,1,2,50.00,,,");
}

#[test]
fn test_step_csv() {
    let report = sample_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("steps.csv");

    write_csv_table(&step_table(&report.entries), &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert!(lines[0].contains("Commit Session (ms),Total Latency (ms),L1 Commit (%)"));
    assert_eq!(
        lines[1],
        "4-1,4,1,1,0.00,0.00,40.00,0.00,0.00,60.00,200.00,300.00,66.67"
    );
    assert_eq!(
        lines[2],
        "7-1,7,1,2,0.00,0.00,40.00,0.00,0.00,60.00,0.00,100.00,0.00"
    );
}

#[test]
fn test_latex_table() {
    let report = sample_report();
    let latex = render_latex_table(&step_table(&report.entries));

    assert!(latex.starts_with("\\begin{tabular}{lrrrrrrrrrrrr}"));
    assert!(latex.contains("L1 Commit (\\%)"));
    assert!(latex.contains("4-1 & 4 & 1 & 1 & 0.0 & 0.0 & 40.0 & 0.0 & 0.0 & 60.0 & 200.0 & 300.0 & 66.7 \\\\"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.tex");
    write_latex_table(&step_table(&report.entries), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), latex);
}

#[test]
fn test_latex_undefined_cells() {
    let report = sample_report();
    let latex = render_latex_table(&layer_table(&report.entries));
    assert!(latex.contains("7-1 & 7 & 1 & 2 & 50.0 & -- & -- & -- \\\\"));
}
