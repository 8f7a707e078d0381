//! End-to-end runs of the analysis on files, through the library and the binary.

use std::fs;
use std::process::Command;

use roadnet::{analyse, run};
use roadnet_core::{AnalysisConfig, ReportFormat};

const NETWORK: &str = "A\tD\nA\tB\t4\t1\nB\tC\t3\t2\nA\tC\t10\t3\nC\tD\t2\t4\n";

const EXPECTED_REPORT: &str = "\
Fastest Route from A to D (9 KM):
A\tB\t4\t1
B\tC\t3\t2
C\tD\t2\t4
Roads of Barely Connected Map is:
C\tD\t2\t4
B\tC\t3\t2
A\tB\t4\t1
Fastest Route from A to D on Barely Connected Map (9 KM):
A\tB\t4\t1
B\tC\t3\t2
C\tD\t2\t4
Analysis:
Ratio of Construction Material Usage Between Barely Connected and Original Map: 0.47
Ratio of Fastest Route Between Barely Connected and Original Map: 1.00";

fn write_network(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("network.tsv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn report_is_written_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AnalysisConfig::new(write_network(&dir, NETWORK));
    let output = dir.path().join("report.txt");
    config.output = Some(output.clone());

    run(&config).unwrap();
    assert_eq!(fs::read_to_string(output).unwrap(), EXPECTED_REPORT);
}

#[test]
fn start_and_finish_can_be_overridden() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AnalysisConfig::new(write_network(&dir, NETWORK));
    config.start = Some("D".to_owned());
    config.finish = Some("B".to_owned());

    let report = analyse(&config).unwrap();
    assert!(report.starts_with("Fastest Route from D to B (5 KM):\nC\tD\t2\t4\nB\tC\t3\t2\n"));
}

#[test]
fn json_report_contains_ratios() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AnalysisConfig::new(write_network(&dir, NETWORK));
    config.format = ReportFormat::Json;

    let json: serde_json::Value = serde_json::from_str(&analyse(&config).unwrap()).unwrap();
    assert_eq!(json["fastest_route"]["length"], 9);
    assert_eq!(json["route_ratio"], 1.0);
    assert_eq!(json["barely_connected_map"].as_array().unwrap().len(), 3);
}

#[test]
fn negative_distance_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalysisConfig::new(write_network(&dir, "A\tB\nA\tB\t-1\t1\n"));

    let err = analyse(&config).unwrap_err();
    assert!(format!("{err:#}").contains("negative distance"), "{err:#}");
}

#[test]
fn binary_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_network(&dir, NETWORK);
    let output = dir.path().join("out.txt");

    let status = Command::new(env!("CARGO_BIN_EXE_roadnet"))
        .arg(&input)
        .arg(&output)
        .env("RUST_LOG", "warn")
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(output).unwrap(), EXPECTED_REPORT);
}

#[test]
fn binary_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_roadnet"))
        .arg(dir.path().join("missing.tsv"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input file not found"));
}
