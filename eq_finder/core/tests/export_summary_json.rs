//! Exporting a session summary to JSON

use eq_finder_core::*;
use std::fs;

#[test]
fn test_export_maxwell_summary() {
    let catalog = ConstantCatalog::new(vec![
        Constant::new("p", 8.854e-12, [-3, -1, 4, 2]),
        Constant::new("u", 1.2566e-6, [1, 1, -2, -2]),
        Constant::new("c", 2.998e8, [1, 0, -1, 0]),
    ])
    .unwrap();

    let config = SearchConfig { max_exponent: 2, range: 1.01, workers: 4, ..Default::default() };
    let session = SearchSession::new(&catalog, config).unwrap();
    let (_, summary) = session.collect().unwrap();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("maxwell.summary.json");
    summary.to_json_file(&output_path).expect("Failed to write JSON");

    let json_content = fs::read_to_string(&output_path).expect("Failed to read JSON file");
    let parsed: serde_json::Value = serde_json::from_str(&json_content).expect("Failed to parse JSON");

    assert_eq!(parsed["hits"], 1);
    assert_eq!(parsed["num_equations"], 75);
    assert_eq!(parsed["mirror"], "canonical");
    assert_eq!(parsed["constants"], serde_json::json!(["p", "u", "c"]));
    assert_eq!(parsed["workers"].as_array().unwrap().len(), 4);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let catalog = ConstantCatalog::new(vec![Constant::new("k", 2.0, [0, 0, 0, 0])]).unwrap();
    let session = SearchSession::new(&catalog, SearchConfig { workers: 1, ..Default::default() }).unwrap();
    let (_, summary) = session.collect().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let err = summary
        .to_json_file(dir.path().join("no/such/dir/summary.json"))
        .unwrap_err();
    assert!(matches!(err, SearchError::Io(_)));
}
