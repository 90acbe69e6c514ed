//! File boundary tests
//!
//! The contract: read one JSON document from a path, write one
//! pretty-printed document (two-space indent, trailing newline) to another.

use domain_pricing::{process_batch, PricingConfig, PricingEngine, RuleSet};
use interface_cli::{dto, io, CliError};
use serde_json::{json, Value};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rental_pricer_test_{name}"));
    let _ = std::fs::remove_file(&path);
    path
}

const INPUT: &str = r#"{
    "cars": [{"id": 1, "price_per_day": 2000, "price_per_km": 10}],
    "rentals": [
        {"id": 1, "car_id": 1, "start_date": "2017-12-08", "end_date": "2017-12-08", "distance": 100}
    ]
}"#;

#[test]
fn test_file_to_file_round_trip() {
    let input_path = temp_path("round_trip_in.json");
    let output_path = temp_path("round_trip_out.json");
    std::fs::write(&input_path, INPUT).unwrap();

    let document = io::read_input(&input_path).unwrap();
    let engine = PricingEngine::new(RuleSet::BaseRate, PricingConfig::default());
    let output = process_batch(&engine, document.into_batch());
    io::write_output(&output_path, &dto::project(RuleSet::BaseRate, &output)).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value, json!({"rentals": [{"id": 1, "price": 3000}]}));

    // Pretty-printed with two-space indent, newline-terminated.
    assert!(written.ends_with("}\n"));
    assert!(written.contains("\n  \"rentals\""));
}

#[test]
fn test_missing_input_file_is_an_io_error() {
    let err = io::read_input(temp_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn test_malformed_document_is_a_json_error() {
    let path = temp_path("malformed.json");
    std::fs::write(&path, "{\"cars\": [").unwrap();

    let err = io::read_input(&path).unwrap_err();
    assert!(matches!(err, CliError::Json { .. }));
}

#[test]
fn test_document_without_required_keys_is_rejected() {
    // Missing top-level keys are a malformed document, not a pricing
    // failure: the run aborts.
    let path = temp_path("missing_keys.json");
    std::fs::write(&path, r#"{"cars": []}"#).unwrap();

    let err = io::read_input(&path).unwrap_err();
    assert!(matches!(err, CliError::Json { .. }));
}
