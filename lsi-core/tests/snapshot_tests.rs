//! Tests for the persisted parameter snapshot format

#![cfg(feature = "serde")]

use lsi_core::{sample_range, ChartSample, WaterParameters};

#[test]
fn snapshot_uses_ph_key() {
    let json = serde_json::to_string(&WaterParameters::default()).unwrap();
    assert!(json.contains("\"pH\":7.2"), "{json}");
    assert!(json.contains("\"tds\":1000"), "{json}");
}

#[test]
fn snapshot_without_tds_falls_back_to_default() {
    // Snapshots saved before TDS was adjustable
    let json = r#"{"pH":7.4,"temperature":86,"calcium":300,"alkalinity":100,"cya":40}"#;
    let params: WaterParameters = serde_json::from_str(json).unwrap();
    assert_eq!(params.ph, 7.4);
    assert_eq!(params.cya, 40.0);
    assert_eq!(params.tds, WaterParameters::default().tds);
}

#[test]
fn chart_samples_serialize_as_value_lsi_pairs() {
    let series = sample_range("cya", &WaterParameters::default());
    let first: &ChartSample = &series[0];
    let json = serde_json::to_string(first).unwrap();
    assert!(json.starts_with("{\"value\":0.0,\"lsi\":"), "{json}");
}
