//! Common test utilities for integration tests
//!
//! This module provides:
//! - Water sample fixtures with pinned expected indices
//! - Assertion helpers for series shape

#![allow(dead_code)]

pub mod water;

use lsi_core::ChartSeries;

/// Tolerance for comparing against hand-derived reference values
pub const LSI_TOLERANCE: f64 = 1e-9;

/// Assert a series is strictly ascending by value and holds only finite indices
pub fn assert_well_formed(series: &ChartSeries) {
    for pair in series.windows(2) {
        assert!(
            pair[0].value < pair[1].value,
            "values not ascending: {} then {}",
            pair[0].value,
            pair[1].value
        );
    }
    for sample in series.iter() {
        assert!(sample.lsi.is_finite(), "non-finite LSI at {}", sample.value);
    }
}
