//! Integration tests for sensitivity chart sampling

mod common;

use lsi_core::{
    calculate_lsi,
    constants::{MAX_PH, MIN_PH, PH_STEP},
    sample_all, sample_parameter, sample_range, Parameter, SampleRange, WaterParameters,
};

use common::{assert_well_formed, water};

#[test]
fn ph_series_spans_full_range() {
    let series = sample_range("pH", &water::reference_pool().params);
    assert_well_formed(&series);

    let expected_len = ((MAX_PH - MIN_PH) / PH_STEP).round() as usize + 1;
    assert_eq!(series.len(), expected_len);
    assert_eq!(series[0].value, MIN_PH);

    let last = series[series.len() - 1].value;
    assert!(last <= MAX_PH && MAX_PH - last < PH_STEP);
}

#[test]
fn unknown_parameter_gives_empty_series() {
    let params = WaterParameters::default();
    assert!(sample_range("unknown", &params).is_empty());
    assert!(sample_range("", &params).is_empty());
    assert!(sample_range("PH", &params).is_empty());
}

#[test]
fn name_and_enum_lookups_agree() {
    let params = water::default_spa().params;
    for p in Parameter::ALL {
        assert_eq!(sample_range(p.name(), &params), sample_parameter(p, &params));
    }
}

#[test]
fn alkalinity_series_skips_cyanurate_dominated_points() {
    // 30 ppm CYA at pH 7.2 contributes ~24.9 ppm, so 0, 10 and 20 ppm are invalid
    let series = sample_parameter(Parameter::Alkalinity, &WaterParameters::default());
    assert_well_formed(&series);
    assert_eq!(series.len(), 38);
    assert_eq!(series[0].value, 30.0);
    assert_eq!(series[series.len() - 1].value, 400.0);
}

#[test]
fn all_invalid_sweep_is_empty() {
    // Zero calcium poisons every point of every other sweep
    let params = WaterParameters::default().with(Parameter::Calcium, 0.0);
    assert!(sample_parameter(Parameter::Ph, &params).is_empty());
    assert!(sample_parameter(Parameter::Tds, &params).is_empty());
    // Sweeping calcium itself recovers
    assert_eq!(sample_parameter(Parameter::Calcium, &params).len(), 100);
}

#[test]
fn other_parameters_held_fixed() {
    let params = water::hard_hot_spa().params;
    let series = sample_parameter(Parameter::Tds, &params);
    for sample in &series {
        let expected = calculate_lsi(&WaterParameters { tds: sample.value, ..params });
        assert_eq!(sample.lsi, expected);
    }
}

#[test]
fn current_value_lies_on_its_curve() {
    let params = water::reference_pool().params;
    let series = sample_parameter(Parameter::Temperature, &params);
    let at_current = series
        .iter()
        .find(|s| s.value == params.temperature)
        .expect("80°F is a sample point");
    assert_eq!(at_current.lsi, calculate_lsi(&params));
}

#[test]
fn dashboard_sampling() {
    let params = WaterParameters::default();
    let all = sample_all(&params);
    for (parameter, series) in &all {
        assert_well_formed(series);
        let range = SampleRange::for_parameter(*parameter);
        assert!(series.len() <= range.point_count());
    }
    assert_eq!(all[0].1.len(), 25);
}
