//! Sensitivity Chart Sampler
//!
//! ## Overview
//!
//! A sensitivity curve shows how the saturation index responds when one
//! parameter sweeps its whole range while the others stay at their current
//! values. The calculator draws one such curve per parameter and redraws all
//! of them on every slider move.
//!
//! ## Sampling Policy
//!
//! Points are generated by index, not by repeated addition:
//!
//! ```text
//! n       = floor((max - min) / step + 1e-9) + 1
//! value_i = min(min + i * step, max)         i in 0..n
//! ```
//!
//! Accumulating `value += step` drifts: after 24 additions of 0.1 to 6.0 the
//! running value is 8.399999999999991, and whether the final point lands
//! depends on rounding luck. Index-based generation gives the same number of
//! points every time and never steps past `max`.
//!
//! ## Invalid Points
//!
//! Sweeping calcium or alkalinity down to zero leaves the logarithm domain.
//! Those points produce NaN or infinite indices and are left out of the
//! series; no placeholder is inserted.
//!
//! ## Memory
//!
//! A series is a `heapless::Vec` sized for the widest sweep, so sampling
//! never allocates. Every table sweep fits. A custom sweep with more points
//! than [`SERIES_CAPACITY`] is rejected up front by [`sample_with_range`]
//! rather than cut short.

use heapless::Vec;

use crate::{
    constants::sampling::{SERIES_CAPACITY, STEP_COUNT_EPSILON},
    engine::calculate_lsi,
    errors::{LsiError, LsiResult},
    parameters::{Parameter, WaterParameters},
    traits::Validatable,
};

/// One point of a sensitivity curve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartSample {
    /// Value of the swept parameter
    pub value: f64,
    /// Saturation index at that value
    pub lsi: f64,
}

/// Sensitivity curve, ascending by value
pub type ChartSeries = Vec<ChartSample, SERIES_CAPACITY>;

/// Inclusive sweep of one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// First value
    pub min: f64,
    /// Last value
    pub max: f64,
    /// Distance between values
    pub step: f64,
}

impl SampleRange {
    /// Sweep from the constants table for `parameter`
    pub fn for_parameter(parameter: Parameter) -> Self {
        let bounds = parameter.bounds();
        Self {
            min: bounds.min,
            max: bounds.max,
            step: parameter.step(),
        }
    }

    /// Look up a sweep by canonical parameter name
    pub fn lookup(name: &str) -> Option<Self> {
        name.parse::<Parameter>().ok().map(Self::for_parameter)
    }

    /// Number of points from `min` to `max` inclusive.
    ///
    /// Saturates at `usize::MAX` for sweeps too fine to count.
    pub fn point_count(&self) -> usize {
        let usable = self.step > 0.0 && self.min.is_valid() && self.max.is_valid();
        if !usable || self.max < self.min {
            return 0;
        }
        let steps = libm::floor((self.max - self.min) / self.step + STEP_COUNT_EPSILON);
        // `as` saturates; a count past usize::MAX stays there
        (steps as usize).saturating_add(1)
    }

    /// Value of point `index`, never past `max`
    pub fn value_at(&self, index: usize) -> f64 {
        let value = self.min + index as f64 * self.step;
        if value > self.max { self.max } else { value }
    }

    /// Every value of the sweep in ascending order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.point_count()).map(move |i| self.value_at(i))
    }
}

/// Sensitivity curve for a parameter given by name.
///
/// Unknown names produce an empty series, meaning "nothing to chart".
pub fn sample_range(parameter_name: &str, fixed: &WaterParameters) -> ChartSeries {
    match parameter_name.parse::<Parameter>() {
        Ok(parameter) => sample_parameter(parameter, fixed),
        Err(_) => {
            log_warn!("No sampling range for parameter {:?}", parameter_name);
            ChartSeries::new()
        }
    }
}

/// Sensitivity curve for one parameter, all others held at `fixed`
pub fn sample_parameter(parameter: Parameter, fixed: &WaterParameters) -> ChartSeries {
    // Table sweeps never exceed SERIES_CAPACITY
    collect_series(parameter, SampleRange::for_parameter(parameter), fixed)
}

/// Sensitivity curve over an explicit sweep.
///
/// Every point from `min` to `max` is evaluated; only non-finite indices are
/// left out. A sweep with more than [`SERIES_CAPACITY`] points is rejected
/// with [`LsiError::SeriesCapacityExceeded`] before any point is computed.
pub fn sample_with_range(
    parameter: Parameter,
    range: SampleRange,
    fixed: &WaterParameters,
) -> LsiResult<ChartSeries> {
    let points = range.point_count();
    if points > SERIES_CAPACITY {
        log_warn!("{} sweep of {} points exceeds capacity {}", parameter, points, SERIES_CAPACITY);
        return Err(LsiError::SeriesCapacityExceeded { points, capacity: SERIES_CAPACITY });
    }
    Ok(collect_series(parameter, range, fixed))
}

/// Evaluate a sweep known to fit in a series
fn collect_series(parameter: Parameter, range: SampleRange, fixed: &WaterParameters) -> ChartSeries {
    let mut series = ChartSeries::new();
    #[cfg(feature = "log")]
    let mut skipped = 0usize;

    for value in range.values() {
        let lsi = calculate_lsi(&fixed.with(parameter, value));
        if !lsi.is_valid() {
            log_trace!("{}={} gives non-finite LSI {}, skipped", parameter, value, lsi);
            #[cfg(feature = "log")]
            {
                skipped += 1;
            }
            continue;
        }

        if series.push(ChartSample { value, lsi }).is_err() {
            break;
        }
    }

    log_debug!("{} series: {} points, {} skipped", parameter, series.len(), skipped);
    series
}

/// One sensitivity curve per parameter, in display order
pub fn sample_all(fixed: &WaterParameters) -> [(Parameter, ChartSeries); 6] {
    Parameter::ALL.map(|parameter| (parameter, sample_parameter(parameter, fixed)))
}
