//! Chart Sampling Constants
//!
//! Step sizes used when sweeping one parameter across its bounds to build a
//! sensitivity curve. Steps match the slider increments of the calculator so
//! every chart bar lines up with a reachable slider position.

/// pH sampling step (dimensionless).
pub const PH_STEP: f64 = 0.1;

/// Temperature sampling step (°F).
pub const TEMP_STEP_F: f64 = 1.0;

/// Calcium hardness sampling step (ppm).
pub const CALCIUM_STEP_PPM: f64 = 10.0;

/// Total alkalinity sampling step (ppm).
pub const ALKALINITY_STEP_PPM: f64 = 10.0;

/// Cyanuric acid sampling step (ppm).
pub const CYA_STEP_PPM: f64 = 1.0;

/// Total dissolved solids sampling step (ppm).
pub const TDS_STEP_PPM: f64 = 100.0;

/// Maximum number of samples a single series can hold.
///
/// The widest sweep is calcium: 0 to 1000 ppm in 10 ppm steps = 101 points.
/// Rounded up to a power of two for `heapless::Vec`.
pub const SERIES_CAPACITY: usize = 128;

/// Tolerance used when rounding a range into a whole number of steps.
///
/// Absorbs binary representation error such as `(8.4 - 6.0) / 0.1 = 23.999...`.
pub const STEP_COUNT_EPSILON: f64 = 1e-9;
