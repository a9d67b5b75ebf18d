//! Chemistry Constants for the Langelier Saturation Index
//!
//! Coefficients of the empirical sub-formulas that make up the saturation pH.
//! The saturation pH is assembled as:
//!
//! ```text
//! pHs = 9.3 + A + B - C - D
//!
//! A = (log10(TDS) - 1) / 10                  total dissolved solids
//! B = -13.12 * log10(T_C + 273) + 34.55      temperature
//! C = log10(Ca) - 0.4                        calcium hardness
//! D = log10(Alk_total - Alk_cyanurate)       carbonate alkalinity
//! ```

// ===== SATURATION PH =====

/// Base saturation pH calibration constant (dimensionless).
///
/// Constant term of the Langelier saturation pH. All factor terms are
/// added to or subtracted from this value.
///
/// Source: Langelier (1936), Carrier/ASHRAE water treatment tables
pub const BASE_SATURATION_PH: f64 = 9.3;

// ===== TEMPERATURE FACTOR =====

/// Offset added to Celsius before taking the logarithm (K).
///
/// The empirical fit uses a rounded Kelvin offset of 273, not 273.15.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Slope of the temperature factor against log10(Kelvin).
pub const TEMPERATURE_FACTOR_SLOPE: f64 = -13.12;

/// Intercept of the temperature factor.
pub const TEMPERATURE_FACTOR_INTERCEPT: f64 = 34.55;

/// Fahrenheit freezing point used for the °F to °C conversion.
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Ratio between Celsius and Fahrenheit degree sizes.
pub const FAHRENHEIT_TO_CELSIUS_RATIO: f64 = 5.0 / 9.0;

// ===== CALCIUM FACTOR =====

/// Offset subtracted from log10(calcium hardness ppm).
///
/// Converts calcium hardness expressed as ppm CaCO3 into the calcium term.
pub const CALCIUM_FACTOR_OFFSET: f64 = 0.4;

// ===== CYANURATE ALKALINITY =====

/// Acid dissociation constant of cyanuric acid (pKa).
///
/// Governs how much of the cyanuric acid is ionized at a given pH and
/// therefore shows up in a total alkalinity titration.
///
/// Source: O'Brien et al., J. Phys. Chem. (1974)
pub const CYANURIC_ACID_PKA: f64 = 6.51;

// ===== TDS FACTOR =====

/// Offset subtracted from log10(TDS ppm).
pub const TDS_FACTOR_OFFSET: f64 = 1.0;

/// Divisor applied to the TDS logarithm.
pub const TDS_FACTOR_DIVISOR: f64 = 10.0;
