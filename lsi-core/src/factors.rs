//! Saturation pH Factor Functions
//!
//! ## Chemistry Background
//!
//! Calcium carbonate saturation depends on four things besides pH: how warm
//! the water is, how much calcium is dissolved, how much carbonate alkalinity
//! is available to pair with it, and the ionic strength (approximated by
//! TDS). Each function here turns one raw reading into its dimensionless
//! contribution to the saturation pH.
//!
//! ### Cyanurate Correction
//!
//! A total alkalinity titration also counts ionized cyanuric acid. Only the
//! carbonate part matters for scaling, so the cyanurate contribution is
//! subtracted first:
//!
//! ```text
//! fraction       = 1 / (1 + 10^(pKa - pH))      pKa = 6.51
//! cyanurate_alk  = CYA * fraction
//! carbonate_alk  = total_alk - cyanurate_alk
//! ```
//!
//! ## Domain
//!
//! None of these functions validate. Out-of-domain inputs give the natural
//! floating-point result: `log10(0) = -inf`, `log10(x < 0) = NaN`. Those values
//! flow through the saturation pH and mark the final index as invalid.
//!
//! All math goes through `libm` so results match bit for bit with and without
//! `std`.

use libm::{log10, pow};

use crate::constants::chemistry::{
    CALCIUM_FACTOR_OFFSET, CYANURIC_ACID_PKA, FAHRENHEIT_FREEZING_POINT,
    FAHRENHEIT_TO_CELSIUS_RATIO, KELVIN_OFFSET, TDS_FACTOR_DIVISOR, TDS_FACTOR_OFFSET,
    TEMPERATURE_FACTOR_INTERCEPT, TEMPERATURE_FACTOR_SLOPE,
};

/// Convert a Fahrenheit reading to Celsius
#[inline]
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - FAHRENHEIT_FREEZING_POINT) * FAHRENHEIT_TO_CELSIUS_RATIO
}

/// Temperature term of the saturation pH, from a Fahrenheit reading.
///
/// NaN at or below -273 °C, never reached by pool water.
pub fn temperature_factor(temp_f: f64) -> f64 {
    let celsius = fahrenheit_to_celsius(temp_f);
    TEMPERATURE_FACTOR_SLOPE * log10(celsius + KELVIN_OFFSET) + TEMPERATURE_FACTOR_INTERCEPT
}

/// Calcium hardness term, from ppm as CaCO3.
///
/// `-inf` at zero, NaN below zero.
pub fn calcium_factor(calcium_ppm: f64) -> f64 {
    log10(calcium_ppm) - CALCIUM_FACTOR_OFFSET
}

/// Fraction of cyanuric acid ionized at `ph`.
///
/// Zero whenever there is no cyanuric acid, whatever the pH.
pub fn cyanurate_ionization_fraction(cya_ppm: f64, ph: f64) -> f64 {
    if cya_ppm <= 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + pow(10.0, CYANURIC_ACID_PKA - ph))
}

/// Part of the measured total alkalinity contributed by cyanurate (ppm).
pub fn cyanurate_alkalinity(cya_ppm: f64, ph: f64) -> f64 {
    if cya_ppm <= 0.0 {
        return 0.0;
    }
    cya_ppm * cyanurate_ionization_fraction(cya_ppm, ph)
}

/// Total alkalinity with the cyanurate share removed (ppm).
pub fn carbonate_alkalinity(alkalinity_ppm: f64, cya_ppm: f64, ph: f64) -> f64 {
    alkalinity_ppm - cyanurate_alkalinity(cya_ppm, ph)
}

/// Carbonate alkalinity term.
///
/// NaN when cyanurate alkalinity exceeds total alkalinity. That NaN is a
/// legitimate "chemically invalid" signal and is not masked.
pub fn alkalinity_factor(alkalinity_ppm: f64, cya_ppm: f64, ph: f64) -> f64 {
    log10(carbonate_alkalinity(alkalinity_ppm, cya_ppm, ph))
}

/// Total dissolved solids term, from ppm.
pub fn tds_factor(tds_ppm: f64) -> f64 {
    (log10(tds_ppm) - TDS_FACTOR_OFFSET) / TDS_FACTOR_DIVISOR
}
