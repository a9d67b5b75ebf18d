//! LSI Engine
//!
//! Combines the factor terms into the saturation pH and the saturation index:
//!
//! ```text
//! pHs = BASE + tds_f + temp_f - calcium_f - alkalinity_f
//! LSI = pH - pHs
//! ```
//!
//! ## Contracts
//!
//! [`calculate_lsi`] is the default contract: a pure function of its input
//! with no validation and no clamping. Out-of-domain chemistry shows up as NaN
//! or infinity in the returned value.
//!
//! [`calculate_lsi_checked`] runs the same arithmetic as a tagged result. A
//! NaN or infinite input field is reported as [`LsiError::InvalidValue`]
//! naming that field; a finite record whose index is still not finite is
//! reported as [`LsiError::InvalidDomain`] naming the first factor that left
//! its domain.
//!
//! ```rust
//! use lsi_core::{calculate_lsi, WaterParameters};
//!
//! let lsi = calculate_lsi(&WaterParameters::new(7.5, 80.0, 250.0, 120.0, 30.0, 300.0));
//! assert!((lsi - -0.0388).abs() < 1e-4);
//! ```

use crate::{
    constants::chemistry::BASE_SATURATION_PH,
    errors::{LsiError, LsiResult},
    factors::{alkalinity_factor, calcium_factor, carbonate_alkalinity, tds_factor, temperature_factor},
    parameters::{Parameter, WaterParameters},
    status::BalanceStatus,
    traits::Validatable,
    validators::check_finite,
};

/// Saturation pH from the four factor terms
#[inline]
pub fn saturation_ph(temp_factor: f64, calcium_factor: f64, alkalinity_factor: f64, tds_factor: f64) -> f64 {
    BASE_SATURATION_PH + tds_factor + temp_factor - calcium_factor - alkalinity_factor
}

/// Langelier Saturation Index of a parameter record.
///
/// May be NaN or infinite for invalid chemistry; never panics.
pub fn calculate_lsi(params: &WaterParameters) -> f64 {
    LsiBreakdown::compute(params).lsi
}

/// Saturation index as a tagged result.
///
/// Identical arithmetic to [`calculate_lsi`]. Non-finite input fields are
/// reported first, in display order; after that a non-finite index names the
/// first factor outside its domain.
pub fn calculate_lsi_checked(params: &WaterParameters) -> LsiResult<f64> {
    for parameter in Parameter::ALL {
        check_finite(parameter.name(), params.get(parameter))?;
    }
    LsiBreakdown::compute(params).into_result()
}

/// Every intermediate term of one LSI calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LsiBreakdown {
    /// Temperature term
    pub temperature_factor: f64,
    /// Calcium hardness term
    pub calcium_factor: f64,
    /// Carbonate alkalinity (ppm) after the cyanurate correction
    pub carbonate_alkalinity: f64,
    /// Carbonate alkalinity term
    pub alkalinity_factor: f64,
    /// Total dissolved solids term
    pub tds_factor: f64,
    /// Saturation pH
    pub saturation_ph: f64,
    /// Saturation index, `pH - pHs`
    pub lsi: f64,
}

impl LsiBreakdown {
    /// Run the full calculation, keeping every term
    pub fn compute(params: &WaterParameters) -> Self {
        let tf = temperature_factor(params.temperature);
        let cf = calcium_factor(params.calcium);
        let af = alkalinity_factor(params.alkalinity, params.cya, params.ph);
        let tds_f = tds_factor(params.tds);
        let ph_s = saturation_ph(tf, cf, af, tds_f);

        Self {
            temperature_factor: tf,
            calcium_factor: cf,
            carbonate_alkalinity: carbonate_alkalinity(params.alkalinity, params.cya, params.ph),
            alkalinity_factor: af,
            tds_factor: tds_f,
            saturation_ph: ph_s,
            lsi: params.ph - ph_s,
        }
    }

    /// Whether the index is a usable number
    pub fn is_valid(&self) -> bool {
        self.lsi.is_valid()
    }

    /// Balance classification, `None` when the index is not finite
    pub fn status(&self) -> Option<BalanceStatus> {
        BalanceStatus::classify(self.lsi)
    }

    /// Convert to the tagged-result form
    pub fn into_result(self) -> LsiResult<f64> {
        if self.lsi.is_valid() {
            return Ok(self.lsi);
        }

        // Report the first term that left its domain, in formula order
        let reason = if !self.temperature_factor.is_valid() {
            "temperature below absolute zero"
        } else if !self.calcium_factor.is_valid() {
            "calcium hardness must be positive"
        } else if !self.alkalinity_factor.is_valid() {
            "cyanurate alkalinity exceeds total alkalinity"
        } else if !self.tds_factor.is_valid() {
            "total dissolved solids must be positive"
        } else if !self.saturation_ph.is_valid() {
            "factor terms cancel to an undefined saturation pH"
        } else {
            "pH is not a finite number"
        };
        Err(LsiError::InvalidDomain { reason })
    }
}
