//! Water Parameters and the Parameter Catalogue
//!
//! [`WaterParameters`] is the one input record of the engine. [`Parameter`]
//! names each of its fields, so sliders, charts and validators can address a
//! field without string matching scattered across the code.
//!
//! ```rust
//! use lsi_core::{Parameter, WaterParameters};
//!
//! let params = WaterParameters::default().with(Parameter::Ph, 7.6);
//! assert_eq!(params.get(Parameter::Ph), 7.6);
//! assert_eq!("cya".parse::<Parameter>(), Ok(Parameter::Cya));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::constants::bounds::{Bounds, LSI_CONSTANTS};
use crate::constants::sampling::{
    ALKALINITY_STEP_PPM, CALCIUM_STEP_PPM, CYA_STEP_PPM, PH_STEP, TDS_STEP_PPM, TEMP_STEP_F,
};
use crate::errors::LsiError;

/// A complete set of water readings.
///
/// Serialized with the pH field named `"pH"`; fields missing from a snapshot
/// fall back to [`WaterParameters::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WaterParameters {
    /// pH (dimensionless)
    #[cfg_attr(feature = "serde", serde(rename = "pH"))]
    pub ph: f64,
    /// Water temperature (°F)
    pub temperature: f64,
    /// Calcium hardness (ppm as CaCO3)
    pub calcium: f64,
    /// Total alkalinity (ppm as CaCO3)
    pub alkalinity: f64,
    /// Cyanuric acid (ppm)
    pub cya: f64,
    /// Total dissolved solids (ppm)
    pub tds: f64,
}

impl Default for WaterParameters {
    fn default() -> Self {
        Self {
            ph: 7.2,
            temperature: 104.0,  // Spa temperature
            calcium: 250.0,
            alkalinity: 120.0,
            cya: 30.0,
            tds: 1000.0,
        }
    }
}

impl WaterParameters {
    /// Build a record from every field
    pub fn new(ph: f64, temperature: f64, calcium: f64, alkalinity: f64, cya: f64, tds: f64) -> Self {
        Self { ph, temperature, calcium, alkalinity, cya, tds }
    }

    /// Read one field
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Temperature => self.temperature,
            Parameter::Calcium => self.calcium,
            Parameter::Alkalinity => self.alkalinity,
            Parameter::Cya => self.cya,
            Parameter::Tds => self.tds,
        }
    }

    /// Copy of this record with one field replaced
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::Ph => self.ph = value,
            Parameter::Temperature => self.temperature = value,
            Parameter::Calcium => self.calcium = value,
            Parameter::Alkalinity => self.alkalinity = value,
            Parameter::Cya => self.cya = value,
            Parameter::Tds => self.tds = value,
        }
        self
    }
}

/// One adjustable water parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    /// pH
    Ph,
    /// Temperature in °F
    Temperature,
    /// Calcium hardness
    Calcium,
    /// Total alkalinity
    Alkalinity,
    /// Cyanuric acid
    Cya,
    /// Total dissolved solids
    Tds,
}

impl Parameter {
    /// Every parameter in display order
    pub const ALL: [Parameter; 6] = [
        Parameter::Ph,
        Parameter::Temperature,
        Parameter::Calcium,
        Parameter::Alkalinity,
        Parameter::Cya,
        Parameter::Tds,
    ];

    /// Canonical name, as used in snapshots and chart lookups
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Temperature => "temperature",
            Parameter::Calcium => "calcium",
            Parameter::Alkalinity => "alkalinity",
            Parameter::Cya => "cya",
            Parameter::Tds => "tds",
        }
    }

    /// Bounds from the constants table
    pub fn bounds(self) -> Bounds {
        match self {
            Parameter::Ph => LSI_CONSTANTS.ph,
            Parameter::Temperature => LSI_CONSTANTS.temperature,
            Parameter::Calcium => LSI_CONSTANTS.calcium,
            Parameter::Alkalinity => LSI_CONSTANTS.alkalinity,
            Parameter::Cya => LSI_CONSTANTS.cya,
            Parameter::Tds => LSI_CONSTANTS.tds,
        }
    }

    /// Slider and chart sampling step
    pub const fn step(self) -> f64 {
        match self {
            Parameter::Ph => PH_STEP,
            Parameter::Temperature => TEMP_STEP_F,
            Parameter::Calcium => CALCIUM_STEP_PPM,
            Parameter::Alkalinity => ALKALINITY_STEP_PPM,
            Parameter::Cya => CYA_STEP_PPM,
            Parameter::Tds => TDS_STEP_PPM,
        }
    }

    /// Display metadata for a slider/chart section
    pub fn config(self) -> ParameterConfig {
        let (title, unit) = match self {
            Parameter::Ph => ("pH Level", Unit::None),
            Parameter::Temperature => ("Temperature", Unit::Fahrenheit),
            Parameter::Calcium => ("Calcium Hardness", Unit::Ppm),
            Parameter::Alkalinity => ("Total Alkalinity", Unit::Ppm),
            Parameter::Cya => ("Cyanuric Acid", Unit::Ppm),
            Parameter::Tds => ("Total Dissolved Solids", Unit::Ppm),
        };
        let bounds = self.bounds();
        ParameterConfig {
            title,
            unit,
            min: bounds.min,
            max: bounds.max,
            step: self.step(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = LsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or(LsiError::UnknownParameter)
    }
}

/// Unit a parameter is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Dimensionless (pH)
    None,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Parts per million
    Ppm,
}

impl Unit {
    /// Unit suffix as shown next to a value
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Fahrenheit => "°F",
            Unit::Ppm => "ppm",
        }
    }
}

/// Display metadata of a parameter section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterConfig {
    /// Section heading
    pub title: &'static str,
    /// Display unit
    pub unit: Unit,
    /// Slider minimum
    pub min: f64,
    /// Slider maximum
    pub max: f64,
    /// Slider increment
    pub step: f64,
}

/// Formats a parameter value with its unit: `104°F`, `250 ppm`, `7.2`.
pub struct FormattedValue {
    unit: Unit,
    value: f64,
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Fahrenheit => write!(f, "{}°F", self.value),
            Unit::Ppm => write!(f, "{} ppm", self.value),
            Unit::None => write!(f, "{:.1}", self.value),
        }
    }
}

/// Value formatted the way a slider label shows it
pub fn format_value(parameter: Parameter, value: f64) -> FormattedValue {
    FormattedValue { unit: parameter.config().unit, value }
}
