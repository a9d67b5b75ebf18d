//! Error Types for the Tagged-Result API
//!
//! ## Two Contracts
//!
//! The engine's default contract never fails: invalid chemistry propagates as
//! NaN or infinity through plain `f64` arithmetic, and the chart sampler drops
//! those points. That keeps `calculate_lsi` a pure function usable anywhere,
//! including inside tight sampling loops.
//!
//! Callers that prefer an explicit "valid | invalid" answer use the checked
//! entry points (`calculate_lsi_checked`, `ParameterValidator`), which return
//! [`LsiResult`]. The arithmetic is identical; only the reporting differs.
//!
//! ## Error Categories
//!
//! ### Domain Violations
//! - `InvalidDomain`: a logarithm argument left its domain (zero calcium,
//!   cyanurate alkalinity exceeding total alkalinity, non-positive TDS)
//! - `InvalidValue`: an input field is NaN or infinite
//!
//! ### Range Violations
//! - `OutOfRange`: finite, but outside the configured bounds
//!
//! ### Lookup
//! - `UnknownParameter`: a parameter name not in the catalogue
//!
//! ### Sampling
//! - `SeriesCapacityExceeded`: a custom sweep has more points than a series holds
//!
//! ```rust
//! use lsi_core::{calculate_lsi_checked, LsiError, WaterParameters};
//!
//! let params = WaterParameters { calcium: 0.0, ..WaterParameters::default() };
//! match calculate_lsi_checked(&params) {
//!     Ok(lsi) => println!("LSI {lsi:.2}"),
//!     Err(LsiError::InvalidDomain { reason }) => println!("invalid input: {reason}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! ## Memory Layout
//!
//! Errors only carry `f64` values and `&'static str`, so they are `Copy` and
//! never allocate.

use thiserror_no_std::Error;

/// Result type for checked LSI operations
pub type LsiResult<T> = Result<T, LsiError>;

/// Errors reported by the checked API
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LsiError {
    /// Parameter outside its configured bounds
    #[error("{parameter} value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Canonical name of the offending parameter
        parameter: &'static str,
        /// The value that failed
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Parameter is NaN or infinite
    #[error("Invalid value for {parameter}: not a finite number")]
    InvalidValue {
        /// Canonical name of the offending parameter
        parameter: &'static str,
    },

    /// Chemistry makes the saturation pH undefined
    #[error("Invalid chemistry: {reason}")]
    InvalidDomain {
        /// Which factor left its domain
        reason: &'static str,
    },

    /// Parameter name not in the catalogue
    #[error("Unknown parameter name")]
    UnknownParameter,

    /// Sweep has more points than a chart series can hold
    #[error("Sweep of {points} points exceeds series capacity {capacity}")]
    SeriesCapacityExceeded {
        /// Points the sweep would produce
        points: usize,
        /// Maximum points per series
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for LsiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { parameter, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", parameter, value, min, max),
            Self::InvalidValue { parameter } =>
                defmt::write!(fmt, "{} not finite", parameter),
            Self::InvalidDomain { reason } =>
                defmt::write!(fmt, "Invalid chemistry: {}", reason),
            Self::UnknownParameter =>
                defmt::write!(fmt, "Unknown parameter"),
            Self::SeriesCapacityExceeded { points, capacity } =>
                defmt::write!(fmt, "Sweep of {} points exceeds {}", points, capacity),
        }
    }
}
