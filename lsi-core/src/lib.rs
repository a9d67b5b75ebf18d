//! Langelier Saturation Index engine
//!
//! Computes the saturation index of pool and spa water from pH, temperature,
//! calcium hardness, total alkalinity, cyanuric acid and total dissolved
//! solids, and samples how the index responds to each parameter for
//! sensitivity charts.
//!
//! Key properties:
//! - Pure functions, no shared mutable state
//! - No validation or clamping in the default path: invalid chemistry is NaN
//! - No heap allocation, usable without `std`
//!
//! ```no_run
//! use lsi_core::{calculate_lsi, sample_range, BalanceStatus, WaterParameters};
//!
//! let params = WaterParameters::default();
//! let lsi = calculate_lsi(&params);
//!
//! match BalanceStatus::classify(lsi) {
//!     Some(status) => println!("LSI {lsi:.2}: {status}"),
//!     None => println!("invalid input"),
//! }
//!
//! // Bars for the pH chart
//! for sample in sample_range("pH", &params) {
//!     println!("{:.1} -> {:.2}", sample.value, sample.lsi);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod factors;
pub mod parameters;
pub mod sampler;
pub mod status;
pub mod traits;
pub mod validators;

// Public API
pub use constants::{LsiConstants, LSI_CONSTANTS};
pub use engine::{calculate_lsi, calculate_lsi_checked, saturation_ph, LsiBreakdown};
pub use errors::{LsiError, LsiResult};
pub use factors::{
    alkalinity_factor, calcium_factor, cyanurate_alkalinity, cyanurate_ionization_fraction,
    tds_factor, temperature_factor,
};
pub use parameters::{format_value, Parameter, ParameterConfig, Unit, WaterParameters};
pub use sampler::{
    sample_all, sample_parameter, sample_range, sample_with_range, ChartSample, ChartSeries, SampleRange,
};
pub use status::BalanceStatus;
pub use traits::{Validatable, Validator};
pub use validators::ParameterValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
