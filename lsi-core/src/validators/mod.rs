//! Input Range Validation
//!
//! ## Overview
//!
//! The engine accepts any numbers and lets invalid chemistry surface as NaN.
//! This module is the optional layer in front of it: it checks a record
//! against the slider bounds, or against tighter targets for a pool or a spa,
//! and names the first field that fails.
//!
//! ## Validation Layers
//!
//! ### 1. Finiteness
//! NaN and infinite fields are rejected with `InvalidValue`.
//!
//! ### 2. Range
//! Finite fields outside the configured bounds are rejected with `OutOfRange`.
//!
//! Domain problems that only appear in combination (cyanurate alkalinity
//! exceeding total alkalinity) are not range problems; they are reported by
//! `calculate_lsi_checked`.
//!
//! ## Usage Example
//!
//! ```rust
//! use lsi_core::validators::ParameterValidator;
//! use lsi_core::{Parameter, Validator, WaterParameters};
//!
//! let validator = ParameterValidator::spa();
//! let params = WaterParameters::default().with(Parameter::Ph, 7.4);
//! validator.validate(&params)?;
//! # Ok::<(), lsi_core::LsiError>(())
//! ```

mod parameters;
mod utils;

pub use parameters::ParameterValidator;
pub use utils::{check_finite, check_range};
