//! Constants for the LSI engine
//!
//! Every numeric value used by the engine is defined here with its unit and
//! source. Nothing in this module is mutable at runtime.
//!
//! ## Organization
//!
//! - **Chemistry**: coefficients of the factor formulas and the base saturation pH
//! - **Bounds**: valid domain of each water parameter and the `LSI_CONSTANTS` table
//! - **Sampling**: step sizes and series capacity for sensitivity charts
//! - **Balance**: interpretation bands of the index

/// Coefficients of the saturation pH sub-formulas.
pub mod chemistry;

/// Parameter bounds and the process-wide constants table.
pub mod bounds;

/// Chart sampling steps and capacity.
pub mod sampling;

/// Balanced/corrosive/scale-forming thresholds.
pub mod balance;

// Re-export commonly used constants for convenience
pub use chemistry::{BASE_SATURATION_PH, CYANURIC_ACID_PKA};

pub use bounds::{
    Bounds, LsiConstants, LSI_CONSTANTS,
    MIN_PH, MAX_PH, MIN_TEMP_F, MAX_TEMP_F,
    MIN_CALCIUM_PPM, MAX_CALCIUM_PPM, MIN_ALKALINITY_PPM, MAX_ALKALINITY_PPM,
    MIN_CYA_PPM, MAX_CYA_PPM, MIN_TDS_PPM, MAX_TDS_PPM,
};

pub use sampling::{
    PH_STEP, TEMP_STEP_F, CALCIUM_STEP_PPM, ALKALINITY_STEP_PPM,
    CYA_STEP_PPM, TDS_STEP_PPM, SERIES_CAPACITY,
};

pub use balance::{BALANCED_LSI_MIN, BALANCED_LSI_MAX};
