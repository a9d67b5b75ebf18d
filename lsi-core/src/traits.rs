//! Core traits
//!
//! Kept deliberately small: the engine is a set of free functions, these
//! traits only cover the optional validation layer.

use crate::errors::LsiResult;
use crate::parameters::WaterParameters;

/// Validator for a complete parameter record
pub trait Validator {
    /// Check a record, reporting the first offending field
    fn validate(&self, params: &WaterParameters) -> LsiResult<()>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(7.2f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }
}
