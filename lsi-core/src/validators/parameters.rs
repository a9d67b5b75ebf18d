//! Parameter record validator
//!
//! Checks every field of a [`WaterParameters`] against configurable bounds.
//! The engine never calls this; it is for callers that want to reject a
//! record before displaying an index.

use crate::{
    constants::bounds::{Bounds, LsiConstants, LSI_CONSTANTS},
    errors::LsiResult,
    parameters::{Parameter, WaterParameters},
    traits::Validator,
};

use super::utils;

/// Range validator for a full parameter record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterValidator {
    /// Bounds per parameter, indexed in `Parameter::ALL` order
    bounds: [Bounds; 6],
}

impl Default for ParameterValidator {
    fn default() -> Self {
        Self::from_constants(&LSI_CONSTANTS)
    }
}

impl ParameterValidator {
    /// Validator using the bounds of a constants table
    pub fn from_constants(constants: &LsiConstants) -> Self {
        Self {
            bounds: [
                constants.ph,
                constants.temperature,
                constants.calcium,
                constants.alkalinity,
                constants.cya,
                constants.tds,
            ],
        }
    }

    /// Copy of this validator with custom bounds for one parameter
    #[must_use]
    pub fn new_with_bounds(mut self, parameter: Parameter, min: f64, max: f64) -> Self {
        // Accept the ends in either order
        self.bounds[Self::index(parameter)] = Bounds::ordered(min, max);
        self
    }

    /// Residential pool targets (tighter than the slider ranges)
    pub fn pool() -> Self {
        Self::default()
            .new_with_bounds(Parameter::Ph, 7.2, 7.8)
            .new_with_bounds(Parameter::Temperature, 80.0, 92.0)  // Heated pool
            .new_with_bounds(Parameter::Calcium, 200.0, 400.0)
            .new_with_bounds(Parameter::Alkalinity, 80.0, 120.0)
            .new_with_bounds(Parameter::Cya, 30.0, 50.0)
    }

    /// Hot tub targets
    pub fn spa() -> Self {
        Self::default()
            .new_with_bounds(Parameter::Ph, 7.2, 7.8)
            .new_with_bounds(Parameter::Temperature, 98.0, 104.0)
            .new_with_bounds(Parameter::Calcium, 150.0, 250.0)  // Hot water scales faster
            .new_with_bounds(Parameter::Alkalinity, 80.0, 120.0)
            .new_with_bounds(Parameter::Cya, 0.0, 40.0)
    }

    /// Bounds in effect for one parameter
    pub fn bounds(&self, parameter: Parameter) -> Bounds {
        self.bounds[Self::index(parameter)]
    }

    fn index(parameter: Parameter) -> usize {
        parameter as usize
    }
}

impl Validator for ParameterValidator {
    fn validate(&self, params: &WaterParameters) -> LsiResult<()> {
        for parameter in Parameter::ALL {
            utils::check_range(parameter.name(), params.get(parameter), self.bounds(parameter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LsiError;

    #[test]
    fn defaults_pass() {
        let validator = ParameterValidator::default();
        assert!(validator.validate(&WaterParameters::default()).is_ok());
    }

    #[test]
    fn index_follows_display_order() {
        for (i, p) in Parameter::ALL.into_iter().enumerate() {
            assert_eq!(ParameterValidator::index(p), i);
        }
    }

    #[test]
    fn out_of_range_names_parameter() {
        let validator = ParameterValidator::default();
        let params = WaterParameters::default().with(Parameter::Tds, 100.0);
        assert_eq!(
            validator.validate(&params),
            Err(LsiError::OutOfRange { parameter: "tds", value: 100.0, min: 300.0, max: 3000.0 })
        );
    }

    #[test]
    fn first_offending_field_wins() {
        let validator = ParameterValidator::default();
        let params = WaterParameters::default()
            .with(Parameter::Ph, f64::NAN)
            .with(Parameter::Calcium, -5.0);
        assert_eq!(validator.validate(&params), Err(LsiError::InvalidValue { parameter: "pH" }));
    }

    #[test]
    fn custom_bounds_are_ordered() {
        let validator = ParameterValidator::default().new_with_bounds(Parameter::Cya, 40.0, 10.0);
        assert_eq!(validator.bounds(Parameter::Cya), Bounds::new(10.0, 40.0));
    }

    #[test]
    fn spa_rejects_pool_temperature() {
        let params = WaterParameters::default().with(Parameter::Temperature, 84.0);
        assert!(ParameterValidator::spa().validate(&params).is_err());
        assert!(ParameterValidator::pool().validate(&params.with(Parameter::Ph, 7.4)).is_ok());
    }
}
