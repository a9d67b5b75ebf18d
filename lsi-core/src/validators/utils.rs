//! Common Validation Utilities
//!
//! Pure functions shared by validators. No allocation, no panics: invalid
//! input is returned as an error.

use crate::{
    constants::bounds::Bounds,
    errors::{LsiError, LsiResult},
    traits::Validatable,
};

/// Check that a value is finite
pub fn check_finite(parameter: &'static str, value: f64) -> LsiResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(LsiError::InvalidValue { parameter })
    }
}

/// Check if a value is within the specified bounds
pub fn check_range(parameter: &'static str, value: f64, bounds: Bounds) -> LsiResult<()> {
    check_finite(parameter, value)?;

    if value < bounds.min || value > bounds.max {
        Err(LsiError::OutOfRange {
            parameter,
            value,
            min: bounds.min,
            max: bounds.max,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        let bounds = Bounds::new(0.0, 10.0);
        assert!(check_range("x", 5.0, bounds).is_ok());
        assert!(check_range("x", 0.0, bounds).is_ok());
        assert!(check_range("x", 10.0, bounds).is_ok());
        assert!(matches!(check_range("x", -1.0, bounds), Err(LsiError::OutOfRange { .. })));
        assert!(matches!(check_range("x", 11.0, bounds), Err(LsiError::OutOfRange { .. })));
    }

    #[test]
    fn non_finite_reported_before_range() {
        let bounds = Bounds::new(0.0, 10.0);
        assert_eq!(
            check_range("calcium", f64::NAN, bounds),
            Err(LsiError::InvalidValue { parameter: "calcium" })
        );
        assert!(check_finite("tds", f64::INFINITY).is_err());
    }
}
