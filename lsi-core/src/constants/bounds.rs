//! Parameter Bounds
//!
//! Valid input domains for each water parameter. These bound the slider
//! ranges of a calculator and the sampling ranges of sensitivity charts.
//! They are not enforced by the engine itself.

use super::chemistry::BASE_SATURATION_PH;

// ===== PH =====

/// Lowest pH offered (dimensionless).
///
/// Below 6.0 pool water attacks plaster and metal within days.
pub const MIN_PH: f64 = 6.0;

/// Highest pH offered (dimensionless).
///
/// Above 8.4 chlorine efficacy collapses and scaling is near certain.
pub const MAX_PH: f64 = 8.4;

// ===== TEMPERATURE =====

/// Lowest water temperature offered (°F).
pub const MIN_TEMP_F: f64 = 80.0;

/// Highest water temperature offered (°F).
///
/// Typical spa upper limit; most heaters cut out at 104-106°F.
pub const MAX_TEMP_F: f64 = 110.0;

// ===== CALCIUM HARDNESS =====

/// Lowest calcium hardness (ppm as CaCO3).
///
/// Zero calcium puts the calcium factor at negative infinity.
pub const MIN_CALCIUM_PPM: f64 = 0.0;

/// Highest calcium hardness (ppm as CaCO3).
pub const MAX_CALCIUM_PPM: f64 = 1000.0;

// ===== TOTAL ALKALINITY =====

/// Lowest total alkalinity (ppm as CaCO3).
pub const MIN_ALKALINITY_PPM: f64 = 0.0;

/// Highest total alkalinity (ppm as CaCO3).
pub const MAX_ALKALINITY_PPM: f64 = 400.0;

// ===== CYANURIC ACID =====

/// Lowest cyanuric acid (ppm).
pub const MIN_CYA_PPM: f64 = 0.0;

/// Highest cyanuric acid (ppm).
///
/// Above 50 ppm most health codes require partial drain and refill.
pub const MAX_CYA_PPM: f64 = 50.0;

// ===== TOTAL DISSOLVED SOLIDS =====

/// Lowest total dissolved solids (ppm).
///
/// Fresh fill water rarely tests below 300 ppm.
pub const MIN_TDS_PPM: f64 = 300.0;

/// Highest total dissolved solids (ppm).
pub const MAX_TDS_PPM: f64 = 3000.0;

/// Inclusive bounds of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lowest valid value
    pub min: f64,
    /// Highest valid value
    pub max: f64,
}

impl Bounds {
    /// Create bounds from inclusive ends
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create bounds, swapping the ends if given in the wrong order
    pub fn ordered(a: f64, b: f64) -> Self {
        if a > b { Self::new(b, a) } else { Self::new(a, b) }
    }

    /// Whether `value` lies inside the bounds (NaN never does)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Process-wide read-only table of bounds and the base saturation pH.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LsiConstants {
    /// Base saturation pH calibration constant
    pub saturation_ph: f64,
    /// pH bounds
    pub ph: Bounds,
    /// Temperature bounds (°F)
    pub temperature: Bounds,
    /// Calcium hardness bounds (ppm)
    pub calcium: Bounds,
    /// Total alkalinity bounds (ppm)
    pub alkalinity: Bounds,
    /// Cyanuric acid bounds (ppm)
    pub cya: Bounds,
    /// Total dissolved solids bounds (ppm)
    pub tds: Bounds,
}

/// The constants table. Immutable, safe to read from any thread.
pub static LSI_CONSTANTS: LsiConstants = LsiConstants {
    saturation_ph: BASE_SATURATION_PH,
    ph: Bounds::new(MIN_PH, MAX_PH),
    temperature: Bounds::new(MIN_TEMP_F, MAX_TEMP_F),
    calcium: Bounds::new(MIN_CALCIUM_PPM, MAX_CALCIUM_PPM),
    alkalinity: Bounds::new(MIN_ALKALINITY_PPM, MAX_ALKALINITY_PPM),
    cya: Bounds::new(MIN_CYA_PPM, MAX_CYA_PPM),
    tds: Bounds::new(MIN_TDS_PPM, MAX_TDS_PPM),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_swap_reversed_ends() {
        let b = Bounds::ordered(10.0, 2.0);
        assert_eq!(b.min, 2.0);
        assert_eq!(b.max, 10.0);
        assert_eq!(b.span(), 8.0);
    }

    #[test]
    fn bounds_reject_nan() {
        assert!(LSI_CONSTANTS.ph.contains(7.4));
        assert!(LSI_CONSTANTS.ph.contains(MAX_PH));
        assert!(!LSI_CONSTANTS.ph.contains(f64::NAN));
        assert!(!LSI_CONSTANTS.ph.contains(8.5));
    }

    #[test]
    fn table_matches_named_constants() {
        assert_eq!(LSI_CONSTANTS.saturation_ph, BASE_SATURATION_PH);
        assert_eq!(LSI_CONSTANTS.tds.min, MIN_TDS_PPM);
        assert_eq!(LSI_CONSTANTS.calcium.max, MAX_CALCIUM_PPM);
    }
}
