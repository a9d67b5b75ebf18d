//! Water sample fixtures with known outcomes
//!
//! Expected indices were derived by hand from the factor formulas and are
//! pinned here as regression values.

use lsi_core::{BalanceStatus, WaterParameters};

/// Named water sample with its expected index
pub struct WaterScenario {
    pub name: &'static str,
    pub params: WaterParameters,
    pub expected_lsi: f64,
    pub expected_status: BalanceStatus,
}

/// Outdoor pool at the reference point
pub fn reference_pool() -> WaterScenario {
    WaterScenario {
        name: "reference_pool",
        params: WaterParameters::new(7.5, 80.0, 250.0, 120.0, 30.0, 300.0),
        expected_lsi: -0.0387985101987951,
        expected_status: BalanceStatus::Balanced,
    }
}

/// Calculator defaults: hot spa with stabilizer
pub fn default_spa() -> WaterScenario {
    WaterScenario {
        name: "default_spa",
        params: WaterParameters::default(),
        expected_lsi: -0.13239872354340942,
        expected_status: BalanceStatus::Balanced,
    }
}

/// Soft, low-pH fill water
pub fn soft_acidic_fill() -> WaterScenario {
    WaterScenario {
        name: "soft_acidic_fill",
        params: WaterParameters::new(6.8, 80.0, 100.0, 60.0, 30.0, 500.0),
        expected_lsi: -1.5224985803366922,
        expected_status: BalanceStatus::Corrosive,
    }
}

/// Hard, high-pH spa water with no stabilizer
pub fn hard_hot_spa() -> WaterScenario {
    WaterScenario {
        name: "hard_hot_spa",
        params: WaterParameters::new(8.2, 104.0, 600.0, 180.0, 0.0, 2000.0),
        expected_lsi: 1.49486246452995,
        expected_status: BalanceStatus::ScaleForming,
    }
}

/// Every scenario
pub fn all() -> [WaterScenario; 4] {
    [reference_pool(), default_spa(), soft_acidic_fill(), hard_hot_spa()]
}
