//! Water balance classification

use core::fmt;

use crate::constants::balance::{BALANCED_LSI_MAX, BALANCED_LSI_MIN};
use crate::traits::Validatable;

/// Tendency of the water indicated by its saturation index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// LSI below -0.3: dissolves calcium carbonate
    Corrosive,
    /// LSI within [-0.3, 0.3]
    Balanced,
    /// LSI above 0.3: deposits calcium carbonate
    ScaleForming,
}

impl BalanceStatus {
    /// Classify an index. `None` for NaN or infinite input, which a display
    /// should render as "invalid input".
    pub fn classify(lsi: f64) -> Option<Self> {
        if !lsi.is_valid() {
            return None;
        }
        Some(if lsi < BALANCED_LSI_MIN {
            BalanceStatus::Corrosive
        } else if lsi > BALANCED_LSI_MAX {
            BalanceStatus::ScaleForming
        } else {
            BalanceStatus::Balanced
        })
    }

    /// Whether no correction is needed
    pub fn is_balanced(self) -> bool {
        self == BalanceStatus::Balanced
    }

    /// Message shown under the index
    pub const fn message(self) -> &'static str {
        match self {
            BalanceStatus::Corrosive => "Water is undersaturated (tendency to be corrosive)",
            BalanceStatus::Balanced => "Water is properly balanced",
            BalanceStatus::ScaleForming => "Water is oversaturated (tendency to scale)",
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_balanced() {
        assert_eq!(BalanceStatus::classify(-0.3), Some(BalanceStatus::Balanced));
        assert_eq!(BalanceStatus::classify(0.3), Some(BalanceStatus::Balanced));
        assert_eq!(BalanceStatus::classify(0.0), Some(BalanceStatus::Balanced));
    }

    #[test]
    fn outside_band() {
        assert_eq!(BalanceStatus::classify(-0.31), Some(BalanceStatus::Corrosive));
        assert_eq!(BalanceStatus::classify(0.31), Some(BalanceStatus::ScaleForming));
        assert!(!BalanceStatus::Corrosive.is_balanced());
    }

    #[test]
    fn non_finite_has_no_status() {
        assert_eq!(BalanceStatus::classify(f64::NAN), None);
        assert_eq!(BalanceStatus::classify(f64::NEG_INFINITY), None);
        assert_eq!(BalanceStatus::classify(f64::INFINITY), None);
    }
}
