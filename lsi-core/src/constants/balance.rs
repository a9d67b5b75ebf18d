//! Water Balance Thresholds
//!
//! Fixed interpretation bands for the saturation index. Not configurable.

/// Lower edge of the balanced band (inclusive).
///
/// Below this the water is undersaturated with calcium carbonate and will
/// dissolve plaster, grout and metal fittings.
pub const BALANCED_LSI_MIN: f64 = -0.3;

/// Upper edge of the balanced band (inclusive).
///
/// Above this the water is oversaturated and deposits scale.
pub const BALANCED_LSI_MAX: f64 = 0.3;
