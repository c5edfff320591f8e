//! Derived Metrics
//!
//! Secondary quantities computed from a raw reading:
//! - Solar percent: raw 0-200 kW output mapped onto a 0-100 dial scale
//! - Thermal margin: headroom below the 200 °C coolant limit
//!
//! Both are clamped to [0, 100] so gauges and charts never receive
//! out-of-range values, however far the raw channels stray.

use serde::{Deserialize, Serialize};

use super::Reading;

/// Full-scale solar array output (kW) for the percent mapping
pub const SOLAR_FULL_SCALE_KW: f64 = 200.0;

/// Coolant temperature (°C) at which thermal margin reaches zero
pub const COOLANT_LIMIT_C: f64 = 200.0;

/// Secondary metrics computed from a [`Reading`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedReading {
    /// Solar output as a percentage of full scale, clamped to [0, 100]
    pub solar_pct: f64,
    /// Degrees of coolant headroom, clamped to [0, 100]
    pub thermal_margin: f64,
}

/// Compute derived metrics for a reading. Pure; never fails.
pub fn derive(reading: &Reading) -> DerivedReading {
    DerivedReading {
        solar_pct: (reading.solar_kw / SOLAR_FULL_SCALE_KW * 100.0).clamp(0.0, 100.0),
        thermal_margin: (COOLANT_LIMIT_C - reading.coolant_c).clamp(0.0, 100.0),
    }
}
