//! Alert Evaluation
//!
//! Compares the current reading against configurable thresholds and
//! produces the ordered list of messages shown in the panel's alert
//! banner. Evaluation order is fixed (fuel, battery, solar, coolant,
//! comms) and every boundary is inclusive: a reading exactly on a "low"
//! threshold alerts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::telemetry::{CommsStatus, DerivedReading, Reading};

/// Which check raised an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    /// Fuel at or below its low threshold
    FuelLow,
    /// Battery at or below its low threshold
    BatteryLow,
    /// Solar output at or below its low threshold (raw kW)
    SolarLow,
    /// Coolant at or above its high threshold
    CoolantHigh,
    /// Comms link below the required minimum status
    CommsBelowMinimum,
}

/// One active alert with its display message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// The check that fired
    pub kind: AlertKind,
    /// Human-readable banner line
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Alert thresholds, owned by the presentation layer and passed in by
/// reference on every evaluation. May change between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Fuel low threshold (%), range [0, 100]
    pub fuel_low: f64,
    /// Battery low threshold (%), range [0, 100]
    pub battery_low: f64,
    /// Solar output low threshold (kW, raw units), range [0, 200]
    pub solar_low: f64,
    /// Coolant high threshold (°C), range [40, 200]
    pub coolant_high: f64,
    /// Minimum acceptable comms status
    pub comms_min: CommsStatus,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            fuel_low: 25.0,
            battery_low: 30.0,
            solar_low: 60.0,
            coolant_high: 120.0,
            comms_min: CommsStatus::Degraded,
        }
    }
}

impl ThresholdConfig {
    /// Check every field against its documented range.
    ///
    /// The evaluator itself never rejects a config; this is for the
    /// boundary where configuration enters the core.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |field: &'static str, value: f64, min: f64, max: f64| {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::ThresholdOutOfRange {
                    field,
                    value,
                    min,
                    max,
                })
            }
        };
        check("fuel_low", self.fuel_low, 0.0, 100.0)?;
        check("battery_low", self.battery_low, 0.0, 100.0)?;
        check("solar_low", self.solar_low, 0.0, 200.0)?;
        check("coolant_high", self.coolant_high, 40.0, 200.0)?;
        Ok(())
    }
}

/// Evaluate the current reading against the thresholds.
///
/// Returns alerts in display order (fuel, battery, solar, coolant,
/// comms), omitting checks that pass. An empty vec means all systems
/// nominal. Pure: identical inputs always produce identical output.
///
/// Message text renders reading values with one decimal place (the
/// precision readings are produced at) and thresholds as configured.
pub fn evaluate(
    reading: &Reading,
    derived: &DerivedReading,
    thresholds: &ThresholdConfig,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if reading.fuel_pct <= thresholds.fuel_low {
        alerts.push(Alert {
            kind: AlertKind::FuelLow,
            message: format!(
                "Fuel low: {:.1}% \u{2264} {}%",
                reading.fuel_pct, thresholds.fuel_low
            ),
        });
    }
    if reading.battery_pct <= thresholds.battery_low {
        alerts.push(Alert {
            kind: AlertKind::BatteryLow,
            message: format!(
                "Battery low: {:.1}% \u{2264} {}%",
                reading.battery_pct, thresholds.battery_low
            ),
        });
    }
    // Raw kW, not the derived percent
    if reading.solar_kw <= thresholds.solar_low {
        alerts.push(Alert {
            kind: AlertKind::SolarLow,
            message: format!(
                "Solar output low: {:.1} kW \u{2264} {} kW",
                reading.solar_kw, thresholds.solar_low
            ),
        });
    }
    if reading.coolant_c >= thresholds.coolant_high {
        alerts.push(Alert {
            kind: AlertKind::CoolantHigh,
            message: format!(
                "Coolant temp high: {:.1} \u{b0}C \u{2265} {} \u{b0}C",
                reading.coolant_c, thresholds.coolant_high
            ),
        });
    }
    if reading.comms < thresholds.comms_min {
        alerts.push(Alert {
            kind: AlertKind::CommsBelowMinimum,
            message: format!(
                "Comms below minimum: {} < {}",
                reading.comms, thresholds.comms_min
            ),
        });
    }

    if !alerts.is_empty() {
        tracing::warn!(
            count = alerts.len(),
            thermal_margin = derived.thermal_margin,
            solar_pct = derived.solar_pct,
            "telemetry threshold breach"
        );
    }

    alerts
}
