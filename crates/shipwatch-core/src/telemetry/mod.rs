//! Telemetry Model
//!
//! Baseline values, per-tick readings, and the simulated generator.

mod derived;
mod generator;

pub use derived::{derive, DerivedReading};
pub use generator::{validate_jitter, BiasedNominal, CommsPolicy, TelemetryGenerator};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comms link quality, ordered worst to best.
///
/// The derived `Ord` follows declaration order, so
/// `Outage < Degraded < Nominal` and the ordinal ranks are 0, 1, 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CommsStatus {
    /// Link down
    Outage,
    /// Link up with reduced quality
    Degraded,
    /// Link healthy
    Nominal,
}

impl CommsStatus {
    /// Ordinal rank: Outage = 0, Degraded = 1, Nominal = 2
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for CommsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommsStatus::Outage => "Outage",
            CommsStatus::Degraded => "Degraded",
            CommsStatus::Nominal => "Nominal",
        };
        write!(f, "{}", name)
    }
}

/// Fixed nominal telemetry values jitter is applied around.
///
/// Immutable after construction; one per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseline {
    /// Spacecraft designation shown on the panel
    pub ship_name: String,
    /// Nominal fuel level (%)
    pub fuel_pct: f64,
    /// Nominal battery charge (%)
    pub battery_pct: f64,
    /// Nominal solar array output (kW)
    pub solar_kw: f64,
    /// Nominal coolant temperature (°C)
    pub coolant_c: f64,
    /// Initial comms status
    pub comms: CommsStatus,
}

impl Baseline {
    /// The reference spacecraft used by the demo panel.
    pub fn reference() -> Self {
        Self {
            ship_name: "GI-01 ORION".to_string(),
            fuel_pct: 76.0,
            battery_pct: 88.0,
            solar_kw: 95.0,
            coolant_c: 87.0,
            comms: CommsStatus::Nominal,
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::reference()
    }
}

/// One telemetry sample, immutable once produced.
///
/// All numeric channels are non-negative and rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Fuel level (%)
    pub fuel_pct: f64,
    /// Battery charge (%)
    pub battery_pct: f64,
    /// Solar array output (kW)
    pub solar_kw: f64,
    /// Coolant temperature (°C)
    pub coolant_c: f64,
    /// Comms link status
    pub comms: CommsStatus,
    /// Wall-clock sample time, second precision
    pub timestamp: DateTime<Utc>,
}
