//! # Shipwatch Core Library
//!
//! Core functionality for the Shipwatch spacecraft health panel.

#![warn(missing_docs)]

//!
//! This library provides:
//! - Simulated telemetry generation (jitter around a fixed baseline)
//! - Derived metrics (solar percent, thermal margin)
//! - Bounded, time-ordered telemetry history with CSV export
//! - Threshold-based alert evaluation
//! - Dashboard layout configuration (gauges, bands, charts)
//!
//! The library is the data side of the panel: the presentation layer
//! (readouts, gauges, charts, alert banner) lives outside this crate
//! and drives it one tick at a time.
//!
//! ## Example
//!
//! ```rust
//! use shipwatch_core::alerts::ThresholdConfig;
//! use shipwatch_core::session::TelemetrySession;
//! use shipwatch_core::telemetry::Baseline;
//!
//! let mut session = TelemetrySession::new(Baseline::reference());
//! let thresholds = ThresholdConfig::default();
//!
//! let report = session.tick(2.0, &thresholds);
//! if report.alerts.is_empty() {
//!     println!("All systems nominal.");
//! }
//! println!("{} records in history", session.history().len());
//! ```

pub mod alerts;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod session;
pub mod telemetry;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::alerts::{evaluate, Alert, AlertKind, ThresholdConfig};
    pub use crate::dashboard::{DashboardLayout, GaugeBands, GaugeConfig, GaugeType};
    pub use crate::error::ConfigError;
    pub use crate::history::{HistoryBuffer, HistoryRecord};
    pub use crate::session::{TelemetrySession, TickReport};
    pub use crate::telemetry::{
        derive, validate_jitter, Baseline, CommsPolicy, CommsStatus, DerivedReading, Reading,
        TelemetryGenerator,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
