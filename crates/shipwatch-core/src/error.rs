//! Error types for configuration validation

use thiserror::Error;

/// Errors raised when externally supplied configuration is out of range.
///
/// The core itself never fails at runtime: generation and derivation clamp
/// defensively. These errors exist so the presentation layer can reject bad
/// configuration at the boundary instead of silently clamping it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Jitter percentage outside its documented [0, 100] range
    #[error("Jitter percentage {0} outside [0, 100]")]
    JitterOutOfRange(f64),

    /// A threshold field outside its documented range
    #[error("Threshold '{field}' value {value} outside [{min}, {max}]")]
    ThresholdOutOfRange {
        /// Name of the offending threshold field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound of the documented range
        min: f64,
        /// Upper bound of the documented range
        max: f64,
    },
}
