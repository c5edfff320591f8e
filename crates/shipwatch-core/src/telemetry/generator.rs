//! Telemetry generator - simulated spacecraft sensor data
//!
//! Produces one noisy sample per tick by applying bounded, symmetric
//! jitter around a fixed baseline. There is no real downlink behind this;
//! it exists so the panel has live-looking data to render.

use chrono::{Timelike, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::{Baseline, CommsStatus, Reading};
use crate::error::ConfigError;

/// Strategy for resampling the comms link status each tick.
///
/// The previous status is passed in so a stateful link model (e.g. one
/// with dropout persistence) can be slotted in; the default policy
/// ignores it.
pub trait CommsPolicy {
    /// Produce the comms status for the next tick.
    fn next(&mut self, previous: CommsStatus, rng: &mut StdRng) -> CommsStatus;
}

/// Reference comms policy: 3-in-4 Nominal, 1-in-4 Degraded, memoryless.
#[derive(Debug, Default, Clone, Copy)]
pub struct BiasedNominal;

impl CommsPolicy for BiasedNominal {
    fn next(&mut self, _previous: CommsStatus, rng: &mut StdRng) -> CommsStatus {
        if rng.gen_range(0..4) < 3 {
            CommsStatus::Nominal
        } else {
            CommsStatus::Degraded
        }
    }
}

/// Simulated telemetry source for one spacecraft
pub struct TelemetryGenerator {
    /// Random number generator (seedable for deterministic tests)
    rng: StdRng,
    /// Comms link resampling strategy
    comms_policy: Box<dyn CommsPolicy + Send>,
    /// Comms status from the previous tick, fed to the policy
    last_comms: CommsStatus,
}

impl TelemetryGenerator {
    /// Create a generator with an entropy-seeded RNG and the reference
    /// comms policy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a generator from a fixed seed, for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            comms_policy: Box::new(BiasedNominal),
            last_comms: CommsStatus::Nominal,
        }
    }

    /// Replace the comms resampling strategy.
    pub fn set_comms_policy(&mut self, policy: Box<dyn CommsPolicy + Send>) {
        self.comms_policy = policy;
    }

    /// Produce one sample around `baseline`.
    ///
    /// Each numeric channel is perturbed by a uniform draw from
    /// `[-span, span]` where `span = value * jitter_pct / 100`, clamped at
    /// zero and rounded to one decimal place. A jitter of 0 reproduces
    /// the baseline exactly. `jitter_pct` is clamped into `[0, 100]`;
    /// callers that want out-of-range values rejected instead should run
    /// [`validate_jitter`] first.
    pub fn generate(&mut self, baseline: &Baseline, jitter_pct: f64) -> Reading {
        let jitter = jitter_pct.clamp(0.0, 100.0);

        let comms = self.comms_policy.next(self.last_comms, &mut self.rng);
        self.last_comms = comms;

        let now = Utc::now();

        Reading {
            fuel_pct: self.apply_jitter(baseline.fuel_pct, jitter),
            battery_pct: self.apply_jitter(baseline.battery_pct, jitter),
            solar_kw: self.apply_jitter(baseline.solar_kw, jitter),
            coolant_c: self.apply_jitter(baseline.coolant_c, jitter),
            comms,
            // Second precision: the panel renders and charts whole seconds
            timestamp: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    /// Jitter one channel: uniform perturbation, clamp at 0, round to 0.1.
    fn apply_jitter(&mut self, value: f64, jitter_pct: f64) -> f64 {
        if jitter_pct <= 0.0 {
            return value;
        }
        let span = value * jitter_pct / 100.0;
        if span <= 0.0 {
            return value;
        }
        let perturbed = value + self.rng.gen_range(-span..=span);
        (perturbed.max(0.0) * 10.0).round() / 10.0
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a jitter percentage against its documented range.
pub fn validate_jitter(jitter_pct: f64) -> Result<(), ConfigError> {
    if !(0.0..=100.0).contains(&jitter_pct) {
        return Err(ConfigError::JitterOutOfRange(jitter_pct));
    }
    Ok(())
}
