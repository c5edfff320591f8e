//! Telemetry History
//!
//! Bounded, time-ordered log of samples backing the panel's charts.

mod export;

pub use export::write_csv;

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::telemetry::{CommsStatus, DerivedReading, Reading};

/// Default number of records retained before the oldest are evicted
pub const DEFAULT_CAPACITY: usize = 500;

/// One history row: a reading with its derived metrics flattened in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Sample time, second precision
    pub timestamp: DateTime<Utc>,
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
    /// Solar output on the 0-100 dial scale
    pub solar_pct: f64,
    /// Coolant headroom, 0-100
    pub thermal_margin: f64,
}

impl HistoryRecord {
    /// Flatten a reading and its derived metrics into one row
    pub fn new(reading: &Reading, derived: &DerivedReading) -> Self {
        Self {
            timestamp: reading.timestamp,
            fuel_pct: reading.fuel_pct,
            battery_pct: reading.battery_pct,
            solar_kw: reading.solar_kw,
            coolant_c: reading.coolant_c,
            comms: reading.comms,
            solar_pct: derived.solar_pct,
            thermal_margin: derived.thermal_margin,
        }
    }
}

/// Ring buffer of history records, append order = chronological order.
///
/// Single producer, one append per tick. When full, the oldest record is
/// evicted so the charts keep a rolling window rather than growing
/// without bound for the life of a session.
pub struct HistoryBuffer {
    buffer: VecDeque<HistoryRecord>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer retaining at most `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one record, evicting the oldest when at capacity. O(1).
    pub fn append(&mut self, record: HistoryRecord) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
            tracing::debug!(capacity = self.capacity, "history full, evicting oldest record");
        }
        self.buffer.push_back(record);
    }

    /// Read-only view of the retained records, oldest first
    pub fn records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.buffer.iter()
    }

    /// Clone the retained records into an owned, ordered snapshot
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        self.buffer.iter().cloned().collect()
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when no records are retained
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Maximum number of records retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all records (explicit session reset)
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Timestamp of the newest record, if any
    pub fn latest_timestamp(&self) -> Option<DateTime<Utc>> {
        self.buffer.back().map(|r| r.timestamp)
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}
