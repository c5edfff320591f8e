//! History export
//!
//! Writes a history snapshot out as CSV for offline review.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::HistoryRecord;

/// Column order matches the panel's time-series chart
const COLUMNS: &[&str] = &[
    "time",
    "fuel_pct",
    "battery_pct",
    "solar_kw",
    "coolant_c",
    "comms",
    "solar_pct",
    "thermal_margin",
];

/// Write history records to a CSV file, oldest first.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[HistoryRecord]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", COLUMNS.join(","))?;

    for r in records {
        writeln!(
            writer,
            "{},{:.1},{:.1},{:.1},{:.1},{},{:.1},{:.1}",
            r.timestamp.format("%Y-%m-%d %H:%M:%S"),
            r.fuel_pct,
            r.battery_pct,
            r.solar_kw,
            r.coolant_c,
            r.comms,
            r.solar_pct,
            r.thermal_margin,
        )?;
    }

    writer.flush()?;
    Ok(())
}
