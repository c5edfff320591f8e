//! Dashboard Module
//!
//! Dashboard persistence and configuration: which widget renders each
//! telemetry channel, value ranges, color bands, and threshold markers.
//! Rendering itself happens outside this crate; the panel variants
//! (plain readouts, radial/bullet gauges, charts, styled banner) are all
//! driven from this one configuration model.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Widget types supported by the panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GaugeType {
    #[serde(rename = "digital_readout")]
    DigitalReadout,
    #[serde(rename = "radial_dial")]
    RadialDial,
    #[serde(rename = "bullet_bar")]
    BulletBar,
    #[serde(rename = "line_chart")]
    LineChart,
    #[serde(rename = "bar_chart")]
    BarChart,
    #[serde(rename = "pie_chart")]
    PieChart,
}

/// Green/yellow/red band edges for a gauge scale.
///
/// Values up to `yellow_from` render green, up to `red_from` yellow, and
/// the rest red (inverted scales swap the colors at render time).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GaugeBands {
    pub yellow_from: f64,
    pub red_from: f64,
}

/// Configuration for a single gauge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeConfig {
    pub id: String,
    pub gauge_type: GaugeType,
    /// History/record field driving this gauge
    pub channel: String,
    pub label: String,
    pub units: String,
    pub min_value: f64,
    pub max_value: f64,
    pub decimals: u32,
    /// Color band edges, when the widget draws bands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<GaugeBands>,
    /// Alert threshold marker drawn on the scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_marker: Option<f64>,
}

impl GaugeConfig {
    fn readout(id: &str, channel: &str, label: &str, units: &str, max: f64) -> Self {
        Self {
            id: id.to_string(),
            gauge_type: GaugeType::DigitalReadout,
            channel: channel.to_string(),
            label: label.to_string(),
            units: units.to_string(),
            min_value: 0.0,
            max_value: max,
            decimals: 1,
            bands: None,
            threshold_marker: None,
        }
    }
}

/// Complete panel layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardLayout {
    pub name: String,
    pub gauges: Vec<GaugeConfig>,
    /// Render the rolling time-series chart below the gauges
    pub show_history_chart: bool,
    /// Render the alert banner / nominal indicator
    pub show_alert_banner: bool,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            name: "Health Panel".to_string(),
            gauges: vec![
                GaugeConfig {
                    gauge_type: GaugeType::RadialDial,
                    bands: Some(GaugeBands {
                        yellow_from: 60.0,
                        red_from: 30.0,
                    }),
                    threshold_marker: Some(25.0),
                    ..GaugeConfig::readout("fuel_gauge", "fuel_pct", "Fuel", "%", 100.0)
                },
                GaugeConfig {
                    gauge_type: GaugeType::RadialDial,
                    bands: Some(GaugeBands {
                        yellow_from: 60.0,
                        red_from: 30.0,
                    }),
                    threshold_marker: Some(30.0),
                    ..GaugeConfig::readout("battery_gauge", "battery_pct", "Battery", "%", 100.0)
                },
                GaugeConfig {
                    gauge_type: GaugeType::RadialDial,
                    bands: Some(GaugeBands {
                        yellow_from: 60.0,
                        red_from: 30.0,
                    }),
                    // Solar threshold is configured in raw kW (60 of 200)
                    // but drawn on the 0-100 dial scale
                    threshold_marker: Some(30.0),
                    ..GaugeConfig::readout("solar_gauge", "solar_pct", "Solar (scaled)", "%", 100.0)
                },
                GaugeConfig {
                    gauge_type: GaugeType::RadialDial,
                    bands: Some(GaugeBands {
                        yellow_from: 60.0,
                        red_from: 30.0,
                    }),
                    threshold_marker: Some(80.0),
                    ..GaugeConfig::readout(
                        "thermal_gauge",
                        "thermal_margin",
                        "Thermal Margin",
                        "%",
                        100.0,
                    )
                },
                GaugeConfig {
                    gauge_type: GaugeType::BulletBar,
                    bands: Some(GaugeBands {
                        yellow_from: 33.0,
                        red_from: 67.0,
                    }),
                    ..GaugeConfig::readout("comms_gauge", "comms", "Comms", "", 100.0)
                },
            ],
            show_history_chart: true,
            show_alert_banner: true,
        }
    }
}

impl DashboardLayout {
    /// Save the layout as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load a layout from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Helper function to get the layout file name for a ship
pub fn layout_file_name(ship_name: &str) -> String {
    format!("{}.panel", ship_name.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_covers_all_channels() {
        let layout = DashboardLayout::default();
        let channels: Vec<_> = layout.gauges.iter().map(|g| g.channel.as_str()).collect();

        assert!(channels.contains(&"fuel_pct"));
        assert!(channels.contains(&"battery_pct"));
        assert!(channels.contains(&"solar_pct"));
        assert!(channels.contains(&"thermal_margin"));
        assert!(channels.contains(&"comms"));
        assert!(layout.show_alert_banner);
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = DashboardLayout::default();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(layout_file_name("GI-01 ORION"));
        layout.save(&path).unwrap();

        let loaded = DashboardLayout::load(&path).unwrap();
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_gauge_type_serde_names() {
        let json = serde_json::to_string(&GaugeType::RadialDial).unwrap();
        assert_eq!(json, "\"radial_dial\"");
        let back: GaugeType = serde_json::from_str("\"bullet_bar\"").unwrap();
        assert_eq!(back, GaugeType::BulletBar);
    }

    #[test]
    fn test_layout_file_name() {
        assert_eq!(layout_file_name("GI-01 ORION"), "gi-01_orion.panel");
    }
}
