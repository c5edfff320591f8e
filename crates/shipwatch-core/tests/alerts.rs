use chrono::Utc;
use pretty_assertions::assert_eq;
use shipwatch_core::alerts::{evaluate, AlertKind, ThresholdConfig};
use shipwatch_core::telemetry::{derive, CommsStatus, Reading};

fn reading(fuel: f64, battery: f64, solar: f64, coolant: f64, comms: CommsStatus) -> Reading {
    Reading {
        fuel_pct: fuel,
        battery_pct: battery,
        solar_kw: solar,
        coolant_c: coolant,
        comms,
        timestamp: Utc::now(),
    }
}

fn reference_thresholds() -> ThresholdConfig {
    ThresholdConfig {
        fuel_low: 25.0,
        battery_low: 30.0,
        solar_low: 60.0,
        coolant_high: 120.0,
        comms_min: CommsStatus::Degraded,
    }
}

#[test]
fn test_nominal_scenario() {
    let r = reading(76.0, 88.0, 95.0, 87.0, CommsStatus::Nominal);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());
    assert_eq!(alerts, vec![]);
}

#[test]
fn test_multi_alert_scenario() {
    let r = reading(20.0, 88.0, 95.0, 130.0, CommsStatus::Outage);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());

    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].kind, AlertKind::FuelLow);
    assert_eq!(alerts[0].message, "Fuel low: 20.0% \u{2264} 25%");
    assert_eq!(alerts[1].kind, AlertKind::CoolantHigh);
    assert_eq!(
        alerts[1].message,
        "Coolant temp high: 130.0 \u{b0}C \u{2265} 120 \u{b0}C"
    );
    assert_eq!(alerts[2].kind, AlertKind::CommsBelowMinimum);
    assert_eq!(alerts[2].message, "Comms below minimum: Outage < Degraded");
}

#[test]
fn test_fuel_boundary_equality_triggers() {
    let r = reading(25.0, 88.0, 95.0, 87.0, CommsStatus::Nominal);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::FuelLow);
}

#[test]
fn test_fuel_just_above_boundary_passes() {
    let r = reading(25.1, 88.0, 95.0, 87.0, CommsStatus::Nominal);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());
    assert_eq!(alerts, vec![]);
}

#[test]
fn test_coolant_boundary_equality_triggers() {
    let r = reading(76.0, 88.0, 95.0, 120.0, CommsStatus::Nominal);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::CoolantHigh);
}

#[test]
fn test_comms_degraded_below_nominal_minimum() {
    let thresholds = ThresholdConfig {
        comms_min: CommsStatus::Nominal,
        ..reference_thresholds()
    };
    let r = reading(76.0, 88.0, 95.0, 87.0, CommsStatus::Degraded);
    let alerts = evaluate(&r, &derive(&r), &thresholds);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::CommsBelowMinimum);
}

#[test]
fn test_comms_nominal_meets_degraded_minimum() {
    let r = reading(76.0, 88.0, 95.0, 87.0, CommsStatus::Nominal);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());
    assert_eq!(alerts, vec![]);
}

#[test]
fn test_all_five_checks_fire_in_order() {
    let r = reading(10.0, 10.0, 10.0, 190.0, CommsStatus::Outage);
    let alerts = evaluate(&r, &derive(&r), &reference_thresholds());

    let kinds: Vec<_> = alerts.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AlertKind::FuelLow,
            AlertKind::BatteryLow,
            AlertKind::SolarLow,
            AlertKind::CoolantHigh,
            AlertKind::CommsBelowMinimum,
        ]
    );
}
