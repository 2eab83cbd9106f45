//! Integration tests against the real CoolProp backend, asserting
//! published fluid data.

use approx::assert_relative_eq;
use refcurves::backend::coolprop::CoolPropModel;
use refcurves::pipeline::density;
use refcurves::{enthalpy_estimates, Gas, PropertyModel};

// ═══════════════════════════════════════════════════════════════════
//  Critical points — known values
// ═══════════════════════════════════════════════════════════════════

#[test]
fn r290_critical_point() {
    // R290: Tc ≈ 96.74 °C, Pc ≈ 42.51 bar
    let mut r290 = CoolPropModel::new(Gas::R290).unwrap();
    let crit = r290.critical_point().unwrap();

    assert!(
        (crit.temperature - 96.74).abs() < 0.5,
        "R290 Tc expected ≈ 96.74 °C, got {:.4}",
        crit.temperature
    );
    assert!(
        (crit.pressure - 4.251e6).abs() < 5e4,
        "R290 Pc expected ≈ 42.51 bar, got {:.4} bar",
        crit.pressure / 1e5
    );
}

#[test]
fn r32_critical_temperature() {
    // R32: Tc ≈ 78.1 °C
    let mut r32 = CoolPropModel::new(Gas::R32).unwrap();
    let crit = r32.critical_point().unwrap();
    assert!(
        (crit.temperature - 78.1).abs() < 1.0,
        "R32 Tc expected ≈ 78.1 °C, got {:.4}",
        crit.temperature
    );
}

#[test]
fn r410a_backend_constructs_and_reports_its_critical_point() {
    // R410A resolves to CoolProp's predefined mixture; Tc ≈ 71.3 °C
    let mut r410a = CoolPropModel::new(Gas::R410A).unwrap();
    let crit = r410a.critical_point().unwrap();
    assert!(
        (crit.temperature - 71.3).abs() < 2.0,
        "R410A Tc expected ≈ 71.3 °C, got {:.4}",
        crit.temperature
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Saturation lookups — known values
// ═══════════════════════════════════════════════════════════════════

#[test]
fn r290_saturation_pressure_at_minus_40c() {
    // R290: Psat(-40 °C) ≈ 1.11 bar
    let mut r290 = CoolPropModel::new(Gas::R290).unwrap();
    let dew = r290.dew_point_at_temperature(-40.0).unwrap();
    assert!(
        (dew.pressure - 1.111e5).abs() < 3e3,
        "R290 Psat(-40 °C) expected ≈ 1.11 bar, got {:.4} bar",
        dew.pressure / 1e5
    );
}

#[test]
fn dew_point_temperature_pressure_round_trip() {
    let mut r290 = CoolPropModel::new(Gas::R290).unwrap();
    let dew = r290.dew_point_at_temperature(10.0).unwrap();
    let back = r290.dew_point_at_pressure(dew.pressure).unwrap();
    assert!(
        (back.temperature - 10.0).abs() < 0.1,
        "T → P → T round trip should return ≈ 10 °C, got {:.4}",
        back.temperature
    );
}

#[test]
fn bubble_point_is_denser_than_dew_point() {
    let mut r32 = CoolPropModel::new(Gas::R32).unwrap();
    let dew = r32.dew_point_at_temperature(0.0).unwrap();
    let bubble = r32.bubble_point_at_temperature(0.0).unwrap();
    assert!(
        bubble.density > dew.density,
        "D_liq ({:.2}) should be > D_vap ({:.2})",
        bubble.density,
        dew.density
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Density reference sweep — end to end
// ═══════════════════════════════════════════════════════════════════

#[test]
fn r290_density_reference_points_are_complete_and_rise_toward_critical() {
    let mut r290 = CoolPropModel::new(Gas::R290).unwrap();
    let points = density::sample_reference_points(&mut r290, Gas::R290).unwrap();

    assert_eq!(points.temperatures.len(), density::REFERENCE_POINTS);
    let densities: Vec<f64> = points
        .densities
        .iter()
        .enumerate()
        .map(|(i, d)| {
            d.value()
                .unwrap_or_else(|| panic!("point {i} unexpectedly missing"))
        })
        .collect();

    // Saturated-vapor density grows monotonically toward the critical
    // point (≈ 2.6 kg/m³ at -40 °C up to the critical density).
    for pair in densities.windows(2) {
        assert!(
            pair[1] > pair[0],
            "vapor density must rise with temperature, got {} then {}",
            pair[0],
            pair[1]
        );
    }
    assert!(
        (densities[0] - 2.6).abs() < 0.3,
        "R290 D_vap(-40 °C) expected ≈ 2.6 kg/m³, got {:.3}",
        densities[0]
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Cycle estimates on the real backend
// ═══════════════════════════════════════════════════════════════════

#[test]
fn r290_cycle_energy_balance() {
    let mut r290 = CoolPropModel::new(Gas::R290).unwrap();
    let cycle = enthalpy_estimates(&mut r290, 0.0, 40.0).unwrap();

    assert!(cycle.evaporation > 0.0);
    assert!(cycle.condensation > 0.0);
    assert!(cycle.compression > 0.0);
    assert_relative_eq!(
        cycle.compression,
        cycle.condensation - cycle.evaporation,
        max_relative = 1e-9
    );
}

#[test]
fn inverted_cycle_pair_fails_on_the_real_backend() {
    let mut r290 = CoolPropModel::new(Gas::R290).unwrap();
    assert!(enthalpy_estimates(&mut r290, 40.0, 0.0).is_err());
}
