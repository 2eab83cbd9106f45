use approx::assert_relative_eq;
use refcurves::fit::{evaluate, fit_linear, fit_through_origin};
use refcurves::Sample;

/// A small synthetic grid with an exactly linear response.
fn synthetic_table<F: Fn(f64, f64) -> f64>(f: F) -> (Vec<f64>, Vec<f64>, Vec<Sample>) {
    let mut t_evap = Vec::new();
    let mut t_cond = Vec::new();
    let mut actual = Vec::new();
    for te in 1..=6 {
        for tc in 1..=6 {
            let (te, tc) = (te as f64 * 5.0, tc as f64 * 5.0);
            t_evap.push(te);
            t_cond.push(tc);
            actual.push(Sample::Value(f(te, tc)));
        }
    }
    (t_evap, t_cond, actual)
}

// ═══════════════════════════════════════════════════════════════════
//  Formula fits (with intercept)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn linear_fit_recovers_exact_coefficients() {
    let (t_evap, t_cond, actual) = synthetic_table(|te, tc| 5_000.0 + 200.0 * te - 300.0 * tc);
    let model = fit_linear("dH_evap", &t_evap, &t_cond, &actual).unwrap();

    assert_relative_eq!(model.intercept.unwrap(), 5_000.0, max_relative = 1e-6);
    assert_relative_eq!(model.coeff_t_evap, 200.0, max_relative = 1e-6);
    assert_relative_eq!(model.coeff_t_cond, -300.0, max_relative = 1e-6);
    assert!(
        model.r_squared > 0.999_999,
        "exact data must fit almost perfectly, R² = {}",
        model.r_squared
    );
    assert_eq!(model.observations, 36);
}

#[test]
fn missing_rows_are_ignored_by_the_fit() {
    let (t_evap, t_cond, mut actual) = synthetic_table(|te, tc| 1_000.0 + 50.0 * te + 20.0 * tc);
    actual[0] = Sample::Missing;
    actual[7] = Sample::Missing;
    actual[35] = Sample::Missing;

    let model = fit_linear("dH_cond", &t_evap, &t_cond, &actual).unwrap();
    assert_eq!(model.observations, 33);
    assert_relative_eq!(model.coeff_t_evap, 50.0, max_relative = 1e-6);
    assert_relative_eq!(model.coeff_t_cond, 20.0, max_relative = 1e-6);
}

#[test]
fn too_few_valid_rows_is_an_error() {
    let t = [0.0, 1.0, 2.0];
    let actual = [Sample::Value(1.0), Sample::Missing, Sample::Missing];
    assert!(fit_linear("dH_evap", &t, &t, &actual).is_err());
}

// ═══════════════════════════════════════════════════════════════════
//  Through-origin fit (compression model)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn origin_fit_recovers_exact_coefficients_without_an_intercept() {
    let (t_evap, t_cond, actual) = synthetic_table(|te, tc| 150.0 * te + 250.0 * tc);
    let model = fit_through_origin("dH_comp", &t_evap, &t_cond, &actual).unwrap();

    assert!(model.intercept.is_none());
    assert_relative_eq!(model.coeff_t_evap, 150.0, max_relative = 1e-9);
    assert_relative_eq!(model.coeff_t_cond, 250.0, max_relative = 1e-9);
    assert!(
        model.r_squared > 0.999_999_9,
        "exact origin data must fit perfectly, R² = {}",
        model.r_squared
    );
}

#[test]
fn origin_fit_on_exact_data_has_near_zero_residual_fraction_everywhere() {
    let (t_evap, t_cond, actual) = synthetic_table(|te, tc| 150.0 * te + 250.0 * tc);
    let model = fit_through_origin("dH_comp", &t_evap, &t_cond, &actual).unwrap();
    let surface = evaluate(model, &t_evap, &t_cond, &actual);

    assert_eq!(surface.predicted.len(), actual.len());
    for (i, residual) in surface.residual_fraction.iter().enumerate() {
        let r = residual
            .value()
            .unwrap_or_else(|| panic!("row {i} should have a residual"));
        assert!(r.abs() < 1e-9, "row {i}: residual fraction {r} too large");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Residual fraction degeneracies
// ═══════════════════════════════════════════════════════════════════

#[test]
fn residual_fraction_is_missing_for_missing_actuals() {
    let (t_evap, t_cond, mut actual) = synthetic_table(|te, tc| 10.0 * te + tc);
    actual[4] = Sample::Missing;

    let model = fit_linear("dH_evap", &t_evap, &t_cond, &actual).unwrap();
    let surface = evaluate(model, &t_evap, &t_cond, &actual);

    assert!(surface.residual_fraction[4].is_missing());
    // A prediction still exists for the missing row.
    assert!(surface.predicted[4].is_finite());
}

#[test]
fn residual_fraction_is_missing_for_a_zero_actual() {
    // Division by the actual value is deliberately unguarded; a zero
    // actual normalizes to a missing residual.
    let t = [1.0, 2.0, 3.0, 4.0];
    let actual = [
        Sample::Value(0.0),
        Sample::Value(2.0),
        Sample::Value(3.0),
        Sample::Value(4.0),
    ];
    let model = fit_through_origin("dH_comp", &t, &t, &actual).unwrap();
    let surface = evaluate(model, &t, &t, &actual);

    assert!(surface.residual_fraction[0].is_missing());
}
