//! Linear regression surfaces for the enthalpy-difference tables.
//!
//! The evaporation and condensation models are ordinary least squares with
//! an intercept, delegated to `linregress`'s formula API; rows containing
//! missing values are dropped by the library
//! (`InvalidValueHandling::DropInvalid`). The compression model is
//! constrained through the origin, which the formula API cannot express, so
//! it is solved with `nalgebra`'s SVD least squares over the valid rows.

use std::fmt::Write as _;

use linregress::{FormulaRegressionBuilder, InvalidValueHandling, RegressionDataBuilder};
use nalgebra::{DMatrix, DVector};

use crate::error::{CurveError, Result};
use crate::sample::Sample;

fn fit_err<E: std::fmt::Display>(err: E) -> CurveError {
    CurveError::Fit(err.to_string())
}

/// A fitted linear relationship between the two grid temperatures and one
/// enthalpy difference. Read-only after fitting.
#[derive(Debug, Clone)]
pub struct FittedModel {
    /// Response column name, e.g. `"dH_evap"`.
    pub response: &'static str,
    /// `None` for the origin-constrained compression model.
    pub intercept: Option<f64>,
    pub coeff_t_evap: f64,
    pub coeff_t_cond: f64,
    /// Standard errors aligned with `[intercept, T_e, T_c]`; only available
    /// from the formula fits.
    pub std_errors: Option<Vec<f64>>,
    /// p-values aligned with `[intercept, T_e, T_c]`; only available from
    /// the formula fits.
    pub p_values: Option<Vec<f64>>,
    /// Coefficient of determination. Uncentered convention for the
    /// origin-constrained model.
    pub r_squared: f64,
    pub r_squared_adj: Option<f64>,
    /// Number of valid (non-missing) rows the fit used.
    pub observations: usize,
}

impl FittedModel {
    /// Point prediction at one grid pair (°C, °C).
    pub fn predict(&self, t_evap: f64, t_cond: f64) -> f64 {
        self.intercept.unwrap_or(0.0) + self.coeff_t_evap * t_evap + self.coeff_t_cond * t_cond
    }

    /// Human-readable statistical summary, persisted to the model text
    /// artifact.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        match self.intercept {
            Some(_) => {
                let _ = writeln!(out, "{} ~ T_e + T_c", self.response);
            }
            None => {
                let _ = writeln!(out, "{} ~ 0 + T_e + T_c", self.response);
            }
        }
        let _ = writeln!(out, "  observations: {}", self.observations);
        match self.r_squared_adj {
            Some(adj) => {
                let _ = writeln!(
                    out,
                    "  R-squared:    {:.6}  (adj. {:.6})",
                    self.r_squared, adj
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "  R-squared:    {:.6}  (uncentered, through origin)",
                    self.r_squared
                );
            }
        }

        let mut terms: Vec<(&str, f64)> = Vec::with_capacity(3);
        if let Some(intercept) = self.intercept {
            terms.push(("intercept", intercept));
        }
        terms.push(("T_e", self.coeff_t_evap));
        terms.push(("T_c", self.coeff_t_cond));

        for (i, (name, coeff)) in terms.iter().enumerate() {
            let _ = write!(out, "  {name:<10} {coeff:>14.6e}");
            if let (Some(se), Some(p)) = (&self.std_errors, &self.p_values) {
                if let (Some(se), Some(p)) = (se.get(i), p.get(i)) {
                    let _ = write!(out, "   se {se:.4e}   p {p:.4}");
                }
            }
            let _ = writeln!(out);
        }
        out
    }
}

fn valid_count(samples: &[Sample]) -> usize {
    samples.iter().filter(|s| !s.is_missing()).count()
}

/// Fit `response ~ T_e + T_c` by ordinary least squares with an intercept.
/// Rows with a missing response are ignored by the regression library.
pub fn fit_linear(
    response: &'static str,
    t_evap: &[f64],
    t_cond: &[f64],
    actual: &[Sample],
) -> Result<FittedModel> {
    let observations = valid_count(actual);
    if observations < 3 {
        return Err(CurveError::Fit(format!(
            "{response}: {observations} valid rows, need at least 3"
        )));
    }

    let response_column: Vec<f64> = actual.iter().map(|s| s.to_f64()).collect();
    let data = vec![
        (response, response_column),
        ("T_e", t_evap.to_vec()),
        ("T_c", t_cond.to_vec()),
    ];
    let data = RegressionDataBuilder::new()
        .invalid_value_handling(InvalidValueHandling::DropInvalid)
        .build_from(data)
        .map_err(fit_err)?;

    let formula = format!("{response} ~ T_e + T_c");
    let fitted = FormulaRegressionBuilder::new()
        .data(&data)
        .formula(formula)
        .fit()
        .map_err(fit_err)?;

    // Parameter order: intercept, then regressors in formula order.
    let params = fitted.parameters();
    if params.len() != 3 {
        return Err(CurveError::Fit(format!(
            "{response}: expected 3 parameters, got {}",
            params.len()
        )));
    }

    Ok(FittedModel {
        response,
        intercept: Some(params[0]),
        coeff_t_evap: params[1],
        coeff_t_cond: params[2],
        std_errors: Some(fitted.se().to_vec()),
        p_values: Some(fitted.p_values().to_vec()),
        r_squared: fitted.rsquared(),
        r_squared_adj: Some(fitted.rsquared_adj()),
        observations,
    })
}

/// Fit `response ~ 0 + T_e + T_c` (no intercept) over the valid rows.
///
/// R² uses the uncentered total sum of squares, the usual convention for
/// through-origin fits.
pub fn fit_through_origin(
    response: &'static str,
    t_evap: &[f64],
    t_cond: &[f64],
    actual: &[Sample],
) -> Result<FittedModel> {
    let mut design = Vec::new();
    let mut responses = Vec::new();
    for ((&te, &tc), sample) in t_evap.iter().zip(t_cond).zip(actual) {
        if let Some(y) = sample.value() {
            design.push(te);
            design.push(tc);
            responses.push(y);
        }
    }

    let observations = responses.len();
    if observations < 2 {
        return Err(CurveError::Fit(format!(
            "{response}: {observations} valid rows, need at least 2"
        )));
    }

    let x = DMatrix::from_row_slice(observations, 2, &design);
    let y = DVector::from_row_slice(&responses);
    let beta = x
        .clone()
        .svd(true, true)
        .solve(&y, f64::EPSILON.sqrt())
        .map_err(|e| CurveError::Fit(format!("{response}: {e}")))?;

    let residuals = &y - &x * &beta;
    let ss_res = residuals.norm_squared();
    let ss_tot = y.norm_squared();
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        f64::NAN
    };

    Ok(FittedModel {
        response,
        intercept: None,
        coeff_t_evap: beta[0],
        coeff_t_cond: beta[1],
        std_errors: None,
        p_values: None,
        r_squared,
        r_squared_adj: None,
        observations,
    })
}

/// A fitted model evaluated over the full sweep table: one prediction per
/// row and the residual fraction `(actual - predicted) / actual`.
#[derive(Debug, Clone)]
pub struct SurfaceFit {
    pub model: FittedModel,
    /// One prediction per table row, missing rows included.
    pub predicted: Vec<f64>,
    /// `Missing` where the actual is missing; the division is not guarded,
    /// so a zero-crossing actual also yields `Missing` (known degenerate
    /// input, see DESIGN.md).
    pub residual_fraction: Vec<Sample>,
}

/// Evaluate `model` over every table row.
pub fn evaluate(model: FittedModel, t_evap: &[f64], t_cond: &[f64], actual: &[Sample]) -> SurfaceFit {
    let predicted: Vec<f64> = t_evap
        .iter()
        .zip(t_cond)
        .map(|(&te, &tc)| model.predict(te, tc))
        .collect();

    let residual_fraction = actual
        .iter()
        .zip(&predicted)
        .map(|(sample, &pred)| match sample.value() {
            Some(a) => Sample::from_f64((a - pred) / a),
            None => Sample::Missing,
        })
        .collect();

    SurfaceFit {
        model,
        predicted,
        residual_fraction,
    }
}
