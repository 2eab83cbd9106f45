//! Vapor-compression enthalpy estimates over a 2-D temperature grid, with
//! fitted linear surfaces.
//!
//! For every (evaporating, condensing) temperature pair the cycle yields
//! three enthalpy differences; three linear models are fitted against the
//! table (compression through the origin) and evaluated back over it to
//! produce prediction surfaces and residual fractions.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::fit::{self, SurfaceFit};
use crate::gas::Gas;
use crate::grid;
use crate::model::{enthalpy_estimates, PropertyModel};
use crate::plot;
use crate::sample::Sample;
use crate::table;

/// Grid points per axis; the sweep covers the full cartesian product.
pub const GRID_POINTS: usize = 20;

const MIN_TEMPERATURE_C: f64 = -20.0;
/// The grid stops this far below the critical temperature.
const CRITICAL_MARGIN_C: f64 = 20.0;

/// The assembled 2-D sweep table. Rows are in row-major order: the
/// evaporating axis is the outer loop, the condensing axis the inner one,
/// and `rows == axis_evap.len() * axis_cond.len()` always holds — failed
/// lookups fill a row with `Missing`, they never drop it.
#[derive(Debug, Clone)]
pub struct PowerTable {
    /// The evaporating-temperature axis (°C).
    pub axis_evap: Vec<f64>,
    /// The condensing-temperature axis (°C).
    pub axis_cond: Vec<f64>,
    /// Evaporating temperature per row.
    pub t_evap: Vec<f64>,
    /// Condensing temperature per row.
    pub t_cond: Vec<f64>,
    /// Evaporation enthalpy difference per row (J/kg).
    pub evap: Vec<Sample>,
    /// Condensation enthalpy difference per row (J/kg).
    pub cond: Vec<Sample>,
    /// Compression enthalpy difference per row (J/kg).
    pub comp: Vec<Sample>,
}

impl PowerTable {
    pub fn len(&self) -> usize {
        self.t_evap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t_evap.is_empty()
    }
}

/// Sweep the full [`GRID_POINTS`]² grid over
/// [−20 °C, T_crit − 20 °C] × [−20 °C, T_crit − 20 °C].
///
/// Pairs with `t_cond <= t_evap` (and any other rejected state) produce a
/// row whose three enthalpy columns are all `Missing` — never a partial
/// row.
pub fn sweep<M: PropertyModel>(model: &mut M) -> Result<PowerTable> {
    let t_max = model.critical_point()?.temperature - CRITICAL_MARGIN_C;
    let axis = grid::linspace(MIN_TEMPERATURE_C, t_max, GRID_POINTS);

    let rows = axis.len() * axis.len();
    let mut t_evap = Vec::with_capacity(rows);
    let mut t_cond = Vec::with_capacity(rows);
    let mut evap = Vec::with_capacity(rows);
    let mut cond = Vec::with_capacity(rows);
    let mut comp = Vec::with_capacity(rows);

    for &te in &axis {
        for &tc in &axis {
            t_evap.push(te);
            t_cond.push(tc);
            match enthalpy_estimates(model, te, tc) {
                Ok(cycle) => {
                    evap.push(Sample::from_f64(cycle.evaporation));
                    cond.push(Sample::from_f64(cycle.condensation));
                    comp.push(Sample::from_f64(cycle.compression));
                }
                Err(_) => {
                    evap.push(Sample::Missing);
                    cond.push(Sample::Missing);
                    comp.push(Sample::Missing);
                }
            }
        }
    }

    Ok(PowerTable {
        axis_evap: axis.clone(),
        axis_cond: axis,
        t_evap,
        t_cond,
        evap,
        cond,
        comp,
    })
}

/// The three evaluated fits for one gas's table.
#[derive(Debug, Clone)]
pub struct PowerFits {
    pub evap: SurfaceFit,
    pub cond: SurfaceFit,
    pub comp: SurfaceFit,
}

/// Fit the three models against a sweep table and evaluate them over every
/// row.
pub fn fit_models(sweep_table: &PowerTable) -> Result<PowerFits> {
    let evap = fit::fit_linear("dH_evap", &sweep_table.t_evap, &sweep_table.t_cond, &sweep_table.evap)?;
    let cond = fit::fit_linear("dH_cond", &sweep_table.t_evap, &sweep_table.t_cond, &sweep_table.cond)?;
    let comp =
        fit::fit_through_origin("dH_comp", &sweep_table.t_evap, &sweep_table.t_cond, &sweep_table.comp)?;

    Ok(PowerFits {
        evap: fit::evaluate(evap, &sweep_table.t_evap, &sweep_table.t_cond, &sweep_table.evap),
        cond: fit::evaluate(cond, &sweep_table.t_evap, &sweep_table.t_cond, &sweep_table.cond),
        comp: fit::evaluate(comp, &sweep_table.t_evap, &sweep_table.t_cond, &sweep_table.comp),
    })
}

/// Generate every power artifact for one gas into `dir`:
/// `{gas}_dH_model.{png,html,txt}`, `{gas}_dH_error.{png,html}` and
/// `{gas}_dH_coefficients.toml`.
pub fn run<M: PropertyModel>(model: &mut M, gas: Gas, dir: &Path) -> Result<()> {
    info!("{gas}: generating power artifacts in {}", dir.display());
    fs::create_dir_all(dir)?;

    let sweep_table = sweep(model)?;
    let fits = fit_models(&sweep_table)?;

    plot::write_power_model_plots(
        gas,
        &sweep_table,
        &fits,
        &dir.join(format!("{gas}_dH_model.png")),
        &dir.join(format!("{gas}_dH_model.html")),
    )?;
    plot::write_power_error_plots(
        gas,
        &sweep_table,
        &fits,
        &dir.join(format!("{gas}_dH_error.png")),
        &dir.join(format!("{gas}_dH_error.html")),
    )?;

    table::write_model_summaries(gas, dir, &fits.evap.model, &fits.cond.model, &fits.comp.model)?;
    table::write_model_coefficients(gas, dir, &fits.evap.model, &fits.cond.model, &fits.comp.model)
}
