//! Saturated-vapor density vs. temperature.
//!
//! Sweeps a temperature grid from −40 °C up to the gas's critical
//! temperature, looking up the dew-point density at each step. A dense
//! curve feeds the plots; a sparse reference grid feeds the fixed-point
//! table.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::gas::Gas;
use crate::grid;
use crate::model::PropertyModel;
use crate::plot::{self, CurvePlot};
use crate::sample::Sample;
use crate::sweep;
use crate::table;

/// Reference points for the fixed-point table.
pub const REFERENCE_POINTS: usize = 10;
/// Points on the dense plot curve.
pub const CURVE_POINTS: usize = 100;

const MIN_TEMPERATURE_C: f64 = -40.0;

/// One swept density curve: temperatures (°C) paired with dew-point
/// densities (kg/m³). Row count equals the grid size.
#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub temperatures: Vec<f64>,
    pub densities: Vec<Sample>,
}

/// Sample `n` points over [−40 °C, T_crit].
pub fn sample_curve<M: PropertyModel>(model: &mut M, n: usize) -> Result<DensityCurve> {
    let t_max = model.critical_point()?.temperature;
    let temperatures = grid::linspace(MIN_TEMPERATURE_C, t_max, n);
    let densities = sweep::collect(&temperatures, |t| {
        Ok(model.dew_point_at_temperature(t)?.density)
    });
    Ok(DensityCurve {
        temperatures,
        densities,
    })
}

/// Like [`sample_curve`], logging failed lookups. Used for the reference
/// grid that becomes the integer table.
pub fn sample_reference_points<M: PropertyModel>(model: &mut M, gas: Gas) -> Result<DensityCurve> {
    let t_max = model.critical_point()?.temperature;
    let temperatures = grid::linspace(MIN_TEMPERATURE_C, t_max, REFERENCE_POINTS);
    let label = format!("{gas} density");
    let densities = sweep::collect_logged(&label, &temperatures, |t| {
        Ok(model.dew_point_at_temperature(t)?.density)
    });
    Ok(DensityCurve {
        temperatures,
        densities,
    })
}

/// Generate every density artifact for one gas into `dir`:
/// `{gas}_density.png`, `{gas}_density.html`, `{gas}_density.txt`.
pub fn run<M: PropertyModel>(model: &mut M, gas: Gas, dir: &Path) -> Result<()> {
    info!("{gas}: generating density artifacts in {}", dir.display());
    fs::create_dir_all(dir)?;

    let curve = sample_curve(model, CURVE_POINTS)?;
    let points = sample_reference_points(model, gas)?;

    let curve_y: Vec<f64> = curve.densities.iter().map(|s| s.to_f64()).collect();
    let point_y: Vec<f64> = points.densities.iter().map(|s| s.to_f64()).collect();
    plot::write_curve_plot(
        &CurvePlot {
            title: format!("{gas} Density vs Temperature"),
            x_label: "Temperature (°C)",
            y_label: "Density (kg/m³)",
            curve_label: "Density",
            curve_x: &curve.temperatures,
            curve_y: &curve_y,
            point_x: &points.temperatures,
            point_y: &point_y,
        },
        &dir.join(format!("{gas}_density.png")),
        &dir.join(format!("{gas}_density.html")),
    )?;

    let densities = table::encode_samples(&points.densities, table::DENSITY_SCALE)?;
    let temperatures = table::encode_values(&points.temperatures, table::TEMPERATURE_SCALE);
    table::write_density_table(gas, dir, &densities, &temperatures)
}
