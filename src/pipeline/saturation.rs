//! Saturation pressure/temperature conversion curves.
//!
//! Two lookup directions, matching the two downstream uses: the dense plot
//! curve sweeps a pressure grid from P_sat(−40 °C) to the critical pressure
//! and looks up the dew-point temperature; the reference table sweeps a
//! temperature grid and looks up the dew-point pressure (the inverse).

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
pub const REFERENCE_POINTS: usize = 15;
/// Points on the dense plot curve.
pub const CURVE_POINTS: usize = 100;

const MIN_TEMPERATURE_C: f64 = -40.0;
const PA_PER_BAR: f64 = 1.0e5;

/// Pressure→temperature curve: pressures (Pa) paired with saturation
/// temperatures (°C).
#[derive(Debug, Clone)]
pub struct SaturationCurve {
    pub pressures: Vec<f64>,
    pub temperatures: Vec<Sample>,
}

/// Temperature→pressure reference points: temperatures (°C) paired with
/// saturation pressures (Pa).
#[derive(Debug, Clone)]
pub struct ReferencePoints {
    pub temperatures: Vec<f64>,
    pub pressures: Vec<Sample>,
}

/// Sample `n` pressures over [P_sat(−40 °C), P_crit] and look up the
/// saturation temperature at each.
pub fn sample_curve<M: PropertyModel>(model: &mut M, n: usize) -> Result<SaturationCurve> {
    let p_min = model.dew_point_at_temperature(MIN_TEMPERATURE_C)?.pressure;
    let p_max = model.critical_point()?.pressure;
    let pressures = grid::linspace(p_min, p_max, n);
    let temperatures = sweep::collect(&pressures, |p| {
        Ok(model.dew_point_at_pressure(p)?.temperature)
    });
    Ok(SaturationCurve {
        pressures,
        temperatures,
    })
}

/// Sample [`REFERENCE_POINTS`] temperatures over [−40 °C, T_crit] and look
/// up the saturation pressure at each, logging failures.
pub fn sample_reference_points<M: PropertyModel>(
    model: &mut M,
    gas: Gas,
) -> Result<ReferencePoints> {
    let t_max = model.critical_point()?.temperature;
    let temperatures = grid::linspace(MIN_TEMPERATURE_C, t_max, REFERENCE_POINTS);
    let label = format!("{gas} saturation pressure");
    let pressures = sweep::collect_logged(&label, &temperatures, |t| {
        Ok(model.dew_point_at_temperature(t)?.pressure)
    });
    Ok(ReferencePoints {
        temperatures,
        pressures,
    })
}

/// Generate every P/T artifact for one gas into `dir`:
/// `{gas}_pt.png`, `{gas}_pt.html`, `{gas}_p2t.txt`.
pub fn run<M: PropertyModel>(model: &mut M, gas: Gas, dir: &Path) -> Result<()> {
    info!("{gas}: generating P/T artifacts in {}", dir.display());
    fs::create_dir_all(dir)?;

    let curve = sample_curve(model, CURVE_POINTS)?;
    let points = sample_reference_points(model, gas)?;

    // Pressure axis in bar on the plots; the table stays in mbar.
    let curve_x: Vec<f64> = curve.pressures.iter().map(|p| p / PA_PER_BAR).collect();
    let curve_y: Vec<f64> = curve.temperatures.iter().map(|s| s.to_f64()).collect();
    let point_x: Vec<f64> = points
        .pressures
        .iter()
        .map(|s| s.to_f64() / PA_PER_BAR)
        .collect();
    plot::write_curve_plot(
        &CurvePlot {
            title: format!("{gas} Pressure vs Temperature"),
            x_label: "Pressure (bar)",
            y_label: "Temperature (°C)",
            curve_label: "Temperature",
            curve_x: &curve_x,
            curve_y: &curve_y,
            point_x: &point_x,
            point_y: &points.temperatures,
        },
        &dir.join(format!("{gas}_pt.png")),
        &dir.join(format!("{gas}_pt.html")),
    )?;

    let pressures = table::encode_samples(&points.pressures, table::PRESSURE_SCALE)?;
    let temperatures = table::encode_values(&points.temperatures, table::TEMPERATURE_SCALE);
    table::write_saturation_table(gas, dir, &pressures, &temperatures)
}
