//! Fixed-point text tables and model summary artifacts.
//!
//! The integer tables are consumed downstream as firmware lookup arrays, so
//! values are rescaled to compact integer units before rounding:
//! densities and temperatures to tenths, pressures to millibar.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{CurveError, Result};
use crate::fit::FittedModel;
use crate::gas::Gas;
use crate::model::ISENTROPIC_EFFICIENCY;
use crate::sample::Sample;

/// kg/m³ → 0.1 kg/m³ units.
pub const DENSITY_SCALE: f64 = 10.0;
/// °C → 0.1 °C units.
pub const TEMPERATURE_SCALE: f64 = 10.0;
/// Pa → mbar.
pub const PRESSURE_SCALE: f64 = 0.01;

/// Encode always-present values (grid axes) as rounded fixed-point
/// integers: `round(value * scale)`.
pub fn encode_values(values: &[f64], scale: f64) -> Vec<i64> {
    values.iter().map(|v| (v * scale).round() as i64).collect()
}

/// Encode swept samples. A `Missing` sample has no integer representation;
/// it aborts the table with an [`CurveError::Encoding`] error naming the
/// offending index.
pub fn encode_samples(samples: &[Sample], scale: f64) -> Result<Vec<i64>> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| match sample.value() {
            Some(v) => Ok((v * scale).round() as i64),
            None => Err(CurveError::Encoding(format!(
                "missing value at reference point {i}"
            ))),
        })
        .collect()
}

/// `[a, b, c]` — the bracket-delimited integer list format the tables use.
pub fn format_int_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// `{gas}_density.txt` — reference densities (0.1 kg/m³) and temperatures
/// (0.1 °C).
pub fn write_density_table(
    gas: Gas,
    dir: &Path,
    densities: &[i64],
    temperatures: &[i64],
) -> Result<()> {
    let content = format!(
        "Density 0.1(kg/m3): {}\nTemperature (0.1°C): {}\n",
        format_int_list(densities),
        format_int_list(temperatures)
    );
    fs::write(dir.join(format!("{gas}_density.txt")), content)?;
    Ok(())
}

/// `{gas}_p2t.txt` — reference pressures (mbar abs) and temperatures
/// (0.1 °C).
pub fn write_saturation_table(
    gas: Gas,
    dir: &Path,
    pressures: &[i64],
    temperatures: &[i64],
) -> Result<()> {
    let content = format!(
        "Pressure A (mBar): {}\nTemperature (°dC): {}\n",
        format_int_list(pressures),
        format_int_list(temperatures)
    );
    fs::write(dir.join(format!("{gas}_p2t.txt")), content)?;
    Ok(())
}

/// `{gas}_dH_model.txt` — the three labeled statistical summaries.
pub fn write_model_summaries(
    gas: Gas,
    dir: &Path,
    evap: &FittedModel,
    cond: &FittedModel,
    comp: &FittedModel,
) -> Result<()> {
    let content = format!(
        "Evap Model: {}\nCond Model: {}\nComp Model: {}\n",
        evap.summary(),
        cond.summary(),
        comp.summary()
    );
    fs::write(dir.join(format!("{gas}_dH_model.txt")), content)?;
    Ok(())
}

#[derive(Serialize)]
struct CoefficientEntry {
    intercept: f64,
    t_evap: f64,
    t_cond: f64,
    r_squared: f64,
    observations: usize,
}

impl From<&FittedModel> for CoefficientEntry {
    fn from(model: &FittedModel) -> Self {
        CoefficientEntry {
            intercept: model.intercept.unwrap_or(0.0),
            t_evap: model.coeff_t_evap,
            t_cond: model.coeff_t_cond,
            r_squared: model.r_squared,
            observations: model.observations,
        }
    }
}

#[derive(Serialize)]
struct CoefficientFile {
    gas: String,
    isentropic_efficiency: f64,
    evaporation: CoefficientEntry,
    condensation: CoefficientEntry,
    compression: CoefficientEntry,
}

/// `{gas}_dH_coefficients.toml` — the fitted coefficients in machine-
/// readable form, for consumers that bake them into lookup constants.
pub fn write_model_coefficients(
    gas: Gas,
    dir: &Path,
    evap: &FittedModel,
    cond: &FittedModel,
    comp: &FittedModel,
) -> Result<()> {
    let file = CoefficientFile {
        gas: gas.name().to_string(),
        isentropic_efficiency: ISENTROPIC_EFFICIENCY,
        evaporation: evap.into(),
        condensation: cond.into(),
        compression: comp.into(),
    };
    let content = toml::to_string_pretty(&file)
        .map_err(|e| CurveError::Encoding(e.to_string()))?;
    fs::write(dir.join(format!("{gas}_dH_coefficients.toml")), content)?;
    Ok(())
}
