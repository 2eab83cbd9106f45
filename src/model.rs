//! The narrow capability interface the pipelines need from a property
//! library, plus the idealized vapor-compression cycle built on top of it.

use crate::error::{CurveError, Result};
use crate::properties::{CriticalPoint, StatePoint};

/// Isentropic efficiency applied to every compression step, as a fraction.
pub const ISENTROPIC_EFFICIENCY: f64 = 0.75;

/// Exactly the phase-boundary queries this tool performs, independent of
/// any concrete property library's object model.
///
/// The production implementation is
/// [`CoolPropModel`](crate::backend::coolprop::CoolPropModel); tests
/// substitute analytic stand-ins.
///
/// Methods take `&mut self` because equation-of-state backends cache the
/// current state internally.
pub trait PropertyModel {
    /// Saturated-vapor state at the given temperature (°C).
    fn dew_point_at_temperature(&mut self, temperature: f64) -> Result<StatePoint>;

    /// Saturated-vapor state at the given absolute pressure (Pa).
    fn dew_point_at_pressure(&mut self, pressure: f64) -> Result<StatePoint>;

    /// Saturated-liquid state at the given temperature (°C).
    fn bubble_point_at_temperature(&mut self, temperature: f64) -> Result<StatePoint>;

    /// Critical temperature and pressure of the gas.
    fn critical_point(&mut self) -> Result<CriticalPoint>;

    /// Compress `suction` to `pressure` (Pa) with the given isentropic
    /// efficiency (fraction in `(0, 1]`), returning the discharge state.
    fn compression_to_pressure(
        &mut self,
        suction: &StatePoint,
        pressure: f64,
        isentropic_efficiency: f64,
    ) -> Result<StatePoint>;
}

/// Enthalpy differences (J/kg) across the three stages of one idealized
/// vapor-compression cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleEnthalpies {
    /// Suction enthalpy minus expansion-inlet enthalpy.
    pub evaporation: f64,
    /// Discharge enthalpy minus expansion-inlet enthalpy.
    pub condensation: f64,
    /// Discharge enthalpy minus suction enthalpy.
    pub compression: f64,
}

/// Simulate one cycle between an evaporating and a condensing temperature
/// (°C) and return the three enthalpy differences.
///
/// The cycle: suction is the dew point at `t_evap`; discharge is the
/// suction state compressed to the dew pressure at `t_cond` at
/// [`ISENTROPIC_EFFICIENCY`]; the expansion inlet is the bubble point at
/// `t_cond`. By construction `compression == condensation - evaporation`.
///
/// Fails with [`CurveError::InvalidInput`] when `t_cond <= t_evap`; sweep
/// callers degrade that grid point to missing values and continue.
pub fn enthalpy_estimates<M: PropertyModel + ?Sized>(
    model: &mut M,
    t_evap: f64,
    t_cond: f64,
) -> Result<CycleEnthalpies> {
    if t_cond <= t_evap {
        return Err(CurveError::InvalidInput(format!(
            "condensing temperature ({t_cond} °C) must be greater than \
             evaporating temperature ({t_evap} °C)"
        )));
    }

    let suction = model.dew_point_at_temperature(t_evap)?;
    let discharge_pressure = model.dew_point_at_temperature(t_cond)?.pressure;
    let discharge =
        model.compression_to_pressure(&suction, discharge_pressure, ISENTROPIC_EFFICIENCY)?;
    let expansion = model.bubble_point_at_temperature(t_cond)?;

    Ok(CycleEnthalpies {
        evaporation: suction.enthalpy - expansion.enthalpy,
        condensation: discharge.enthalpy - expansion.enthalpy,
        compression: discharge.enthalpy - suction.enthalpy,
    })
}
