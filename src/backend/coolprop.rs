//! CoolProp-backed implementation of [`PropertyModel`].
//!
//! Uses the low-level `AbstractState` interface of the `rfluids` bindings
//! (HEOS backend) and keeps the unit conversion at this boundary: CoolProp
//! works in K and SI, the rest of the crate in °C and SI.

use rfluids::io::{FluidInputPair, FluidParam, FluidTrivialParam};
use rfluids::native::AbstractState;

use crate::error::{CurveError, Result};
use crate::gas::Gas;
use crate::model::PropertyModel;
use crate::properties::{CriticalPoint, StatePoint};

const KELVIN_OFFSET: f64 = 273.15;

/// CoolProp name for each supported gas. R410A resolves to CoolProp's
/// predefined mixture.
fn coolprop_name(gas: Gas) -> &'static str {
    match gas {
        Gas::R290 => "R290",
        Gas::R32 => "R32",
        Gas::R410A => "R410A",
    }
}

fn lookup_err<E: std::fmt::Debug>(err: E) -> CurveError {
    CurveError::Lookup(format!("{err:?}"))
}

/// One CoolProp equation-of-state instance for one gas.
///
/// The instance is reused across a gas's pipelines; each query re-flashes
/// the internal state, so no results leak between grid points.
pub struct CoolPropModel {
    state: AbstractState,
}

impl CoolPropModel {
    pub fn new(gas: Gas) -> Result<Self> {
        let state = AbstractState::new("HEOS", coolprop_name(gas))
            .map_err(|e| CurveError::Backend(format!("{}: {e:?}", gas.name())))?;
        Ok(Self { state })
    }

    fn update(&mut self, pair: FluidInputPair, first: f64, second: f64) -> Result<()> {
        self.state.update(pair, first, second).map_err(lookup_err)
    }

    fn keyed(&mut self, key: FluidParam) -> Result<f64> {
        self.state.keyed_output(key).map_err(lookup_err)
    }

    /// Read the full state after a successful flash.
    fn read_state(&mut self) -> Result<StatePoint> {
        Ok(StatePoint {
            temperature: self.keyed(FluidParam::T)? - KELVIN_OFFSET,
            pressure: self.keyed(FluidParam::P)?,
            density: self.keyed(FluidParam::DMass)?,
            enthalpy: self.keyed(FluidParam::HMass)?,
            entropy: self.keyed(FluidParam::SMass)?,
        })
    }
}

impl PropertyModel for CoolPropModel {
    fn dew_point_at_temperature(&mut self, temperature: f64) -> Result<StatePoint> {
        self.update(FluidInputPair::QT, 1.0, temperature + KELVIN_OFFSET)?;
        self.read_state()
    }

    fn dew_point_at_pressure(&mut self, pressure: f64) -> Result<StatePoint> {
        self.update(FluidInputPair::PQ, pressure, 1.0)?;
        self.read_state()
    }

    fn bubble_point_at_temperature(&mut self, temperature: f64) -> Result<StatePoint> {
        self.update(FluidInputPair::QT, 0.0, temperature + KELVIN_OFFSET)?;
        self.read_state()
    }

    fn critical_point(&mut self) -> Result<CriticalPoint> {
        let temperature = self
            .state
            .keyed_output(FluidTrivialParam::TCritical)
            .map_err(lookup_err)?;
        let pressure = self
            .state
            .keyed_output(FluidTrivialParam::PCritical)
            .map_err(lookup_err)?;
        Ok(CriticalPoint {
            temperature: temperature - KELVIN_OFFSET,
            pressure,
        })
    }

    fn compression_to_pressure(
        &mut self,
        suction: &StatePoint,
        pressure: f64,
        isentropic_efficiency: f64,
    ) -> Result<StatePoint> {
        if !(isentropic_efficiency > 0.0 && isentropic_efficiency <= 1.0) {
            return Err(CurveError::InvalidInput(format!(
                "isentropic efficiency must be in (0, 1], got {isentropic_efficiency}"
            )));
        }
        if pressure <= suction.pressure {
            return Err(CurveError::InvalidInput(format!(
                "discharge pressure ({pressure} Pa) must exceed suction \
                 pressure ({} Pa)",
                suction.pressure
            )));
        }

        // Ideal (constant-entropy) discharge enthalpy, then de-rate.
        self.update(FluidInputPair::PSMass, pressure, suction.entropy)?;
        let h_ideal = self.keyed(FluidParam::HMass)?;
        let h_real = suction.enthalpy + (h_ideal - suction.enthalpy) / isentropic_efficiency;

        self.update(FluidInputPair::HMassP, h_real, pressure)?;
        self.read_state()
    }
}
