//! Analytic stand-in for the CoolProp backend, so pipeline mechanics can
//! be tested without the property library. All relationships are simple
//! linear functions of temperature; the numbers are not physical.

use refcurves::{CriticalPoint, CurveError, PropertyModel, StatePoint};

pub struct LinearGasStub;

const P_MIN: f64 = 1.0e5;
const P_SLOPE: f64 = 2.0e4;

fn dew_pressure(t: f64) -> f64 {
    P_MIN + P_SLOPE * (t + 40.0)
}

impl PropertyModel for LinearGasStub {
    fn dew_point_at_temperature(&mut self, temperature: f64) -> refcurves::Result<StatePoint> {
        Ok(StatePoint {
            temperature,
            pressure: dew_pressure(temperature),
            density: 5.0 + 0.5 * (temperature + 40.0),
            enthalpy: 400_000.0 + 800.0 * temperature,
            entropy: 1_800.0 + 2.0 * temperature,
        })
    }

    fn dew_point_at_pressure(&mut self, pressure: f64) -> refcurves::Result<StatePoint> {
        let temperature = (pressure - P_MIN) / P_SLOPE - 40.0;
        self.dew_point_at_temperature(temperature)
    }

    fn bubble_point_at_temperature(&mut self, temperature: f64) -> refcurves::Result<StatePoint> {
        Ok(StatePoint {
            temperature,
            pressure: dew_pressure(temperature),
            density: 500.0,
            enthalpy: 200_000.0 + 2_500.0 * temperature,
            entropy: 1_000.0 + 3.0 * temperature,
        })
    }

    fn critical_point(&mut self) -> refcurves::Result<CriticalPoint> {
        Ok(CriticalPoint {
            temperature: 100.0,
            pressure: 5.0e6,
        })
    }

    fn compression_to_pressure(
        &mut self,
        suction: &StatePoint,
        pressure: f64,
        isentropic_efficiency: f64,
    ) -> refcurves::Result<StatePoint> {
        if pressure <= suction.pressure {
            return Err(CurveError::InvalidInput(
                "discharge pressure must exceed suction pressure".into(),
            ));
        }
        let h_ideal = suction.enthalpy + 0.01 * (pressure - suction.pressure);
        let h_real = suction.enthalpy + (h_ideal - suction.enthalpy) / isentropic_efficiency;
        Ok(StatePoint {
            temperature: suction.temperature + 30.0,
            pressure,
            density: suction.density,
            enthalpy: h_real,
            entropy: suction.entropy,
        })
    }
}
