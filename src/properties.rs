// ── State values returned by the property adapter ───────────────────

/// A computed thermodynamic state on (or derived from) the phase boundary.
///
/// **Units:**
///
/// | Field       | Unit      |
/// |-------------|-----------|
/// | temperature | °C        |
/// | pressure    | Pa (abs)  |
/// | density     | kg/m³     |
/// | enthalpy    | J/kg      |
/// | entropy     | J/(kg·K)  |
///
/// Temperature is the one field kept in engineering units; everything else
/// is plain SI. Values are never mutated after creation — a new state is
/// computed per grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
    pub enthalpy: f64,
    pub entropy: f64,
}

// ── Critical point ──────────────────────────────────────────────────

/// Critical temperature (°C) and pressure (Pa) of a gas.
///
/// Queried once per pipeline invocation to bound the sample grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    pub temperature: f64,
    pub pressure: f64,
}
