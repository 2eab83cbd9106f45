//! # refcurves
//!
//! Engineering reference curves for a small set of refrigerant gases
//! (R290, R32, R410A), with all physical property computation delegated to
//! [CoolProp](https://coolprop.org/) via the `rfluids` crate.
//!
//! Three independent pipelines, one per quantity of interest:
//!
//! * **Density** — saturated-vapor density vs. temperature
//!   ([`pipeline::density`])
//! * **Pressure/Temperature** — saturation temperature vs. pressure and its
//!   inverse ([`pipeline::saturation`])
//! * **Power/Enthalpy** — evaporation, condensation and compression enthalpy
//!   differences over a 2-D temperature grid, with fitted linear surfaces
//!   ([`pipeline::power`])
//!
//! Each pipeline sweeps a parameter grid, collects a result table (lookup
//! failures degrade single grid points to [`Sample::Missing`] and never abort
//! the sweep), and writes plot and table artifacts to disk.
//!
//! ## Quick example
//!
//! ```no_run
//! use std::path::Path;
//! use refcurves::backend::coolprop::CoolPropModel;
//! use refcurves::{pipeline, Gas};
//!
//! let mut model = CoolPropModel::new(Gas::R290)?;
//! pipeline::density::run(&mut model, Gas::R290, Path::new("output/density"))?;
//! # Ok::<(), refcurves::CurveError>(())
//! ```

pub mod backend;
pub mod error;
pub mod fit;
pub mod gas;
pub mod grid;
pub mod model;
pub mod pipeline;
pub mod plot;
pub mod properties;
pub mod sample;
pub mod sweep;
pub mod table;

pub use error::{CurveError, Result};
pub use gas::Gas;
pub use model::{enthalpy_estimates, CycleEnthalpies, PropertyModel, ISENTROPIC_EFFICIENCY};
pub use properties::{CriticalPoint, StatePoint};
pub use sample::Sample;
