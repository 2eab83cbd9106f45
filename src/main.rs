use std::path::Path;

use refcurves::backend::coolprop::CoolPropModel;
use refcurves::pipeline::{density, power, saturation};
use refcurves::Gas;

/// Entry point: run the three pipelines for every gas in the fixed list.
/// The gas list and output layout are deliberately hardcoded — reruns
/// overwrite the same artifact paths.
fn main() {
    env_logger::init();
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> refcurves::Result<()> {
    let out = Path::new("output");
    for gas in Gas::ALL {
        let mut model = CoolPropModel::new(gas)?;
        density::run(&mut model, gas, &out.join("density"))?;
        saturation::run(&mut model, gas, &out.join("pt"))?;
        power::run(&mut model, gas, &out.join("power"))?;
    }
    Ok(())
}
