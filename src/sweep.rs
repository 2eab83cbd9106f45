//! Sweep-and-collect: iterate a grid, invoke a lookup per point, collect
//! one sample per point.
//!
//! A failed lookup degrades that single grid point to [`Sample::Missing`];
//! it never shortens the output or skips the point, so the collected length
//! always equals the grid length. Downstream reshaping into surfaces relies
//! on this invariant.

use log::warn;

use crate::error::Result;
use crate::sample::Sample;

/// Sweep `grid`, collecting one sample per point. Lookup failures are
/// converted to `Missing` silently — used for the dense curves that feed
/// plots, where individual gaps are expected near the domain edges.
pub fn collect<F>(grid: &[f64], mut lookup: F) -> Vec<Sample>
where
    F: FnMut(f64) -> Result<f64>,
{
    let mut samples = Vec::with_capacity(grid.len());
    for &x in grid {
        samples.push(match lookup(x) {
            Ok(value) => Sample::from_f64(value),
            Err(_) => Sample::Missing,
        });
    }
    samples
}

/// Like [`collect`], but logs each failure. Used for the sparse reference
/// points that end up in the fixed-point tables, where a missing value is
/// worth investigating.
pub fn collect_logged<F>(label: &str, grid: &[f64], mut lookup: F) -> Vec<Sample>
where
    F: FnMut(f64) -> Result<f64>,
{
    let mut samples = Vec::with_capacity(grid.len());
    for &x in grid {
        samples.push(match lookup(x) {
            Ok(value) => Sample::from_f64(value),
            Err(err) => {
                warn!("{label}: lookup failed at {x}: {err}");
                Sample::Missing
            }
        });
    }
    samples
}
