//! Plot rendering. Every figure is written twice: a static image via
//! `plotters` and an interactive HTML file via `plotly`.
//!
//! Missing samples reach this module as NaN. The HTML traces keep them
//! (rendered as gaps); the static backends cannot draw non-finite
//! coordinates, so those points are dropped from the drawn series.

use std::path::Path;

use plotly::common::{Marker, Mode, Title};
use plotly::layout::{Axis, Layout, LayoutScene};
use plotly::{Plot, Scatter, Scatter3D, Surface};
use plotters::prelude::*;

use crate::error::{CurveError, Result};
use crate::fit::{FittedModel, SurfaceFit};
use crate::gas::Gas;
use crate::pipeline::power::{PowerFits, PowerTable};
use crate::sample::Sample;

const PNG_SIZE_2D: (u32, u32) = (900, 600);
const PNG_SIZE_3D: (u32, u32) = (1000, 800);

fn render_err<E: std::fmt::Display>(err: E) -> CurveError {
    CurveError::Render(err.to_string())
}

/// Padded finite bounds of a value sequence; a degenerate or empty
/// sequence falls back to a unit range so chart construction cannot fail.
fn bounds<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn finite_pairs(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect()
}

// ── 2-D curve + reference markers ───────────────────────────────────

/// One dense curve overlaid with sparse reference markers. Coordinate
/// slices may contain NaN for missing samples.
pub struct CurvePlot<'a> {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub curve_label: &'static str,
    pub curve_x: &'a [f64],
    pub curve_y: &'a [f64],
    pub point_x: &'a [f64],
    pub point_y: &'a [f64],
}

/// Render a [`CurvePlot`] to both artifact files.
pub fn write_curve_plot(view: &CurvePlot, png: &Path, html: &Path) -> Result<()> {
    let curve = finite_pairs(view.curve_x, view.curve_y);
    let points = finite_pairs(view.point_x, view.point_y);

    let (x_min, x_max) = bounds(curve.iter().chain(&points).map(|p| p.0));
    let (y_min, y_max) = bounds(curve.iter().chain(&points).map(|p| p.1));

    let root = BitMapBackend::new(png, PNG_SIZE_2D).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&view.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc(view.x_label)
        .y_desc(view.y_label)
        .draw()
        .map_err(render_err)?;
    chart
        .draw_series(LineSeries::new(curve.iter().copied(), &BLUE))
        .map_err(render_err)?
        .label(view.curve_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));
    chart
        .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, RED.filled())))
        .map_err(render_err)?
        .label("Points")
        .legend(|(x, y)| Circle::new((x + 9, y), 4, RED.filled()));
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;
    root.present().map_err(render_err)?;

    let mut figure = Plot::new();
    figure.add_trace(
        Scatter::new(view.curve_x.to_vec(), view.curve_y.to_vec())
            .mode(Mode::Lines)
            .name(view.curve_label),
    );
    figure.add_trace(
        Scatter::new(view.point_x.to_vec(), view.point_y.to_vec())
            .mode(Mode::Markers)
            .name("Points"),
    );
    figure.set_layout(
        Layout::new()
            .title(Title::with_text(view.title.clone()))
            .x_axis(Axis::new().title(Title::with_text(view.x_label)))
            .y_axis(Axis::new().title(Title::with_text(view.y_label))),
    );
    figure.write_html(html);

    Ok(())
}

// ── 3-D enthalpy surfaces ───────────────────────────────────────────

struct Term<'a> {
    fit: &'a SurfaceFit,
    actual: &'a [Sample],
    label: &'static str,
    color: RGBColor,
}

fn terms<'a>(table: &'a PowerTable, fits: &'a PowerFits) -> [Term<'a>; 3] {
    [
        Term {
            fit: &fits.evap,
            actual: &table.evap,
            label: "dH_evap",
            color: BLUE,
        },
        Term {
            fit: &fits.cond,
            actual: &table.cond,
            label: "dH_cond",
            color: RED,
        },
        Term {
            fit: &fits.comp,
            actual: &table.comp,
            label: "dH_comp",
            color: GREEN,
        },
    ]
}

/// z matrix for a prediction surface: rows follow the condensing axis,
/// columns the evaporating axis.
fn surface_z(model: &FittedModel, axis_evap: &[f64], axis_cond: &[f64]) -> Vec<Vec<f64>> {
    axis_cond
        .iter()
        .map(|&tc| axis_evap.iter().map(|&te| model.predict(te, tc)).collect())
        .collect()
}

/// Valid (T_e, value, T_c) triples for the static 3-D backends.
fn finite_triples(table: &PowerTable, values: &[Sample]) -> Vec<(f64, f64, f64)> {
    table
        .t_evap
        .iter()
        .zip(&table.t_cond)
        .zip(values)
        .filter_map(|((&te, &tc), sample)| sample.value().map(|v| (te, v, tc)))
        .collect()
}

fn draw_power_scatter(
    title: &str,
    series: &[(Vec<(f64, f64, f64)>, Option<&FittedModel>, RGBColor, &'static str)],
    axis_evap: &[f64],
    axis_cond: &[f64],
    png: &Path,
) -> Result<()> {
    let (e_min, e_max) = bounds(axis_evap.iter().copied());
    let (c_min, c_max) = bounds(axis_cond.iter().copied());
    let (v_min, v_max) = bounds(
        series
            .iter()
            .flat_map(|(points, model, _, _)| {
                let predicted: Vec<f64> = match model {
                    Some(m) => axis_cond
                        .iter()
                        .flat_map(|&tc| axis_evap.iter().map(move |&te| m.predict(te, tc)))
                        .collect(),
                    None => Vec::new(),
                };
                points.iter().map(|p| p.1).chain(predicted).collect::<Vec<f64>>()
            }),
    );

    let root = BitMapBackend::new(png, PNG_SIZE_3D).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(16)
        .build_cartesian_3d(e_min..e_max, v_min..v_max, c_min..c_max)
        .map_err(render_err)?;
    chart.with_projection(|mut pb| {
        pb.yaw = 0.7;
        pb.pitch = 0.3;
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart.configure_axes().draw().map_err(render_err)?;

    for (points, model, color, label) in series {
        if let Some(model) = model {
            let m = (*model).clone();
            chart
                .draw_series(
                    SurfaceSeries::xoz(
                        axis_evap.iter().copied(),
                        axis_cond.iter().copied(),
                        move |te, tc| m.predict(te, tc),
                    )
                    .style(color.mix(0.3)),
                )
                .map_err(render_err)?;
        }
        let color = *color;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(te, v, tc)| Circle::new((te, v, tc), 3, color.filled())),
            )
            .map_err(render_err)?
            .label(*label)
            .legend(move |(x, y)| Circle::new((x + 9, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;
    root.present().map_err(render_err)?;
    Ok(())
}

/// `{gas}_dH_model.{png,html}` — measured enthalpy differences as markers
/// plus one translucent prediction surface per fitted model.
pub fn write_power_model_plots(
    gas: Gas,
    table: &PowerTable,
    fits: &PowerFits,
    png: &Path,
    html: &Path,
) -> Result<()> {
    let title = format!("{gas} dH models");
    let series: Vec<(Vec<(f64, f64, f64)>, Option<&FittedModel>, RGBColor, &'static str)> =
        terms(table, fits)
            .iter()
            .map(|term| {
                (
                    finite_triples(table, term.actual),
                    Some(&term.fit.model),
                    term.color,
                    term.label,
                )
            })
            .collect();
    draw_power_scatter(&title, &series, &table.axis_evap, &table.axis_cond, png)?;

    let mut figure = Plot::new();
    for term in terms(table, fits).iter() {
        let z: Vec<f64> = term.actual.iter().map(|s| s.to_f64()).collect();
        figure.add_trace(
            Scatter3D::new(table.t_evap.clone(), table.t_cond.clone(), z)
                .mode(Mode::Markers)
                .marker(Marker::new().size(3))
                .name(term.label),
        );
        figure.add_trace(
            Surface::new(surface_z(&term.fit.model, &table.axis_evap, &table.axis_cond))
                .x(table.axis_evap.clone())
                .y(table.axis_cond.clone())
                .opacity(0.5)
                .show_scale(false)
                .name(&format!("{}_pred", term.label)),
        );
    }
    figure.set_layout(Layout::new().title(Title::with_text(title)).scene(
        LayoutScene::new()
            .x_axis(Axis::new().title(Title::with_text("T_e (°C)")))
            .y_axis(Axis::new().title(Title::with_text("T_c (°C)")))
            .z_axis(Axis::new().title(Title::with_text("dH (J/kg)"))),
    ));
    figure.write_html(html);

    Ok(())
}

/// `{gas}_dH_error.{png,html}` — residual fractions of the three fits.
pub fn write_power_error_plots(
    gas: Gas,
    table: &PowerTable,
    fits: &PowerFits,
    png: &Path,
    html: &Path,
) -> Result<()> {
    let title = format!("{gas} dH model errors");
    let error_terms: [(&SurfaceFit, RGBColor, &'static str); 3] = [
        (&fits.evap, BLUE, "dH_evap_err"),
        (&fits.cond, RED, "dH_cond_err"),
        (&fits.comp, GREEN, "dH_comp_err"),
    ];

    let series: Vec<(Vec<(f64, f64, f64)>, Option<&FittedModel>, RGBColor, &'static str)> =
        error_terms
            .iter()
            .map(|(fit, color, label)| {
                (
                    finite_triples(table, &fit.residual_fraction),
                    None,
                    *color,
                    *label,
                )
            })
            .collect();
    draw_power_scatter(&title, &series, &table.axis_evap, &table.axis_cond, png)?;

    let mut figure = Plot::new();
    for (fit, _, label) in error_terms.iter() {
        let z: Vec<f64> = fit.residual_fraction.iter().map(|s| s.to_f64()).collect();
        figure.add_trace(
            Scatter3D::new(table.t_evap.clone(), table.t_cond.clone(), z)
                .mode(Mode::Markers)
                .marker(Marker::new().size(3))
                .name(*label),
        );
    }
    figure.set_layout(Layout::new().title(Title::with_text(title)).scene(
        LayoutScene::new()
            .x_axis(Axis::new().title(Title::with_text("T_e (°C)")))
            .y_axis(Axis::new().title(Title::with_text("T_c (°C)")))
            .z_axis(Axis::new().title(Title::with_text("dH error (fraction)"))),
    ));
    figure.write_html(html);

    Ok(())
}
