//! Chart rendering for trajectories and derived series.
//!
//! Presentation glue over the engine outputs: coordinate evolution, 2D
//! phase portraits, spectrum and autocorrelation charts as SVG, plus a
//! rotating 3D view of the attractor as an animated GIF. The static charts
//! use the SVG backend so no system font stack is required; the GIF frames
//! are drawn without text for the same reason.
//!
//! Non-finite samples from diverged runs are skipped point-wise, so a
//! trajectory that blows up mid-run still renders its finite prefix.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::analysis::SpectralResult;
use crate::integrate::{Axis3, Trajectory};

/// Boxed drawing error; plotters error types are backend-generic.
pub type RenderResult = Result<(), Box<dyn Error>>;

const CHART_SIZE: (u32, u32) = (960, 960);
const GIF_SIZE: (u32, u32) = (640, 640);
/// Per-frame delay of the rotating view, in milliseconds.
const GIF_FRAME_DELAY: u32 = 80;

/// Extent of the finite values, padded so flat series still get a band.
fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        return None;
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    Some((lo - pad, hi + pad))
}

/// Coordinate evolution in time, one panel per axis.
pub fn time_series_svg(path: &Path, trajectory: &Trajectory) -> RenderResult {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    let t_max = trajectory.time(trajectory.len().saturating_sub(1)).max(trajectory.step());
    for (panel, axis) in panels.iter().zip(Axis3::ALL) {
        let series = trajectory.axis(axis);
        let Some((lo, hi)) = finite_bounds(series.iter().copied()) else {
            continue;
        };

        let mut chart = ChartBuilder::on(panel)
            .margin(8)
            .caption(format!("{} coordinate", axis.label()), ("sans-serif", 18))
            .x_label_area_size(28)
            .y_label_area_size(52)
            .build_cartesian_2d(0.0..t_max, lo..hi)?;
        chart
            .configure_mesh()
            .x_desc("time")
            .y_desc(axis.label())
            .draw()?;

        chart.draw_series(LineSeries::new(
            series
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (trajectory.time(i), *v)),
            &BLUE,
        ))?;
    }

    root.present()?;
    Ok(())
}

/// The three planar projections of the orbit: xy, xz, yz.
pub fn phase_portraits_svg(path: &Path, trajectory: &Trajectory) -> RenderResult {
    let root = SVGBackend::new(path, (CHART_SIZE.0, CHART_SIZE.1 / 3)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    let planes = [
        (Axis3::X, Axis3::Y),
        (Axis3::X, Axis3::Z),
        (Axis3::Y, Axis3::Z),
    ];

    for (panel, (ha, va)) in panels.iter().zip(planes) {
        let hs = trajectory.axis(ha);
        let vs = trajectory.axis(va);
        let bounds = (
            finite_bounds(hs.iter().copied()),
            finite_bounds(vs.iter().copied()),
        );
        let (Some((hlo, hhi)), Some((vlo, vhi))) = bounds else {
            continue;
        };

        let mut chart = ChartBuilder::on(panel)
            .margin(8)
            .caption(
                format!("{}-{} plane", ha.label(), va.label()),
                ("sans-serif", 18),
            )
            .x_label_area_size(28)
            .y_label_area_size(44)
            .build_cartesian_2d(hlo..hhi, vlo..vhi)?;
        chart.configure_mesh().draw()?;

        chart.draw_series(LineSeries::new(
            hs.iter()
                .zip(vs.iter())
                .filter(|(h, v)| h.is_finite() && v.is_finite())
                .map(|(h, v)| (*h, *v)),
            &BLUE,
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Per-axis magnitude spectrum in dB.
pub fn spectrum_svg(path: &Path, result: &SpectralResult) -> RenderResult {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    for (panel, analysis) in panels.iter().zip(&result.axes) {
        let spectrum = &analysis.spectrum;
        let Some((lo, hi)) = finite_bounds(spectrum.magnitude_db.iter().copied()) else {
            continue;
        };

        let mut chart = ChartBuilder::on(panel)
            .margin(8)
            .caption(
                format!("{} spectrum", analysis.axis.label()),
                ("sans-serif", 18),
            )
            .x_label_area_size(28)
            .y_label_area_size(52)
            .build_cartesian_2d(-0.5..0.5, lo..hi)?;
        chart
            .configure_mesh()
            .x_desc("frequency, cycles/sample")
            .y_desc("magnitude, dB")
            .draw()?;

        chart.draw_series(LineSeries::new(
            spectrum
                .frequencies
                .iter()
                .zip(spectrum.magnitude_db.iter())
                .filter(|(_, m)| m.is_finite())
                .map(|(f, m)| (*f, *m)),
            &BLUE,
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Per-axis autocorrelation over lag.
pub fn autocorrelation_svg(path: &Path, result: &SpectralResult) -> RenderResult {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    for (panel, analysis) in panels.iter().zip(&result.axes) {
        let ac = &analysis.autocorr;
        let max_lag = ac.len().saturating_sub(1).max(1) as f64;
        let Some((lo, hi)) = finite_bounds(ac.values.iter().copied()) else {
            continue;
        };

        let mut chart = ChartBuilder::on(panel)
            .margin(8)
            .caption(
                format!("{} autocorrelation", analysis.axis.label()),
                ("sans-serif", 18),
            )
            .x_label_area_size(28)
            .y_label_area_size(52)
            .build_cartesian_2d(0.0..max_lag, lo..hi)?;
        chart
            .configure_mesh()
            .x_desc("lag, steps")
            .y_desc("r")
            .draw()?;

        chart.draw_series(LineSeries::new(
            ac.lags
                .iter()
                .zip(ac.values.iter())
                .filter(|(_, v)| v.is_finite())
                .map(|(lag, v)| (*lag as f64, *v)),
            &BLUE,
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Rotating 3D view of the orbit as an animated GIF.
///
/// Frames sweep one full turn of yaw. Text is intentionally absent so the
/// bitmap backend needs no font stack.
pub fn attractor_gif(path: &Path, trajectory: &Trajectory, frames: usize) -> RenderResult {
    let frames = frames.max(1);

    let xs = trajectory.axis(Axis3::X);
    let ys = trajectory.axis(Axis3::Y);
    let zs = trajectory.axis(Axis3::Z);
    let bounds = (
        finite_bounds(xs.iter().copied()),
        finite_bounds(ys.iter().copied()),
        finite_bounds(zs.iter().copied()),
    );
    let (Some((xlo, xhi)), Some((ylo, yhi)), Some((zlo, zhi))) = bounds else {
        return Ok(());
    };

    let points: Vec<(f64, f64, f64)> = trajectory
        .states()
        .iter()
        .filter(|s| s.is_finite())
        .map(|s| (s.x, s.y, s.z))
        .collect();

    let root = BitMapBackend::gif(path, GIF_SIZE, GIF_FRAME_DELAY)?.into_drawing_area();

    for frame in 0..frames {
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .build_cartesian_3d(xlo..xhi, ylo..yhi, zlo..zhi)?;

        let yaw = frame as f64 / frames as f64 * std::f64::consts::TAU;
        chart.with_projection(|mut pb| {
            pb.yaw = yaw;
            pb.pitch = 0.25;
            pb.scale = 0.85;
            pb.into_matrix()
        });

        chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
        root.present()?;
    }

    Ok(())
}
