//! Attractor Runner: Integrate, Analyze, Export
//!
//! Command-line front end for the trajectory engine. Resolves the selected
//! model against the registry, applies coefficient overrides, integrates
//! the requested number of steps and reports per-axis statistics, then
//! optionally exports CSV data, SVG charts and a rotating 3D GIF.
//!
//! The `--step` flag follows the historical convention of this tool
//! family: it is a divisor, so the effective integration increment is
//! `1/step` (default 100 → h = 0.01).

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand_distr::{Distribution, Normal};

use chaos_attractors::{
    analysis::SignalAnalyzer,
    export, generate,
    models::{ModelRegistry, ParameterBinding, State},
    render,
};

#[derive(Debug, Parser)]
#[command(
    name = "attractor",
    version,
    about = "Integrate a 3D chaotic attractor and analyze its trajectory"
)]
struct Cli {
    /// Chaotic model: lorenz, rossler, rikitake, nose-hoover, wang,
    /// duffing, lotka-volterra or chua.
    attractor: String,

    /// Number of integration steps.
    #[arg(short, long, default_value_t = 1024)]
    points: usize,

    /// Step divisor: the integration increment is 1/STEP.
    #[arg(short, long, default_value_t = 100.0, value_name = "STEP")]
    step: f64,

    /// Initial x coordinate.
    #[arg(long, default_value_t = 1e-4)]
    x0: f64,

    /// Initial y coordinate.
    #[arg(long, default_value_t = 1e-4)]
    y0: f64,

    /// Initial z coordinate.
    #[arg(long, default_value_t = 1e-4)]
    z0: f64,

    /// Override a model coefficient, e.g. `--set sigma=12.5`. Repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
    set: Vec<(String, f64)>,

    /// Standard deviation of Gaussian jitter applied to the initial point.
    #[arg(long, value_name = "STD")]
    perturb: Option<f64>,

    /// Pin the FFT size instead of deriving it from the trajectory length.
    #[arg(long, value_name = "N")]
    nfft: Option<usize>,

    /// Write trajectory/spectrum/autocorrelation CSV files into DIR.
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Render SVG charts and the rotating 3D GIF into DIR.
    #[arg(long, value_name = "DIR")]
    plots: Option<PathBuf>,

    /// Number of frames in the rotating 3D GIF.
    #[arg(long, default_value_t = 36)]
    gif_frames: usize,
}

fn parse_override(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value in `{s}`: {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn print_binding(binding: &ParameterBinding) {
    if binding.is_empty() {
        println!("  (no free coefficients)");
        return;
    }
    for (name, value) in binding.iter() {
        println!("  {name:<8} = {value}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure!(
        cli.step.is_finite() && cli.step > 0.0,
        "--step must be a positive finite divisor, got {}",
        cli.step
    );
    let h = 1.0 / cli.step;

    let registry = ModelRegistry::new();
    let spec = registry.resolve(&cli.attractor)?;

    let mut binding = spec.defaults();
    for (name, value) in &cli.set {
        binding.set(name.clone(), *value);
    }
    let model = spec.bind(&binding)?;

    let mut initial = State::new(cli.x0, cli.y0, cli.z0);
    if let Some(std_dev) = cli.perturb {
        let normal = Normal::new(0.0, std_dev)
            .with_context(|| format!("invalid perturbation std {std_dev}"))?;
        let mut rng = rand::rng();
        initial = State::new(
            initial.x + normal.sample(&mut rng),
            initial.y + normal.sample(&mut rng),
            initial.z + normal.sample(&mut rng),
        );
    }

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Chaotic Attractor: {}", spec.name());
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("Coefficients:");
    print_binding(&binding);
    println!("\nRun:");
    println!("  points   = {}", cli.points);
    println!("  step     = {} (h = {h})", cli.step);
    println!("  initial  = {initial}");

    let trajectory = generate(&model, initial, h, cli.points)?;

    if let Some(idx) = trajectory.divergence_index() {
        println!(
            "\n>>> DIVERGENCE at step {idx} (t = {:.4}): state left the finite range;",
            trajectory.time(idx)
        );
        println!(">>> all {} points are kept verbatim.", trajectory.len());
    }

    let analyzer = match cli.nfft {
        Some(nfft) => SignalAnalyzer::with_nfft(nfft),
        None => SignalAnalyzer::new(),
    };
    let result = analyzer.analyze(&trajectory)?;

    println!("\nMoments per axis:");
    println!(
        "  {:<4} {:>13} {:>13} {:>10} {:>10} {:>13}",
        "axis", "mean", "variance", "skewness", "kurtosis", "median"
    );
    for analysis in &result.axes {
        let m = analysis.moments;
        println!(
            "  {:<4} {:>13.6} {:>13.6} {:>10.4} {:>10.4} {:>13.6}",
            analysis.axis.label(),
            m.mean,
            m.variance,
            m.skewness,
            m.kurtosis,
            m.median
        );
    }

    println!("\nRange per axis:");
    for analysis in &result.axes {
        let m = analysis.moments;
        println!(
            "  {:<4} min = {:>13.6}, max = {:>13.6}",
            analysis.axis.label(),
            m.min,
            m.max
        );
    }

    println!("\nSpectral peak per axis ({}-point FFT):", result.nfft);
    for analysis in &result.axes {
        let peak = analysis.spectrum.peak_bin();
        println!(
            "  {:<4} f = {:+.6} cycles/sample",
            analysis.axis.label(),
            analysis.spectrum.frequencies[peak]
        );
    }

    if let Some(dir) = &cli.csv {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let traj_path = dir.join(format!("{}_trajectory.csv", spec.name()));
        let spec_path = dir.join(format!("{}_spectrum.csv", spec.name()));
        let acf_path = dir.join(format!("{}_autocorrelation.csv", spec.name()));

        export::write_trajectory_csv(&traj_path, &trajectory)
            .with_context(|| format!("failed to write {}", traj_path.display()))?;
        export::write_analysis_csv(&spec_path, &acf_path, &result)
            .with_context(|| format!("failed to write {}", spec_path.display()))?;

        println!("\nCSV written:");
        println!("  {}", traj_path.display());
        println!("  {}", spec_path.display());
        println!("  {}", acf_path.display());
    }

    if let Some(dir) = &cli.plots {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let charts = [
            ("time series", dir.join(format!("{}_time.svg", spec.name()))),
            ("phase portraits", dir.join(format!("{}_phase.svg", spec.name()))),
            ("spectrum", dir.join(format!("{}_spectrum.svg", spec.name()))),
            ("autocorrelation", dir.join(format!("{}_autocorr.svg", spec.name()))),
        ];

        render::time_series_svg(&charts[0].1, &trajectory)
            .map_err(|e| anyhow::anyhow!("time series chart: {e}"))?;
        render::phase_portraits_svg(&charts[1].1, &trajectory)
            .map_err(|e| anyhow::anyhow!("phase portrait chart: {e}"))?;
        render::spectrum_svg(&charts[2].1, &result)
            .map_err(|e| anyhow::anyhow!("spectrum chart: {e}"))?;
        render::autocorrelation_svg(&charts[3].1, &result)
            .map_err(|e| anyhow::anyhow!("autocorrelation chart: {e}"))?;

        let gif_path = dir.join(format!("{}_orbit.gif", spec.name()));
        render::attractor_gif(&gif_path, &trajectory, cli.gif_frames)
            .map_err(|e| anyhow::anyhow!("rotating orbit gif: {e}"))?;

        println!("\nCharts written:");
        for (_, path) in &charts {
            println!("  {}", path.display());
        }
        println!("  {}", gif_path.display());
    }

    println!("\n───────────────────────────────────────────────────────────────");
    println!(
        "  {} states generated over t ∈ [0, {:.4}]",
        trajectory.len(),
        trajectory.time(trajectory.len() - 1)
    );
    println!("───────────────────────────────────────────────────────────────");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["attractor", "lorenz"]);
        assert_eq!(cli.attractor, "lorenz");
        assert_eq!(cli.points, 1024);
        assert_eq!(cli.step, 100.0);
        assert_eq!(cli.x0, 1e-4);
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "attractor",
            "chua",
            "-p",
            "2048",
            "--set",
            "alpha=12.0",
            "--set",
            "beta=30",
        ]);
        assert_eq!(cli.points, 2048);
        assert_eq!(
            cli.set,
            vec![("alpha".to_string(), 12.0), ("beta".to_string(), 30.0)]
        );
    }

    #[test]
    fn test_override_parser_rejects_garbage() {
        assert!(parse_override("sigma").is_err());
        assert!(parse_override("sigma=ten").is_err());
        assert_eq!(parse_override("mu0 = -1.1").unwrap(), ("mu0".to_string(), -1.1));
    }
}
