//! CSV export of trajectories and derived series.
//!
//! Presentation glue: the engine itself never touches the filesystem. The
//! files are meant to be easy to consume from spreadsheets or downstream
//! plotting scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::SpectralResult;
use crate::integrate::Trajectory;

/// Write one trajectory as `time,x,y,z` rows.
pub fn write_trajectory_csv(path: &Path, trajectory: &Trajectory) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "time,x,y,z")?;
    for (i, s) in trajectory.states().iter().enumerate() {
        writeln!(
            file,
            "{:.6},{:.12e},{:.12e},{:.12e}",
            trajectory.time(i),
            s.x,
            s.y,
            s.z
        )?;
    }

    file.flush()
}

/// Write per-axis spectra as `frequency,x_db,y_db,z_db` rows followed by a
/// second block of `lag,x_acf,y_acf,z_acf` rows in a sibling file.
pub fn write_analysis_csv(
    spectrum_path: &Path,
    autocorr_path: &Path,
    result: &SpectralResult,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(spectrum_path)?);
    writeln!(file, "frequency,x_db,y_db,z_db")?;
    for bin in 0..result.nfft {
        writeln!(
            file,
            "{:.8},{:.6},{:.6},{:.6}",
            result.axes[0].spectrum.frequencies[bin],
            result.axes[0].spectrum.magnitude_db[bin],
            result.axes[1].spectrum.magnitude_db[bin],
            result.axes[2].spectrum.magnitude_db[bin],
        )?;
    }
    file.flush()?;

    let mut file = BufWriter::new(File::create(autocorr_path)?);
    writeln!(file, "lag,x_acf,y_acf,z_acf")?;
    for lag in 0..result.axes[0].autocorr.len() {
        writeln!(
            file,
            "{},{:.8},{:.8},{:.8}",
            lag,
            result.axes[0].autocorr.values[lag],
            result.axes[1].autocorr.values[lag],
            result.axes[2].autocorr.values[lag],
        )?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SignalAnalyzer;
    use crate::integrate::generate;
    use crate::models::{ModelRegistry, State};

    #[test]
    fn test_trajectory_csv_row_count() {
        let registry = ModelRegistry::new();
        let spec = registry.resolve("lorenz").unwrap();
        let model = spec.bind(&spec.defaults()).unwrap();
        let traj = generate(&model, State::new(0.1, 0.0, 0.0), 0.01, 32).unwrap();

        let dir = std::env::temp_dir().join("chaos_attractors_export_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trajectory.csv");

        write_trajectory_csv(&path, &traj).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        // Header plus one row per state.
        assert_eq!(contents.lines().count(), traj.len() + 1);
        assert!(contents.starts_with("time,x,y,z"));

        let result = SignalAnalyzer::new().analyze(&traj).unwrap();
        let spec_path = dir.join("spectrum.csv");
        let acf_path = dir.join("autocorr.csv");
        write_analysis_csv(&spec_path, &acf_path, &result).unwrap();

        let spec_rows = std::fs::read_to_string(&spec_path).unwrap().lines().count();
        assert_eq!(spec_rows, result.nfft + 1);
        let acf_rows = std::fs::read_to_string(&acf_path).unwrap().lines().count();
        assert_eq!(acf_rows, traj.len() + 1);

        std::fs::remove_dir_all(&dir).ok();
    }
}
