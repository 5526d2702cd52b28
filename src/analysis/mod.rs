//! Signal Analysis: Derived Series per Coordinate Axis
//!
//! Consumes a generated [`Trajectory`] and computes, independently for each
//! of the three axes:
//!
//! - the centered magnitude spectrum ([`Spectrum`])
//! - the normalized autocorrelation ([`Autocorrelation`])
//! - descriptive statistical moments ([`Moments`])
//!
//! All transforms are read-only over the input; the trajectory is never
//! mutated. Divergent (non-finite) trajectories pass through: the derived
//! series simply carry the non-finite values downstream.

mod autocorr;
mod moments;
mod spectrum;

pub use autocorr::{autocorrelation, Autocorrelation};
pub use moments::{axis_moments, moments, Moments};
pub use spectrum::{power_spectrum, Spectrum};

use crate::error::{Error, Result};
use crate::integrate::{Axis3, Trajectory};

/// Derived series of one coordinate axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAnalysis {
    pub axis: Axis3,
    pub spectrum: Spectrum,
    pub autocorr: Autocorrelation,
    pub moments: Moments,
}

/// Per-axis spectral and correlation series of one trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralResult {
    pub axes: [AxisAnalysis; 3],
    /// Transform size used for every axis spectrum.
    pub nfft: usize,
}

impl SpectralResult {
    /// The analysis for one axis.
    pub fn axis(&self, axis: Axis3) -> &AxisAnalysis {
        match axis {
            Axis3::X => &self.axes[0],
            Axis3::Y => &self.axes[1],
            Axis3::Z => &self.axes[2],
        }
    }
}

/// Computes derived series from trajectories.
///
/// By default the transform size is the trajectory length rounded up to
/// the next power of two; [`SignalAnalyzer::with_nfft`] pins it instead,
/// the way the original tooling ran a fixed 4096-point FFT regardless of
/// the series length.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalAnalyzer {
    nfft: Option<usize>,
}

impl SignalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the transform size. Powers of two keep the transform fast, but
    /// any non-zero size is accepted.
    pub fn with_nfft(nfft: usize) -> Self {
        Self { nfft: Some(nfft) }
    }

    /// Analyze every axis of `trajectory`.
    ///
    /// Fails with [`Error::InsufficientData`] for trajectories shorter
    /// than 2 states — spectral and autocorrelation estimates are
    /// undefined below that length.
    pub fn analyze(&self, trajectory: &Trajectory) -> Result<SpectralResult> {
        let n = trajectory.len();
        if n < 2 {
            return Err(Error::InsufficientData(format!(
                "analysis needs a trajectory of at least 2 states, got {n}"
            )));
        }

        let nfft = match self.nfft {
            Some(0) => {
                return Err(Error::InvalidParameter(
                    "transform size must be at least 1".to_string(),
                ))
            }
            Some(nfft) => nfft,
            None => n.next_power_of_two(),
        };

        let coords = trajectory.coordinates();
        let [mx, my, mz] = axis_moments(&coords);

        let analyze_axis = |axis: Axis3, moments: Moments| {
            let series = trajectory.axis(axis);
            AxisAnalysis {
                axis,
                spectrum: power_spectrum(&series, nfft),
                autocorr: autocorrelation(&series),
                moments,
            }
        };

        Ok(SpectralResult {
            axes: [
                analyze_axis(Axis3::X, mx),
                analyze_axis(Axis3::Y, my),
                analyze_axis(Axis3::Z, mz),
            ],
            nfft,
        })
    }
}
