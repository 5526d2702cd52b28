//! Frequency-Domain Magnitude Spectrum
//!
//! Computes the centered discrete magnitude spectrum of one coordinate
//! series. The series is zero-padded (or truncated) to the transform size,
//! transformed with rustfft, shifted so the DC bin sits at the center of
//! the axis, normalized to the peak magnitude and expressed in dB with a
//! float32-epsilon floor. The DC term is retained — chaotic coordinate
//! series are not detrended before transforming.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Floor added before taking the logarithm so silent bins map to a finite
/// dB value instead of -inf.
const DB_FLOOR: f64 = f32::EPSILON as f64;

/// Centered magnitude spectrum of one coordinate axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Frequency of each bin in cycles per sample, on [-0.5, 0.5).
    /// DC sits at index nfft/2.
    pub frequencies: Vec<f64>,
    /// Peak-normalized magnitude per bin, in dB (0 dB at the peak).
    pub magnitude_db: Vec<f64>,
}

impl Spectrum {
    /// Number of transform bins.
    pub fn len(&self) -> usize {
        self.magnitude_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude_db.is_empty()
    }

    /// Index of the strongest bin.
    pub fn peak_bin(&self) -> usize {
        self.magnitude_db
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

/// Magnitude spectrum of `samples` over `nfft` bins.
///
/// `samples` beyond `nfft` are ignored; shorter input is zero-padded, the
/// same convention as a fixed-size FFT over a windowed series.
pub fn power_spectrum(samples: &[f64], nfft: usize) -> Spectrum {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(nfft);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .take(nfft)
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    buffer.resize(nfft, Complex::new(0.0, 0.0));

    fft.process(&mut buffer);

    // Shift DC to the center bin.
    let half = nfft / 2;
    let mut magnitude: Vec<f64> = (0..nfft)
        .map(|i| buffer[(i + half) % nfft].norm())
        .collect();

    let peak = magnitude.iter().cloned().fold(0.0, f64::max);
    if peak > 0.0 {
        for m in &mut magnitude {
            *m /= peak;
        }
    }

    let magnitude_db = magnitude
        .into_iter()
        .map(|m| 20.0 * (m + DB_FLOOR).log10())
        .collect();

    let frequencies = (0..nfft)
        .map(|i| (i as f64 - half as f64) / nfft as f64)
        .collect();

    Spectrum {
        frequencies,
        magnitude_db,
    }
}
