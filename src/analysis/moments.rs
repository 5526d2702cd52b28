//! Per-Axis Statistical Moments
//!
//! Stochastic summary of one coordinate series: mean, variance, skewness,
//! kurtosis, median and range. Conventions follow the usual descriptive
//! estimators for a full population: variance is the population variance,
//! skewness is m3 / m2^(3/2), kurtosis is the excess (Fisher) kurtosis
//! m4 / m2^2 - 3, so a Gaussian scores 0 on both shape measures.

use ndarray::{Array2, ArrayView1};

/// Descriptive statistics of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Moments of one coordinate series.
pub fn moments(samples: ArrayView1<'_, f64>) -> Moments {
    let n = samples.len() as f64;
    let mean = samples.sum() / n;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &x in samples.iter() {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;

    // Shape measures are undefined for a constant series; report 0 there.
    let (skewness, kurtosis) = if m2 > 0.0 {
        (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
    } else {
        (0.0, 0.0)
    };

    let mut sorted: Vec<f64> = samples.iter().copied().collect();
    sorted.sort_by(f64::total_cmp);
    let median = if sorted.len() % 2 == 1 {
        sorted[sorted.len() / 2]
    } else {
        let hi = sorted.len() / 2;
        (sorted[hi - 1] + sorted[hi]) / 2.0
    };

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Moments {
        mean,
        variance: m2,
        skewness,
        kurtosis,
        median,
        min,
        max,
    }
}

/// Moments of every column of an (N, 3) coordinate block.
pub fn axis_moments(coordinates: &Array2<f64>) -> [Moments; 3] {
    [
        moments(coordinates.column(0)),
        moments(coordinates.column(1)),
        moments(coordinates.column(2)),
    ]
}
