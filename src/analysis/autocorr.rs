//! Normalized Autocorrelation
//!
//! Correlation of a coordinate series with lagged copies of itself, used to
//! expose periodicity and decay structure in chaotic orbits. The estimator
//! removes the sample mean and normalizes by the zero-lag covariance, so
//! every non-constant series starts at exactly 1.0.

/// Autocorrelation of one coordinate axis over lags 0..N-1.
#[derive(Debug, Clone, PartialEq)]
pub struct Autocorrelation {
    /// Lag of each entry, in step units.
    pub lags: Vec<usize>,
    /// Normalized correlation at each lag; 1.0 at lag 0.
    pub values: Vec<f64>,
}

impl Autocorrelation {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Biased, mean-removed autocorrelation estimate.
///
/// r[k] = sum_i (x_i - mean)(x_{i+k} - mean) / sum_i (x_i - mean)^2
///
/// A constant series has zero variance; its correlation is reported as 1 at
/// lag 0 and 0 elsewhere rather than dividing by zero.
pub fn autocorrelation(samples: &[f64]) -> Autocorrelation {
    let n = samples.len();
    let lags: Vec<usize> = (0..n).collect();

    let mean = samples.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = samples.iter().map(|x| x - mean).collect();
    let denom: f64 = centered.iter().map(|c| c * c).sum();

    if !(denom.is_finite() && denom > 0.0) {
        let mut values = vec![0.0; n];
        if n > 0 {
            values[0] = 1.0;
        }
        return Autocorrelation { lags, values };
    }

    let values = (0..n)
        .map(|lag| {
            let mut acc = 0.0;
            for i in 0..n - lag {
                acc += centered[i] * centered[i + lag];
            }
            acc / denom
        })
        .collect();

    Autocorrelation { lags, values }
}
