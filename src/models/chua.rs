//! Chua Circuit: Piecewise-Linear Electronic Chaos
//!
//! The dimensionless Chua circuit, the standard laboratory demonstration of
//! chaos in an electronic oscillator:
//!
//!   h(x)  = mu1 * x + 0.5 * (mu0 - mu1) * (|x + 1| - |x - 1|)
//!   dx/dt = alpha * (y - x - h(x))
//!   dy/dt = x - y + z
//!   dz/dt = -beta * y
//!
//! where:
//! - alpha, beta: circuit time-scale ratios
//! - mu0, mu1: inner and outer slopes of the diode characteristic
//!
//! h(x) is the three-segment piecewise-linear characteristic of the Chua
//! diode. It is evaluated branch-free through the absolute values, exactly
//! as written: no smoothing, so the per-step cost stays uniform with the
//! other models. Defaults alpha = 15.6, beta = 28, mu0 = -1.143,
//! mu1 = -0.714 give the double-scroll attractor.
//!
//! ## References
//!
//! - Chua, L. O., Komuro, M. & Matsumoto, T. (1986). The Double Scroll
//!   Family. IEEE Trans. Circuits Syst.
//! - <https://en.wikipedia.org/wiki/Chua%27s_circuit>

use super::State;

pub const DEFAULT_ALPHA: f64 = 15.6;
pub const DEFAULT_BETA: f64 = 28.0;
pub const DEFAULT_MU0: f64 = -1.143;
pub const DEFAULT_MU1: f64 = -0.714;

/// Chua circuit coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chua {
    pub alpha: f64,
    pub beta: f64,
    /// Inner slope of the diode characteristic
    pub mu0: f64,
    /// Outer slope of the diode characteristic
    pub mu1: f64,
}

impl Default for Chua {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            mu0: DEFAULT_MU0,
            mu1: DEFAULT_MU1,
        }
    }
}

impl Chua {
    /// Piecewise-linear diode characteristic h(x).
    fn diode(&self, x: f64) -> f64 {
        self.mu1 * x + 0.5 * (self.mu0 - self.mu1) * ((x + 1.0).abs() - (x - 1.0).abs())
    }

    /// Right-hand side of the Chua equations.
    pub fn eval(&self, s: State, _t: f64) -> State {
        State {
            x: self.alpha * (s.y - s.x - self.diode(s.x)),
            y: s.x - s.y + s.z,
            z: -self.beta * s.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: State, expected: (f64, f64, f64)) {
        let err = (actual.x - expected.0).abs()
            + (actual.y - expected.1).abs()
            + (actual.z - expected.2).abs();
        assert!(err < 1e-7, "got {actual}, expected {expected:?}, err {err}");
    }

    #[test]
    fn test_default_parameter_vectors() {
        let chua = Chua::default();
        let cases = [
            ((0.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
            ((0.0, 0.0, 1.0), (0.0, 1.0, 0.0)),
            ((0.0, 1.0, 0.0), (15.6, -1.0, -28.0)),
            ((1.0, 0.0, 0.0), (2.2308, 1.0, 0.0)),
            ((1e-3, 1e-4, 1e-5), (3.7908e-3, 9.1e-4, -2.8e-3)),
            ((1.0, 2.0, 3.0), (33.4308, 2.0, -56.0)),
            ((-1000.0, 2000.0, -3000.0), (35654.9076, -6000.0, -56000.0)),
        ];

        for ((x, y, z), expected) in cases {
            assert_close(chua.eval(State::new(x, y, z), 0.0), expected);
        }
    }

    #[test]
    fn test_custom_parameter_vectors() {
        let chua = Chua {
            alpha: 11.0,
            beta: 43.0,
            mu0: -1.3,
            mu1: -0.9,
        };
        assert_close(chua.eval(State::new(1.0, 2.0, 3.0), 0.0), (25.3, 2.0, -86.0));
        assert_close(
            chua.eval(State::new(-0.01, 0.2, 100.0), 0.0),
            (2.167, 99.79, -8.6),
        );

        let chua = Chua {
            alpha: 4.0,
            beta: 17.0,
            mu0: -2.0,
            mu1: -3.0,
        };
        assert_close(chua.eval(State::new(1.0, 2.0, 3.0), 0.0), (12.0, 2.0, -34.0));
    }

    #[test]
    fn test_diode_is_odd_and_saturates() {
        let chua = Chua::default();
        // Inside |x| <= 1 the characteristic follows the inner slope mu0.
        assert!((chua.diode(0.5) - DEFAULT_MU0 * 0.5).abs() < 1e-12);
        // Odd symmetry.
        assert!((chua.diode(2.0) + chua.diode(-2.0)).abs() < 1e-12);
    }
}
