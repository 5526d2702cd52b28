//! Rikitake Dynamo: Geomagnetic Field Reversal
//!
//! The Rikitake two-disc dynamo attempts to explain the irregular reversals
//! of the Earth's magnetic field:
//!
//!   dx/dt = -mu * x + z * y
//!   dy/dt = -mu * y + x * (z - a)
//!   dz/dt = 1 - x * y
//!
//! where:
//! - mu: resistive dissipation of the discs
//! - a: difference of the angular velocities
//!
//! Documented parameter sets are (mu = 1, a = 5) and (mu = 2, a = 5); the
//! defaults here use the former. At the origin the coupling terms vanish
//! and dz/dt = 1, so the dynamo is driven away from rest along z.
//!
//! ## References
//!
//! - Rikitake, T. (1958). Oscillations of a system of disk dynamos.
//!   Proc. Camb. Phil. Soc.
//! - <https://en.wikipedia.org/wiki/Rikitake_dynamo>

use super::State;

pub const DEFAULT_MU: f64 = 1.0;
pub const DEFAULT_A: f64 = 5.0;

/// Rikitake dynamo coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rikitake {
    /// Disc dissipation
    pub mu: f64,
    /// Angular velocity difference
    pub a: f64,
}

impl Default for Rikitake {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            a: DEFAULT_A,
        }
    }
}

impl Rikitake {
    /// Right-hand side of the Rikitake equations.
    pub fn eval(&self, s: State, _t: f64) -> State {
        State {
            x: -self.mu * s.x + s.z * s.y,
            y: -self.mu * s.y + s.x * (s.z - self.a),
            z: 1.0 - s.x * s.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_drives_z_only() {
        let d = Rikitake::default().eval(State::new(0.0, 0.0, 0.0), 0.0);
        assert_eq!(d, State::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_reference_point() {
        // f(1, 1, 1) with mu = 1, a = 5:
        //   (-1 + 1, -1 + (1 - 5), 1 - 1)
        let d = Rikitake::default().eval(State::new(1.0, 1.0, 1.0), 0.0);
        assert!((d.x - 0.0).abs() < 1e-12);
        assert!((d.y + 5.0).abs() < 1e-12);
        assert!((d.z - 0.0).abs() < 1e-12);
    }
}
