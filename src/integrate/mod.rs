//! Fixed-Step Integration: RK4 and Trajectory Generation
//!
//! Advances a model state with the classical 4th-order Runge-Kutta scheme
//! and orchestrates it across N steps into an ordered [`Trajectory`].
//!
//! Both [`rk4_step`] and [`generate`] are pure functions of their inputs:
//! no memory is carried between calls, so identical arguments reproduce
//! identical results bit-for-bit under identical floating-point semantics.
//! A state that turns non-finite mid-run is NOT an error; divergence is an
//! expected outcome for chaotic systems and the requested number of points
//! is always produced verbatim.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::models::{Model, State};

/// Coordinate axis selector for per-axis trajectory views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

impl Axis3 {
    pub const ALL: [Axis3; 3] = [Axis3::X, Axis3::Y, Axis3::Z];

    pub fn label(self) -> &'static str {
        match self {
            Axis3::X => "x",
            Axis3::Y => "y",
            Axis3::Z => "z",
        }
    }

    fn component(self, s: &State) -> f64 {
        match self {
            Axis3::X => s.x,
            Axis3::Y => s.y,
            Axis3::Z => s.z,
        }
    }
}

/// Advance `state` by one increment of size `h`.
///
/// Classical RK4: four right-hand-side evaluations per step, error O(h^5)
/// locally. Non-finite intermediate values propagate into the returned
/// state; the caller decides whether that constitutes a fault.
pub fn rk4_step(model: &Model, state: State, t: f64, h: f64) -> State {
    let half = h / 2.0;

    let k1 = model.eval(state, t);
    let k2 = model.eval(state + k1 * half, t + half);
    let k3 = model.eval(state + k2 * half, t + half);
    let k4 = model.eval(state + k3 * h, t + h);

    state + (k1 + (k2 + k3) * 2.0 + k4) * (h / 6.0)
}

/// Ordered sequence of states sampled at a fixed step size.
///
/// Index i corresponds to simulated time `i * step`; the first entry is the
/// supplied initial condition, so a run of `points` steps holds
/// `points + 1` states.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
    step: f64,
}

impl Trajectory {
    /// Wrap an existing ordered state sequence, e.g. one loaded from disk,
    /// so it can flow through the same analysis path as a generated run.
    pub fn from_states(states: Vec<State>, step: f64) -> Self {
        Self { states, step }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of stored states (steps + 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Integration step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Simulated time of the i-th state.
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    /// One coordinate of every state, in generation order.
    pub fn axis(&self, axis: Axis3) -> Vec<f64> {
        self.states.iter().map(|s| axis.component(s)).collect()
    }

    /// The full coordinate block as an (N+1) x 3 array.
    pub fn coordinates(&self) -> Array2<f64> {
        let mut coords = Array2::zeros((self.states.len(), 3));
        for (i, s) in self.states.iter().enumerate() {
            coords[[i, 0]] = s.x;
            coords[[i, 1]] = s.y;
            coords[[i, 2]] = s.z;
        }
        coords
    }

    /// Whether every stored state is finite.
    pub fn is_finite(&self) -> bool {
        self.states.iter().all(State::is_finite)
    }

    /// Index of the first non-finite state, if the run diverged.
    pub fn divergence_index(&self) -> Option<usize> {
        self.states.iter().position(|s| !s.is_finite())
    }
}

/// Generate a trajectory of `points` steps from `initial`.
///
/// Fails with [`Error::InvalidParameter`] when `points == 0` or when `step`
/// is not a positive finite number, and with [`Error::InvalidInitialState`]
/// when the initial condition has a non-finite component. Divergence along
/// the way is passed through, never raised.
pub fn generate(model: &Model, initial: State, step: f64, points: usize) -> Result<Trajectory> {
    if points == 0 {
        return Err(Error::InvalidParameter(
            "point count must be at least 1".to_string(),
        ));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "step size must be a positive finite number, got {step}"
        )));
    }
    if !initial.is_finite() {
        return Err(Error::InvalidInitialState(format!(
            "initial state must have three finite components, got {initial}"
        )));
    }

    let mut states = Vec::with_capacity(points + 1);
    states.push(initial);

    let mut current = initial;
    for i in 0..points {
        current = rk4_step(model, current, i as f64 * step, step);
        states.push(current);
    }

    Ok(Trajectory { states, step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelRegistry, Rikitake};
    use approx::assert_abs_diff_eq;

    fn bound_default(name: &str) -> Model {
        let registry = ModelRegistry::new();
        let spec = registry.resolve(name).unwrap();
        spec.bind(&spec.defaults()).unwrap()
    }

    #[test]
    fn test_rikitake_origin_single_step() {
        // At the origin dx/dt = dy/dt = 0 and dz/dt = 1, so one step of
        // size h lands exactly on (0, 0, h).
        let model = Model::Rikitake(Rikitake { mu: 1.0, a: 5.0 });
        let h = 0.05;
        let next = rk4_step(&model, State::new(0.0, 0.0, 0.0), 0.0, h);

        assert_abs_diff_eq!(next.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(next.y, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(next.z, h, epsilon = 1e-15);
    }

    #[test]
    fn test_lorenz_first_step_direction() {
        // From (0.1, 0, 0): y < x gives dx/dt < 0, so x must decrease.
        let model = bound_default("lorenz");
        let next = rk4_step(&model, State::new(0.1, 0.0, 0.0), 0.0, 0.01);
        assert!(next.x < 0.1);
    }

    #[test]
    fn test_step_is_idempotent() {
        let model = bound_default("chua");
        let s = State::new(0.3, -0.2, 0.1);
        let a = rk4_step(&model, s, 0.0, 0.01);
        let b = rk4_step(&model, s, 0.0, 0.01);
        assert_eq!(a, b);
    }

    #[test]
    fn test_trajectory_length_is_points_plus_one() {
        let model = bound_default("lorenz");
        for points in [1, 2, 17, 1024] {
            let traj = generate(&model, State::new(1e-4, 1e-4, 1e-4), 0.01, points).unwrap();
            assert_eq!(traj.len(), points + 1);
        }
    }

    #[test]
    fn test_trajectory_starts_at_initial() {
        let model = bound_default("rossler");
        let initial = State::new(0.5, -0.5, 0.25);
        let traj = generate(&model, initial, 0.01, 10).unwrap();
        assert_eq!(traj.states()[0], initial);
        assert_eq!(traj.time(0), 0.0);
        assert_abs_diff_eq!(traj.time(10), 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let model = bound_default("wang");
        let initial = State::new(0.1, 0.0, -0.1);
        let a = generate(&model, initial, 0.01, 500).unwrap();
        let b = generate(&model, initial, 0.01, 500).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_points_rejected() {
        let model = bound_default("lorenz");
        let err = generate(&model, State::new(0.1, 0.0, 0.0), 0.01, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_nonpositive_step_rejected() {
        let model = bound_default("lorenz");
        for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = generate(&model, State::new(0.1, 0.0, 0.0), step, 10).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "step {step}");
        }
    }

    #[test]
    fn test_nonfinite_initial_rejected() {
        let model = bound_default("lorenz");
        let err = generate(&model, State::new(f64::NAN, 0.0, 0.0), 0.01, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidInitialState(_)));
    }

    #[test]
    fn test_divergence_passes_through() {
        // Lotka-Volterra blows up from a hostile initial condition with a
        // large step; the run must still deliver every requested point.
        let model = bound_default("lotka-volterra");
        let traj = generate(&model, State::new(-50.0, 40.0, -30.0), 10.0, 32).unwrap();

        assert_eq!(traj.len(), 33);
        assert!(!traj.is_finite());
        let first_bad = traj.divergence_index().unwrap();
        assert!(first_bad > 0, "initial state was finite");
    }

    #[test]
    fn test_axis_and_coordinates_agree() {
        let model = bound_default("nose-hoover");
        let traj = generate(&model, State::new(0.1, 0.0, -0.1), 0.01, 20).unwrap();
        let coords = traj.coordinates();

        assert_eq!(coords.nrows(), traj.len());
        for (i, value) in traj.axis(Axis3::Y).into_iter().enumerate() {
            assert_eq!(coords[[i, 1]], value);
        }
    }

    #[test]
    fn test_rk4_tracks_linear_growth_exactly() {
        // Duffing's phase coordinate obeys dz/dt = 1; RK4 integrates a
        // constant derivative without truncation error.
        let model = bound_default("duffing");
        let traj = generate(&model, State::new(0.0, 0.0, 0.0), 0.01, 100).unwrap();
        assert_abs_diff_eq!(traj.states()[100].z, 1.0, epsilon = 1e-12);
    }
}
