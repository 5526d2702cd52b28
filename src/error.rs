//! Error taxonomy for the trajectory engine.
//!
//! All four variants are synchronous configuration/usage errors raised at
//! the point of misuse. Numerical divergence (NaN/infinity appearing along
//! a trajectory) is deliberately NOT represented here: a diverging orbit is
//! a valid outcome of a chaotic system and flows through the engine
//! untouched.

use thiserror::Error;

/// Typed failures of the trajectory/analysis engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested model name is not registered.
    #[error("unknown model `{0}`; expected one of: lorenz, rossler, rikitake, nose-hoover, wang, duffing, lotka-volterra, chua")]
    UnknownModel(String),

    /// A parameter binding does not match the model's declared names, or a
    /// generation knob (point count, step size) is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The initial state is not a finite 3-vector.
    #[error("invalid initial state: {0}")]
    InvalidInitialState(String),

    /// The trajectory is too short for the requested analysis.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
