//! # chaos-attractors
//!
//! Trajectory Generation and Spectral Analysis for 3D Chaotic Attractors
//!
//! ## Scope
//!
//! This crate numerically integrates a small family of third-order
//! autonomous (or quasi-autonomous) nonlinear systems — Lorenz, Rössler,
//! Rikitake, Nosé-Hoover, Wang, Duffing, Lotka-Volterra and Chua — and
//! derives signal-analysis series from the resulting orbits.
//!
//! ## Pipeline
//!
//! 1. **Registry**: a model identifier resolves to its declared parameter
//!    set ([`ModelRegistry`], [`ModelSpec`]).
//! 2. **Binding**: concrete coefficients are validated against the declared
//!    names and produce a runnable [`Model`] — a closed enum with one
//!    strongly-typed parameter record per system.
//! 3. **Integration**: classical fixed-step RK4 advances the 3-vector state
//!    ([`rk4_step`]); [`generate`] orchestrates it into a [`Trajectory`] of
//!    exactly `points + 1` states.
//! 4. **Analysis**: [`SignalAnalyzer`] computes, per coordinate axis, the
//!    centered magnitude spectrum, the normalized autocorrelation and
//!    descriptive moments ([`SpectralResult`]).
//!
//! Everything is deterministic and synchronous: identical inputs reproduce
//! identical trajectories bit-for-bit, and no state is shared between
//! calls, so independent runs may be fanned out across threads freely.
//!
//! ## Divergence
//!
//! Chaotic systems may leave the finite range under a coarse step. That is
//! not an error: the engine keeps producing the requested number of points
//! and lets the caller decide how to present a diverged tail. The typed
//! errors in [`error`] cover configuration misuse only.
//!
//! ## Presentation glue
//!
//! CSV export ([`export`]) and chart rendering ([`render`]) consume the
//! engine outputs; the `attractor` binary wires them to a command line.

pub mod analysis;
pub mod error;
pub mod export;
pub mod integrate;
pub mod models;
pub mod render;

// Re-exports: the engine surface
pub use error::{Error, Result};
pub use integrate::{generate, rk4_step, Axis3, Trajectory};
pub use models::{
    Model, ModelKind, ModelRegistry, ModelSpec, ParamSpec, ParameterBinding, State,
};

// Re-exports: derived analysis
pub use analysis::{
    autocorrelation, axis_moments, moments, power_spectrum, Autocorrelation, AxisAnalysis,
    Moments, SignalAnalyzer, Spectrum, SpectralResult,
};
