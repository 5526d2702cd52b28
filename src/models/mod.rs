//! Chaotic Attractor Models: Uniform Abstraction over Right-Hand Sides
//!
//! One module per dynamical system, each exposing a strongly-typed parameter
//! record and a pure right-hand-side evaluation. The closed [`Model`] enum
//! ties them together so the integrator can advance any system through a
//! single signature, and [`ModelRegistry`] maps CLI-facing identifiers to
//! declared parameter sets.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ModelRegistry                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  resolve(name)  ──► &ModelSpec (declared parameters)         │
//! │  defaults(name) ──► ParameterBinding (documented defaults)   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │ bind(&ParameterBinding)
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │   Model (closed enum, one typed parameter record per system) │
//! ├──────────────────────────────────────────────────────────────┤
//! │  eval(state, t) ──► State derivative (pure, total)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is constructed once at startup and read-only thereafter;
//! bindings and models are cheap per-run values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

mod chua;
mod duffing;
mod lorenz;
mod lotka_volterra;
mod nose_hoover;
mod rikitake;
mod rossler;
mod wang;

pub use chua::Chua;
pub use duffing::Duffing;
pub use lorenz::Lorenz;
pub use lotka_volterra::LotkaVolterra;
pub use nose_hoover::NoseHoover;
pub use rikitake::Rikitake;
pub use rossler::Rossler;
pub use wang::Wang;

/// Instantaneous configuration of a 3rd-order system.
///
/// An immutable snapshot; the integrator produces a new `State` per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl State {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// All three components are finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for State {
    type Output = State;

    fn add(self, rhs: State) -> State {
        State::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Mul<f64> for State {
    type Output = State;

    fn mul(self, k: f64) -> State {
        State::new(self.x * k, self.y * k, self.z * k)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Identifier of a registered model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Lorenz,
    Rossler,
    Rikitake,
    NoseHoover,
    Wang,
    Duffing,
    LotkaVolterra,
    Chua,
}

impl ModelKind {
    /// Every registered kind, in registry order.
    pub const ALL: [ModelKind; 8] = [
        ModelKind::Lorenz,
        ModelKind::Rossler,
        ModelKind::Rikitake,
        ModelKind::NoseHoover,
        ModelKind::Wang,
        ModelKind::Duffing,
        ModelKind::LotkaVolterra,
        ModelKind::Chua,
    ];

    /// The CLI-facing spelling of this identifier.
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Lorenz => "lorenz",
            ModelKind::Rossler => "rossler",
            ModelKind::Rikitake => "rikitake",
            ModelKind::NoseHoover => "nose-hoover",
            ModelKind::Wang => "wang",
            ModelKind::Duffing => "duffing",
            ModelKind::LotkaVolterra => "lotka-volterra",
            ModelKind::Chua => "chua",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

/// One declared parameter: its registry name and documented default.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(name: &'static str, default: f64) -> Self {
        Self { name, default }
    }
}

/// Concrete numeric values assigned to a model's named coefficients.
///
/// [`ModelSpec::bind`] demands the key set equal the declared names exactly;
/// both missing and unknown names are configuration errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBinding {
    values: BTreeMap<String, f64>,
}

impl ParameterBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one coefficient.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Fetch a coefficient the model declares as required.
    fn require(&self, model: ModelKind, name: &str) -> Result<f64> {
        self.get(name).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "model `{}` requires parameter `{}`",
                model.name(),
                name
            ))
        })
    }

    /// Declared names, in deterministic (sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, f64)> for ParameterBinding {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Declarative description of one dynamical system: its identifier and the
/// parameter names it requires. Binding a [`ParameterBinding`] against a
/// spec produces a runnable [`Model`].
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    kind: ModelKind,
    params: &'static [ParamSpec],
}

impl ModelSpec {
    const fn new(kind: ModelKind, params: &'static [ParamSpec]) -> Self {
        Self { kind, params }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The declared parameters, with documented defaults.
    pub fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    /// The documented default coefficients as a binding.
    pub fn defaults(&self) -> ParameterBinding {
        self.params
            .iter()
            .map(|p| (p.name.to_string(), p.default))
            .collect()
    }

    /// Validate a binding against the declared names and build the typed
    /// model. The binding must contain exactly the declared names.
    pub fn bind(&self, binding: &ParameterBinding) -> Result<Model> {
        for name in binding.names() {
            if !self.params.iter().any(|p| p.name == name) {
                return Err(Error::InvalidParameter(format!(
                    "model `{}` has no parameter `{}`",
                    self.name(),
                    name
                )));
            }
        }

        let model = match self.kind {
            ModelKind::Lorenz => Model::Lorenz(Lorenz {
                sigma: binding.require(self.kind, "sigma")?,
                rho: binding.require(self.kind, "rho")?,
                beta: binding.require(self.kind, "beta")?,
            }),
            ModelKind::Rossler => Model::Rossler(Rossler {
                a: binding.require(self.kind, "a")?,
                b: binding.require(self.kind, "b")?,
                c: binding.require(self.kind, "c")?,
            }),
            ModelKind::Rikitake => Model::Rikitake(Rikitake {
                mu: binding.require(self.kind, "mu")?,
                a: binding.require(self.kind, "a")?,
            }),
            ModelKind::NoseHoover => Model::NoseHoover(NoseHoover),
            ModelKind::Wang => Model::Wang(Wang),
            ModelKind::Duffing => Model::Duffing(Duffing {
                a: binding.require(self.kind, "a")?,
                b: binding.require(self.kind, "b")?,
            }),
            ModelKind::LotkaVolterra => Model::LotkaVolterra(LotkaVolterra),
            ModelKind::Chua => Model::Chua(Chua {
                alpha: binding.require(self.kind, "alpha")?,
                beta: binding.require(self.kind, "beta")?,
                mu0: binding.require(self.kind, "mu0")?,
                mu1: binding.require(self.kind, "mu1")?,
            }),
        };

        Ok(model)
    }
}

/// A bound, runnable model: one tagged variant per registered system, each
/// carrying its own parameter record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    Lorenz(Lorenz),
    Rossler(Rossler),
    Rikitake(Rikitake),
    NoseHoover(NoseHoover),
    Wang(Wang),
    Duffing(Duffing),
    LotkaVolterra(LotkaVolterra),
    Chua(Chua),
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Lorenz(_) => ModelKind::Lorenz,
            Model::Rossler(_) => ModelKind::Rossler,
            Model::Rikitake(_) => ModelKind::Rikitake,
            Model::NoseHoover(_) => ModelKind::NoseHoover,
            Model::Wang(_) => ModelKind::Wang,
            Model::Duffing(_) => ModelKind::Duffing,
            Model::LotkaVolterra(_) => ModelKind::LotkaVolterra,
            Model::Chua(_) => ModelKind::Chua,
        }
    }

    /// Evaluate the right-hand side at `state`.
    ///
    /// Pure and total: every input produces a derivative, finite or not.
    /// `t` is part of the uniform signature; the registered systems are
    /// autonomous (Duffing's forcing phase rides in the `z` coordinate), so
    /// none of them reads it.
    pub fn eval(&self, state: State, t: f64) -> State {
        match self {
            Model::Lorenz(p) => p.eval(state, t),
            Model::Rossler(p) => p.eval(state, t),
            Model::Rikitake(p) => p.eval(state, t),
            Model::NoseHoover(p) => p.eval(state, t),
            Model::Wang(p) => p.eval(state, t),
            Model::Duffing(p) => p.eval(state, t),
            Model::LotkaVolterra(p) => p.eval(state, t),
            Model::Chua(p) => p.eval(state, t),
        }
    }
}

/// Process-wide table of registered models.
///
/// Constructed once at startup; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    specs: [ModelSpec; 8],
}

const LORENZ_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("sigma", lorenz::DEFAULT_SIGMA),
    ParamSpec::new("rho", lorenz::DEFAULT_RHO),
    ParamSpec::new("beta", lorenz::DEFAULT_BETA),
];

const ROSSLER_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("a", rossler::DEFAULT_A),
    ParamSpec::new("b", rossler::DEFAULT_B),
    ParamSpec::new("c", rossler::DEFAULT_C),
];

const RIKITAKE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("mu", rikitake::DEFAULT_MU),
    ParamSpec::new("a", rikitake::DEFAULT_A),
];

const DUFFING_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("a", duffing::DEFAULT_A),
    ParamSpec::new("b", duffing::DEFAULT_B),
];

const CHUA_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("alpha", chua::DEFAULT_ALPHA),
    ParamSpec::new("beta", chua::DEFAULT_BETA),
    ParamSpec::new("mu0", chua::DEFAULT_MU0),
    ParamSpec::new("mu1", chua::DEFAULT_MU1),
];

const NO_PARAMS: &[ParamSpec] = &[];

impl ModelRegistry {
    pub fn new() -> Self {
        Self {
            specs: [
                ModelSpec::new(ModelKind::Lorenz, LORENZ_PARAMS),
                ModelSpec::new(ModelKind::Rossler, ROSSLER_PARAMS),
                ModelSpec::new(ModelKind::Rikitake, RIKITAKE_PARAMS),
                ModelSpec::new(ModelKind::NoseHoover, NO_PARAMS),
                ModelSpec::new(ModelKind::Wang, NO_PARAMS),
                ModelSpec::new(ModelKind::Duffing, DUFFING_PARAMS),
                ModelSpec::new(ModelKind::LotkaVolterra, NO_PARAMS),
                ModelSpec::new(ModelKind::Chua, CHUA_PARAMS),
            ],
        }
    }

    /// All registered specs, in registry order.
    pub fn specs(&self) -> &[ModelSpec] {
        &self.specs
    }

    /// Look up a model by its CLI-facing name.
    pub fn resolve(&self, name: &str) -> Result<&ModelSpec> {
        self.specs
            .iter()
            .find(|spec| spec.name() == name)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    /// Documented default coefficients for a model.
    pub fn defaults(&self, name: &str) -> Result<ParameterBinding> {
        Ok(self.resolve(name)?.defaults())
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_registered_names() {
        let registry = ModelRegistry::new();
        for kind in ModelKind::ALL {
            let spec = registry.resolve(kind.name()).unwrap();
            assert_eq!(spec.kind(), kind);
        }
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = ModelRegistry::new();
        let err = registry.resolve("henon").unwrap_err();
        assert!(matches!(err, Error::UnknownModel(name) if name == "henon"));
    }

    #[test]
    fn test_defaults_match_declared_names() {
        let registry = ModelRegistry::new();
        for kind in ModelKind::ALL {
            let spec = registry.resolve(kind.name()).unwrap();
            let defaults = registry.defaults(kind.name()).unwrap();

            assert_eq!(defaults.len(), spec.params().len());
            for p in spec.params() {
                assert_eq!(
                    defaults.get(p.name),
                    Some(p.default),
                    "default for {}.{}",
                    kind.name(),
                    p.name
                );
            }
        }
    }

    #[test]
    fn test_defaults_bind_for_every_model() {
        let registry = ModelRegistry::new();
        for kind in ModelKind::ALL {
            let spec = registry.resolve(kind.name()).unwrap();
            let model = spec.bind(&spec.defaults()).unwrap();
            assert_eq!(model.kind(), kind);
        }
    }

    #[test]
    fn test_bind_rejects_missing_parameter() {
        let registry = ModelRegistry::new();
        let spec = registry.resolve("lorenz").unwrap();

        let defaults = spec.defaults();
        let binding: ParameterBinding = defaults
            .iter()
            .filter(|(name, _)| *name != "rho")
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        let err = spec.bind(&binding).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(msg) if msg.contains("rho")));
    }

    #[test]
    fn test_bind_rejects_unknown_parameter() {
        let registry = ModelRegistry::new();
        let spec = registry.resolve("wang").unwrap();

        let mut binding = ParameterBinding::new();
        binding.set("gamma", 1.0);

        let err = spec.bind(&binding).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(msg) if msg.contains("gamma")));
    }

    #[test]
    fn test_lorenz_documented_defaults() {
        let registry = ModelRegistry::new();
        let defaults = registry.defaults("lorenz").unwrap();
        assert_eq!(defaults.get("sigma"), Some(10.0));
        assert_eq!(defaults.get("rho"), Some(28.0));
        assert_eq!(defaults.get("beta"), Some(8.0 / 3.0));
    }

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.name().parse::<ModelKind>().unwrap(), kind);
        }
        assert!("Lorenz".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_state_is_finite() {
        assert!(State::new(0.0, -1.5, 1e300).is_finite());
        assert!(!State::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!State::new(0.0, f64::INFINITY, 0.0).is_finite());
    }
}
