//! Optimizer step functions for the 2D descent visualizer
//!
//! This module provides one stateless-with-respect-to-the-caller step
//! function per algorithm, plus the [`Algorithm`] selector that dispatches
//! by name.
//!
//! # Overview
//!
//! Each step function consumes the run state, a gradient (vector or
//! evaluator), and an optional loosely-keyed parameter map. It enforces the
//! state invariants, resolves its own parameters against documented
//! defaults, applies the update rule per coordinate, and advances the step
//! counter by exactly one.
//!
//! # Available Algorithms
//!
//! - SGD: vanilla gradient descent
//! - Momentum: velocity-accumulating gradient descent
//! - Nesterov: momentum with lookahead gradient evaluation
//! - Adagrad: per-coordinate adaptive step from accumulated squared gradients
//! - RMSProp: exponentially-decayed squared-gradient accumulator
//! - Adam: bias-corrected first and second moments with a non-finite guard
//!
//! # Example
//!
//! ```
//! use descent_viz::{Algorithm, Gradient, OptimizerState, Vec2};
//!
//! let mut state = OptimizerState::new(Vec2::new(1.0, 1.0));
//! let algorithm: Algorithm = "sgd".parse().unwrap();
//!
//! algorithm.step(&mut state, &Gradient::Precomputed(Vec2::new(1.0, 0.0)), None);
//! assert_eq!(state.position, Vec2::new(0.99, 1.0));
//! ```

pub mod adagrad;
pub mod adam;
pub mod momentum;
pub mod nesterov;
pub mod rmsprop;
pub mod sgd;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::gradient::Gradient;
use crate::params::ParamMap;
use crate::state::OptimizerState;

/// Outcome of a single step call.
///
/// Every algorithm normally reports [`Updated`](StepOutcome::Updated). Only
/// Adam's numerical stability guard can report
/// [`SkippedNonFinite`](StepOutcome::SkippedNonFinite): the position was left
/// untouched for this call while the step counter and accumulators still
/// advanced. The host may count skips or surface them however it likes; the
/// run is always safe to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The position was updated.
    Updated,
    /// Non-finite intermediates were detected; the position update was
    /// skipped for this call.
    SkippedNonFinite,
}

/// Optimization algorithm selector.
///
/// Selection is by case-insensitive string identifier. Unrecognized
/// identifiers are rejected rather than silently defaulting: running the
/// wrong optimizer produces misleading visualizations.
///
/// # Examples
///
/// ```
/// use descent_viz::Algorithm;
///
/// let algorithm: Algorithm = "RMSProp".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::RmsProp);
/// assert_eq!(algorithm.name(), "rmsprop");
///
/// assert!("newton".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Vanilla stochastic gradient descent.
    Sgd,
    /// Gradient descent with momentum.
    Momentum,
    /// Nesterov accelerated gradient.
    Nesterov,
    /// Adagrad.
    Adagrad,
    /// RMSProp.
    RmsProp,
    /// Adam.
    Adam,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Sgd,
        Algorithm::Momentum,
        Algorithm::Nesterov,
        Algorithm::Adagrad,
        Algorithm::RmsProp,
        Algorithm::Adam,
    ];

    /// Canonical lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sgd => "sgd",
            Algorithm::Momentum => "momentum",
            Algorithm::Nesterov => "nesterov",
            Algorithm::Adagrad => "adagrad",
            Algorithm::RmsProp => "rmsprop",
            Algorithm::Adam => "adam",
        }
    }

    /// Key under which the parameter-defaults document lists this algorithm.
    pub fn document_key(self) -> &'static str {
        match self {
            Algorithm::Sgd => "SGD",
            Algorithm::Momentum => "SGDMomentum",
            Algorithm::Nesterov => "NesterovMomentum",
            Algorithm::Adagrad => "Adagrad",
            Algorithm::RmsProp => "RMSprop",
            Algorithm::Adam => "Adam",
        }
    }

    /// Applies one step of this algorithm.
    ///
    /// Dispatches to the corresponding step function; see the submodule
    /// documentation for each update rule and its parameter defaults.
    pub fn step(
        self,
        state: &mut OptimizerState,
        gradient: &Gradient<'_>,
        params: Option<&ParamMap>,
    ) -> StepOutcome {
        match self {
            Algorithm::Sgd => sgd::step(state, gradient, params),
            Algorithm::Momentum => momentum::step(state, gradient, params),
            Algorithm::Nesterov => nesterov::step(state, gradient, params),
            Algorithm::Adagrad => adagrad::step(state, gradient, params),
            Algorithm::RmsProp => rmsprop::step(state, gradient, params),
            Algorithm::Adam => adam::step(state, gradient, params),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a case-insensitive algorithm identifier.
    ///
    /// Accepts the canonical names plus the historical spellings
    /// `sgdmomentum` and `nesterovmomentum`. Anything else fails closed with
    /// [`Error::UnknownAlgorithm`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sgd" => Ok(Algorithm::Sgd),
            "momentum" | "sgdmomentum" => Ok(Algorithm::Momentum),
            "nesterov" | "nesterovmomentum" => Ok(Algorithm::Nesterov),
            "adagrad" => Ok(Algorithm::Adagrad),
            "rmsprop" => Ok(Algorithm::RmsProp),
            "adam" => Ok(Algorithm::Adam),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
