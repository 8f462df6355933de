//! Run handle owning one optimization run
//!
//! The host render loop holds a [`Run`] and drives it one step per frame.
//! The handle owns the optimizer state, the effective parameters, and the
//! path of visited positions, and exposes read-only views for the renderer.
//! There is no ambient global: everything about a run travels through its
//! handle.

use std::str::FromStr;

use crate::error::Result;
use crate::gradient::Gradient;
use crate::optimizers::{Algorithm, StepOutcome};
use crate::params::ParamMap;
use crate::state::OptimizerState;
use crate::vec2::Vec2;

/// One optimization run: algorithm, state, effective parameters, and path.
///
/// A `Run` is exclusively owned by one host loop; stepping and resetting
/// require `&mut self`, so two callers cannot interleave mutations. There
/// is no cancellation primitive; a run stops when the host stops stepping.
///
/// # Examples
///
/// ```
/// use descent_viz::{Gradient, ParamMap, Run, Vec2};
///
/// let mut run = Run::from_name("sgd", Vec2::new(1.0, 1.0), ParamMap::new()).unwrap();
/// let bowl = |p: Vec2| Vec2::new(2.0 * p.x, 2.0 * p.y);
///
/// for _ in 0..3 {
///     let gradient = bowl(run.position());
///     run.step(&Gradient::Precomputed(gradient));
/// }
///
/// assert_eq!(run.history().len(), 4); // start point + 3 steps
/// assert!(run.position().x < 1.0);
/// ```
#[derive(Debug)]
pub struct Run {
    algorithm: Algorithm,
    params: ParamMap,
    initial_position: Vec2,
    state: OptimizerState,
    history: Vec<Vec2>,
    skipped_steps: u64,
}

impl Run {
    /// Starts a run of `algorithm` from `start` with the given effective
    /// parameters.
    ///
    /// The parameter map is typically the defaults-document extraction with
    /// host overrides merged in; an empty map means every step resolves to
    /// the built-in defaults. The state is ensured at construction and the
    /// history is seeded with the start point.
    pub fn new(algorithm: Algorithm, start: impl Into<Vec2>, params: ParamMap) -> Self {
        let initial_position = start.into();
        let mut state = OptimizerState::new(initial_position);
        state.ensure();
        Self {
            algorithm,
            params,
            initial_position,
            state,
            history: vec![initial_position],
            skipped_steps: 0,
        }
    }

    /// Starts a run selecting the algorithm by identifier.
    ///
    /// # Returns
    ///
    /// `Err(Error::UnknownAlgorithm)` for unrecognized identifiers; no
    /// default algorithm is ever substituted.
    pub fn from_name(name: &str, start: impl Into<Vec2>, params: ParamMap) -> Result<Self> {
        let algorithm = Algorithm::from_str(name)?;
        Ok(Self::new(algorithm, start, params))
    }

    /// Advances the run by one step.
    ///
    /// The (possibly unchanged) position is appended to the history (one
    /// entry per step call, even when Adam's guard skips the update) and
    /// skipped steps are counted.
    pub fn step(&mut self, gradient: &Gradient<'_>) -> StepOutcome {
        let outcome = self
            .algorithm
            .step(&mut self.state, gradient, Some(&self.params));
        if outcome == StepOutcome::SkippedNonFinite {
            self.skipped_steps += 1;
        }
        self.history.push(self.state.position);
        outcome
    }

    /// Resets the run to its starting point.
    ///
    /// Position back to the initial point, accumulators zeroed, step counter
    /// restarted at 0, history truncated to the start point, skip counter
    /// cleared. No step call can observe a half-reset state in the
    /// single-threaded host this crate targets.
    pub fn reset(&mut self) {
        self.state.reset_to(self.initial_position);
        self.history.clear();
        self.history.push(self.initial_position);
        self.skipped_steps = 0;
    }

    /// The algorithm this run is using.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The effective parameters every step resolves against.
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// Current iterate.
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Every position visited so far, starting with the initial point.
    pub fn history(&self) -> &[Vec2] {
        &self.history
    }

    /// Read-only view of the optimizer state.
    pub fn state(&self) -> &OptimizerState {
        &self.state
    }

    /// Number of steps whose position update was skipped by the stability
    /// guard.
    pub fn skipped_steps(&self) -> u64 {
        self.skipped_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_history_with_start() {
        let run = Run::new(Algorithm::Sgd, Vec2::new(2.0, 3.0), ParamMap::new());
        assert_eq!(run.history(), &[Vec2::new(2.0, 3.0)]);
        assert_eq!(run.position(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert!(Run::from_name("newton", Vec2::ZERO, ParamMap::new()).is_err());
    }

    #[test]
    fn test_step_appends_history() {
        let mut run = Run::new(Algorithm::Sgd, Vec2::new(1.0, 0.0), ParamMap::new());
        run.step(&Gradient::Precomputed(Vec2::new(1.0, 0.0)));
        run.step(&Gradient::Precomputed(Vec2::new(1.0, 0.0)));

        assert_eq!(run.history().len(), 3);
        assert_eq!(run.history()[2], run.position());
    }

    #[test]
    fn test_skipped_step_still_appends_history() {
        let mut run = Run::new(Algorithm::Adam, Vec2::new(1.0, 1.0), ParamMap::new());
        let outcome = run.step(&Gradient::Precomputed(Vec2::new(1e308, 0.0)));

        assert_eq!(outcome, StepOutcome::SkippedNonFinite);
        assert_eq!(run.skipped_steps(), 1);
        assert_eq!(run.history().len(), 2);
        assert_eq!(run.history()[1], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_reset_restores_initial_snapshot() {
        let mut run = Run::new(Algorithm::Momentum, Vec2::new(1.0, -1.0), ParamMap::new());
        for _ in 0..5 {
            run.step(&Gradient::Precomputed(Vec2::new(1.0, 1.0)));
        }
        assert_ne!(run.position(), Vec2::new(1.0, -1.0));

        run.reset();

        assert_eq!(run.position(), Vec2::new(1.0, -1.0));
        assert_eq!(run.history(), &[Vec2::new(1.0, -1.0)]);
        assert_eq!(run.state().step, Some(0));
        assert_eq!(run.state().first_moment, Some(Vec2::ZERO));
        assert_eq!(run.skipped_steps(), 0);
    }

    #[test]
    fn test_run_uses_effective_params() {
        let mut params = ParamMap::new();
        params.insert("learning_rate".to_string(), 0.5);

        let mut run = Run::new(Algorithm::Sgd, Vec2::new(1.0, 0.0), params);
        run.step(&Gradient::Precomputed(Vec2::new(1.0, 0.0)));

        assert!((run.position().x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_runs_are_independent() {
        let mut a = Run::new(Algorithm::Sgd, Vec2::new(1.0, 0.0), ParamMap::new());
        let b = Run::new(Algorithm::Sgd, Vec2::new(1.0, 0.0), ParamMap::new());

        a.step(&Gradient::Precomputed(Vec2::new(1.0, 0.0)));

        assert_ne!(a.position(), b.position());
        assert_eq!(b.history().len(), 1);
    }
}
