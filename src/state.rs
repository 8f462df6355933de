//! Optimizer state and the invariant enforcer
//!
//! Every step function operates on an [`OptimizerState`]: the current
//! iterate plus the accumulators and step counter the algorithms maintain.
//! Accumulators start out unmaterialized; [`OptimizerState::ensure`]
//! normalizes the state into canonical form before any algorithm touches it.

use crate::vec2::Vec2;

/// Mutable state of one optimization run.
///
/// Owned exclusively by the caller for the duration of a run. The position
/// is always present in canonical vector form (loose representations convert
/// at construction via the [`Vec2`] conversions); the accumulators and step
/// counter may be absent until [`ensure`](Self::ensure) materializes them.
///
/// # Fields
///
/// * `position` - Current iterate, mutated in place by every step
/// * `first_moment` - `m`: velocity for Momentum/Nesterov, biased first-moment
///   estimate for Adam; unused by SGD and Adagrad
/// * `second_moment` - `v`: squared-gradient accumulator for Adagrad/RMSProp,
///   biased second-moment estimate for Adam; unused by SGD, Momentum, Nesterov
/// * `step` - `t`: counts completed step calls, starting at 0; Adam reads it
///   for bias correction
///
/// # Examples
///
/// ```
/// use descent_viz::{OptimizerState, Vec2};
///
/// let mut state = OptimizerState::new(Vec2::new(2.0, -1.0));
/// state.ensure();
/// assert_eq!(state.first_moment, Some(Vec2::ZERO));
/// assert_eq!(state.step, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerState {
    /// Current iterate.
    pub position: Vec2,
    /// First-moment accumulator (`m`), zero-initialized by `ensure`.
    pub first_moment: Option<Vec2>,
    /// Second-moment accumulator (`v`), zero-initialized by `ensure`.
    pub second_moment: Option<Vec2>,
    /// Step counter (`t`), initialized to 0 by `ensure`.
    pub step: Option<u64>,
}

impl OptimizerState {
    /// Creates a fresh state at the given starting position.
    ///
    /// Accumulators and the step counter are left unmaterialized; the first
    /// step call (or an explicit [`ensure`](Self::ensure)) fills them in.
    ///
    /// # Examples
    ///
    /// ```
    /// use descent_viz::OptimizerState;
    ///
    /// // Any loose position representation converts to vector form here.
    /// let state = OptimizerState::new([2.0, -1.0]);
    /// assert_eq!(state.position.x, 2.0);
    /// assert_eq!(state.first_moment, None);
    /// ```
    pub fn new(position: impl Into<Vec2>) -> Self {
        Self {
            position: position.into(),
            first_moment: None,
            second_moment: None,
            step: None,
        }
    }

    /// Enforces the state invariant: accumulators in vector form, counter a number.
    ///
    /// Materializes `first_moment` and `second_moment` as zero vectors and
    /// `step` as 0 when absent. Fields already in canonical form are never
    /// overwritten, so the call is idempotent. The position is not touched:
    /// its vector form is guaranteed by the type, and inventing a position
    /// here would mask a caller error.
    pub fn ensure(&mut self) {
        self.first_moment.get_or_insert(Vec2::ZERO);
        self.second_moment.get_or_insert(Vec2::ZERO);
        self.step.get_or_insert(0);
    }

    /// Advances the step counter by exactly one and returns the new count.
    ///
    /// The counter is materialized at 0 first if it was absent, so the first
    /// advance always yields 1.
    pub fn advance(&mut self) -> u64 {
        let step = self.step.get_or_insert(0);
        *step += 1;
        *step
    }

    /// Resets the state to a starting position.
    ///
    /// The position moves to `initial`, both accumulators become zero
    /// vectors, and the step counter restarts at 0, the same convention a
    /// fresh ensured state has.
    pub fn reset_to(&mut self, initial: Vec2) {
        self.position = initial;
        self.first_moment = Some(Vec2::ZERO);
        self.second_moment = Some(Vec2::ZERO);
        self.step = Some(0);
    }
}

impl Default for OptimizerState {
    /// A state at the origin.
    ///
    /// Last-resort constructor: real runs should name their starting point
    /// via [`OptimizerState::new`].
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_accumulators_unmaterialized() {
        let state = OptimizerState::new(Vec2::new(1.0, 2.0));
        assert_eq!(state.position, Vec2::new(1.0, 2.0));
        assert_eq!(state.first_moment, None);
        assert_eq!(state.second_moment, None);
        assert_eq!(state.step, None);
    }

    #[test]
    fn test_ensure_materializes_missing_fields() {
        let mut state = OptimizerState::new(Vec2::ZERO);
        state.ensure();
        assert_eq!(state.first_moment, Some(Vec2::ZERO));
        assert_eq!(state.second_moment, Some(Vec2::ZERO));
        assert_eq!(state.step, Some(0));
    }

    #[test]
    fn test_ensure_preserves_existing_fields() {
        let mut state = OptimizerState::new(Vec2::ZERO);
        state.first_moment = Some(Vec2::new(0.5, -0.5));
        state.step = Some(7);
        state.ensure();
        assert_eq!(state.first_moment, Some(Vec2::new(0.5, -0.5)));
        assert_eq!(state.step, Some(7));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut state = OptimizerState::new(Vec2::new(3.0, 4.0));
        state.ensure();
        let after_first = state.clone();
        state.ensure();
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_advance_from_unmaterialized_counter() {
        let mut state = OptimizerState::new(Vec2::ZERO);
        assert_eq!(state.advance(), 1);
        assert_eq!(state.advance(), 2);
        assert_eq!(state.step, Some(2));
    }

    #[test]
    fn test_reset_to() {
        let mut state = OptimizerState::new(Vec2::new(5.0, 5.0));
        state.ensure();
        state.first_moment = Some(Vec2::new(1.0, 1.0));
        state.second_moment = Some(Vec2::new(2.0, 2.0));
        state.step = Some(42);

        state.reset_to(Vec2::new(5.0, 5.0));

        assert_eq!(state.position, Vec2::new(5.0, 5.0));
        assert_eq!(state.first_moment, Some(Vec2::ZERO));
        assert_eq!(state.second_moment, Some(Vec2::ZERO));
        assert_eq!(state.step, Some(0));
    }

    #[test]
    fn test_default_is_origin() {
        let state = OptimizerState::default();
        assert_eq!(state.position, Vec2::ZERO);
    }
}
