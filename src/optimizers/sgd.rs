//! Stochastic Gradient Descent (SGD) step function
//!
//! This module provides the vanilla gradient descent update:
//! `position = position - learning_rate * gradient`

use crate::gradient::Gradient;
use crate::optimizers::StepOutcome;
use crate::params::{resolve, ParamMap};
use crate::state::OptimizerState;

/// Default learning rate when the configuration resolves nothing.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Applies one SGD step.
///
/// Update rule, per coordinate:
///
/// `pos -= lr * g`
///
/// SGD uses neither accumulator; the step counter still advances by one so
/// runs can be compared across algorithms.
///
/// # Resolved parameters
///
/// * `learning_rate` (default 0.01)
///
/// # Examples
///
/// ```
/// use descent_viz::optimizers::sgd;
/// use descent_viz::{Gradient, OptimizerState, Vec2};
///
/// let mut state = OptimizerState::new(Vec2::new(1.0, 2.0));
/// sgd::step(&mut state, &Gradient::Precomputed(Vec2::new(1.0, -1.0)), None);
///
/// assert_eq!(state.position, Vec2::new(0.99, 2.01));
/// assert_eq!(state.step, Some(1));
/// ```
pub fn step(
    state: &mut OptimizerState,
    gradient: &Gradient<'_>,
    params: Option<&ParamMap>,
) -> StepOutcome {
    state.ensure();
    let lr = resolve(params, &["learning_rate"], DEFAULT_LEARNING_RATE);
    let g = gradient.at(state.position);

    state.position.x -= lr * g.x;
    state.position.y -= lr * g.y;

    state.advance();
    StepOutcome::Updated
}
