//! Momentum step function
//!
//! Gradient descent with a velocity accumulator: past gradients keep
//! contributing to the displacement, damped by a friction coefficient.

use crate::gradient::Gradient;
use crate::optimizers::StepOutcome;
use crate::params::{resolve, ParamMap};
use crate::state::OptimizerState;
use crate::vec2::Vec2;

/// Default learning rate when the configuration resolves nothing.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Default momentum coefficient when the configuration resolves nothing.
pub const DEFAULT_MOMENTUM: f64 = 0.9;

/// Applies one momentum step.
///
/// Update rule, per coordinate:
///
/// `m = momentum * m - lr * g`
/// `pos += m`
///
/// The first-moment accumulator holds the velocity; the second-moment
/// accumulator is unused.
///
/// # Resolved parameters
///
/// * `learning_rate` (default 0.01)
/// * `momentum` (default 0.9)
///
/// # Examples
///
/// ```
/// use descent_viz::optimizers::momentum;
/// use descent_viz::{Gradient, OptimizerState, Vec2};
///
/// let mut state = OptimizerState::new(Vec2::new(1.0, 0.0));
/// momentum::step(&mut state, &Gradient::Precomputed(Vec2::new(1.0, 0.0)), None);
///
/// // First step from a zero velocity is a plain SGD step.
/// assert_eq!(state.position, Vec2::new(0.99, 0.0));
/// ```
pub fn step(
    state: &mut OptimizerState,
    gradient: &Gradient<'_>,
    params: Option<&ParamMap>,
) -> StepOutcome {
    state.ensure();
    let lr = resolve(params, &["learning_rate"], DEFAULT_LEARNING_RATE);
    let momentum = resolve(params, &["momentum"], DEFAULT_MOMENTUM);
    let g = gradient.at(state.position);

    let m = state.first_moment.get_or_insert(Vec2::ZERO);
    m.x = momentum * m.x - lr * g.x;
    m.y = momentum * m.y - lr * g.y;

    state.position.x += m.x;
    state.position.y += m.y;

    state.advance();
    StepOutcome::Updated
}
