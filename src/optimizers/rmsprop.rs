//! RMSProp step function
//!
//! Adagrad with a leaky accumulator: the squared-gradient statistic decays
//! exponentially instead of growing without bound, so the effective step
//! size tracks the recent gradient scale.

use crate::gradient::Gradient;
use crate::optimizers::StepOutcome;
use crate::params::{resolve, ParamMap};
use crate::state::OptimizerState;
use crate::vec2::Vec2;

/// Default learning rate when the configuration resolves nothing.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Default decay coefficient when the configuration resolves nothing.
pub const DEFAULT_RHO: f64 = 0.9;
/// Default numerical-stability floor when the configuration resolves nothing.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Applies one RMSProp step.
///
/// Update rule, per coordinate:
///
/// `v = rho * v + (1 - rho) * g * g`
/// `pos -= lr * g / sqrt(v + eps)`
///
/// The epsilon sits inside the square root, as in Adagrad.
///
/// # Resolved parameters
///
/// * `learning_rate` (default 0.01)
/// * `rho` (default 0.9)
/// * `epsilon` (default 1e-8)
///
/// # Examples
///
/// ```
/// use descent_viz::optimizers::rmsprop;
/// use descent_viz::{Gradient, OptimizerState, Vec2};
///
/// let mut state = OptimizerState::new(Vec2::new(1.0, 0.0));
/// rmsprop::step(&mut state, &Gradient::Precomputed(Vec2::new(1.0, 0.0)), None);
///
/// // v = 0.1, so the step is lr / sqrt(0.1 + eps) ≈ 0.0316.
/// assert!(state.position.x < 1.0 && state.position.x > 0.95);
/// ```
pub fn step(
    state: &mut OptimizerState,
    gradient: &Gradient<'_>,
    params: Option<&ParamMap>,
) -> StepOutcome {
    state.ensure();
    let lr = resolve(params, &["learning_rate"], DEFAULT_LEARNING_RATE);
    let rho = resolve(params, &["rho"], DEFAULT_RHO);
    let epsilon = resolve(params, &["epsilon"], DEFAULT_EPSILON);
    let g = gradient.at(state.position);

    let v = state.second_moment.get_or_insert(Vec2::ZERO);
    v.x = rho * v.x + (1.0 - rho) * g.x * g.x;
    v.y = rho * v.y + (1.0 - rho) * g.y * g.y;

    state.position.x -= lr * g.x / (v.x + epsilon).sqrt();
    state.position.y -= lr * g.y / (v.y + epsilon).sqrt();

    state.advance();
    StepOutcome::Updated
}
