//! Adagrad step function
//!
//! Per-coordinate adaptive step sizes: each coordinate's effective learning
//! rate shrinks as its squared gradients accumulate, so frequently-steep
//! directions slow down while flat directions keep moving.

use crate::gradient::Gradient;
use crate::optimizers::StepOutcome;
use crate::params::{resolve, ParamMap};
use crate::state::OptimizerState;
use crate::vec2::Vec2;

/// Default learning rate when the configuration resolves nothing.
///
/// Higher than the other algorithms' 0.01: the accumulated denominator
/// shrinks the effective step quickly.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
/// Default numerical-stability floor when the configuration resolves nothing.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Applies one Adagrad step.
///
/// Update rule, per coordinate:
///
/// `v += g * g`
/// `pos -= lr * g / sqrt(v + eps)`
///
/// The epsilon sits inside the square root. The second-moment accumulator
/// only ever grows, so the effective step size decays monotonically.
///
/// # Resolved parameters
///
/// * `learning_rate` (default 0.1)
/// * `epsilon` (default 1e-8)
///
/// # Examples
///
/// ```
/// use descent_viz::optimizers::adagrad;
/// use descent_viz::{Gradient, OptimizerState, Vec2};
///
/// let mut state = OptimizerState::new(Vec2::new(1.0, 0.0));
/// adagrad::step(&mut state, &Gradient::Precomputed(Vec2::new(1.0, 0.0)), None);
///
/// // v = 1, so the step is lr / sqrt(1 + eps) ≈ 0.1.
/// assert!((state.position.x - 0.9).abs() < 1e-6);
/// ```
pub fn step(
    state: &mut OptimizerState,
    gradient: &Gradient<'_>,
    params: Option<&ParamMap>,
) -> StepOutcome {
    state.ensure();
    let lr = resolve(params, &["learning_rate"], DEFAULT_LEARNING_RATE);
    let epsilon = resolve(params, &["epsilon"], DEFAULT_EPSILON);
    let g = gradient.at(state.position);

    let v = state.second_moment.get_or_insert(Vec2::ZERO);
    v.x += g.x * g.x;
    v.y += g.y * g.y;

    state.position.x -= lr * g.x / (v.x + epsilon).sqrt();
    state.position.y -= lr * g.y / (v.y + epsilon).sqrt();

    state.advance();
    StepOutcome::Updated
}
