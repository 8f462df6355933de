//! Adam (Adaptive Moment Estimation) step function
//!
//! Combines momentum and RMSProp-style adaptive scaling, with bias
//! correction compensating for the zero-initialized accumulators. The
//! position update passes through a numerical stability guard: non-finite
//! intermediates skip the update instead of corrupting the iterate.

use log::warn;

use crate::gradient::Gradient;
use crate::optimizers::StepOutcome;
use crate::params::{resolve, ParamMap};
use crate::state::OptimizerState;
use crate::vec2::Vec2;

/// Default learning rate when the configuration resolves nothing.
pub const DEFAULT_LEARNING_RATE: f64 = 0.001;
/// Default first-moment decay rate when the configuration resolves nothing.
pub const DEFAULT_BETA1: f64 = 0.9;
/// Default second-moment decay rate when the configuration resolves nothing.
pub const DEFAULT_BETA2: f64 = 0.999;
/// Default numerical-stability floor when the configuration resolves nothing.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Applies one Adam step.
///
/// Update rule, per coordinate, with the counter advanced first so the
/// first step computes with `t = 1`:
///
/// `m = beta1 * m + (1 - beta1) * g`
/// `v = beta2 * v + (1 - beta2) * g * g`
/// `m_hat = m / (1 - beta1^t)`
/// `v_hat = v / (1 - beta2^t)`
/// `pos -= lr * m_hat / (sqrt(v_hat) + eps)`
///
/// Unlike Adagrad and RMSProp, the epsilon is added to the square root, not
/// inside it.
///
/// # Numerical stability guard
///
/// If `m_hat` or either denominator `sqrt(v_hat) + eps` is non-finite
/// (overflowing squared gradients, NaN propagation from a malformed input),
/// the position update is skipped for this call and
/// [`StepOutcome::SkippedNonFinite`] is returned. The counter has already
/// advanced and the accumulators keep their just-updated values, so a
/// single bad sample cannot teleport the iterate while later well-formed
/// gradients still recover the run. The skip is also reported through the
/// `log` facade at warning level.
///
/// # Resolved parameters
///
/// * `learning_rate` (default 0.001)
/// * `beta1` (default 0.9)
/// * `beta2` (default 0.999)
/// * `epsilon` (default 1e-8)
///
/// # Examples
///
/// ```
/// use descent_viz::optimizers::adam;
/// use descent_viz::{Gradient, OptimizerState, StepOutcome, Vec2};
///
/// let mut state = OptimizerState::new(Vec2::new(1.0, 0.0));
/// let outcome = adam::step(&mut state, &Gradient::Precomputed(Vec2::new(1.0, 0.0)), None);
///
/// assert_eq!(outcome, StepOutcome::Updated);
/// // Bias correction at t = 1 cancels the (1 - beta1) factor: the first
/// // step moves by almost exactly the learning rate.
/// assert!((state.position.x - 0.999).abs() < 1e-6);
/// ```
pub fn step(
    state: &mut OptimizerState,
    gradient: &Gradient<'_>,
    params: Option<&ParamMap>,
) -> StepOutcome {
    state.ensure();
    let lr = resolve(params, &["learning_rate"], DEFAULT_LEARNING_RATE);
    let beta1 = resolve(params, &["beta1"], DEFAULT_BETA1);
    let beta2 = resolve(params, &["beta2"], DEFAULT_BETA2);
    let epsilon = resolve(params, &["epsilon"], DEFAULT_EPSILON);
    let g = gradient.at(state.position);

    let t = state.advance();

    let m = state.first_moment.get_or_insert(Vec2::ZERO);
    m.x = beta1 * m.x + (1.0 - beta1) * g.x;
    m.y = beta1 * m.y + (1.0 - beta1) * g.y;
    let m = *m;

    let v = state.second_moment.get_or_insert(Vec2::ZERO);
    v.x = beta2 * v.x + (1.0 - beta2) * g.x * g.x;
    v.y = beta2 * v.y + (1.0 - beta2) * g.y * g.y;
    let v = *v;

    let correction1 = 1.0 - beta1.powi(t as i32);
    let correction2 = 1.0 - beta2.powi(t as i32);

    let m_hat = Vec2::new(m.x / correction1, m.y / correction1);
    let v_hat = Vec2::new(v.x / correction2, v.y / correction2);
    let denom_x = v_hat.x.sqrt() + epsilon;
    let denom_y = v_hat.y.sqrt() + epsilon;

    if !m_hat.is_finite() || !denom_x.is_finite() || !denom_y.is_finite() {
        warn!(
            "adam: non-finite update at step {t} (m_hat = {m_hat:?}, denom = ({denom_x}, {denom_y})), skipping position update"
        );
        return StepOutcome::SkippedNonFinite;
    }

    state.position.x -= lr * m_hat.x / denom_x;
    state.position.y -= lr * m_hat.y / denom_y;

    StepOutcome::Updated
}
