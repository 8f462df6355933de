//! Nesterov accelerated gradient step function
//!
//! Momentum with lookahead: when the gradient is supplied as an evaluator,
//! it is evaluated at the position the velocity is already carrying the
//! iterate toward, not at the current position.

use crate::gradient::Gradient;
use crate::optimizers::StepOutcome;
use crate::params::{resolve, ParamMap};
use crate::state::OptimizerState;
use crate::vec2::Vec2;

/// Default learning rate when the configuration resolves nothing.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Default momentum coefficient when the configuration resolves nothing.
pub const DEFAULT_MOMENTUM: f64 = 0.9;

/// Applies one Nesterov step.
///
/// Update rule, per coordinate, with lookahead point
/// `pos' = pos + momentum * m`:
///
/// `g = grad(pos')` (evaluator mode)
/// `m = momentum * m - lr * g`
/// `pos += m`
///
/// The gradient input is dual-mode by contract:
///
/// * [`Gradient::Function`] - the evaluator is called at the lookahead
///   point; this is the genuine Nesterov update.
/// * [`Gradient::Precomputed`] - the supplied vector is assumed already
///   evaluated where the host wanted it; no lookahead offset is applied and
///   the update degenerates to classical momentum. This is intentional, not
///   a fallback.
///
/// # Resolved parameters
///
/// * `learning_rate` (default 0.01)
/// * `momentum` (default 0.9)
///
/// # Examples
///
/// ```
/// use descent_viz::optimizers::nesterov;
/// use descent_viz::{Gradient, OptimizerState, Vec2};
///
/// let bowl = |p: Vec2| Vec2::new(2.0 * p.x, 2.0 * p.y);
/// let mut state = OptimizerState::new(Vec2::new(1.0, 0.0));
///
/// nesterov::step(&mut state, &Gradient::Function(&bowl), None);
/// assert!(state.position.x < 1.0);
/// ```
pub fn step(
    state: &mut OptimizerState,
    gradient: &Gradient<'_>,
    params: Option<&ParamMap>,
) -> StepOutcome {
    state.ensure();
    let lr = resolve(params, &["learning_rate"], DEFAULT_LEARNING_RATE);
    let momentum = resolve(params, &["momentum"], DEFAULT_MOMENTUM);

    let g = match gradient {
        Gradient::Function(grad_fn) => {
            let m = state.first_moment.unwrap_or(Vec2::ZERO);
            let lookahead = Vec2::new(
                state.position.x + momentum * m.x,
                state.position.y + momentum * m.y,
            );
            grad_fn(lookahead)
        }
        Gradient::Precomputed(g) => *g,
    };

    let m = state.first_moment.get_or_insert(Vec2::ZERO);
    m.x = momentum * m.x - lr * g.x;
    m.y = momentum * m.y - lr * g.y;

    state.position.x += m.x;
    state.position.y += m.y;

    state.advance();
    StepOutcome::Updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_has_no_lookahead_effect() {
        // With zero velocity the lookahead point equals the current position,
        // so evaluator and precomputed modes agree on the first step.
        let bowl = |p: Vec2| Vec2::new(2.0 * p.x, 2.0 * p.y);

        let mut with_fn = OptimizerState::new(Vec2::new(1.0, 0.0));
        step(&mut with_fn, &Gradient::Function(&bowl), None);

        let mut with_vec = OptimizerState::new(Vec2::new(1.0, 0.0));
        step(
            &mut with_vec,
            &Gradient::Precomputed(Vec2::new(2.0, 0.0)),
            None,
        );

        assert_eq!(with_fn.position, with_vec.position);
    }

    #[test]
    fn test_lookahead_evaluation_diverges_from_momentum() {
        let bowl = |p: Vec2| Vec2::new(2.0 * p.x, 2.0 * p.y);
        let g = Gradient::Function(&bowl);

        let mut nesterov_state = OptimizerState::new(Vec2::new(1.0, 0.0));
        step(&mut nesterov_state, &g, None);
        step(&mut nesterov_state, &g, None);

        let mut momentum_state = OptimizerState::new(Vec2::new(1.0, 0.0));
        crate::optimizers::momentum::step(&mut momentum_state, &g, None);
        crate::optimizers::momentum::step(&mut momentum_state, &g, None);

        // From the second step onward the lookahead changes the trajectory.
        assert_ne!(nesterov_state.position, momentum_state.position);
    }

    #[test]
    fn test_lookahead_point_is_position_plus_scaled_velocity() {
        let mut state = OptimizerState::new(Vec2::new(1.0, 0.0));
        state.first_moment = Some(Vec2::new(-0.1, 0.0));

        let seen = std::cell::Cell::new(Vec2::ZERO);
        let recorder = |p: Vec2| {
            seen.set(p);
            Vec2::ZERO
        };
        step(&mut state, &Gradient::Function(&recorder), None);

        let expected_x = 1.0 + DEFAULT_MOMENTUM * -0.1;
        assert!((seen.get().x - expected_x).abs() < 1e-12);
        assert!(seen.get().y.abs() < 1e-12);
    }

    #[test]
    fn test_precomputed_mode_matches_momentum_update() {
        let g = Gradient::Precomputed(Vec2::new(1.0, -1.0));

        let mut nesterov_state = OptimizerState::new(Vec2::new(1.0, 1.0));
        step(&mut nesterov_state, &g, None);
        step(&mut nesterov_state, &g, None);

        let mut momentum_state = OptimizerState::new(Vec2::new(1.0, 1.0));
        crate::optimizers::momentum::step(&mut momentum_state, &g, None);
        crate::optimizers::momentum::step(&mut momentum_state, &g, None);

        assert_eq!(nesterov_state.position, momentum_state.position);
    }

    #[test]
    fn test_zero_gradient_is_fixed_point() {
        let flat = |_: Vec2| Vec2::ZERO;
        let mut state = OptimizerState::new(Vec2::new(4.0, -4.0));
        for _ in 0..8 {
            step(&mut state, &Gradient::Function(&flat), None);
        }
        assert_eq!(state.position, Vec2::new(4.0, -4.0));
        assert_eq!(state.step, Some(8));
    }
}
