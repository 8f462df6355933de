//! Dual-mode gradient input
//!
//! Step functions accept the gradient either as a vector the host already
//! evaluated, or as an evaluator the algorithm may call at a position of its
//! choosing. Only Nesterov exploits the second mode (to evaluate at its
//! lookahead point); every other algorithm evaluates at the current position.

use std::fmt;

use crate::vec2::Vec2;

/// Gradient input for one step call.
///
/// The two modes form an explicit contract:
///
/// * [`Precomputed`](Gradient::Precomputed) - the host evaluated the gradient
///   itself, at whatever point it considers current. Algorithms use the
///   vector as-is; Nesterov applies no lookahead in this mode.
/// * [`Function`](Gradient::Function) - an evaluator from position to
///   gradient. Nesterov calls it at the lookahead point; all other
///   algorithms call it at the current position.
///
/// # Examples
///
/// ```
/// use descent_viz::{Gradient, Vec2};
///
/// let precomputed = Gradient::Precomputed(Vec2::new(1.0, 0.0));
/// assert_eq!(precomputed.at(Vec2::new(9.0, 9.0)), Vec2::new(1.0, 0.0));
///
/// // Gradient of f(x, y) = x^2 + y^2.
/// let bowl = |p: Vec2| Vec2::new(2.0 * p.x, 2.0 * p.y);
/// let evaluator = Gradient::Function(&bowl);
/// assert_eq!(evaluator.at(Vec2::new(3.0, -1.0)), Vec2::new(6.0, -2.0));
/// ```
pub enum Gradient<'a> {
    /// A gradient vector the host already evaluated.
    Precomputed(Vec2),
    /// An evaluator producing the gradient at a given position.
    Function(&'a dyn Fn(Vec2) -> Vec2),
}

impl Gradient<'_> {
    /// Evaluates the gradient at `position`.
    ///
    /// `Precomputed` returns the stored vector regardless of `position`;
    /// `Function` invokes the evaluator.
    pub fn at(&self, position: Vec2) -> Vec2 {
        match self {
            Gradient::Precomputed(g) => *g,
            Gradient::Function(grad_fn) => grad_fn(position),
        }
    }
}

impl From<Vec2> for Gradient<'static> {
    fn from(g: Vec2) -> Self {
        Gradient::Precomputed(g)
    }
}

impl<'a, F: Fn(Vec2) -> Vec2> From<&'a F> for Gradient<'a> {
    fn from(grad_fn: &'a F) -> Self {
        Gradient::Function(grad_fn)
    }
}

impl fmt::Debug for Gradient<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gradient::Precomputed(g) => f.debug_tuple("Precomputed").field(g).finish(),
            Gradient::Function(_) => f.write_str("Function(..)"),
        }
    }
}
