//! Descent Visualizer Core
//!
//! This library is the step engine behind an educational visualizer for
//! first-order gradient-based optimization: six update rules walking a 2D
//! position downhill under a user-supplied gradient, plus the parameter
//! resolution and state normalization that feed them.
//!
//! # Modules
//!
//! - `vec2`: the canonical 2-component vector type
//! - `params`: synonym-aware parameter resolution
//! - `state`: optimizer state and the invariant enforcer
//! - `gradient`: dual-mode gradient input (vector or evaluator)
//! - `optimizers`: the step functions (SGD, Momentum, Nesterov, Adagrad,
//!   RMSProp, Adam) and the algorithm selector
//! - `config`: the parameter-defaults document
//! - `run`: the run handle the host loop drives
//! - `error`: crate error type
//!
//! # Example
//!
//! ```
//! use descent_viz::{Gradient, ParamMap, Run, Vec2};
//!
//! // f(x, y) = x^2 + y^2; its gradient is (2x, 2y).
//! let bowl = |p: Vec2| Vec2::new(2.0 * p.x, 2.0 * p.y);
//!
//! let mut run = Run::from_name("adam", Vec2::new(2.0, -1.0), ParamMap::new()).unwrap();
//! for _ in 0..100 {
//!     run.step(&Gradient::Function(&bowl));
//! }
//!
//! // The path is what the renderer draws.
//! assert_eq!(run.history().len(), 101);
//! ```

pub mod config;
pub mod error;
pub mod gradient;
pub mod optimizers;
pub mod params;
pub mod run;
pub mod state;
pub mod vec2;

pub use config::{DefaultsDocument, ParamSpec};
pub use error::{Error, Result};
pub use gradient::Gradient;
pub use optimizers::{Algorithm, StepOutcome};
pub use params::{normalize_key, resolve, ParamMap};
pub use run::Run;
pub use state::OptimizerState;
pub use vec2::Vec2;
