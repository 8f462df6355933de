//! Parameter-defaults document
//!
//! The visualizer ships a JSON document mapping each algorithm to its
//! tunable parameters, with default values and the range metadata the UI
//! uses to build input forms. This module parses and validates that
//! document and extracts the per-algorithm default parameter maps the core
//! consumes. Range metadata is parsed but otherwise owned by the UI layer.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::optimizers::Algorithm;
use crate::params::{normalize_key, ParamMap};

/// Specification of one tunable parameter.
///
/// Only `default_value` (with `step` as a secondary fallback) feeds the
/// optimizer core; the limits and `step` granularity exist for UI forms.
///
/// # Example
///
/// ```json
/// {
///   "default_value": 0.001,
///   "lower_limit": 0.0,
///   "upper_limit": 1.0,
///   "step": 0.0001
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ParamSpec {
    /// Default value for the parameter.
    pub default_value: Option<f64>,
    /// Smallest value the UI should accept.
    pub lower_limit: Option<f64>,
    /// Largest value the UI should accept.
    pub upper_limit: Option<f64>,
    /// UI input granularity; also the fallback default when
    /// `default_value` is absent.
    pub step: Option<f64>,
}

impl ParamSpec {
    /// The value this spec contributes to a default parameter map:
    /// `default_value`, falling back to `step`, or nothing.
    pub fn effective_default(&self) -> Option<f64> {
        self.default_value.or(self.step)
    }
}

/// The full parameter-defaults document.
///
/// A nested mapping from algorithm document key (e.g. `"Adam"`,
/// `"SGDMomentum"`) to parameter name to [`ParamSpec`].
///
/// # Example
///
/// ```
/// use descent_viz::config::DefaultsDocument;
/// use descent_viz::Algorithm;
///
/// let doc = DefaultsDocument::from_json(
///     r#"{ "SGD": { "learning_rate": { "default_value": 0.02 } } }"#,
/// ).unwrap();
///
/// let defaults = doc.defaults_for(Algorithm::Sgd);
/// assert_eq!(defaults.get("learning_rate"), Some(&0.02));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DefaultsDocument {
    algorithms: HashMap<String, HashMap<String, ParamSpec>>,
}

impl DefaultsDocument {
    /// Loads and validates a defaults document from a JSON file.
    ///
    /// # Returns
    ///
    /// `Ok(DefaultsDocument)` on success, or an error if the file cannot be
    /// read, the JSON is invalid, or validation rejects the contents.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use descent_viz::config::DefaultsDocument;
    ///
    /// let doc = DefaultsDocument::load("optimizersParameters.json").unwrap();
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses and validates a defaults document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: DefaultsDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Extracts the default parameter map for one algorithm.
    ///
    /// Parameter names are normalized (lowercased, `param-` prefix
    /// stripped) so the resolver's synonym lookup applies directly. A
    /// missing algorithm section yields an empty map; resolution then falls
    /// back to the per-algorithm built-in defaults.
    pub fn defaults_for(&self, algorithm: Algorithm) -> ParamMap {
        let mut defaults = ParamMap::new();
        if let Some(specs) = self.algorithms.get(algorithm.document_key()) {
            for (name, spec) in specs {
                if let Some(value) = spec.effective_default() {
                    defaults.insert(normalize_key(name), value);
                }
            }
        }
        defaults
    }

    /// True when the document has a section for the algorithm.
    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.algorithms.contains_key(algorithm.document_key())
    }

    fn validate(&self) -> Result<()> {
        for (algorithm, specs) in &self.algorithms {
            for (name, spec) in specs {
                if let Some(value) = spec.default_value {
                    if !value.is_finite() {
                        return Err(Error::InvalidDefaults(format!(
                            "{algorithm}.{name}: default_value must be finite"
                        )));
                    }
                }
                if let (Some(lower), Some(upper)) = (spec.lower_limit, spec.upper_limit) {
                    if lower > upper {
                        return Err(Error::InvalidDefaults(format!(
                            "{algorithm}.{name}: lower_limit {lower} exceeds upper_limit {upper}"
                        )));
                    }
                }
                if let Some(step) = spec.step {
                    if !(step > 0.0) || !step.is_finite() {
                        return Err(Error::InvalidDefaults(format!(
                            "{algorithm}.{name}: step must be positive and finite"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
