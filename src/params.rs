//! Parameter resolution with synonym-aware lookup
//!
//! Host configuration arrives loosely keyed: the same hyperparameter may be
//! spelled `learning_rate`, `alpha`, or `eta` depending on where it came
//! from. This module maps canonical parameter names through a fixed synonym
//! table so every step function sees one canonical value, falling back to a
//! documented default when nothing is configured.

use std::collections::HashMap;

/// Loosely-keyed parameter configuration, as supplied by the host.
///
/// Keys are parameter names (canonical or synonym spellings), values are the
/// raw numeric settings. The map is treated as immutable for the duration of
/// a step call.
pub type ParamMap = HashMap<String, f64>;

/// Ordered synonym spellings accepted for a canonical parameter name.
///
/// The order matters: the first spelling present in the configuration wins.
/// Unknown names have no synonyms; `resolve` still probes them literally.
fn synonyms(canonical: &str) -> &'static [&'static str] {
    match canonical {
        "learning_rate" => &["learning_rate", "alpha", "eta"],
        "momentum" => &["momentum", "mu"],
        "rho" => &["rho", "decay"],
        "beta1" => &["beta1", "beta"],
        "beta2" => &["beta2"],
        "epsilon" => &["epsilon", "eps"],
        _ => &[],
    }
}

/// Resolves a parameter value from a loosely-keyed configuration.
///
/// Tries each canonical name in `names` in order. For each, its synonym set
/// is probed in order and the first value present is returned; the literal
/// name itself is probed last, which also covers names outside the synonym
/// table. Returns `default` when nothing resolves, including when `config`
/// is `None`. Absence is a resolution miss, never an error.
///
/// # Arguments
///
/// * `config` - Host configuration, or `None` when the host supplied nothing
/// * `names` - Canonical names to try in sequence (usually a single name)
/// * `default` - Value returned when no name resolves
///
/// # Examples
///
/// ```
/// use descent_viz::params::{resolve, ParamMap};
///
/// let mut config = ParamMap::new();
/// config.insert("alpha".to_string(), 0.05);
///
/// // `alpha` is a synonym of `learning_rate`.
/// assert_eq!(resolve(Some(&config), &["learning_rate"], 0.01), 0.05);
///
/// // Missing configuration falls back to the default.
/// assert_eq!(resolve(None, &["learning_rate"], 0.01), 0.01);
/// ```
pub fn resolve(config: Option<&ParamMap>, names: &[&str], default: f64) -> f64 {
    let Some(config) = config else {
        return default;
    };

    for name in names {
        for candidate in synonyms(name) {
            if let Some(&value) = config.get(*candidate) {
                return value;
            }
        }
        if let Some(&value) = config.get(*name) {
            return value;
        }
    }

    default
}

/// Normalizes a parameter name as it appears in documents or UI forms.
///
/// Lowercases, strips a `param-` prefix, and collapses whitespace runs to
/// underscores, so document keys like `"param-Learning Rate"` become
/// `"learning_rate"` before resolution.
///
/// # Examples
///
/// ```
/// use descent_viz::params::normalize_key;
///
/// assert_eq!(normalize_key("param-learning_rate"), "learning_rate");
/// assert_eq!(normalize_key("Learning Rate"), "learning_rate");
/// ```
pub fn normalize_key(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = lowered.strip_prefix("param-").unwrap_or(&lowered);

    let mut out = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, f64)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_resolve_canonical_name() {
        let cfg = config(&[("learning_rate", 0.2)]);
        assert_eq!(resolve(Some(&cfg), &["learning_rate"], 0.01), 0.2);
    }

    #[test]
    fn test_resolve_synonym() {
        let cfg = config(&[("eta", 0.3)]);
        assert_eq!(resolve(Some(&cfg), &["learning_rate"], 0.01), 0.3);
    }

    #[test]
    fn test_resolve_synonym_order() {
        // `learning_rate` precedes `alpha` in the synonym set.
        let cfg = config(&[("alpha", 0.5), ("learning_rate", 0.2)]);
        assert_eq!(resolve(Some(&cfg), &["learning_rate"], 0.01), 0.2);
    }

    #[test]
    fn test_resolve_name_list_order() {
        let cfg = config(&[("rho", 0.95), ("momentum", 0.8)]);
        assert_eq!(resolve(Some(&cfg), &["momentum", "rho"], 0.9), 0.8);
        assert_eq!(resolve(Some(&cfg), &["rho", "momentum"], 0.9), 0.95);
    }

    #[test]
    fn test_resolve_missing_config() {
        assert_eq!(resolve(None, &["learning_rate"], 0.01), 0.01);
    }

    #[test]
    fn test_resolve_empty_config() {
        let cfg = ParamMap::new();
        assert_eq!(resolve(Some(&cfg), &["learning_rate"], 0.01), 0.01);
    }

    #[test]
    fn test_resolve_unknown_name_probed_literally() {
        let cfg = config(&[("warmup", 5.0)]);
        assert_eq!(resolve(Some(&cfg), &["warmup"], 0.0), 5.0);
        assert_eq!(resolve(Some(&cfg), &["cooldown"], 1.0), 1.0);
    }

    #[test]
    fn test_resolve_decay_is_rho_synonym() {
        let cfg = config(&[("decay", 0.99)]);
        assert_eq!(resolve(Some(&cfg), &["rho"], 0.9), 0.99);
    }

    #[test]
    fn test_normalize_key_prefix_and_case() {
        assert_eq!(normalize_key("param-Epsilon"), "epsilon");
        assert_eq!(normalize_key("BETA1"), "beta1");
    }

    #[test]
    fn test_normalize_key_whitespace() {
        assert_eq!(normalize_key("learning  rate"), "learning_rate");
    }

    #[test]
    fn test_normalize_key_already_canonical() {
        assert_eq!(normalize_key("learning_rate"), "learning_rate");
    }
}
