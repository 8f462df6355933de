//! Error types for algorithm selection and defaults-document loading

use thiserror::Error;

/// The error type for fallible operations in this crate.
///
/// Parameter resolution misses are not errors (they fall back to defaults);
/// everything here is a genuine failure the caller must handle.
#[derive(Error, Debug)]
pub enum Error {
    /// The algorithm identifier matched no known optimizer.
    ///
    /// Selection fails closed: silently substituting a default algorithm
    /// would produce a misleading visualization.
    #[error("unknown optimizer algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// The parameter-defaults document could not be read.
    #[error("failed to read parameter defaults: {0}")]
    Io(#[from] std::io::Error),

    /// The parameter-defaults document is not valid JSON.
    #[error("invalid parameter defaults document: {0}")]
    Json(#[from] serde_json::Error),

    /// The parameter-defaults document parsed but contains invalid values.
    #[error("invalid parameter defaults: {0}")]
    InvalidDefaults(String),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_display() {
        let err = Error::UnknownAlgorithm("newton".to_string());
        assert!(err.to_string().contains("newton"));
    }

    #[test]
    fn test_invalid_defaults_display() {
        let err = Error::InvalidDefaults("step must be positive".to_string());
        assert!(err.to_string().contains("step must be positive"));
    }
}
