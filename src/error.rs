//! Error types for the timecard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that per-line parse failures are NOT represented here: they are
//! collected as diagnostics inside [`PayResult`](crate::models::PayResult)
//! so that a single bad line never aborts a computation. The variants below
//! cover configuration loading only, which is the sole fatal path.

use thiserror::Error;

/// The main error type for the timecard engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Rounding precision exceeds what decimal arithmetic supports.
    #[error("Invalid rounding precision {precision}: must be at most 28 decimal places")]
    InvalidPrecision {
        /// The rejected precision value.
        precision: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_precision_displays_value() {
        let error = EngineError::InvalidPrecision { precision: 40 };
        assert_eq!(
            error.to_string(),
            "Invalid rounding precision 40: must be at most 28 decimal places"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
