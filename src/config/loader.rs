//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Maximum decimal places `rust_decimal` can round to.
const MAX_PRECISION: u32 = 28;

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/
/// └── engine.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let config = loader.config();
/// println!("rounding to {} places", config.compute.rounding_precision);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from `engine.yaml` in the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The rounding precision exceeds what decimal math supports
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join("engine.yaml");
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::validate(config)
    }

    /// Builds a loader from an already-deserialized configuration,
    /// applying the same validation as [`ConfigLoader::load`].
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate(config)
    }

    fn validate(config: EngineConfig) -> EngineResult<Self> {
        if config.compute.rounding_precision > MAX_PRECISION {
            return Err(EngineError::InvalidPrecision {
                precision: config.compute.rounding_precision,
            });
        }
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
