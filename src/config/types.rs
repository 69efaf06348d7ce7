//! Configuration types for the timecard engine.
//!
//! These are the strongly-typed structures deserialized from the
//! `engine.yaml` configuration file. Every field has a default, so an
//! empty file (or no file at all) yields a working configuration.

use serde::Deserialize;

/// Configuration for the punch-line computation.
///
/// # Example
///
/// ```
/// use timecard_engine::ComputeConfig;
///
/// let config = ComputeConfig::default();
/// assert_eq!(config.rounding_precision, 2);
/// assert!(config.overnight_allowed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    /// Decimal places the total is rounded to (nearest, half away from zero).
    pub rounding_precision: u32,
    /// Whether a clock-out earlier than clock-in wraps through midnight.
    /// When false, such entries are reported as diagnostics instead.
    pub overnight_allowed: bool,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            rounding_precision: 2,
            overnight_allowed: true,
        }
    }
}

/// Configuration for Monthly Time Data report parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Reserve-row codes whose time counts as pay-time extras.
    pub pay_extra_codes: Vec<String>,
    /// Minimum number of time tokens for a row to carry a pay-only column.
    pub pay_only_min_times: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pay_extra_codes: ["SCC", "PVEL", "LOSA", "ADJ-RRPY", "ADJ-RR", "ADJ", "RRPY"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            pay_only_min_times: 5,
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Punch-line computation settings.
    pub compute: ComputeConfig,
    /// Report parsing settings.
    pub report: ReportConfig,
}
