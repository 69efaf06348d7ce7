//! Timecard computation engine for Monthly Time Data pastes.
//!
//! This crate parses pasted timecard text (single-line or multi-line) into
//! structured time entries and computes total pay hours. Parsing tolerates
//! malformed lines by collecting them as diagnostics rather than failing the
//! whole input; aggregation always succeeds over the valid subset.

#![warn(missing_docs)]

pub mod compute;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;

pub use compute::compute;
pub use config::{ComputeConfig, EngineConfig, ReportConfig};
pub use models::PayResult;
