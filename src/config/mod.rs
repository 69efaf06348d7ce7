//! Configuration for the timecard engine.
//!
//! Configuration is split into types (the deserialized structures) and
//! the loader (reading YAML from disk).

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ComputeConfig, EngineConfig, ReportConfig};
