//! cyclo-core: shared foundation for the cyclo cycle-space engine
//!
//! This crate provides the non-algorithmic pieces shared by the workspace:
//! - Types: node identifiers and performance-oriented collections
//! - Errors: per-subsystem error enums and the top-level `AnalysisError`
//! - Config: toml-backed analysis configuration
//! - Tracing: logging initialization
//! - Constants: shared defaults and limits

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{CycloConfig, DecomposeConfig, FilterConfig};
pub use errors::{AnalysisError, ConfigError, CycleError, ErrorCode, GraphError};
pub use types::identifiers::NodeId;
