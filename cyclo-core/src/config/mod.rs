//! Analysis configuration, loadable from a `cyclo.toml` file.

mod analysis_config;

pub use analysis_config::{CycloConfig, DecomposeConfig, FilterConfig};
