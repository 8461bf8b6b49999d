//! Error taxonomy for cyclo.
//!
//! One enum per subsystem plus the top-level `AnalysisError` wrapper.
//! NotDecomposable is deliberately absent: an exhausted decomposition search
//! is a normal outcome reported through `Option`, never an error.

pub mod config_error;
pub mod cycle_error;
pub mod error_code;
pub mod graph_error;

pub use config_error::ConfigError;
pub use cycle_error::CycleError;
pub use error_code::ErrorCode;
pub use graph_error::GraphError;

/// Top-level error for the analysis pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Cycle(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
