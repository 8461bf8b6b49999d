//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read config {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
