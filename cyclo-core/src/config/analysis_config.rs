//! Analysis configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_BASIS_LEN, DEFAULT_SUPERLEVEL_THRESHOLD};
use crate::errors::ConfigError;

/// Top-level cyclo configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CycloConfig {
    /// Decomposition search settings.
    pub decompose: DecomposeConfig,
    /// Superlevel filter settings.
    pub filter: FilterConfig,
}

/// Configuration for the cycle decomposition search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DecomposeConfig {
    /// Maximum basis size accepted by the subset search. The search is
    /// O(2^n) in the basis size, so this is the externally imposed bound
    /// on an otherwise unbounded computation. Default: 20.
    pub max_basis_len: Option<usize>,
}

/// Configuration for superlevel subgraph filtering.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Node weight threshold. Default: 0.0.
    pub threshold: Option<f64>,
}

impl CycloConfig {
    /// Load configuration from a toml file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded cyclo config");
        Ok(config)
    }
}

impl DecomposeConfig {
    /// Returns the effective basis size limit, defaulting to 20.
    pub fn effective_max_basis_len(&self) -> usize {
        self.max_basis_len.unwrap_or(DEFAULT_MAX_BASIS_LEN)
    }
}

impl FilterConfig {
    /// Returns the effective threshold, defaulting to 0.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_SUPERLEVEL_THRESHOLD)
    }
}
