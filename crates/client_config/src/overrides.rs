//! Configuration overrides read from TOML.
//!
//! ```toml
//! endpoint = "pubsub.googleapis.com"
//! timeout = 30.0
//! transport = "rest"
//! lib_name = "gccl"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{ConfigError, ConfigResult};

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;

/// Values one configuration level sets. Absent keys are inherited.
///
/// `transport` is kept as text so an unknown name is reported as
/// `ConfigError::UnknownTransport` rather than a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub timeout: Option<f64>,
    pub retry: Option<bool>,
    pub transport: Option<String>,
    pub lib_name: Option<String>,
    pub lib_version: Option<String>,
    pub quota_project: Option<String>,
}

impl ConfigOverrides {
    /// Parse overrides from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read and parse overrides from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        debug!("Loading configuration overrides from {}", path.display());

        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let overrides = Self::from_toml_str(&text)?;

        debug!("Loaded configuration overrides: {:?}", overrides);
        Ok(overrides)
    }
}
