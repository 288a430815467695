//! Inheritable client settings.
//!
//! A [`ClientConfig`] either sits at the root of a hierarchy, where unset
//! values fall back to a [`ResolvedConfig`] of defaults, or has a parent it
//! falls back to. Lookups walk the chain on every read, so a parent changed
//! after a child was created is seen by the child immediately.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

use crate::validation::{
    validate_endpoint, validate_lib_name, validate_lib_version, validate_quota_project,
    validate_timeout,
};
use crate::{ConfigOverrides, ConfigResult, Transport};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default endpoint for a root configuration.
pub const DEFAULT_ENDPOINT: &str = "localhost:443";

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 60.0;

/// A fully resolved set of client settings.
///
/// Used both as the defaults of a root [`ClientConfig`] and as the snapshot
/// returned by [`ClientConfig::resolved`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub timeout: f64,
    pub retry: bool,
    pub transport: Transport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_project: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            retry: true,
            transport: Transport::Grpc,
            lib_name: None,
            lib_version: None,
            quota_project: None,
        }
    }
}

/// Values set directly on one configuration level. `None` means inherit.
#[derive(Debug, Clone, Default)]
struct ConfigValues {
    endpoint: Option<String>,
    timeout: Option<f64>,
    retry: Option<bool>,
    transport: Option<Transport>,
    lib_name: Option<String>,
    lib_version: Option<String>,
    quota_project: Option<String>,
}

#[derive(Debug)]
enum Fallback {
    Parent(Arc<ClientConfig>),
    Defaults(ResolvedConfig),
}

/// Typed client settings with parent/default fallback.
///
/// Every setter validates its value before storing it. Passing `None` to a
/// setter clears the level's own value so the setting is inherited again.
///
/// # Examples
///
/// ```
/// use client_config::{ClientConfig, Transport};
/// use std::sync::Arc;
///
/// let parent = Arc::new(ClientConfig::default());
/// parent.set_timeout(Some(30.0))?;
///
/// let child = ClientConfig::with_parent(Arc::clone(&parent));
/// assert_eq!(child.timeout(), 30.0);
///
/// child.set_timeout(Some(5.0))?;
/// assert_eq!(child.timeout(), 5.0);
///
/// child.set_timeout(None)?;
/// assert_eq!(child.timeout(), 30.0);
///
/// parent.set_timeout(None)?;
/// assert_eq!(child.timeout(), 60.0);
/// # Ok::<(), client_config::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ClientConfig {
    fallback: Fallback,
    values: RwLock<ConfigValues>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            fallback: Fallback::Defaults(ResolvedConfig::default()),
            values: RwLock::new(ConfigValues::default()),
        }
    }
}

impl ClientConfig {
    /// Create a root configuration with custom defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any default fails the same
    /// checks the setters apply.
    pub fn with_defaults(defaults: ResolvedConfig) -> ConfigResult<Self> {
        validate_endpoint(&defaults.endpoint)?;
        validate_timeout(defaults.timeout)?;
        if let Some(name) = &defaults.lib_name {
            validate_lib_name(name)?;
        }
        if let Some(version) = &defaults.lib_version {
            validate_lib_version(version)?;
        }
        if let Some(project) = &defaults.quota_project {
            validate_quota_project(project)?;
        }

        Ok(Self {
            fallback: Fallback::Defaults(defaults),
            values: RwLock::new(ConfigValues::default()),
        })
    }

    /// Create a configuration that inherits unset values from `parent`.
    pub fn with_parent(parent: Arc<ClientConfig>) -> Self {
        Self {
            fallback: Fallback::Parent(parent),
            values: RwLock::new(ConfigValues::default()),
        }
    }

    pub fn parent(&self) -> Option<&Arc<ClientConfig>> {
        match &self.fallback {
            Fallback::Parent(parent) => Some(parent),
            Fallback::Defaults(_) => None,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ConfigValues> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigValues> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Own value, else the parent's resolved value, else the default.
    fn inherit<T>(
        &self,
        own: Option<T>,
        from_parent: impl FnOnce(&ClientConfig) -> T,
        from_defaults: impl FnOnce(&ResolvedConfig) -> T,
    ) -> T {
        match own {
            Some(value) => value,
            None => match &self.fallback {
                Fallback::Parent(parent) => from_parent(parent),
                Fallback::Defaults(defaults) => from_defaults(defaults),
            },
        }
    }

    pub fn endpoint(&self) -> String {
        let own = self.read().endpoint.clone();
        self.inherit(own, ClientConfig::endpoint, |d| d.endpoint.clone())
    }

    /// Per-call timeout in seconds.
    pub fn timeout(&self) -> f64 {
        let own = self.read().timeout;
        self.inherit(own, ClientConfig::timeout, |d| d.timeout)
    }

    pub fn retry(&self) -> bool {
        let own = self.read().retry;
        self.inherit(own, ClientConfig::retry, |d| d.retry)
    }

    pub fn transport(&self) -> Transport {
        let own = self.read().transport;
        self.inherit(own, ClientConfig::transport, |d| d.transport)
    }

    pub fn lib_name(&self) -> Option<String> {
        let own = self.read().lib_name.clone();
        self.inherit(own.map(Some), ClientConfig::lib_name, |d| d.lib_name.clone())
    }

    pub fn lib_version(&self) -> Option<String> {
        let own = self.read().lib_version.clone();
        self.inherit(own.map(Some), ClientConfig::lib_version, |d| {
            d.lib_version.clone()
        })
    }

    pub fn quota_project(&self) -> Option<String> {
        let own = self.read().quota_project.clone();
        self.inherit(own.map(Some), ClientConfig::quota_project, |d| {
            d.quota_project.clone()
        })
    }

    pub fn set_endpoint(&self, value: Option<String>) -> ConfigResult<()> {
        if let Some(endpoint) = &value {
            validate_endpoint(endpoint)?;
        } else {
            trace!("Resetting endpoint to inherited value");
        }
        self.write().endpoint = value;
        Ok(())
    }

    pub fn set_timeout(&self, value: Option<f64>) -> ConfigResult<()> {
        if let Some(timeout) = value {
            validate_timeout(timeout)?;
        } else {
            trace!("Resetting timeout to inherited value");
        }
        self.write().timeout = value;
        Ok(())
    }

    /// Booleans and transports are fully checked by their types, so these
    /// setters cannot fail; they return `Result` for a uniform API.
    pub fn set_retry(&self, value: Option<bool>) -> ConfigResult<()> {
        if value.is_none() {
            trace!("Resetting retry to inherited value");
        }
        self.write().retry = value;
        Ok(())
    }

    pub fn set_transport(&self, value: Option<Transport>) -> ConfigResult<()> {
        if value.is_none() {
            trace!("Resetting transport to inherited value");
        }
        self.write().transport = value;
        Ok(())
    }

    pub fn set_lib_name(&self, value: Option<String>) -> ConfigResult<()> {
        if let Some(name) = &value {
            validate_lib_name(name)?;
        } else {
            trace!("Resetting lib_name to inherited value");
        }
        self.write().lib_name = value;
        Ok(())
    }

    pub fn set_lib_version(&self, value: Option<String>) -> ConfigResult<()> {
        if let Some(version) = &value {
            validate_lib_version(version)?;
        } else {
            trace!("Resetting lib_version to inherited value");
        }
        self.write().lib_version = value;
        Ok(())
    }

    pub fn set_quota_project(&self, value: Option<String>) -> ConfigResult<()> {
        if let Some(project) = &value {
            validate_quota_project(project)?;
        } else {
            trace!("Resetting quota_project to inherited value");
        }
        self.write().quota_project = value;
        Ok(())
    }

    /// Apply every value present in `overrides`.
    ///
    /// All values are validated before any is stored, so a failing
    /// override leaves this level unchanged.
    pub fn apply(&self, overrides: &ConfigOverrides) -> ConfigResult<()> {
        if let Some(endpoint) = &overrides.endpoint {
            validate_endpoint(endpoint)?;
        }
        if let Some(timeout) = overrides.timeout {
            validate_timeout(timeout)?;
        }
        let transport = overrides
            .transport
            .as_deref()
            .map(str::parse::<Transport>)
            .transpose()?;
        if let Some(name) = &overrides.lib_name {
            validate_lib_name(name)?;
        }
        if let Some(version) = &overrides.lib_version {
            validate_lib_version(version)?;
        }
        if let Some(project) = &overrides.quota_project {
            validate_quota_project(project)?;
        }

        let mut values = self.write();
        if let Some(endpoint) = &overrides.endpoint {
            values.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = overrides.timeout {
            values.timeout = Some(timeout);
        }
        if let Some(retry) = overrides.retry {
            values.retry = Some(retry);
        }
        if let Some(transport) = transport {
            values.transport = Some(transport);
        }
        if let Some(name) = &overrides.lib_name {
            values.lib_name = Some(name.clone());
        }
        if let Some(version) = &overrides.lib_version {
            values.lib_version = Some(version.clone());
        }
        if let Some(project) = &overrides.quota_project {
            values.quota_project = Some(project.clone());
        }
        Ok(())
    }

    /// Snapshot of every setting after fallback resolution.
    pub fn resolved(&self) -> ResolvedConfig {
        ResolvedConfig {
            endpoint: self.endpoint(),
            timeout: self.timeout(),
            retry: self.retry(),
            transport: self.transport(),
            lib_name: self.lib_name(),
            lib_version: self.lib_version(),
            quota_project: self.quota_project(),
        }
    }
}
