//! Typed, inheritable settings for generated API clients.
//!
//! Settings are declared as plain struct fields instead of being attached at
//! runtime. Each level of a hierarchy (for example service-wide defaults and
//! a per-client override) is a [`ClientConfig`] that falls back to its
//! parent, and the root falls back to a [`ResolvedConfig`] of defaults.

pub mod config;
pub mod errors;
pub mod overrides;
pub mod transport;
pub mod validation;

pub use config::{ClientConfig, ResolvedConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use errors::{ConfigError, ConfigResult};
pub use overrides::ConfigOverrides;
pub use transport::Transport;
