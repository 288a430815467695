//! Client configuration commands for the path template CLI.
//!
//! Resolves a child configuration layered over an optional parent and the
//! built-in defaults:
//!
//! ```bash
//! path-template config --parent service.toml --file client.toml --json
//! ```

use clap::Args;
use client_config::{ClientConfig, ConfigOverrides};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// TOML file with parent-level (e.g. service-wide) settings
    #[arg(long)]
    pub parent: Option<PathBuf>,

    /// TOML file with client-level settings
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the resolved settings as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

/// Resolve the configured hierarchy and return it formatted for display.
#[instrument]
pub fn execute(args: &ConfigArgs) -> Result<String, Error> {
    let parent = Arc::new(ClientConfig::default());
    if let Some(path) = &args.parent {
        parent.apply(&ConfigOverrides::from_file(path)?)?;
    }

    let client = ClientConfig::with_parent(parent);
    if let Some(path) = &args.file {
        client.apply(&ConfigOverrides::from_file(path)?)?;
    }

    let resolved = client.resolved();
    debug!("Resolved client configuration: {:?}", resolved);

    if args.json {
        serde_json::to_string_pretty(&resolved).map_err(|e| Error::Output(e.to_string()))
    } else {
        toml::to_string(&resolved).map_err(|e| Error::Output(e.to_string()))
    }
}
